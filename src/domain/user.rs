use std::fmt;

/// Staff role, which decides the dashboard a user works from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Waiter,
    Maker,
    Owner,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Waiter => "waiter",
            Role::Maker => "maker",
            Role::Owner => "owner",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A staff account. Read-only after seeding.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Payload for registering a staff account in the catalog.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl UserCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
        }
    }
}

/// The staff accounts the stand ships with.
pub fn default_staff() -> Vec<UserCreate> {
    vec![
        UserCreate::new("John Doe", "owner@example.com", Role::Owner),
        UserCreate::new("Jane Smith", "waiter@example.com", Role::Waiter),
        UserCreate::new("Mike Johnson", "maker@example.com", Role::Maker),
        UserCreate::new("Sarah Williams", "admin@example.com", Role::Admin),
    ]
}
