use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate};

impl Entity for User {
    type Id = u32;
    type CreatePayload = UserCreate;

    const KIND: &'static str = "user";

    fn id(&self) -> u32 {
        self.id
    }

    /// Creates a new User from creation parameters.
    ///
    /// # Errors
    /// Rejects a blank name or an email without an `@`.
    fn from_create(id: u32, payload: UserCreate) -> Result<Self, String> {
        if payload.name.trim().is_empty() {
            return Err("user name is blank".to_string());
        }
        if !payload.email.contains('@') {
            return Err(format!("invalid email '{}'", payload.email));
        }
        Ok(Self {
            id,
            name: payload.name,
            email: payload.email,
            role: payload.role,
        })
    }
}
