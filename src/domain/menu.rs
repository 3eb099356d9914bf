use crate::domain::{OrderDraft, DEFAULT_ESTIMATED_MINUTES};
use crate::error::OrderError;

/// Surcharge per ingredient on a custom crêpe.
pub const INGREDIENT_PRICE: f64 = 0.5;

/// Ingredients a cashier may put on a custom crêpe.
pub const AVAILABLE_INGREDIENTS: [&str; 15] = [
    "Nutella",
    "Schokostreusel",
    "Schlagsahne",
    "Schinken",
    "Käse",
    "Tomatensauce",
    "Himbeeren",
    "Blaue Beeren",
    "Joghurt",
    "Matcha-Pulver",
    "Eis",
    "Milch",
    "Mango",
    "Ananas",
    "Kokosraspeln",
];

/// A predefined crêpe on the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub ingredients: Vec<String>,
    pub price: f64,
}

/// Payload for adding a crêpe to the catalog.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub name: String,
    pub ingredients: Vec<String>,
    pub price: f64,
}

impl MenuItemCreate {
    pub fn new(name: impl Into<String>, ingredients: &[&str], price: f64) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            price,
        }
    }
}

/// The predefined crêpes the stand ships with.
pub fn default_menu() -> Vec<MenuItemCreate> {
    vec![
        MenuItemCreate::new("Classic Nutella", &["Nutella", "Schokostreusel", "Schlagsahne"], 4.50),
        MenuItemCreate::new("Savory Ham & Cheese", &["Schinken", "Käse", "Tomatensauce"], 5.00),
        MenuItemCreate::new("Berry Delight", &["Himbeeren", "Blaue Beeren", "Joghurt"], 4.80),
        MenuItemCreate::new("Green Tea Matcha", &["Matcha-Pulver", "Eis", "Milch"], 4.20),
        MenuItemCreate::new("Tropical Dream", &["Mango", "Ananas", "Kokosraspeln"], 4.70),
    ]
}

impl OrderDraft {
    /// Draft for a single predefined crêpe at its catalog price.
    pub fn from_menu_item(customer_name: impl Into<String>, item: &MenuItem) -> Result<Self, OrderError> {
        OrderDraft::new(
            customer_name,
            vec![item.name.clone()],
            item.price,
            DEFAULT_ESTIMATED_MINUTES,
        )
    }
}

/// A crêpe put together at the counter, priced per ingredient.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomCrepe {
    pub name: String,
    ingredients: Vec<String>,
    price: f64,
}

impl CustomCrepe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            price: 0.0,
        }
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Adds an ingredient once. Returns `false` if it was already on the crêpe.
    ///
    /// # Errors
    /// Returns `InvalidInput` for ingredients outside [`AVAILABLE_INGREDIENTS`].
    pub fn add_ingredient(&mut self, ingredient: &str) -> Result<bool, OrderError> {
        if !AVAILABLE_INGREDIENTS.contains(&ingredient) {
            return Err(OrderError::InvalidInput(format!("unknown ingredient '{}'", ingredient)));
        }
        if self.ingredients.iter().any(|i| i == ingredient) {
            return Ok(false);
        }
        self.ingredients.push(ingredient.to_string());
        self.price += INGREDIENT_PRICE;
        Ok(true)
    }

    /// Removes an ingredient. The surcharge is only refunded if it was present.
    pub fn remove_ingredient(&mut self, ingredient: &str) -> bool {
        let before = self.ingredients.len();
        self.ingredients.retain(|i| i != ingredient);
        let removed = self.ingredients.len() != before;
        if removed {
            self.price -= INGREDIENT_PRICE;
        }
        removed
    }

    pub fn into_draft(self, customer_name: impl Into<String>) -> Result<OrderDraft, OrderError> {
        if self.name.trim().is_empty() {
            return Err(OrderError::InvalidInput("custom crêpe needs a name".to_string()));
        }
        OrderDraft::new(
            customer_name,
            vec![self.name],
            self.price,
            DEFAULT_ESTIMATED_MINUTES,
        )
    }
}
