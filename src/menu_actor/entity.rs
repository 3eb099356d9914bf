use crate::actor_framework::Entity;
use crate::domain::{MenuItem, MenuItemCreate};

impl Entity for MenuItem {
    type Id = u32;
    type CreatePayload = MenuItemCreate;

    const KIND: &'static str = "menu_item";

    fn id(&self) -> u32 {
        self.id
    }

    fn from_create(id: u32, payload: MenuItemCreate) -> Result<Self, String> {
        if payload.name.trim().is_empty() {
            return Err("menu item name is blank".to_string());
        }
        if payload.ingredients.is_empty() {
            return Err(format!("'{}' has no ingredients", payload.name));
        }
        if !payload.price.is_finite() || payload.price < 0.0 {
            return Err(format!("'{}' has invalid price {}", payload.name, payload.price));
        }
        Ok(Self {
            id,
            name: payload.name,
            ingredients: payload.ingredients,
            price: payload.price,
        })
    }
}
