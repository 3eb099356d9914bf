pub mod order;
pub mod user;
pub mod menu;

pub use order::*;
pub use user::*;
pub use menu::*;
