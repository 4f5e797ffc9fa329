pub use super::app_user::Entity as AppUser;
pub use super::bill::Entity as Bill;
pub use super::house::Entity as House;
