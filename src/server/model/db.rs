//! Database model type aliases.
//!
//! Short names for the SeaORM entity models so service and repository signatures don't need
//! to spell out the `entity` crate paths.

/// Type alias for the house database model.
///
/// # Fields (from `entity::house::Model`)
/// - `id` - Primary key
/// - `owner_name` - Name of the house owner as printed on bills
/// - `meter_number` - Unique utility meter number
/// - `city` - City the house is located in
/// - `state` - State the house is located in
/// - `user_id` - Foreign key to the assigned user (nullable)
pub type HouseModel = entity::house::Model;

/// Type alias for the bill database model.
///
/// # Fields (from `entity::bill::Model`)
/// - `id` - Primary key
/// - `house_id` - Foreign key to the billed house
/// - `status` - Payment status
/// - `used_unit` - Units consumed over the billing period
/// - `total` - Amount billed
/// - `create_date` - Date the bill was issued
/// - `due_date` - Date payment is due
/// - `paid_date` - Date payment was received (nullable)
pub type BillModel = entity::bill::Model;

/// Type alias for the user database model.
///
/// Carries the password hash, so it must be converted to a `UserDto` before leaving the
/// server.
pub type UserModel = entity::app_user::Model;
