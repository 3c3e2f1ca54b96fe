/// Storage key for the user + wallet blob
pub const USER_STORE_KEY: &str = "cafe_user";

/// Storage key for the menu catalog blob
pub const MENU_STORE_KEY: &str = "cafe_menu";

/// Storage key for the order history blob
pub const ORDERS_STORE_KEY: &str = "cafe_orders";

/// Decimal precision for money amounts
pub const MONEY_DECIMAL_PRECISION: u32 = 2;
