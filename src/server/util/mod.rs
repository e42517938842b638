pub mod date_range;
pub mod money;
pub mod password;
