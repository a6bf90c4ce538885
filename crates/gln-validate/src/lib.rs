pub mod date;
pub mod validator;

pub use date::check_date_columns;
pub use validator::validate;
