pub mod app_error;
pub mod flows;
pub mod use_cases;
pub mod validators;
