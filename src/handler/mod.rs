pub mod contact_handler;
pub mod health_handler;
pub mod quote_handler;
