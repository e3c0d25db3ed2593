pub mod config;
pub mod counter;
pub mod errors;
pub mod form;
pub mod handler;
pub mod notify;
pub mod record;
pub mod validate;
