pub mod account;
pub mod directory;
pub mod health;
pub mod print_request;
