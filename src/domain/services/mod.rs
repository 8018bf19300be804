pub mod account_service;
pub mod directory_query;
pub mod print_request_service;
