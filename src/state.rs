use crate::config::Config;
use crate::domain::services::account_service::AccountService;
use crate::domain::services::directory_query::DirectoryQuery;
use crate::domain::services::print_request_service::PrintRequestService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub account_service: Arc<AccountService>,
    pub print_request_service: Arc<PrintRequestService>,
    pub directory_query: Arc<DirectoryQuery>,
}
