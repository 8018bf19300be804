use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::config::Config;
use crate::domain::ports::DirectoryStore;
use crate::domain::services::account_service::AccountService;
use crate::domain::services::directory_query::DirectoryQuery;
use crate::domain::services::print_request_service::PrintRequestService;
use crate::infra::repositories::json_file_store::JsonFileStore;
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing JSON file store at {:?}", config.users_file);

    let store: Arc<dyn DirectoryStore> = Arc::new(JsonFileStore::new(&config.users_file));

    // Creates the backing file up front so the first request never races the
    // bootstrap write.
    store
        .load()
        .await
        .expect("Failed to initialize user directory store");

    // One lock shared by every mutating service: the load-mutate-save cycle
    // over the single backing file must not interleave.
    let write_lock = Arc::new(Mutex::new(()));

    AppState {
        config: config.clone(),
        account_service: Arc::new(AccountService::new(store.clone(), write_lock.clone())),
        print_request_service: Arc::new(PrintRequestService::new(store.clone(), write_lock)),
        directory_query: Arc::new(DirectoryQuery::new(store)),
    }
}
