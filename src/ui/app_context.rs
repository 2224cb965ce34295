use crate::config;
use crate::search::SearchHandle;

#[derive(Clone)]
pub struct AppContext {
    pub config: config::Config,
    pub search_handle: SearchHandle,
}
