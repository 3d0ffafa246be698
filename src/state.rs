use std::sync::Arc;

use crate::search::SearchOptions;
use crate::store::DirectoryStore;

/// Shared application state / 应用共享状态
pub struct AppState {
    /// Directory the search runs against / 通讯录存储
    pub directory: Arc<dyn DirectoryStore>,
    /// Sort order and result cap from config / 来自配置的搜索选项
    pub search_options: SearchOptions,
}

impl AppState {
    pub fn new(directory: Arc<dyn DirectoryStore>, search_options: SearchOptions) -> Self {
        Self { directory, search_options }
    }
}
