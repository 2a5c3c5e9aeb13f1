use std::sync::Arc;

use crate::config::AppConfig;
use crate::users::UserStore;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, config: AppConfig) -> Self {
        Self {
            users,
            config: Arc::new(config),
        }
    }
}
