use crate::db::Db;

/// Shared state of the loaded test API. The inline status routes take no
/// state so they keep answering when the pool never came up.
#[derive(Clone)]
pub struct AppState {
    pub pool: Db,
}
