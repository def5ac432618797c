use crate::db::{DbPool, OrmConn};

/// Store handles threaded through every handler and service call.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
}

impl AppState {
    pub fn new(pool: DbPool, orm: OrmConn) -> Self {
        Self { pool, orm }
    }
}
