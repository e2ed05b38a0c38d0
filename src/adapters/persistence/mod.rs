pub mod waitlist;

use sqlx::PgPool;

/// Shared Postgres handle; repository traits are implemented on this.
pub struct PostgresPersistence {
    pub pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
