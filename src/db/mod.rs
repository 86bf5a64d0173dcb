mod models;
mod shipment_repository;

use crate::errors::Error;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use std::sync::Arc;

pub use models::*;
pub use shipment_repository::*;

/// Shared PostgreSQL connection pool.
///
/// Built once at startup and handed to the repository; every repository call
/// checks a connection out and returns it on drop.
#[derive(Clone, Debug)]
pub struct Database {
    pool: Arc<Pool<ConnectionManager<PgConnection>>>,
}

impl Database {
    /// Creates the pool and opens its initial connections.
    ///
    /// # Errors
    ///
    /// Returns an Error if the database cannot be reached
    pub fn new(database_url: &str) -> Result<Self, Error> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder().build(manager)?;

        Ok(Database {
            pool: Arc::new(pool),
        })
    }

    pub fn get_conn(&self) -> Result<PooledConnection<ConnectionManager<PgConnection>>, Error> {
        Ok(self.pool.get()?)
    }
}
