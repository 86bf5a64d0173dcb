use crate::constants::CREATE_SHIPMENTS_TABLE;
use crate::db::models::{NewShipment, Shipment};
use crate::db::Database;
use crate::errors::Error;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use std::sync::Arc;

/// Data access for shipment records.
///
/// Calls are blocking; async callers run them on the blocking thread pool.
pub trait ShipmentRepository: Send + Sync {
    /// Ensures the `shipments` table exists. Safe to call more than once.
    fn initialize_schema(&self) -> Result<(), Error>;

    /// Returns every stored shipment, or an empty vector when there are none.
    fn list_all(&self) -> Result<Vec<Shipment>, Error>;

    /// Returns the shipment with the given id, or `Error::NotFound`.
    fn get_by_id(&self, id: i32) -> Result<Shipment, Error>;

    /// Persists a new shipment and returns the stored record, including the
    /// id and registration time assigned by the database.
    fn insert(&self, new_shipment: &NewShipment) -> Result<Shipment, Error>;
}

/// Repository handle shared between request handlers
pub type SharedRepository = Arc<dyn ShipmentRepository>;

/// PostgreSQL-backed repository
pub struct PgShipmentRepository {
    database: Database,
}

impl PgShipmentRepository {
    /// Creates a new PgShipmentRepository instance
    ///
    /// # Arguments
    ///
    /// * `database` - Connection pool used for every query
    pub fn new(database: Database) -> Self {
        PgShipmentRepository { database }
    }
}

impl ShipmentRepository for PgShipmentRepository {
    fn initialize_schema(&self) -> Result<(), Error> {
        let mut pooled = self.database.get_conn()?;
        let conn: &mut PgConnection = &mut pooled;

        diesel::sql_query(CREATE_SHIPMENTS_TABLE).execute(conn)?;
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<Shipment>, Error> {
        use crate::schema::shipments::dsl::*;
        let mut pooled = self.database.get_conn()?;
        let conn: &mut PgConnection = &mut pooled;

        let found = shipments
            .select(Shipment::as_select())
            .order_by(id.asc())
            .load::<Shipment>(conn)?;
        Ok(found)
    }

    fn get_by_id(&self, shipment_id: i32) -> Result<Shipment, Error> {
        use crate::schema::shipments::dsl::*;
        let mut pooled = self.database.get_conn()?;
        let conn: &mut PgConnection = &mut pooled;

        let found = shipments
            .find(shipment_id)
            .select(Shipment::as_select())
            .first::<Shipment>(conn)?;
        Ok(found)
    }

    fn insert(&self, new_shipment: &NewShipment) -> Result<Shipment, Error> {
        use crate::schema::shipments;
        let mut pooled = self.database.get_conn()?;
        let conn: &mut PgConnection = &mut pooled;

        // Any error inside the closure rolls the transaction back.
        let stored = conn.transaction::<Shipment, DieselError, _>(|conn| {
            diesel::insert_into(shipments::table)
                .values(new_shipment)
                .returning(Shipment::as_returning())
                .get_result(conn)
        })?;
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    //! These tests need a reachable PostgreSQL instance:
    //! `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`

    use super::*;
    use std::sync::Once;

    static SCHEMA: Once = Once::new();

    fn repository() -> PgShipmentRepository {
        let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
        let database = Database::new(&url).expect("test database should be reachable");
        let repo = PgShipmentRepository::new(database);
        SCHEMA.call_once(|| repo.initialize_schema().unwrap());
        repo
    }

    fn new_shipment(recipient: &str, status: &str) -> NewShipment {
        NewShipment {
            recipient: recipient.to_string(),
            address: "Calle 1".to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    #[ignore]
    fn initialize_schema_is_idempotent() {
        let repo = repository();
        repo.initialize_schema().unwrap();
        repo.initialize_schema().unwrap();
    }

    #[test]
    #[ignore]
    fn insert_assigns_id_and_timestamp_and_round_trips() {
        let repo = repository();

        let stored = repo.insert(&new_shipment("Ana Gomez", "Registered")).unwrap();
        assert!(stored.id > 0);
        assert_eq!(stored.recipient, "Ana Gomez");
        assert_eq!(stored.status, "Registered");

        let fetched = repo.get_by_id(stored.id).unwrap();
        assert_eq!(fetched, stored);
    }

    #[test]
    #[ignore]
    fn insert_never_reuses_ids() {
        let repo = repository();

        let first = repo.insert(&new_shipment("First", "Registered")).unwrap();
        let second = repo.insert(&new_shipment("Second", "In transit")).unwrap();

        assert!(second.id > first.id);
        let all = repo.list_all().unwrap();
        assert!(all.contains(&first));
        assert!(all.contains(&second));
    }

    #[test]
    #[ignore]
    fn get_by_id_reports_not_found() {
        let repo = repository();
        assert!(matches!(repo.get_by_id(-1), Err(Error::NotFound)));
    }

    #[test]
    #[ignore]
    fn failed_insert_leaves_table_unchanged() {
        let repo = repository();
        let marker = "rollback-check-recipient";

        // Exceeds VARCHAR(30), so PostgreSQL rejects the row.
        let result = repo.insert(&new_shipment(marker, &"x".repeat(31)));

        assert!(matches!(result, Err(Error::DieselError(_))));
        assert!(repo
            .list_all()
            .unwrap()
            .iter()
            .all(|shipment| shipment.recipient != marker));
    }
}
