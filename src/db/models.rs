use crate::schema::shipments;
use chrono::NaiveDateTime;
use diesel::{Insertable, Queryable, Selectable};
use serde::{Serialize, Serializer};

/// A shipment as stored in the `shipments` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Queryable, Selectable)]
#[diesel(table_name = shipments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    /// Primary key assigned by the database
    pub id: i32,
    /// Person or company receiving the parcel
    pub recipient: String,
    /// Delivery address
    pub address: String,
    /// Current delivery status
    pub status: String,
    /// Insertion time, set by the database
    #[serde(serialize_with = "serialize_timestamp")]
    pub registered_at: NaiveDateTime,
}

/// Values supplied by a caller when creating a shipment
#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = shipments)]
pub struct NewShipment {
    pub recipient: String,
    pub address: String,
    pub status: String,
}

/// Renders timestamps as `YYYY-MM-DD HH:MM:SS[.ffffff]`.
fn serialize_timestamp<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn shipment_serializes_with_camel_case_and_readable_timestamp() {
        let registered_at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_micro_opt(14, 5, 7, 250_000)
            .unwrap();
        let shipment = Shipment {
            id: 7,
            recipient: "Ana Gomez".to_string(),
            address: "Calle 1".to_string(),
            status: "Registered".to_string(),
            registered_at,
        };

        let value = serde_json::to_value(&shipment).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 7,
                "recipient": "Ana Gomez",
                "address": "Calle 1",
                "status": "Registered",
                "registeredAt": "2024-03-09 14:05:07.250",
            })
        );
    }
}
