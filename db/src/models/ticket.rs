use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Represents a ticket purchase in the `tickets` table.
///
/// Dormant entity: no route creates, reads, updates, or deletes tickets.
/// `userid` and `eventid` are stored as opaque strings without referential
/// integrity; they stay that way until ticket-issuing functionality exists.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub userid: String,
    pub eventid: String,

    pub name: String,
    pub email: String,

    // Denormalized snapshot of the event at purchase time.
    pub eventname: String,
    pub eventdate: NaiveDate,
    pub eventtime: String,
    pub ticketprice: f64,

    /// QR payload shown at the gate. Required and non-empty.
    pub qr: String,
    pub count: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        db: &DbConn,
        userid: &str,
        eventid: &str,
        name: &str,
        email: &str,
        eventname: &str,
        eventdate: NaiveDate,
        eventtime: &str,
        ticketprice: f64,
        qr: &str,
        count: i32,
    ) -> Result<Model, DbErr> {
        // NOT NULL admits empty strings on SQLite; enforce the payload here.
        if qr.is_empty() {
            return Err(DbErr::Custom("qr payload cannot be empty".to_string()));
        }

        let now = Utc::now();
        let active_model = ActiveModel {
            userid: Set(userid.to_owned()),
            eventid: Set(eventid.to_owned()),
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            eventname: Set(eventname.to_owned()),
            eventdate: Set(eventdate),
            eventtime: Set(eventtime.to_owned()),
            ticketprice: Set(ticketprice),
            qr: Set(qr.to_owned()),
            count: Set(count),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        active_model.insert(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn create_persists_snapshot_fields() {
        let db = setup_test_db().await;

        let ticket = Model::create(
            &db,
            "42",
            "7",
            "Alice",
            "alice@example.com",
            "RustConf",
            NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            "18:30",
            149.50,
            "qr-payload-string",
            2,
        )
        .await
        .expect("Failed to create ticket");

        assert_eq!(ticket.eventname, "RustConf");
        assert_eq!(ticket.ticketprice, 149.50);
        assert_eq!(ticket.count, 2);
    }

    #[tokio::test]
    async fn empty_qr_is_rejected() {
        let db = setup_test_db().await;

        let err = Model::create(
            &db,
            "42",
            "7",
            "Alice",
            "alice@example.com",
            "RustConf",
            NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            "18:30",
            149.50,
            "",
            0,
        )
        .await
        .expect_err("Empty qr should be rejected");

        assert!(err.to_string().contains("qr"));
    }
}
