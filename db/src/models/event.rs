use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Represents an event in the `events` table.
///
/// Events are created only by admins and are read-only thereafter; there is
/// no update or delete operation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    /// Optional path to an uploaded image, under the `/uploads/` prefix.
    pub image: Option<String>,

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
    pub async fn create(
        db: &DbConn,
        title: &str,
        description: &str,
        date: NaiveDate,
        time: NaiveTime,
        location: &str,
        image: Option<&str>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();

        let active_model = ActiveModel {
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            date: Set(date),
            time: Set(time),
            location: Set(location.to_owned()),
            image: Set(image.map(str::to_owned)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        active_model.insert(db).await
    }

    /// Returns the full events table, unordered. No pagination.
    pub async fn list_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 12).unwrap()
    }

    fn sample_time() -> NaiveTime {
        NaiveTime::from_hms_opt(18, 30, 0).unwrap()
    }

    #[tokio::test]
    async fn create_and_fetch_by_id() {
        let db = setup_test_db().await;

        let event = Model::create(
            &db,
            "RustConf",
            "A conference about Rust",
            sample_date(),
            sample_time(),
            "Cape Town",
            Some("/uploads/1757700000000.png"),
        )
        .await
        .expect("Failed to create event");

        let found = Model::get_by_id(&db, event.id).await.unwrap().unwrap();
        assert_eq!(found.title, "RustConf");
        assert_eq!(found.date, sample_date());
        assert_eq!(found.time, sample_time());
        assert_eq!(found.image.as_deref(), Some("/uploads/1757700000000.png"));

        assert!(Model::get_by_id(&db, event.id + 999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_all_returns_every_event() {
        let db = setup_test_db().await;

        for i in 0..3 {
            Model::create(
                &db,
                &format!("Event {i}"),
                "desc",
                sample_date(),
                sample_time(),
                "Somewhere",
                None,
            )
            .await
            .unwrap();
        }

        let events = Model::list_all(&db).await.unwrap();
        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|e| e.image.is_none()));
    }
}
