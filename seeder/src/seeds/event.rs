use crate::seed::Seeder;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use db::models::event::Model;
use sea_orm::DatabaseConnection;

pub struct EventSeeder;

#[async_trait]
impl Seeder for EventSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let existing = Model::list_all(db).await.expect("Failed to list events");
        if !existing.is_empty() {
            return;
        }

        let demo_events = [
            (
                "Launch Night",
                "Opening celebration with live music and food stalls.",
                NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
                NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
                "City Hall",
            ),
            (
                "Tech Meetup",
                "Monthly community meetup for local developers.",
                NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
                NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
                "Innovation Hub",
            ),
        ];

        for (title, description, date, time, location) in demo_events {
            Model::create(db, title, description, date, time, location, None)
                .await
                .expect("Failed to create demo event");
        }
    }
}
