use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::user::{Model, Role};
use sea_orm::DatabaseConnection;

pub struct UserSeeder;

#[async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        // Bootstrap admin: created only if no admin row exists, so the
        // system always has exactly one seeded admin.
        let admin_exists = Model::admin_exists(db)
            .await
            .expect("Failed to check for existing admin");
        if !admin_exists {
            Model::create(db, "Admin", "admin@example.com", "admin123", Role::Admin)
                .await
                .expect("Failed to create default admin");
        }

        // Fixed normal user for development logins.
        if Model::get_by_email(db, "user@example.com")
            .await
            .expect("Failed to look up demo user")
            .is_none()
        {
            Model::create(db, "Demo User", "user@example.com", "password123", Role::User)
                .await
                .expect("Failed to create demo user");
        }
    }
}
