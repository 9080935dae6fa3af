use crate::seed::{Seeder, run_seeder};
use crate::seeds::{event::EventSeeder, user::UserSeeder};

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = db::connect().await;

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(EventSeeder), "Event"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
