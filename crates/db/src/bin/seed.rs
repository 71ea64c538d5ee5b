//! `tripwise-seed` -- create the travel tables and fill them with random data.
//!
//! # Environment variables
//!
//! | Variable       | Required | Default | Description                             |
//! |----------------|----------|---------|-----------------------------------------|
//! | `DATABASE_URL` | yes      | --      | PostgreSQL connection string            |
//! | `SEED_SCALE`   | no       | `1.0`   | Multiplier applied to the default counts, `0..=100` |

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tripwise_db::repositories::SeedRepo;
use tripwise_db::seed::{self, SeedCounts, MAX_SEED_SCALE};
use tripwise_db::PoolSettings;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tripwise_db=info,tripwise_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        tracing::error!("DATABASE_URL environment variable is required");
        std::process::exit(1);
    });

    let scale: f64 = std::env::var("SEED_SCALE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1.0);
    if !(0.0..=MAX_SEED_SCALE).contains(&scale) {
        tracing::warn!(scale, max = MAX_SEED_SCALE, "SEED_SCALE out of range, clamping");
    }

    let pool = tripwise_db::create_pool(&database_url, PoolSettings::default())
        .await
        .expect("Failed to connect to database");
    tracing::info!("Connected to database");

    tripwise_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    let counts = SeedCounts::scaled(scale);
    tracing::info!(?counts, "Generating travel catalogue");
    let data = seed::generate(&mut rand::rng(), chrono::Utc::now(), counts);

    SeedRepo::replace_all(&pool, &data)
        .await
        .expect("Failed to populate travel tables");

    tracing::info!("Database seeding complete");
}
