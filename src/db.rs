use anyhow::Context;
use sqlx::{Pool, Postgres};

pub type Db = Pool<Postgres>;

/// Connects and migrates. Any error here surfaces as a failed route-collection
/// load, never as a startup abort.
pub async fn init_pool() -> anyhow::Result<Db> {
    let db_url = std::env::var("DATABASE_URL").context("DATABASE_URL not set")?;
    let pool = Pool::<Postgres>::connect(&db_url)
        .await
        .context("connecting to Postgres")?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("running migrations")?;
    Ok(pool)
}
