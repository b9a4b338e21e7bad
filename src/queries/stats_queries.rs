use sqlx::SqlitePool;

use crate::{error::Result, models::StatsResponse};

/// Aggregate counters over the whole products table, computed fresh on
/// every call. Sums coalesce to zero on an empty table.
pub async fn get_stats(pool: &SqlitePool) -> Result<StatsResponse> {
    let stats = sqlx::query_as::<_, StatsResponse>(
        "SELECT
            COUNT(*) AS total_products,
            COALESCE(SUM(quantity), 0) AS total_quantity,
            CAST(COALESCE(SUM(price * quantity), 0) AS REAL) AS total_inventory_value
         FROM products",
    )
    .fetch_one(pool)
    .await?;

    Ok(stats)
}
