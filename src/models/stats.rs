use serde::Serialize;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct StatsResponse {
    pub total_products: i64,
    pub total_quantity: i64,
    pub total_inventory_value: f64,
}
