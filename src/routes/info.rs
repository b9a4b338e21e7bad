use axum::{response::IntoResponse, Json};
use serde_json::json;

pub async fn service_info() -> impl IntoResponse {
    Json(json!({
        "message": "Inventory API",
        "status": "running",
        "endpoints": {
            "products": "/api/products",
            "health": "/api/health",
            "stats": "/api/stats",
        },
    }))
}
