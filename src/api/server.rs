use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// 健康检查
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "build_time": env!("BUILD_TIME"),
        "time": Utc::now().to_rfc3339(),
    }))
}
