//! Web 请求处理器

pub mod contact;
pub mod translate;

pub use contact::submit_contact;
pub use translate::translate_page_handler;

use axum::response::Json;

/// 健康检查
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
