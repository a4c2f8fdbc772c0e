//! Web 路由定义

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::web::{
    handlers::{health, submit_contact, translate_page_handler},
    types::AppState,
};

/// 创建路由结构
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/contact", post(submit_contact))
        .route("/api/translate", post(translate_page_handler))
}
