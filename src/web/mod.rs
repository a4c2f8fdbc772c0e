//! Web 服务器模块
//!
//! 为静态站点提供后端能力：联系表单转发、按需页面翻译、静态文件服务

pub mod config;
pub mod handlers;
pub mod mail;
pub mod routes;
pub mod types;

pub use config::WebConfig;
pub use mail::{ContactConfig, MailError, Mailer};
pub use routes::create_routes;
pub use types::AppState;

use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::core::{PageTransError, PageTransOptions};

/// Web 服务器
pub struct WebServer {
    config: WebConfig,
    options: PageTransOptions,
}

impl WebServer {
    /// 创建新的 Web 服务器
    pub fn new(config: WebConfig, options: PageTransOptions) -> Self {
        Self { config, options }
    }

    /// 启动 Web 服务器
    pub async fn start(&self) -> Result<(), PageTransError> {
        self.config
            .validate()
            .map_err(|e| PageTransError::new(&format!("Invalid web config: {e}")))?;

        let mailer = Mailer::new(self.config.contact.clone())
            .map_err(|e| PageTransError::new(&format!("Failed to set up mailer: {e}")))?;

        let app_state = Arc::new(AppState {
            options: self.options.clone(),
            mailer,
        });

        let app = create_router(app_state, &self.config);

        let listener = tokio::net::TcpListener::bind(self.config.listen_address())
            .await
            .map_err(|e| PageTransError::new(&format!("Failed to bind server: {e}")))?;

        tracing::info!(
            "Web server starting at http://{}",
            self.config.listen_address()
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| PageTransError::new(&format!("Server error: {e}")))?;

        Ok(())
    }
}

/// 创建路由器
fn create_router(app_state: Arc<AppState>, config: &WebConfig) -> Router {
    let mut app = create_routes().with_state(app_state);

    // 站点前端与后端可能部署在不同域名下
    app = app.layer(CorsLayer::permissive());

    if let Some(static_dir) = &config.static_dir {
        app = app.nest_service("/static", ServeDir::new(static_dir));
    }

    app
}
