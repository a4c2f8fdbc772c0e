//! 翻译模块
//!
//! 提供完整的页面翻译功能：
//! - **collector**: 从DOM收集可翻译片段
//! - **provider**: 翻译端点的请求构造与响应解析
//! - **service**: 请求分发与替换应用
//! - **config**: 配置管理
//! - **error**: 错误处理
//!
//! # 基本用法
//!
//! ```rust,no_run
//! use pagetrans::translation::TranslationService;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = TranslationService::create_default("nl", None)?;
//! let translated = service
//!     .translate_html("<html><body><p>Hello</p></body></html>")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod collector;
pub mod config;
pub mod error;
pub mod provider;
pub mod service;

pub use collector::{collect_fragments, should_translate, Fragment};
pub use config::{constants, TranslationConfig};
pub use error::{TranslationError, TranslationResult};
pub use provider::{build_request_url, parse_translation};
pub use service::{ServiceStats, StatsSnapshot, TranslationService};

use markup5ever_rcdom::RcDom;

/// 翻译HTML DOM内容（异步版本）
pub async fn translate_dom_content(
    dom: RcDom,
    target_lang: &str,
    endpoint: Option<&str>,
) -> TranslationResult<RcDom> {
    let service = TranslationService::create_default(target_lang, endpoint)?;
    service.translate_dom(dom).await
}

/// 翻译HTML DOM内容（同步版本）
///
/// 内部创建异步运行时来执行翻译，适用于非异步环境。
pub fn translate_dom_content_sync(
    dom: RcDom,
    target_lang: &str,
    endpoint: Option<&str>,
) -> Result<RcDom, crate::core::PageTransError> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| crate::core::PageTransError::new(&format!("创建异步运行时失败: {e}")))?;

    rt.block_on(async {
        translate_dom_content(dom, target_lang, endpoint)
            .await
            .map_err(|e| crate::core::PageTransError::new(&e.to_string()))
    })
}
