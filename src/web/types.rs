//! Web 服务器共享类型

use serde::{Deserialize, Serialize};

use crate::core::PageTransOptions;
use crate::web::mail::Mailer;

/// 应用共享状态
pub struct AppState {
    /// 翻译流程的基础选项（目标语言、端点）
    pub options: PageTransOptions,
    /// 联系表单邮件转发器
    pub mailer: Mailer,
}

/// 联系表单提交
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub email: String,
    pub name: String,
    pub message: String,
}

/// 按需翻译请求
///
/// `url` 和 `html` 二选一；都给时以 `url` 为准。
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateRequest {
    pub url: Option<String>,
    pub html: Option<String>,
    pub target_lang: Option<String>,
}

/// 按需翻译响应
#[derive(Debug, Clone, Serialize)]
pub struct TranslateResponse {
    pub translated_html: String,
    pub title: Option<String>,
    pub url: Option<String>,
}
