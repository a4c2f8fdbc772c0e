//! 联系表单处理器
//!
//! 接收表单字段 `email`、`name`、`message`，通过邮件转发器投递。
//! 响应是纯文本，保持站点前端脚本历史上依赖的两种固定措辞。

use std::sync::Arc;

use axum::extract::{Form, State};

use crate::web::mail::MailError;
use crate::web::types::{AppState, ContactForm};

/// 处理联系表单提交
///
/// 成功与失败都返回HTTP 200，结果通过响应体文本区分。
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ContactForm>,
) -> String {
    tracing::info!("收到联系表单提交: {}", form.email);

    let result = state
        .mailer
        .send_contact(&form.name, &form.email, &form.message)
        .await;

    if let Err(ref error) = result {
        tracing::error!("联系表单转发失败: {}", error);
    }

    contact_response(result)
}

/// 渲染联系表单的纯文本响应
fn contact_response(result: Result<(), MailError>) -> String {
    match result {
        Ok(()) => "Message has been sent.".to_string(),
        Err(error) => format!("Message was not sent.\nMailer error: {error}"),
    }
}
