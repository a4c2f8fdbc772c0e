//! 按需翻译处理器

use std::sync::Arc;

use axum::{
    extract::{Json as ExtractJson, State},
    http::StatusCode,
    response::Json,
};
use tokio::task;

use crate::core::{translate_page_data_sync, translate_page_sync};
use crate::web::types::{AppState, TranslateRequest, TranslateResponse};

/// 翻译指定URL或HTML内容
///
/// 翻译流程持有非Send的DOM句柄，因此整个处理放到阻塞线程里，
/// 在其中以同步入口执行。
pub async fn translate_page_handler(
    State(state): State<Arc<AppState>>,
    ExtractJson(request): ExtractJson<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<serde_json::Value>)> {
    let mut options = state.options.clone();
    options.silent = true;
    if let Some(lang) = request.target_lang.clone() {
        options.target_language = lang;
    }

    let url = request.url.clone();

    let join_result = if let Some(target) = request.url {
        tracing::info!("开始处理URL翻译请求: {}", target);
        task::spawn_blocking(move || translate_page_sync(&options, &target)).await
    } else if let Some(html) = request.html {
        tracing::info!("开始处理HTML翻译请求 ({} 字节)", html.len());
        task::spawn_blocking(move || translate_page_data_sync(&options, html.into_bytes())).await
    } else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "request must carry either url or html"
            })),
        ));
    };

    match join_result {
        Ok(Ok((bytes, title))) => Ok(Json(TranslateResponse {
            translated_html: String::from_utf8_lossy(&bytes).to_string(),
            title,
            url,
        })),
        Ok(Err(error)) => {
            tracing::error!("翻译处理失败: {}", error);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": error.to_string(),
                    "url": url,
                })),
            ))
        }
        Err(error) => {
            tracing::error!("处理任务失败: {}", error);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": format!("task failed: {error}"),
                })),
            ))
        }
    }
}
