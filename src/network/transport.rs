//! HTTP传输抽象
//!
//! 翻译流程不直接持有HTTP客户端，而是通过注入的 `Transport` 接口发起请求。
//! 调用方只依赖一个能力：对URL发起GET并取回状态码和响应体。

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue};

use crate::translation::error::{TranslationError, TranslationResult};

/// 请求完成后交还给调用方的最小结果
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    /// 请求是否以HTTP 200完成
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// 注入式HTTP传输接口
///
/// 实现方负责实际的网络IO；传输层错误（连接失败、超时）通过
/// `TranslationError::NetworkError` 返回，非200状态不算传输错误，
/// 由调用方根据 `TransportResponse::status` 自行判定。
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> TranslationResult<TransportResponse>;
}

/// 基于reqwest的默认传输实现
///
/// 每个请求携带一组禁用缓存的请求头，配合URL上的时间戳参数，
/// 保证翻译端点不会返回陈旧响应。
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// 构造默认传输
    ///
    /// 构造失败（TLS后端初始化失败、非法的origin值）是致命错误，
    /// 以 `TransportUnavailable` 上抛并终止整个翻译流程。
    pub fn new(timeout: Duration, origin: &str) -> TranslationResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Access-Control-Allow-Origin",
            HeaderValue::from_str(origin).map_err(|e| {
                TranslationError::TransportUnavailable(format!("invalid origin header: {e}"))
            })?,
        );
        headers.insert("Content-Type", HeaderValue::from_static("text/plain"));
        headers.insert("Pragma", HeaderValue::from_static("no-cache"));
        headers.insert(
            "Expires",
            HeaderValue::from_static("Fri, 01 Jan 1990 00:00:00 GMT"),
        );
        headers.insert(
            "Cache-Control",
            HeaderValue::from_static("no-store, no-cache, must-revalidate"),
        );
        headers.insert("X-XSS-Protection", HeaderValue::from_static("0"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| TranslationError::TransportUnavailable(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> TranslationResult<TransportResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TranslationError::NetworkError(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}

/// 为URL追加时间戳防缓存参数
///
/// URL已含查询串时用 `&` 连接，否则用 `?`。
pub fn append_cache_buster(url: &str) -> String {
    let separator = if url.contains('?') { "&" } else { "?" };
    format!("{}{}no-cache={}", url, separator, Utc::now().timestamp_millis())
}
