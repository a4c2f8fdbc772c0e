//! 集成测试共享工具
//!
//! 提供一个确定性的模拟翻译端点：把 `q` 参数的文本翻译成其大写形式，
//! 并记录收到的每个请求URL。测试夹具使用互不重叠的唯一片段文本，
//! 保证替换结果可确定比较。

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use url::Url;

use pagetrans::network::transport::{Transport, TransportResponse};
use pagetrans::translation::{TranslationConfig, TranslationResult, TranslationService};

/// 把片段翻译成大写的模拟端点
pub struct MockTransport {
    requests: Mutex<Vec<String>>,
    fail_texts: HashSet<String>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_texts: HashSet::new(),
        }
    }

    /// 对指定片段文本返回HTTP 502的模拟端点
    pub fn failing_for(texts: &[&str]) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_texts: texts.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// 从请求URL中取出一个查询参数（解码后）
    pub fn query_param(url: &str, name: &str) -> Option<String> {
        let parsed = Url::parse(url).ok()?;
        parsed
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.to_string())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> TranslationResult<TransportResponse> {
        self.requests.lock().unwrap().push(url.to_string());

        let text = Self::query_param(url, "q").unwrap_or_default();

        if self.fail_texts.contains(&text) {
            return Ok(TransportResponse {
                status: 502,
                body: "Bad Gateway".to_string(),
            });
        }

        let body = serde_json::json!({
            "sentences": [{"trans": text.to_uppercase(), "orig": text}],
            "src": "en",
        })
        .to_string();

        Ok(TransportResponse { status: 200, body })
    }
}

/// 用模拟端点和默认配置搭建翻译服务
pub fn service_with(transport: Arc<MockTransport>) -> TranslationService {
    TranslationService::new(TranslationConfig::default(), transport as Arc<dyn Transport>)
        .expect("service setup should succeed")
}

/// 用模拟端点和给定配置搭建翻译服务
pub fn service_with_config(
    config: TranslationConfig,
    transport: Arc<MockTransport>,
) -> TranslationService {
    TranslationService::new(config, transport as Arc<dyn Transport>)
        .expect("service setup should succeed")
}

/// 站点营销页夹具：每个片段文本唯一且互不重叠
pub fn marketing_page() -> &'static str {
    "<html><head><title>Smart Devices</title></head><body>\
     <h1>Open hardware</h1>\
     <h2>Modular sensors</h2>\
     <p>Build your own station</p>\
     <p>Data stays local</p>\
     <a href=\"/contact\">Reach the team</a>\
     </body></html>"
}
