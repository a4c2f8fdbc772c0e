//! 核心翻译服务
//!
//! 驱动一次完整的翻译替换流程：
//!
//! 1. 收集文档中的可翻译片段
//! 2. 为每个片段构造请求URL并通过注入的传输并发分发
//! 3. 等待全部请求结束（成功或失败）
//! 4. 按提取顺序应用成功的替换，失败的片段保留原文
//!
//! 替换在所有请求结束后统一进行，响应到达的先后顺序不影响结果，
//! 也不存在"最后一个请求失败导致整页丢失"的情况。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::network::transport::{append_cache_buster, HttpTransport, Transport};
use crate::parsers::html::{html_to_dom, serialize_document};
use crate::translation::collector::{collect_fragments, Fragment};
use crate::translation::config::TranslationConfig;
use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::provider;

/// 翻译服务
pub struct TranslationService {
    config: TranslationConfig,
    transport: Arc<dyn Transport>,
    stats: ServiceStats,
}

impl TranslationService {
    /// 用给定配置和传输创建服务
    pub fn new(config: TranslationConfig, transport: Arc<dyn Transport>) -> TranslationResult<Self> {
        config.validate()?;

        Ok(Self {
            config,
            transport,
            stats: ServiceStats::default(),
        })
    }

    /// 用默认HTTP传输创建服务
    ///
    /// 传输构造失败是致命错误（`TransportUnavailable`），直接上抛。
    pub fn create_default(target_lang: &str, endpoint: Option<&str>) -> TranslationResult<Self> {
        let config = TranslationConfig::default_with_lang(target_lang, endpoint);
        Self::with_config(config)
    }

    /// 用给定配置和默认HTTP传输创建服务
    pub fn with_config(config: TranslationConfig) -> TranslationResult<Self> {
        let transport = HttpTransport::new(config.request_timeout(), &config.origin)?;
        Self::new(config, Arc::new(transport))
    }

    /// 当前配置
    pub fn config(&self) -> &TranslationConfig {
        &self.config
    }

    /// 翻译DOM内容
    ///
    /// 没有可翻译片段时不发起任何请求，文档原样返回。
    pub async fn translate_dom(&self, dom: RcDom) -> TranslationResult<RcDom> {
        let fragments = collect_fragments(&dom.document, self.config.min_fragment_chars);
        if fragments.is_empty() {
            tracing::debug!("没有可翻译片段，文档保持不变");
            return Ok(dom);
        }

        tracing::info!(
            "收集到 {} 个待翻译片段，目标语言 {}",
            fragments.len(),
            self.config.target_lang
        );

        let edits = self.dispatch_requests(&fragments).await;

        // 所有请求均已结束，按提取顺序应用替换
        let mut replaced = 0usize;
        for (fragment, edit) in fragments.iter().zip(edits.iter()) {
            if let Some(translated) = edit {
                apply_edit(&fragment.node, translated);
                replaced += 1;
            }
        }

        self.stats.add_fragments_replaced(replaced);
        tracing::info!("已替换 {}/{} 个片段", replaced, fragments.len());

        Ok(dom)
    }

    /// 翻译HTML字符串
    pub async fn translate_html(&self, html: &str) -> TranslationResult<String> {
        let dom = html_to_dom(html.as_bytes(), "utf-8".to_string());
        let dom = self.translate_dom(dom).await?;
        let bytes = serialize_document(dom, "utf-8".to_string());
        Ok(String::from_utf8_lossy(&bytes).to_string())
    }

    /// 并发分发所有片段的翻译请求，等待全部结束
    ///
    /// 返回与片段提取顺序对齐的替换列表；失败的请求在对应位置留空。
    async fn dispatch_requests(&self, fragments: &[Fragment]) -> Vec<Option<String>> {
        let concurrency = self.config.max_concurrent_requests.max(1);

        let results: Vec<(usize, TranslationResult<String>)> =
            stream::iter(fragments.iter().map(|fragment| async move {
                (fragment.order, self.request_translation(fragment).await)
            }))
            .buffer_unordered(concurrency)
            .collect()
            .await;

        let mut edits: Vec<Option<String>> = vec![None; fragments.len()];
        for (order, result) in results {
            match result {
                Ok(translated) => edits[order] = Some(translated),
                Err(error) => {
                    self.stats.inc_requests_failed();
                    tracing::warn!("片段 #{} 翻译失败，保留原文: {}", order, error);
                }
            }
        }

        edits
    }

    /// 请求单个片段的译文
    async fn request_translation(&self, fragment: &Fragment) -> TranslationResult<String> {
        let url = provider::build_request_url(
            &self.config.endpoint,
            &self.config.target_lang,
            &self.config.source_lang,
            &fragment.text,
        )?;
        let url = append_cache_buster(&url);

        self.stats.inc_requests_dispatched();
        tracing::debug!("分发翻译请求 #{} ({})", fragment.order, fragment.tag);

        let response = self.transport.get(&url).await?;
        if !response.is_ok() {
            return Err(TranslationError::RequestFailed {
                status: response.status,
            });
        }

        provider::parse_translation(&response.body)
    }

    /// 获取统计信息快照
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

/// 原地改写文本节点内容
fn apply_edit(node: &Handle, translated: &str) {
    if let NodeData::Text { contents } = &node.data {
        let mut contents = contents.borrow_mut();
        *contents = translated.into();
    }
}

/// 服务统计信息（线程安全）
#[derive(Debug, Default)]
pub struct ServiceStats {
    requests_dispatched: AtomicUsize,
    requests_failed: AtomicUsize,
    fragments_replaced: AtomicUsize,
}

impl ServiceStats {
    fn inc_requests_dispatched(&self) {
        self.requests_dispatched.fetch_add(1, Ordering::Relaxed);
    }

    fn inc_requests_failed(&self) {
        self.requests_failed.fetch_add(1, Ordering::Relaxed);
    }

    fn add_fragments_replaced(&self, count: usize) {
        self.fragments_replaced.fetch_add(count, Ordering::Relaxed);
    }

    fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            requests_dispatched: self.requests_dispatched.load(Ordering::Relaxed),
            requests_failed: self.requests_failed.load(Ordering::Relaxed),
            fragments_replaced: self.fragments_replaced.load(Ordering::Relaxed),
        }
    }
}

/// 某一时刻的统计信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub requests_dispatched: usize,
    pub requests_failed: usize,
    pub fragments_replaced: usize,
}
