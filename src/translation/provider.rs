//! 翻译端点的请求构造与响应解析
//!
//! 端点约定（`dj=1` 单句JSON格式）：
//!
//! ```text
//! GET {endpoint}?client=gtx&sl=auto&tl={lang}&hl=en&dt=t&dt=bd&dj=1&source=icon&q={text}
//! → {"sentences":[{"trans":"...","orig":"..."}], "src":"en", ...}
//! ```
//!
//! 译文取 `sentences` 数组中各项 `trans` 字段的拼接。

use serde::Deserialize;
use url::Url;

use crate::translation::error::{TranslationError, TranslationResult};

/// `dj=1` 响应体
#[derive(Debug, Deserialize)]
pub struct ProviderResponse {
    #[serde(default)]
    pub sentences: Vec<ProviderSentence>,
    /// 端点检测到的源语言
    pub src: Option<String>,
}

/// 响应中的单个句子
///
/// 音译条目只带 `translit` 不带 `trans`，因此两个字段都是可选的。
#[derive(Debug, Deserialize)]
pub struct ProviderSentence {
    pub trans: Option<String>,
    pub orig: Option<String>,
}

/// 构造单个片段的请求URL
pub fn build_request_url(
    endpoint: &str,
    target_lang: &str,
    source_lang: &str,
    text: &str,
) -> TranslationResult<String> {
    let mut url = Url::parse(endpoint)
        .map_err(|e| TranslationError::ConfigError(format!("非法的翻译端点 {endpoint}: {e}")))?;

    url.query_pairs_mut()
        .append_pair("client", "gtx")
        .append_pair("sl", source_lang)
        .append_pair("tl", target_lang)
        .append_pair("hl", "en")
        .append_pair("dt", "t")
        .append_pair("dt", "bd")
        .append_pair("dj", "1")
        .append_pair("source", "icon")
        .append_pair("q", text);

    Ok(url.to_string())
}

/// 从响应体中取出译文
pub fn parse_translation(body: &str) -> TranslationResult<String> {
    let response: ProviderResponse = serde_json::from_str(body)?;

    let translated: String = response
        .sentences
        .iter()
        .filter_map(|sentence| sentence.trans.as_deref())
        .collect();

    if translated.is_empty() {
        return Err(TranslationError::ResponseParseError(
            "响应中没有译文句子".to_string(),
        ));
    }

    Ok(translated)
}
