use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use markup5ever_rcdom::RcDom;

use crate::network::transport::{HttpTransport, Transport};
use crate::parsers::html::{get_charset, get_title, html_to_dom, serialize_document};
use crate::translation::{TranslationConfig, TranslationService};

/// Represents errors that can occur during pagetrans processing
///
/// This error type encapsulates all possible errors that can occur
/// when translating a document with the pagetrans library.
#[derive(Debug)]
pub struct PageTransError {
    details: String,
}

impl PageTransError {
    /// Creates a new PageTransError with the given message
    pub fn new(msg: &str) -> PageTransError {
        PageTransError {
            details: msg.to_string(),
        }
    }
}

impl fmt::Display for PageTransError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.details)
    }
}

impl Error for PageTransError {
    fn description(&self) -> &str {
        &self.details
    }
}

/// Configuration options for a translation pass
///
/// 目标语言与端点不再是源码里的硬编码字面量，
/// 由调用方（CLI、Web处理器）在此传入。
#[derive(Debug, Clone)]
pub struct PageTransOptions {
    /// 目标语言代码（如 "nl", "de", "zh"）
    pub target_language: String,
    /// 自定义翻译端点；None时使用配置或默认端点
    pub endpoint: Option<String>,
    /// 自定义输出编码；None时沿用文档自身的编码
    pub encoding: Option<String>,
    pub silent: bool,
}

impl Default for PageTransOptions {
    fn default() -> Self {
        Self {
            target_language: crate::translation::constants::DEFAULT_TARGET_LANG.to_string(),
            endpoint: None,
            encoding: None,
            silent: false,
        }
    }
}

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Translates a page from raw document data
///
/// # Arguments
///
/// * `options` - Translation pass options
/// * `input_data` - Raw HTML data as bytes
///
/// # Returns
///
/// Returns a tuple containing the translated document bytes and optional
/// title, or an error if processing fails.
pub async fn translate_page_data(
    options: &PageTransOptions,
    input_data: Vec<u8>,
) -> Result<(Vec<u8>, Option<String>), PageTransError> {
    // 1. 验证自定义输出编码
    if let Some(custom_encoding) = &options.encoding {
        if Encoding::for_label_no_replacement(custom_encoding.as_bytes()).is_none() {
            return Err(PageTransError::new(&format!(
                "unknown encoding \"{custom_encoding}\""
            )));
        }
    }

    // 2. 解析文档，识别其声明的字符集
    let (dom, document_encoding) = parse_with_charset_detection(&input_data);
    let document_title = get_title(&dom.document);

    // 3. 组装翻译配置：配置文件/环境变量打底，调用方选项覆盖
    let mut config = TranslationConfig::load().unwrap_or_else(|e| {
        tracing::warn!("配置加载失败，使用默认配置: {}", e);
        TranslationConfig::default()
    });
    config.target_lang = options.target_language.clone();
    if let Some(endpoint) = &options.endpoint {
        config.endpoint = endpoint.clone();
    }

    // 4. 执行翻译流程
    let service = TranslationService::with_config(config).map_err(PageTransError::from)?;
    let dom = service
        .translate_dom(dom)
        .await
        .map_err(PageTransError::from)?;

    if !options.silent {
        let stats = service.stats();
        print_info_message(&format!(
            "Translated {} fragment(s), {} request(s) failed",
            stats.fragments_replaced, stats.requests_failed
        ));
    }

    // 5. 序列化输出
    let final_encoding = options
        .encoding
        .clone()
        .unwrap_or(document_encoding);
    let result = serialize_document(dom, final_encoding);

    Ok((result, document_title))
}

/// Translates a page from a URL or file path
///
/// Fetches content from the given target and runs a translation pass over it.
pub async fn translate_page(
    options: &PageTransOptions,
    target: &str,
) -> Result<(Vec<u8>, Option<String>), PageTransError> {
    let input_data = if target.starts_with("http://") || target.starts_with("https://") {
        // 远程页面：通过与翻译请求相同的传输获取
        let transport = HttpTransport::new(
            crate::translation::constants::DEFAULT_REQUEST_TIMEOUT,
            crate::translation::constants::DEFAULT_ORIGIN,
        )
        .map_err(PageTransError::from)?;

        let response = transport
            .get(target)
            .await
            .map_err(|e| PageTransError::new(&format!("Failed to fetch URL: {e}")))?;

        if response.status != 200 {
            return Err(PageTransError::new(&format!(
                "Failed to fetch URL: HTTP status {}",
                response.status
            )));
        }

        response.body.into_bytes()
    } else {
        // 本地文件路径
        let path = Path::new(target);
        if !path.exists() {
            return Err(PageTransError::new(&format!("File not found: {target}")));
        }

        fs::read(path).map_err(|e| PageTransError::new(&format!("Failed to read file: {e}")))?
    };

    translate_page_data(options, input_data).await
}

/// Synchronous wrapper around [`translate_page`]
///
/// 内部创建异步运行时，供CLI等非异步环境调用。
pub fn translate_page_sync(
    options: &PageTransOptions,
    target: &str,
) -> Result<(Vec<u8>, Option<String>), PageTransError> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| PageTransError::new(&format!("创建异步运行时失败: {e}")))?;

    rt.block_on(translate_page(options, target))
}

/// Synchronous wrapper around [`translate_page_data`]
pub fn translate_page_data_sync(
    options: &PageTransOptions,
    input_data: Vec<u8>,
) -> Result<(Vec<u8>, Option<String>), PageTransError> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| PageTransError::new(&format!("创建异步运行时失败: {e}")))?;

    rt.block_on(translate_page_data(options, input_data))
}

/// 解析文档并尝试沿用其声明的字符集
fn parse_with_charset_detection(input_data: &[u8]) -> (RcDom, String) {
    let mut document_encoding = "utf-8".to_string();
    let mut dom = html_to_dom(input_data, document_encoding.clone());

    if let Some(html_charset) = get_charset(&dom.document) {
        if !html_charset.is_empty() {
            if let Some(document_charset) =
                Encoding::for_label_no_replacement(html_charset.as_bytes())
            {
                document_encoding = html_charset;
                dom = html_to_dom(input_data, document_charset.name().to_string());
            }
        }
    }

    (dom, document_encoding)
}

/// Prints an error message to stderr
pub fn print_error_message(msg: &str) {
    eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
}

/// Prints an info message to stdout
pub fn print_info_message(msg: &str) {
    println!("{msg}");
}
