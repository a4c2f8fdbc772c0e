//! 翻译替换流程集成测试
//!
//! 通过模拟端点验证端到端行为：片段收集、请求构造、
//! 失败处理和替换应用。

use std::sync::Arc;

use pagetrans::translation::TranslationConfig;

mod common;

use common::{marketing_page, service_with, service_with_config, MockTransport};

#[tokio::test]
async fn test_document_without_matched_tags_issues_no_requests() {
    let transport = Arc::new(MockTransport::new());
    let service = service_with(transport.clone());

    let html = "<html><body><div>Plain area</div><span>No tags of interest</span></body></html>";
    let output = service.translate_html(html).await.unwrap();

    assert_eq!(transport.request_count(), 0);
    assert!(output.contains("Plain area"));
    assert!(output.contains("No tags of interest"));

    let stats = service.stats();
    assert_eq!(stats.requests_dispatched, 0);
    assert_eq!(stats.fragments_replaced, 0);
}

#[tokio::test]
async fn test_two_fragments_issue_two_well_formed_requests() {
    let transport = Arc::new(MockTransport::new());
    let service = service_with(transport.clone());

    let html = "<html><body><p>Hello</p><a href=\"#\">World</a></body></html>";
    let output = service.translate_html(html).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);

    for url in &requests {
        // 目标语言来自配置，而不是硬编码
        assert_eq!(
            MockTransport::query_param(url, "tl").as_deref(),
            Some("nl")
        );
        assert_eq!(
            MockTransport::query_param(url, "sl").as_deref(),
            Some("auto")
        );
        // 防缓存参数存在且为数字
        let cache_buster = MockTransport::query_param(url, "no-cache").unwrap();
        assert!(cache_buster.parse::<i64>().is_ok());
    }

    let texts: Vec<String> = requests
        .iter()
        .map(|url| MockTransport::query_param(url, "q").unwrap())
        .collect();
    assert!(texts.contains(&"Hello".to_string()));
    assert!(texts.contains(&"World".to_string()));

    assert!(output.contains("HELLO"));
    assert!(output.contains("WORLD"));
    assert!(!output.contains("Hello"));
    assert!(!output.contains("World"));
}

#[tokio::test]
async fn test_failed_request_keeps_original_fragment() {
    let transport = Arc::new(MockTransport::failing_for(&["World"]));
    let service = service_with(transport.clone());

    let html = "<html><body><p>Hello</p><a href=\"#\">World</a></body></html>";
    let output = service.translate_html(html).await.unwrap();

    // 两个请求都发出，失败的那个片段保留原文
    assert_eq!(transport.request_count(), 2);
    assert!(output.contains("HELLO"));
    assert!(output.contains("World"));
    assert!(!output.contains("WORLD"));

    let stats = service.stats();
    assert_eq!(stats.requests_dispatched, 2);
    assert_eq!(stats.requests_failed, 1);
    assert_eq!(stats.fragments_replaced, 1);
}

#[tokio::test]
async fn test_all_requests_failing_leaves_document_untranslated() {
    let transport = Arc::new(MockTransport::failing_for(&["Hello", "World"]));
    let service = service_with(transport.clone());

    let html = "<html><body><p>Hello</p><a href=\"#\">World</a></body></html>";
    let output = service.translate_html(html).await.unwrap();

    assert!(output.contains("Hello"));
    assert!(output.contains("World"));
    assert_eq!(service.stats().fragments_replaced, 0);
}

#[tokio::test]
async fn test_full_marketing_page_translates_every_fragment() {
    let transport = Arc::new(MockTransport::new());
    let service = service_with(transport.clone());

    let output = service.translate_html(marketing_page()).await.unwrap();

    // 两个标题、两个段落和一个链接；<title>不在标签集合里
    assert_eq!(transport.request_count(), 5);
    assert!(output.contains("OPEN HARDWARE"));
    assert!(output.contains("MODULAR SENSORS"));
    assert!(output.contains("BUILD YOUR OWN STATION"));
    assert!(output.contains("DATA STAYS LOCAL"));
    assert!(output.contains("REACH THE TEAM"));
    assert!(output.contains("<title>Smart Devices</title>"));

    assert_eq!(service.stats().fragments_replaced, 5);
}

#[tokio::test]
async fn test_configured_language_reaches_every_request() {
    let transport = Arc::new(MockTransport::new());
    let config = TranslationConfig::default_with_lang("de", None);
    let service = service_with_config(config, transport.clone());

    service
        .translate_html("<html><body><p>Good morning</p></body></html>")
        .await
        .unwrap();

    for url in transport.requests() {
        assert_eq!(
            MockTransport::query_param(&url, "tl").as_deref(),
            Some("de")
        );
    }
}

#[tokio::test]
async fn test_short_fragments_are_not_requested() {
    let transport = Arc::new(MockTransport::new());
    let service = service_with(transport.clone());

    let html = "<html><body><p>x</p><p>Real content here</p></body></html>";
    let output = service.translate_html(html).await.unwrap();

    assert_eq!(transport.request_count(), 1);
    assert!(output.contains("REAL CONTENT HERE"));
    assert!(output.contains(">x<"));
}

#[tokio::test]
async fn test_second_pass_over_translated_page_is_stable() {
    // 模拟端点对大写文本是恒等映射，二次翻译应得到相同页面
    let transport = Arc::new(MockTransport::new());
    let service = service_with(transport.clone());

    let first = service.translate_html(marketing_page()).await.unwrap();
    let second = service.translate_html(&first).await.unwrap();

    assert_eq!(first, second);
}
