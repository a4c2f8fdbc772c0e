//! 片段收集器
//!
//! 按固定标签集合遍历DOM，收集可翻译的文本片段。
//! 提取顺序是确定的：先按标签集合的声明顺序，同一标签内按文档顺序。

use markup5ever_rcdom::Handle;

use crate::parsers::html::{direct_text_children, find_elements, text_node_contents};
use crate::translation::config::constants::TRANSLATABLE_TAGS;

/// 一个待翻译的文本片段
///
/// 持有文本节点句柄，替换时直接原地改写节点内容，
/// 不依赖按值搜索。
#[derive(Debug, Clone)]
pub struct Fragment {
    /// 发给翻译端点的文本（已去除首尾空白）
    pub text: String,
    /// 所属文本节点
    pub node: Handle,
    /// 匹配的标签名
    pub tag: &'static str,
    /// 提取顺序编号
    pub order: usize,
}

/// 收集文档中所有可翻译片段
///
/// 只取匹配元素的直接文本子节点，嵌套元素里的文本由其自身标签
/// 匹配时收集，不会重复计入。
pub fn collect_fragments(document: &Handle, min_chars: usize) -> Vec<Fragment> {
    let mut fragments = Vec::new();

    for &tag in TRANSLATABLE_TAGS {
        for element in find_elements(document, tag) {
            for text_node in direct_text_children(&element) {
                let raw = match text_node_contents(&text_node) {
                    Some(contents) => contents,
                    None => continue,
                };
                let text = raw.trim();
                if !should_translate(text, min_chars) {
                    continue;
                }

                fragments.push(Fragment {
                    text: text.to_string(),
                    node: text_node,
                    tag,
                    order: fragments.len(),
                });
            }
        }
    }

    fragments
}

/// 判断文本是否值得发起翻译请求
///
/// 过滤空白、纯数字/符号以及过短的片段。
pub fn should_translate(text: &str, min_chars: usize) -> bool {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return false;
    }

    if trimmed.chars().count() < min_chars {
        return false;
    }

    // 没有任何字母的片段（数字、箭头、分隔符）不需要翻译
    trimmed.chars().any(|c| c.is_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::html::html_to_dom;

    fn collect(html: &str) -> Vec<Fragment> {
        let dom = html_to_dom(html.as_bytes(), "utf-8".to_string());
        collect_fragments(&dom.document, 2)
    }

    #[test]
    fn test_document_without_matched_tags_yields_nothing() {
        let fragments = collect("<html><body><div>plain text</div><span>more</span></body></html>");
        assert!(fragments.is_empty());
    }

    #[test]
    fn test_collects_paragraph_and_anchor_in_tag_order() {
        let fragments =
            collect("<html><body><a href=\"#\">World</a><p>Hello</p></body></html>");
        assert_eq!(fragments.len(), 2);
        // 段落在标签集合中先于锚，即使文档顺序相反
        assert_eq!(fragments[0].text, "Hello");
        assert_eq!(fragments[0].tag, "p");
        assert_eq!(fragments[1].text, "World");
        assert_eq!(fragments[1].tag, "a");
        assert_eq!(fragments[0].order, 0);
        assert_eq!(fragments[1].order, 1);
    }

    #[test]
    fn test_collects_all_heading_levels() {
        let fragments = collect(
            "<html><body><h1>One</h1><h2>Two</h2><h3>Three</h3>\
             <h4>Four</h4><h5>Five</h5><h6>Six</h6></body></html>",
        );
        let tags: Vec<&str> = fragments.iter().map(|f| f.tag).collect();
        assert_eq!(tags, vec!["h1", "h2", "h3", "h4", "h5", "h6"]);
    }

    #[test]
    fn test_same_tag_instances_keep_document_order() {
        let fragments = collect("<html><body><p>first</p><p>second</p><p>third</p></body></html>");
        let texts: Vec<&str> = fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_nested_markup_only_takes_direct_text() {
        let fragments =
            collect("<html><body><p>intro <b>bold</b> outro</p></body></html>");
        let texts: Vec<&str> = fragments.iter().map(|f| f.text.as_str()).collect();
        // <b> 不在标签集合里，其内容不被收集
        assert_eq!(texts, vec!["intro", "outro"]);
    }

    #[test]
    fn test_should_translate_filters_noise() {
        assert!(should_translate("Hello World", 2));
        assert!(!should_translate("", 2));
        assert!(!should_translate("   ", 2));
        assert!(!should_translate("12345", 2));
        assert!(!should_translate("→", 2));
        assert!(!should_translate("x", 2));
    }

    #[test]
    fn test_min_chars_threshold_is_applied() {
        let dom = html_to_dom(b"<html><body><p>ok</p></body></html>", "utf-8".to_string());
        assert_eq!(collect_fragments(&dom.document, 2).len(), 1);
        assert_eq!(collect_fragments(&dom.document, 3).len(), 0);
    }
}
