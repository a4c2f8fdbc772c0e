use encoding_rs::Encoding;
use html5ever::parse_document;
use html5ever::serialize::{serialize, SerializeOpts};
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

/// 将 HTML 字节转换为 DOM
pub fn html_to_dom(data: &[u8], document_encoding: String) -> RcDom {
    let s: String;

    if let Some(encoding) = Encoding::for_label(document_encoding.as_bytes()) {
        let (string, _, _) = encoding.decode(data);
        s = string.to_string();
    } else {
        s = String::from_utf8_lossy(data).to_string();
    }

    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut s.as_bytes())
        .unwrap()
}

/// 递归查找指定标签名的所有元素节点（文档顺序）
pub fn find_elements(node: &Handle, tag_name: &str) -> Vec<Handle> {
    let mut found_nodes = Vec::new();

    if let NodeData::Element { ref name, .. } = node.data {
        if &*name.local == tag_name {
            found_nodes.push(node.clone());
        }
    }

    for child_node in node.children.borrow().iter() {
        found_nodes.append(&mut find_elements(child_node, tag_name));
    }

    found_nodes
}

/// 获取节点属性值
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => {
            for attr in attrs.borrow().iter() {
                if &*attr.name.local == attr_name {
                    return Some(attr.value.to_string());
                }
            }
            None
        }
        _ => None,
    }
}

/// 从文档的META标签中读取字符集声明
pub fn get_charset(document: &Handle) -> Option<String> {
    for meta in find_elements(document, "meta") {
        if let Some(charset) = get_node_attr(&meta, "charset") {
            return Some(charset);
        }

        if let Some(http_equiv) = get_node_attr(&meta, "http-equiv") {
            if http_equiv.eq_ignore_ascii_case("content-type") {
                if let Some(content) = get_node_attr(&meta, "content") {
                    if let Some(charset_index) = content.to_lowercase().find("charset=") {
                        return Some(content[charset_index + "charset=".len()..].trim().to_string());
                    }
                }
            }
        }
    }

    None
}

/// 收集元素的直接文本子节点（不进入嵌套元素）
pub fn direct_text_children(element: &Handle) -> Vec<Handle> {
    element
        .children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Text { .. }))
        .cloned()
        .collect()
}

/// 读取文本节点的当前内容
pub fn text_node_contents(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Text { contents } => Some(contents.borrow().to_string()),
        _ => None,
    }
}

/// 获取文档标题
pub fn get_title(document: &Handle) -> Option<String> {
    let titles = find_elements(document, "title");
    let title = titles.first()?;
    let text: String = direct_text_children(title)
        .iter()
        .filter_map(text_node_contents)
        .collect();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// 序列化文档
pub fn serialize_document(dom: RcDom, document_encoding: String) -> Vec<u8> {
    let mut buf: Vec<u8> = Vec::new();

    let serializable: SerializableHandle = dom.document.into();
    serialize(&mut buf, &serializable, SerializeOpts::default())
        .expect("Unable to serialize DOM into buffer");

    if !document_encoding.is_empty() {
        if let Some(encoding) = Encoding::for_label(document_encoding.as_bytes()) {
            let s: &str = &String::from_utf8_lossy(&buf);
            let (data, _, _) = encoding.encode(s);
            buf = data.to_vec();
        }
    }

    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_dom_and_serialize_roundtrip() {
        let html = b"<html><head></head><body><p>Hello</p></body></html>";
        let dom = html_to_dom(html, "utf-8".to_string());
        let out = serialize_document(dom, "utf-8".to_string());
        let out_str = String::from_utf8_lossy(&out);
        assert!(out_str.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_find_elements_counts_matches_in_document_order() {
        let html = b"<html><body><p>one</p><div><p>two</p></div><a href=\"#\">link</a></body></html>";
        let dom = html_to_dom(html, "utf-8".to_string());
        let paragraphs = find_elements(&dom.document, "p");
        assert_eq!(paragraphs.len(), 2);
        let anchors = find_elements(&dom.document, "a");
        assert_eq!(anchors.len(), 1);

        let first = direct_text_children(&paragraphs[0]);
        assert_eq!(text_node_contents(&first[0]).unwrap(), "one");
    }

    #[test]
    fn test_direct_text_children_skips_nested_elements() {
        let html = b"<html><body><p>before<span>inner</span>after</p></body></html>";
        let dom = html_to_dom(html, "utf-8".to_string());
        let paragraphs = find_elements(&dom.document, "p");
        let texts: Vec<String> = direct_text_children(&paragraphs[0])
            .iter()
            .filter_map(text_node_contents)
            .collect();
        assert_eq!(texts, vec!["before".to_string(), "after".to_string()]);
    }

    #[test]
    fn test_get_charset_from_meta_charset() {
        let html = b"<html><head><meta charset=\"windows-1252\"></head><body></body></html>";
        let dom = html_to_dom(html, "utf-8".to_string());
        assert_eq!(get_charset(&dom.document), Some("windows-1252".to_string()));
    }

    #[test]
    fn test_get_charset_from_http_equiv() {
        let html =
            b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\"></head></html>";
        let dom = html_to_dom(html, "utf-8".to_string());
        assert_eq!(get_charset(&dom.document), Some("utf-8".to_string()));
    }

    #[test]
    fn test_get_title() {
        let html = b"<html><head><title> My Page </title></head><body></body></html>";
        let dom = html_to_dom(html, "utf-8".to_string());
        assert_eq!(get_title(&dom.document), Some("My Page".to_string()));

        let dom = html_to_dom(b"<html><body></body></html>", "utf-8".to_string());
        assert_eq!(get_title(&dom.document), None);
    }

    #[test]
    fn test_get_charset_missing() {
        let html = b"<html><head></head><body></body></html>";
        let dom = html_to_dom(html, "utf-8".to_string());
        assert_eq!(get_charset(&dom.document), None);
    }
}
