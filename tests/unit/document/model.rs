use super::*;
use crate::document::node::NodeType;

#[test]
fn build_uses_default_settings() {
    let doc = Document::build("T", "A", DocumentType::Typical);
    assert_eq!(doc.title, "T");
    assert_eq!(doc.author, "A");
    assert_eq!(doc.settings.layout, LayoutMode::Scalable);
    assert_eq!(doc.settings.width, "0");
    assert_eq!(doc.settings.height, "0");
    assert_eq!(doc.settings.colorspace, "rgb");
    assert_eq!(doc.settings.dpi, 260);
    assert!((doc.settings.aspect_ratio - 0.772_727_3).abs() < 1e-6);
    assert_eq!(doc.created_at, doc.modified_at);
    assert_eq!(doc.body, Node::default());
}

#[test]
fn parse_attaches_root() {
    let mut doc = Document::default();
    assert_eq!(doc.title, "Untitled");
    doc.parse("[%title v:'Hi'%] [Hello world]").unwrap();
    assert_eq!(doc.body.node_type, NodeType::Panel);
    assert_eq!(doc.body.children.len(), 2);
    assert!(doc.modified_at >= doc.created_at);
}

#[test]
fn failed_parse_keeps_previous_body() {
    let mut doc = Document::default();
    doc.parse("[hello]").unwrap();
    let before = doc.body.clone();
    assert!(doc.parse("[unclosed").is_err());
    assert_eq!(doc.body, before);
}
