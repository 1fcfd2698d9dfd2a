//! Plain-text extraction from Atlassian Document Format descriptions.

use serde_json::Value;

/// Separator placed between text runs and between paragraphs.
pub const LINE_SEPARATOR: &str = "\r\n";

/// Flattens a description document into plain text.
///
/// Only top-level `paragraph` nodes are read, and within them only `text`
/// children. Every other node kind (lists, headings, media, ...) is dropped.
/// Text runs of a paragraph and the paragraphs themselves are joined with
/// [`LINE_SEPARATOR`]. A missing or non-document description yields an empty
/// string.
pub fn extract_plain_text(description: Option<&Value>) -> String {
    let Some(nodes) = description
        .and_then(|doc| doc.get("content"))
        .and_then(Value::as_array)
    else {
        return String::new();
    };

    nodes
        .iter()
        .filter(|node| node_type(node) == Some("paragraph"))
        .map(paragraph_text)
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}

fn paragraph_text(paragraph: &Value) -> String {
    paragraph
        .get("content")
        .and_then(Value::as_array)
        .map(|children| {
            children
                .iter()
                .filter(|child| node_type(child) == Some("text"))
                .map(|child| child.get("text").and_then(Value::as_str).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(LINE_SEPARATOR)
        })
        .unwrap_or_default()
}

fn node_type(node: &Value) -> Option<&str> {
    node.get("type").and_then(Value::as_str)
}
