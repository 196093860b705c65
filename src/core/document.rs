//! Thin helpers over `kuchiki` for the handful of tree operations the
//! inliner needs: parse, locate head/body, create elements, serialize.

use crate::utils::error::{InlineError, Result};
use kuchiki::traits::TendrilSink;
use kuchiki::{ElementData, NodeDataRef, NodeRef};

pub const DOCTYPE: &str = "<!DOCTYPE html>";

pub fn parse(html: &str) -> NodeRef {
    kuchiki::parse_html().one(html)
}

pub fn select_first(document: &NodeRef, selector: &str) -> Result<NodeDataRef<ElementData>> {
    document.select_first(selector).map_err(|()| InlineError::HtmlError {
        message: format!("no element matches '{selector}'"),
    })
}

pub fn select_all(document: &NodeRef, selector: &str) -> Result<Vec<NodeDataRef<ElementData>>> {
    let matches = document.select(selector).map_err(|()| InlineError::HtmlError {
        message: format!("invalid selector '{selector}'"),
    })?;
    Ok(matches.collect())
}

pub fn head(document: &NodeRef) -> Result<NodeRef> {
    Ok(select_first(document, "head")?.as_node().clone())
}

pub fn body(document: &NodeRef) -> Result<NodeRef> {
    Ok(select_first(document, "body")?.as_node().clone())
}

/// 建立一個脫離文件樹的空元素
pub fn new_element(tag: &str) -> Result<NodeDataRef<ElementData>> {
    let fragment = parse(&format!("<{tag}></{tag}>"));
    let element = select_first(&fragment, tag)?;
    element.as_node().detach();
    Ok(element)
}

/// `<script>` whose body is raw text; the serializer does not escape script content.
pub fn new_script(text: &str) -> Result<NodeRef> {
    let script = new_element("script")?;
    script.as_node().append(NodeRef::new_text(text));
    Ok(script.as_node().clone())
}

/// Children are collected first since `append` detaches them from `parent`.
pub fn take_children(parent: &NodeRef) -> Vec<NodeRef> {
    parent.children().collect()
}

pub fn is_blank(node: &NodeRef) -> bool {
    node.as_text()
        .map(|text| text.borrow().trim().is_empty())
        .unwrap_or(false)
}

pub fn serialize(document: &NodeRef) -> Result<String> {
    let mut html_output = Vec::new();
    document
        .serialize(&mut html_output)
        .map_err(InlineError::IoError)?;

    let markup = String::from_utf8(html_output).map_err(|e| InlineError::HtmlError {
        message: format!("serialized document is not UTF-8: {e}"),
    })?;

    Ok(format!("{DOCTYPE}\n{markup}"))
}
