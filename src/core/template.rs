use crate::core::document;
use crate::utils::error::Result;
use kuchiki::NodeRef;

/// 將模板檔的 head 與 body 子節點攤平成 `<template id="{name}">` 的內容
pub fn build_template(name: &str, template_html: &str) -> Result<NodeRef> {
    let template_doc = document::parse(template_html);

    let template = document::new_element("template")?;
    template
        .attributes
        .borrow_mut()
        .insert("id", name.to_string());

    // 序列化只走元素本身的子節點，不走 template_contents；
    // 重新解析時 parser 會把它們放回 content
    let node = template.as_node();
    for child in document::take_children(&document::head(&template_doc)?) {
        node.append(child);
    }
    for child in document::take_children(&document::body(&template_doc)?) {
        node.append(child);
    }

    tracing::debug!("Built <template id=\"{}\">", name);
    Ok(template.as_node().clone())
}
