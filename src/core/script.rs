use crate::core::{document, scanner};
use crate::domain::model::ModuleSource;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{InlineError, Result};
use kuchiki::NodeRef;

/// 移除 export 標記，讓 helper 以一般 inline script 執行
pub fn bootstrap_text(helper_source: &str, export_marker: &str) -> String {
    helper_source.replace(export_marker, "")
}

pub fn build_bootstrap(helper_source: &str, export_marker: &str) -> Result<NodeRef> {
    document::new_script(&bootstrap_text(helper_source, export_marker))
}

pub fn registration_text(name: &str) -> String {
    format!(
        "{{
  let templateElement = document.getElementById('{name}');
  createCustomElement('{name}', templateElement.content);
}}"
    )
}

/// `extracted` is expected to define `elementClass`.
pub fn element_class_registration_text(name: &str, extracted: &str) -> String {
    format!(
        "{{
  {extracted}
  let templateElement = document.getElementById('{name}');
  createCustomElement('{name}', templateElement.content, elementClass);
}}"
    )
}

pub fn script_text<C: ConfigProvider>(name: &str, module: &ModuleSource, config: &C) -> Result<String> {
    if name != config.element_class_template() {
        return Ok(registration_text(name));
    }

    let extracted = scanner::extract_marked_region(
        &module.content,
        config.extraction_start(),
        config.extraction_end(),
    )
    .ok_or_else(|| InlineError::MissingExtractionRegion {
        module: module.path.clone(),
    })?;

    tracing::debug!(
        "Extracted {} line(s) of element class code from {}",
        extracted.lines().count(),
        module.path.display()
    );
    Ok(element_class_registration_text(name, &extracted))
}

pub fn build_script<C: ConfigProvider>(name: &str, module: &ModuleSource, config: &C) -> Result<NodeRef> {
    document::new_script(&script_text(name, module, config)?)
}
