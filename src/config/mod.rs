pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_PRIMARY_ELEMENT: &str = "stat-block";
pub const DEFAULT_ELEMENT_CLASS_TEMPLATE: &str = "abilities-block";
pub const DEFAULT_EXTRACTION_START: &str = "// Inline extraction START";
pub const DEFAULT_EXTRACTION_END: &str = "// Inline extraction END";
pub const DEFAULT_EXPORT_MARKER: &str = "export ";

/// 合併 CLI、TOML 與預設值後的最終設定
#[derive(Debug, Clone)]
pub struct InlineSettings {
    pub root: PathBuf,
    /// 相對路徑以 `root` 為基準；預設 `<root>/src/js`
    pub js_dir: Option<PathBuf>,
    /// 預設 `<js_dir>/helpers/create-custom-element.js`
    pub helper: Option<PathBuf>,
    pub primary_element: String,
    pub element_class_template: String,
    pub extraction_start: String,
    pub extraction_end: String,
    pub export_marker: String,
}

impl Default for InlineSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            js_dir: None,
            helper: None,
            primary_element: DEFAULT_PRIMARY_ELEMENT.to_string(),
            element_class_template: DEFAULT_ELEMENT_CLASS_TEMPLATE.to_string(),
            extraction_start: DEFAULT_EXTRACTION_START.to_string(),
            extraction_end: DEFAULT_EXTRACTION_END.to_string(),
            export_marker: DEFAULT_EXPORT_MARKER.to_string(),
        }
    }
}

impl ConfigProvider for InlineSettings {
    fn project_root(&self) -> &Path {
        &self.root
    }

    fn js_dir(&self) -> PathBuf {
        match &self.js_dir {
            Some(dir) => self.root.join(dir),
            None => self.root.join("src").join("js"),
        }
    }

    fn helper_path(&self) -> PathBuf {
        match &self.helper {
            Some(helper) => self.root.join(helper),
            None => self.js_dir().join("helpers").join("create-custom-element.js"),
        }
    }

    fn primary_element(&self) -> &str {
        &self.primary_element
    }

    fn element_class_template(&self) -> &str {
        &self.element_class_template
    }

    fn extraction_start(&self) -> &str {
        &self.extraction_start
    }

    fn extraction_end(&self) -> &str {
        &self.extraction_end
    }

    fn export_marker(&self) -> &str {
        &self.export_marker
    }
}

impl Validate for InlineSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("root", &self.root)?;
        if let Some(js_dir) = &self.js_dir {
            validation::validate_path("js_dir", js_dir)?;
        }
        if let Some(helper) = &self.helper {
            validation::validate_path("helper", helper)?;
        }

        validation::validate_tag_name("primary_element", &self.primary_element)?;
        validation::validate_tag_name("element_class_template", &self.element_class_template)?;

        validation::validate_non_empty_string("extraction_start", &self.extraction_start)?;
        validation::validate_non_empty_string("extraction_end", &self.extraction_end)?;
        validation::validate_distinct("extraction markers", &self.extraction_start, &self.extraction_end)?;
        validation::validate_non_empty_string("export_marker", &self.export_marker)?;

        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "html-inliner")]
#[command(about = "Inlines HTML imports.")]
pub struct CliConfig {
    /// File to inline
    #[arg(short, long)]
    pub filename: PathBuf,

    /// File output (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project root that import and fetch paths are resolved against
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Directory module script `filename` attributes are resolved against
    #[arg(long)]
    pub js_dir: Option<PathBuf>,

    /// Script defining createCustomElement()
    #[arg(long)]
    pub helper: Option<PathBuf>,

    /// Tag of the root document's primary content element
    #[arg(long)]
    pub primary_element: Option<String>,

    /// Template name whose module provides an elementClass
    #[arg(long)]
    pub element_class_template: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 優先順序：CLI 參數 > TOML > 預設值
    pub fn settings(&self, toml: Option<&toml_config::TomlConfig>) -> InlineSettings {
        let mut settings = InlineSettings::default();
        if let Some(toml) = toml {
            toml.apply(&mut settings);
        }

        if let Some(root) = &self.root {
            settings.root = root.clone();
        }
        if let Some(js_dir) = &self.js_dir {
            settings.js_dir = Some(js_dir.clone());
        }
        if let Some(helper) = &self.helper {
            settings.helper = Some(helper.clone());
        }
        if let Some(tag) = &self.primary_element {
            settings.primary_element = tag.clone();
        }
        if let Some(name) = &self.element_class_template {
            settings.element_class_template = name.clone();
        }

        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let settings = InlineSettings {
            root: PathBuf::from("/proj"),
            ..InlineSettings::default()
        };
        assert_eq!(settings.js_dir(), PathBuf::from("/proj/src/js"));
        assert_eq!(
            settings.helper_path(),
            PathBuf::from("/proj/src/js/helpers/create-custom-element.js")
        );
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_relative_overrides_resolve_against_root() {
        let settings = InlineSettings {
            root: PathBuf::from("/proj"),
            js_dir: Some(PathBuf::from("web/js")),
            helper: Some(PathBuf::from("/opt/helper.js")),
            ..InlineSettings::default()
        };
        assert_eq!(settings.js_dir(), PathBuf::from("/proj/web/js"));
        assert_eq!(settings.helper_path(), PathBuf::from("/opt/helper.js"));
    }

    #[test]
    fn test_identical_markers_are_rejected() {
        let settings = InlineSettings {
            extraction_end: DEFAULT_EXTRACTION_START.to_string(),
            ..InlineSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_toml() {
        let toml = toml_config::TomlConfig::from_toml_str(
            r#"
[paths]
root = "/from-toml"

[conventions]
primary_element = "toml-block"
element_class_template = "toml-class"
"#,
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "html-inliner",
            "-f",
            "index.html",
            "--primary-element",
            "cli-block",
        ]);
        let settings = cli.settings(Some(&toml));

        assert_eq!(settings.root, PathBuf::from("/from-toml"));
        assert_eq!(settings.primary_element, "cli-block");
        assert_eq!(settings.element_class_template, "toml-class");
    }
}
