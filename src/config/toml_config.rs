use crate::config::InlineSettings;
use crate::utils::error::{InlineError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("Invalid env var regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub paths: Option<PathsConfig>,
    pub conventions: Option<ConventionsConfig>,

    /// 設定檔所在目錄，相對的 `paths.root` 以此為基準
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    pub root: Option<PathBuf>,
    pub js_dir: Option<PathBuf>,
    pub helper: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConventionsConfig {
    pub primary_element: Option<String>,
    pub element_class_template: Option<String>,
    pub extraction_start: Option<String>,
    pub extraction_end: Option<String>,
    pub export_marker: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| InlineError::from_io(path, e))?;
        let mut config = Self::from_toml_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| InlineError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PROJECT_ROOT})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn apply(&self, settings: &mut InlineSettings) {
        if let Some(paths) = &self.paths {
            if let Some(root) = &paths.root {
                settings.root = match &self.base_dir {
                    Some(base) => base.join(root),
                    None => root.clone(),
                };
            }
            if let Some(js_dir) = &paths.js_dir {
                settings.js_dir = Some(js_dir.clone());
            }
            if let Some(helper) = &paths.helper {
                settings.helper = Some(helper.clone());
            }
        }

        if let Some(conventions) = &self.conventions {
            let overrides = [
                (&conventions.primary_element, &mut settings.primary_element),
                (&conventions.element_class_template, &mut settings.element_class_template),
                (&conventions.extraction_start, &mut settings.extraction_start),
                (&conventions.extraction_end, &mut settings.extraction_end),
                (&conventions.export_marker, &mut settings.export_marker),
            ];
            for (value, slot) in overrides {
                if let Some(value) = value {
                    *slot = value.clone();
                }
            }
        }
    }

    pub fn to_settings(&self) -> InlineSettings {
        let mut settings = InlineSettings::default();
        self.apply(&mut settings);
        settings
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_settings().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[paths]
root = "/srv/site"
js_dir = "static/js"
helper = "static/js/lib/cce.js"

[conventions]
primary_element = "monster-card"
element_class_template = "actions-block"
extraction_start = "// BEGIN INLINE"
extraction_end = "// END INLINE"
export_marker = "export default "
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let settings = config.to_settings();

        assert_eq!(settings.js_dir(), PathBuf::from("/srv/site/static/js"));
        assert_eq!(settings.helper_path(), PathBuf::from("/srv/site/static/js/lib/cce.js"));
        assert_eq!(settings.primary_element(), "monster-card");
        assert_eq!(settings.element_class_template(), "actions-block");
        assert_eq!(settings.extraction_start(), "// BEGIN INLINE");
        assert_eq!(settings.export_marker(), "export default ");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_keeps_defaults() {
        let settings = TomlConfig::from_toml_str("").unwrap().to_settings();
        assert_eq!(settings.primary_element(), "stat-block");
        assert_eq!(settings.element_class_template(), "abilities-block");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("HTML_INLINER_TEST_ROOT", "/env/root");

        let config = TomlConfig::from_toml_str(
            r#"
[paths]
root = "${HTML_INLINER_TEST_ROOT}"
"#,
        )
        .unwrap();
        assert_eq!(config.to_settings().root, PathBuf::from("/env/root"));

        std::env::remove_var("HTML_INLINER_TEST_ROOT");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[paths\nroot = ").unwrap_err();
        assert!(matches!(err, InlineError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_invalid_tag_fails_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[conventions]
primary_element = "Stat Block"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file_resolves_root_next_to_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[paths]\nroot = \"project\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        let expected = temp_file.path().parent().unwrap().join("project");
        assert_eq!(config.to_settings().root, expected);
    }
}
