//! Pattern-based scanning of module source text.
//!
//! Only the single-quoted literal forms `import '<path>'` and
//! `fetch('<path>')` are recognised; anything else is ignored.

use crate::domain::model::ModuleSource;
use crate::utils::error::{InlineError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"import '(.*)'").expect("Invalid import regex"));

static FETCH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"fetch\('(.*)'\)").expect("Invalid fetch regex"));

pub fn find_imports(content: &str) -> Vec<String> {
    IMPORT_RE
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

pub fn find_fetches(content: &str) -> Vec<String> {
    FETCH_RE
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// 掃描模組原始碼；最後一個 `fetch()` 指向模組的模板
pub fn scan_module(path: PathBuf, content: String) -> Result<ModuleSource> {
    let imports = find_imports(&content);
    let template = find_fetches(&content)
        .pop()
        .ok_or_else(|| InlineError::MissingTemplateReference {
            module: path.clone(),
        })?;

    Ok(ModuleSource {
        path,
        content,
        imports,
        template,
    })
}

/// Lines strictly between start/end marker lines, each terminated by `\n`.
/// Returns `None` when no start marker is present.
pub fn extract_marked_region(content: &str, start: &str, end: &str) -> Option<String> {
    let mut extracted = String::new();
    let mut in_region = false;
    let mut found = false;

    for line in content.lines() {
        if !in_region {
            if line.contains(start) {
                in_region = true;
                found = true;
            }
        } else if line.contains(end) {
            in_region = false;
        } else {
            extracted.push_str(line);
            extracted.push('\n');
        }
    }

    found.then_some(extracted)
}

/// 相對專案根目錄解析，先去掉開頭的路徑分隔符
pub fn resolve_from_root(root: &Path, literal: &str) -> PathBuf {
    root.join(literal.trim_start_matches(['/', '\\']))
}
