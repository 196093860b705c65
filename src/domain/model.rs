use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// 一個 JavaScript 模組及其從原始碼掃描出的參照
#[derive(Debug, Clone)]
pub struct ModuleSource {
    /// 正規化後的絕對路徑，同時作為去重鍵值
    pub path: PathBuf,
    pub content: String,
    /// `import '...'` 中的字面路徑，依出現順序
    pub imports: Vec<String>,
    /// 最後一個 `fetch('...')` 的字面路徑
    pub template: String,
}

/// 模組的 HTML 模板檔案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRef {
    pub path: PathBuf,
    /// 檔名去掉副檔名，同時是 `<template id>` 與自訂元素標籤名
    pub name: String,
}

impl TemplateRef {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

/// 已內嵌模組的集合，以正規化路徑識別
#[derive(Debug, Default)]
pub struct VisitedSet {
    paths: HashSet<PathBuf>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 首次加入時回傳 `true`
    pub fn insert(&mut self, path: &Path) -> bool {
        self.paths.insert(path.to_path_buf())
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlinedModule {
    pub name: String,
    pub module_path: PathBuf,
    pub template_path: PathBuf,
}

/// 一次內嵌的結果：序列化後的文件與模組輸出順序
#[derive(Debug, Clone)]
pub struct InlineReport {
    pub html: String,
    pub modules: Vec<InlinedModule>,
}

impl InlineReport {
    pub fn module_names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_name_is_file_stem() {
        let template = TemplateRef::from_path(PathBuf::from("/proj/src/html/abilities-block.html"));
        assert_eq!(template.name, "abilities-block");
    }

    #[test]
    fn test_visited_set_dedup() {
        let mut visited = VisitedSet::new();
        assert_eq!(visited.len(), 0);
        assert!(visited.insert(Path::new("/a.js")));
        assert!(!visited.insert(Path::new("/a.js")));
        assert_eq!(visited.len(), 1);
    }
}
