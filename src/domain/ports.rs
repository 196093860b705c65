use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// 檔案存取介面，讓內嵌流程可以在記憶體中測試
pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<String>;
    fn write_file(&self, path: &Path, data: &str) -> Result<()>;
    /// 必須是冪等的：對結果再次正規化得到相同路徑
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
}

pub trait ConfigProvider {
    fn project_root(&self) -> &Path;
    fn js_dir(&self) -> PathBuf;
    fn helper_path(&self) -> PathBuf;
    fn primary_element(&self) -> &str;
    fn element_class_template(&self) -> &str;
    fn extraction_start(&self) -> &str;
    fn extraction_end(&self) -> &str;
    fn export_marker(&self) -> &str;
}
