pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, InlineSettings};
pub use core::inliner::Inliner;
pub use domain::model::InlineReport;
pub use utils::error::{InlineError, Result};

use std::path::Path;

/// 以本機檔案系統內嵌 `root_path`，回傳完整的 HTML 文件
pub fn inline_file(root_path: &Path, settings: InlineSettings) -> Result<InlineReport> {
    Inliner::new(LocalStorage::new(), settings)?.inline(root_path)
}
