pub mod document;
pub mod inliner;
pub mod scanner;
pub mod script;
pub mod template;

pub use crate::domain::model::{InlineReport, InlinedModule, ModuleSource, TemplateRef, VisitedSet};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
