use crate::core::{document, scanner, script, template};
use crate::domain::model::{InlineReport, InlinedModule, TemplateRef, VisitedSet};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{InlineError, Result};
use kuchiki::NodeRef;
use std::path::Path;

/// 一次內嵌作業；已造訪集合與輸出文件都屬於這個實例
pub struct Inliner<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    visited: VisitedSet,
    output: NodeRef,
    body: NodeRef,
    modules: Vec<InlinedModule>,
}

impl<S: Storage, C: ConfigProvider> Inliner<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let output = document::parse("");
        let body = document::body(&output)?;
        Ok(Self {
            storage,
            config,
            visited: VisitedSet::new(),
            output,
            body,
            modules: Vec::new(),
        })
    }

    pub fn inline(mut self, root_path: &Path) -> Result<InlineReport> {
        let root_path = self.storage.canonicalize(root_path)?;
        tracing::info!("📄 Inlining {}", root_path.display());

        let source = document::parse(&self.storage.read_file(&root_path)?);

        // 依文件順序處理每個 module script
        let js_dir = self.config.js_dir();
        for tag in document::select_all(&source, "script[type=\"module\"]")? {
            let filename = tag.attributes.borrow().get("filename").map(str::to_string);
            tag.as_node().detach();

            match filename {
                Some(filename) => self.process_module(&js_dir.join(filename))?,
                None => tracing::warn!("⚠️ Skipping module script without a filename attribute"),
            }
        }

        let head = document::head(&self.output)?;
        for child in document::take_children(&document::head(&source)?) {
            if !document::is_blank(&child) {
                head.append(child);
            }
        }

        let helper_path = self.config.helper_path();
        let helper_source = self.storage.read_file(&helper_path)?;
        head.append(script::build_bootstrap(
            &helper_source,
            self.config.export_marker(),
        )?);

        let primary_tag = self.config.primary_element();
        let primary = source
            .select_first(primary_tag)
            .map_err(|()| InlineError::MissingPrimaryElement {
                tag: primary_tag.to_string(),
            })?;
        self.body.append(primary.as_node().clone());

        let html = document::serialize(&self.output)?;
        tracing::info!("✅ Inlined {} module(s)", self.modules.len());

        Ok(InlineReport {
            html,
            modules: self.modules,
        })
    }

    /// 深度優先：先處理 import，再輸出本模組的 template/script，
    /// 讓相依模組在 body 中排在前面
    pub fn process_module(&mut self, path: &Path) -> Result<()> {
        let module_path = self.storage.canonicalize(path)?;
        if !self.visited.insert(&module_path) {
            tracing::debug!("Already inlined {}, skipping", module_path.display());
            return Ok(());
        }
        tracing::debug!("Processing module {}", module_path.display());

        let content = self.storage.read_file(&module_path)?;
        let module = scanner::scan_module(module_path, content)?;

        let root = self.config.project_root().to_path_buf();
        for import in &module.imports {
            self.process_module(&scanner::resolve_from_root(&root, import))?;
        }

        let template_ref = TemplateRef::from_path(scanner::resolve_from_root(&root, &module.template));
        tracing::debug!(
            "Template for {}: {}",
            module.path.display(),
            template_ref.path.display()
        );
        let template_html = self.storage.read_file(&template_ref.path)?;

        let template_tag = template::build_template(&template_ref.name, &template_html)?;
        let script_tag = script::build_script(&template_ref.name, &module, &self.config)?;
        self.body.append(template_tag);
        self.body.append(script_tag);

        self.modules.push(InlinedModule {
            name: template_ref.name,
            module_path: module.path,
            template_path: template_ref.path,
        });
        Ok(())
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }
}
