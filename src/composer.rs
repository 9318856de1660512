//! Stage execution: load, render, rewrite, store.
use log::debug;
use std::path::{Path, PathBuf};

use crate::context::{ContextValue, GenerationContext, Writes};
use crate::error::Result;
use crate::renderer::TemplateRenderer;
use crate::stage::{Target, TargetKind, TemplateStage};
use crate::store::TemplateStore;

/// A rendered file ready for the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub name: &'static str,
    pub kind: TargetKind,
    /// Absolute destination, or relative to the caller's working directory
    /// when the destination root is relative.
    pub destination: PathBuf,
    pub content: String,
}

/// Runs template stages against a context.
pub struct Composer<'a> {
    store: &'a dyn TemplateStore,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Composer<'a> {
    pub fn new(store: &'a dyn TemplateStore, renderer: &'a dyn TemplateRenderer) -> Self {
        Self { store, renderer }
    }

    /// Renders one stage and returns the text it produced.
    ///
    /// Needed keys are resolved before the template is loaded, so a broken
    /// stage ordering never touches the store.
    pub fn render_stage(
        &self,
        stage: &TemplateStage,
        context: &GenerationContext,
    ) -> Result<String> {
        let values = context.subset(stage.name, stage.needed_keys)?;
        let body = self.store.load(stage.source)?;
        let rendered = self.renderer.render(stage.source, &body, &values)?;

        Ok(match &stage.rewrite {
            Some(rewrite) => rewrite.apply(&rendered),
            None => rendered,
        })
    }

    /// Runs one stage and returns its context write.
    pub fn run_stage(&self, stage: &TemplateStage, context: &GenerationContext) -> Result<Writes> {
        debug!("Running stage '{}'", stage.name);
        let rendered = self.render_stage(stage, context)?;
        let key = stage.output_key.to_string();
        Ok(vec![(key, ContextValue::Text(rendered))])
    }

    /// Runs `stages` in order, folding each write into the next snapshot.
    pub fn compose(
        &self,
        stages: &[TemplateStage],
        context: GenerationContext,
    ) -> Result<GenerationContext> {
        stages.iter().try_fold(context, |context, stage| {
            let writes = self.run_stage(stage, &context)?;
            Ok(context.merge_defaults(writes))
        })
    }

    /// Renders a target's content and destination path.
    pub fn render_target(
        &self,
        target: &Target,
        context: &GenerationContext,
        root: &Path,
    ) -> Result<RenderedFile> {
        debug!("Rendering target '{}'", target.name());
        let content = self.render_stage(&target.stage, context)?;

        let values = context.subset(target.name(), target.stage.needed_keys)?;
        let destination = self
            .renderer
            .render(target.name(), target.destination, &values)?;
        let destination = root.join(destination);
        debug!(
            "Target '{}' resolves to {}",
            target.name(),
            destination.display()
        );

        Ok(RenderedFile {
            name: target.name(),
            kind: target.kind,
            destination,
            content,
        })
    }
}
