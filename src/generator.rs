//! One generation run: validate the scope, parse attributes, seed the
//! context, run the pipeline and render every target.
use log::{debug, info};
use std::path::PathBuf;

use crate::attribute::{
    capitalize, parse_attributes, pluralize, Attribute, InvalidAttributePolicy,
};
use crate::composer::{Composer, RenderedFile};
use crate::context::{keys, ContextValue, GenerationContext, Writes};
use crate::error::{Error, Result};
use crate::stage::{Target, TargetKind, TemplateStage, PIPELINE, TARGETS};

/// Input of one run.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    /// Resource identifier followed by `name[:type]` declarations.
    pub args: Vec<String>,
    /// Directory the rendered files are placed under.
    pub root_path: Option<PathBuf>,
    /// Values merged into the context ahead of the derived ones.
    pub defaults: Writes,
}

impl Scope {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_root_path<P: Into<PathBuf>>(mut self, root_path: P) -> Self {
        self.root_path = Some(root_path.into());
        self
    }

    /// Pre-seeds `key`; the value wins over anything the run would compute.
    pub fn with_value<K: Into<String>, V: Into<ContextValue>>(mut self, key: K, value: V) -> Self {
        self.defaults.push((key.into(), value.into()));
        self
    }
}

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct Generation {
    pub attributes: Vec<Attribute>,
    pub invalid_attributes: Vec<String>,
    /// Composed controller action bodies.
    pub action_fns: Vec<String>,
    pub files: Vec<RenderedFile>,
    pub context: GenerationContext,
}

impl Generation {
    pub fn views(&self) -> impl Iterator<Item = &RenderedFile> {
        self.files
            .iter()
            .filter(|file| file.kind == TargetKind::View)
    }

    pub fn file(&self, name: &str) -> Option<&RenderedFile> {
        self.files.iter().find(|file| file.name == name)
    }
}

pub struct Generator<'a> {
    composer: Composer<'a>,
    policy: InvalidAttributePolicy,
    stages: &'a [TemplateStage],
    targets: &'a [Target],
}

impl<'a> Generator<'a> {
    pub fn new(composer: Composer<'a>) -> Self {
        Self {
            composer,
            policy: InvalidAttributePolicy::default(),
            stages: PIPELINE,
            targets: TARGETS,
        }
    }

    pub fn with_policy(mut self, policy: InvalidAttributePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the default pipeline and targets.
    pub fn with_blueprint(mut self, stages: &'a [TemplateStage], targets: &'a [Target]) -> Self {
        self.stages = stages;
        self.targets = targets;
        self
    }

    /// Executes the whole run.
    ///
    /// # Errors
    /// * `Error::MissingResourceName` if no non-empty identifier was given
    /// * `Error::MissingScopeVariable` if `root_path` is absent
    /// * `Error::InvalidAttributes` under [`InvalidAttributePolicy::Deny`]
    /// * any store, render or context error from a stage
    ///
    /// The first two are reported before any template is loaded.
    pub fn generate(&self, scope: Scope) -> Result<Generation> {
        let Scope {
            args,
            root_path,
            defaults,
        } = scope;

        let identifier = match args.first() {
            Some(identifier) if !identifier.is_empty() => identifier.clone(),
            _ => return Err(Error::MissingResourceName),
        };
        let root_path = root_path.ok_or_else(|| Error::MissingScopeVariable {
            name: "root_path".to_string(),
        })?;

        let parsed = parse_attributes(&args[1..]);
        self.policy.enforce(&parsed.invalid)?;
        debug!(
            "Parsed {} attribute(s) for '{}'",
            parsed.attributes.len(),
            identifier
        );

        let seed: Writes = vec![
            (keys::ID.to_string(), capitalize(&identifier).into()),
            (
                keys::MODEL_CONTROLLER_NAME.to_string(),
                identifier.clone().into(),
            ),
            (
                keys::MODEL_CONTROLLER_NAME_PLURALIZED.to_string(),
                pluralize(&identifier).into(),
            ),
            (
                keys::MODEL_ATTRIBUTES.to_string(),
                parsed.attributes.clone().into(),
            ),
            (
                keys::MODEL_ATTRIBUTE_NAMES.to_string(),
                parsed.names().into(),
            ),
        ];
        let context = GenerationContext::new()
            .merge_defaults(defaults)
            .merge_defaults(seed);

        let context = self.composer.compose(self.stages, context)?;

        let composed = context.require_text(keys::ACTION_FNS, keys::COMPILED_ACTIONS)?;
        let actions = ContextValue::List(vec![composed.to_string()]);
        let context = context.merge_defaults(vec![(keys::ACTION_FNS.to_string(), actions)]);
        let action_fns = context
            .require_list(keys::ACTION_FNS, keys::ACTION_FNS)?
            .to_vec();

        let files = self
            .targets
            .iter()
            .map(|target| self.composer.render_target(target, &context, &root_path))
            .collect::<Result<Vec<_>>>()?;

        info!("Generated {} file(s) for '{}'", files.len(), identifier);

        Ok(Generation {
            attributes: parsed.attributes,
            invalid_attributes: parsed.invalid,
            action_fns,
            files,
            context,
        })
    }
}
