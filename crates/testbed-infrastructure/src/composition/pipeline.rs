//! Ordered stage runner

use super::stage::{CompositionContext, CompositionStage};
use super::{ApplicationStage, CacheStage, LoggingStage, MappingStage, PersistenceStage, PluginStage};
use crate::di::Container;
use std::time::Instant;
use testbed_domain::error::{Error, Result};
use tracing::{debug, info};

/// Stages that ran and stages that were skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositionReport {
    /// Stages run, in order
    pub ran: Vec<&'static str>,
    /// Stages skipped on request
    pub skipped: Vec<&'static str>,
}

/// Fixed ordered list of composition stages
pub struct CompositionPipeline {
    stages: Vec<Box<dyn CompositionStage>>,
    skipped: Vec<String>,
}

impl Default for CompositionPipeline {
    fn default() -> Self {
        Self::new(vec![
            Box::new(LoggingStage),
            Box::new(CacheStage),
            Box::new(MappingStage),
            Box::new(PluginStage),
            Box::new(PersistenceStage),
            Box::new(ApplicationStage),
        ])
    }
}

impl CompositionPipeline {
    /// Pipeline over `stages`, run in the given order
    pub fn new(stages: Vec<Box<dyn CompositionStage>>) -> Self {
        Self {
            stages,
            skipped: Vec::new(),
        }
    }

    /// Stage names in run order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Skip the stage called `name`
    pub fn skip(mut self, name: &str) -> Self {
        self.skipped.push(name.to_string());
        self
    }

    /// Append a stage after the existing ones
    pub fn with_stage(mut self, stage: Box<dyn CompositionStage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Run every stage not skipped against `container`
    pub fn run(&self, container: &Container, context: &CompositionContext<'_>) -> Result<CompositionReport> {
        let started = Instant::now();
        let mut report = CompositionReport::default();

        for stage in &self.stages {
            let name = stage.name();
            if self.skipped.iter().any(|s| s == name) {
                debug!(stage = name, "Skipped composition stage");
                report.skipped.push(name);
                continue;
            }

            if let Some(missing) = stage
                .requires()
                .into_iter()
                .find(|key| !container.is_registered_key(key))
            {
                return Err(Error::CompositionOrder {
                    stage: name.to_string(),
                    capability: missing.to_string(),
                });
            }

            stage
                .compose(container, context)
                .map_err(|e| Error::stage(name, e))?;
            debug!(stage = name, "Ran composition stage");
            report.ran.push(name);
        }

        info!(
            container = %container.id(),
            stages = report.ran.len(),
            elapsed_us = started.elapsed().as_micros(),
            "Composed container"
        );
        Ok(report)
    }
}
