//! Shared state handed to every command invocation.

use crate::registry::CommandRegistry;
use crate::reporter::Reporter;
use crate::source::{MessageSource, ReplySink};
use modstat_config::Config;
use modstat_graphs::{ChartStyle, HistogramRenderer};
use std::sync::Arc;

/// Configuration, registry and platform collaborators.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Clone)]
pub struct CommandContext {
    /// Validated configuration
    pub config: Arc<Config>,
    /// Commands reachable through the prefix
    pub registry: CommandRegistry,
    /// Channel history and catalog
    pub source: Arc<dyn MessageSource>,
    /// Replies and uploads
    pub sink: Arc<dyn ReplySink>,
    /// Histogram image writer
    pub renderer: Arc<dyn HistogramRenderer>,
}

impl CommandContext {
    /// Creates a context with the default command set.
    pub fn new(
        config: Arc<Config>,
        source: Arc<dyn MessageSource>,
        sink: Arc<dyn ReplySink>,
        renderer: Arc<dyn HistogramRenderer>,
    ) -> Self {
        Self {
            config,
            registry: CommandRegistry::with_default_commands(),
            source,
            sink,
            renderer,
        }
    }

    /// Image size and colors from the `graphs` section.
    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle::from(&self.config.graphs)
    }

    /// Reporter writing into the configured output directory.
    pub fn reporter(&self) -> Reporter<'_> {
        Reporter::new(
            self.sink.as_ref(),
            self.renderer.as_ref(),
            &self.config.graphs.output_dir,
        )
    }
}

impl std::fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandContext")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
