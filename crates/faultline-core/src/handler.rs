//! Report handler
//!
//! `ReportHandler` owns an output sink plus everything needed to render
//! reports into it. Each `report` call renders one failure tree from start
//! to finish; the handler keeps no state between calls besides its sink.
//!
//! ## Logging Ownership
//!
//! The handler owns lifecycle logging for a report:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` when the sink fails
//!
//! Rendering stages below it only emit `log_degraded!` for recovered
//! collaborator failures.

use std::io::{IsTerminal, Write};
use std::time::Instant;

use faultline_core_types::ReportId;

use crate::classify::ClassifierConfig;
use crate::errors::Result;
use crate::model::FailureNode;
use crate::options::RenderOptions;
use crate::palette::{no_color_requested, resolve_color, ColorMode, EscapePalette};
use crate::render::{render_failure, RenderContext};
use crate::source::{FsSourceProvider, SourceProvider};
use crate::syntax::{OutlineParser, SyntaxProvider};
use crate::traversal::linearize;
use crate::{log_op_end, log_op_error, log_op_start};

/// Caller-facing report configuration
#[derive(Debug, Clone, Default)]
pub struct ReportSettings {
    pub color: ColorMode,
    pub options: RenderOptions,
    pub classifier: ClassifierConfig,
}

impl ReportSettings {
    /// Decide whether escapes are emitted for a sink
    ///
    /// Reads `NO_COLOR` from the environment when the mode is `Auto`.
    pub fn use_color(&self, sink_is_terminal: bool) -> bool {
        resolve_color(self.color, sink_is_terminal, no_color_requested())
    }
}

/// Renders failure reports into a sink
pub struct ReportHandler<W: Write> {
    sink: W,
    palette: EscapePalette,
    options: RenderOptions,
    classifier: ClassifierConfig,
    sources: Box<dyn SourceProvider>,
    syntax: Box<dyn SyntaxProvider>,
}

impl<W: Write> ReportHandler<W> {
    /// Handler reading sources from disk and detecting re-raises with the
    /// outline parser
    pub fn new(sink: W, color: bool) -> Self {
        Self {
            sink,
            palette: EscapePalette::new(color),
            options: RenderOptions::default(),
            classifier: ClassifierConfig::default(),
            sources: Box::new(FsSourceProvider::new()),
            syntax: Box::new(OutlineParser),
        }
    }

    /// Handler configured from settings; color is resolved against the sink
    pub fn from_settings(sink: W, settings: &ReportSettings, sink_is_terminal: bool) -> Self {
        Self::new(sink, settings.use_color(sink_is_terminal))
            .with_options(settings.options.clone())
            .with_classifier(settings.classifier.clone())
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_classifier(mut self, classifier: ClassifierConfig) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_sources(mut self, sources: impl SourceProvider + 'static) -> Self {
        self.sources = Box::new(sources);
        self
    }

    pub fn with_syntax(mut self, syntax: impl SyntaxProvider + 'static) -> Self {
        self.syntax = Box::new(syntax);
        self
    }

    /// Render one failure tree and flush the sink
    ///
    /// Returns the id the report's log events are tagged with.
    ///
    /// # Errors
    /// * `Io` - the sink rejected a write or flush; the report may be partial
    pub fn report(&mut self, node: &FailureNode) -> Result<ReportId> {
        let report_id = ReportId::new();
        let chain_len = linearize(node, self.options.max_chain_depth).len();
        log_op_start!(
            "render_report",
            report_id = report_id.as_str(),
            chain_len = chain_len,
        );
        let start = Instant::now();

        let ctx = RenderContext {
            palette: self.palette,
            options: &self.options,
            classifier: &self.classifier,
            sources: self.sources.as_ref(),
            syntax: self.syntax.as_ref(),
        };

        render_failure(&mut self.sink, node, "", &ctx)
            .and_then(|()| self.sink.flush().map_err(Into::into))
            .map_err(|e| {
                log_op_error!(
                    "render_report",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    report_id = report_id.as_str()
                );
                e
            })?;

        log_op_end!(
            "render_report",
            duration_ms = start.elapsed().as_millis() as u64,
            report_id = report_id.as_str()
        );

        Ok(report_id)
    }

    /// Give back the sink
    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Render a failure to stderr with the given settings
///
/// # Errors
/// * `Io` - stderr rejected the write
pub fn dump(node: &FailureNode, settings: &ReportSettings) -> Result<ReportId> {
    let stderr = std::io::stderr();
    let is_terminal = stderr.is_terminal();
    ReportHandler::from_settings(stderr.lock(), settings, is_terminal).report(node)
}
