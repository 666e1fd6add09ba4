//! Report Demonstration
//!
//! This example renders a chained failure with in-memory sources.
#![allow(clippy::unwrap_used, clippy::expect_used)]
//!
//! Key concepts illustrated:
//! 1. Building a failure chain by hand
//! 2. Serving sources from memory
//! 3. Re-raise detection with the outline parser
//! 4. Group reports

use std::io::IsTerminal;

use faultline_core::{
    ClassifierConfig, FailureNode, Frame, InMemorySourceProvider, OutlineParser, ReportHandler,
    Span,
};

const SERVICE: &str = "\
import json

def load(path):
    with open(path) as f:
        return json.load(f)

def main():
    try:
        load('settings.json')
    except OSError:
        raise
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sources = InMemorySourceProvider::new().with_file("/demo/service.py", SERVICE);
    let classifier = ClassifierConfig::new(vec!["/demo".into()], "/demo");

    let stdout = std::io::stdout();
    let color = stdout.is_terminal();
    let mut handler = ReportHandler::new(stdout.lock(), color)
        .with_classifier(classifier)
        .with_sources(sources)
        .with_syntax(OutlineParser);

    // ===== Part 1: Re-raised failure with its context =====
    let failure = FailureNode::new("FileNotFoundError", "settings.json")
        .with_frame(Frame::new(
            "main",
            "/demo/service.py",
            Some(Span::new(11, 11, 8, 13)?),
        ))
        .with_frame(Frame::new(
            "load",
            "/demo/service.py",
            Some(Span::new(4, 4, 9, 19)?),
        ))
        .with_context(FailureNode::new("UnicodeDecodeError", "invalid start byte"));

    let report_id = handler.report(&failure)?;
    eprintln!("rendered report {}", report_id);

    // ===== Part 2: Group of concurrent failures =====
    let group = FailureNode::new("ExceptionGroup", "2 workers failed")
        .with_child(FailureNode::new("TimeoutError", "worker 1"))
        .with_child(FailureNode::new("ConnectionResetError", "worker 2"));

    handler.report(&group)?;

    Ok(())
}
