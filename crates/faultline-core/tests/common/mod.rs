use std::path::PathBuf;

use faultline_core::{
    ClassifierConfig, InMemorySourceProvider, NoSyntax, ReportHandler, Span, SyntaxProvider,
};

/// Project root used by the fixture classifier
pub const PROJECT_ROOT: &str = "/srv/project";

/// Site-packages style root holding third-party and stdlib modules
#[allow(dead_code)]
pub const LIB_ROOT: &str = "/usr/lib/python3";

/// Build a span, panicking on malformed input
#[allow(dead_code)]
pub fn span(line_start: usize, line_end: usize, col_start: usize, col_end: usize) -> Span {
    Span::new(line_start, line_end, col_start, col_end).expect("fixture span must be well formed")
}

/// Absolute file identity under the project root
#[allow(dead_code)]
pub fn project_file(name: &str) -> String {
    format!("{}/{}", PROJECT_ROOT, name)
}

/// Classifier with the project root searched first, then the library root
#[allow(dead_code)]
pub fn classifier() -> ClassifierConfig {
    ClassifierConfig::new(
        vec![PathBuf::from(PROJECT_ROOT), PathBuf::from(LIB_ROOT)],
        PROJECT_ROOT,
    )
    .with_stdlib_modules(["json", "asyncio"])
}

/// Handler rendering into memory with re-raise detection disabled
#[allow(dead_code)]
pub fn handler(sources: InMemorySourceProvider, color: bool) -> ReportHandler<Vec<u8>> {
    handler_with_syntax(sources, NoSyntax, color)
}

/// Handler rendering into memory with the given syntax provider
#[allow(dead_code)]
pub fn handler_with_syntax(
    sources: InMemorySourceProvider,
    syntax: impl SyntaxProvider + 'static,
    color: bool,
) -> ReportHandler<Vec<u8>> {
    ReportHandler::new(Vec::new(), color)
        .with_classifier(classifier())
        .with_sources(sources)
        .with_syntax(syntax)
}

/// Everything written to a handler's sink
#[allow(dead_code)]
pub fn output(handler: ReportHandler<Vec<u8>>) -> String {
    String::from_utf8(handler.into_inner()).expect("report must be valid UTF-8")
}
