#![allow(clippy::unwrap_used, clippy::expect_used)]

/// Scenario 2: Group Report
///
/// A group renders its own header first, then each child in order under a
/// deeper prefix, each followed by a horizontal rule.
mod common;

use common::{handler, output, project_file, span};
use faultline_core::{FailureNode, Frame, InMemorySourceProvider};

fn rule(head: &str) -> String {
    format!("{}{}", head, "-".repeat(80 - head.len()))
}

#[test]
fn test_scenario_02_happy_two_children_in_order() {
    // GIVEN a group of two leaf failures
    let group = FailureNode::new("ExceptionGroup", "2 sub-exceptions")
        .with_child(FailureNode::new("ValueError", "first"))
        .with_child(FailureNode::new("TypeError", "second"));
    let mut handler = handler(InMemorySourceProvider::new(), false);

    // WHEN reporting the group
    handler.report(&group).unwrap();

    // THEN the group header, then each child followed by one rule
    let text = output(handler);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            " + ExceptionGroup: 2 sub-exceptions".to_string(),
            rule(" +--+"),
            "    | ValueError: first".to_string(),
            rule("    +"),
            "    | TypeError: second".to_string(),
            rule("    +"),
        ]
    );
}

#[test]
fn test_scenario_02_rules_reach_screen_column() {
    let group = FailureNode::new("ExceptionGroup", "one")
        .with_child(FailureNode::new("ValueError", "only"));
    let mut handler = handler(InMemorySourceProvider::new(), false);

    handler.report(&group).unwrap();

    for line in output(handler).lines().filter(|l| l.ends_with("--")) {
        assert_eq!(line.chars().count(), 80, "rule not padded: {:?}", line);
    }
}

#[test]
fn test_scenario_02_nested_group_prefixes() {
    // GIVEN a group nested inside a group
    let inner = FailureNode::new("ExceptionGroup", "inner")
        .with_child(FailureNode::new("KeyError", "k"));
    let outer = FailureNode::new("ExceptionGroup", "outer").with_child(inner);
    let mut handler = handler(InMemorySourceProvider::new(), false);

    // WHEN reporting
    handler.report(&outer).unwrap();

    // THEN the inner members carry both levels of prefix
    let text = output(handler);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], " + ExceptionGroup: outer");
    assert_eq!(lines[2], "    |  + ExceptionGroup: inner");
    assert_eq!(lines[3], rule("    |  +--+"));
    assert_eq!(lines[4], "    |     | KeyError: k");
    assert_eq!(lines[5], rule("    |     +"));
    assert_eq!(lines[6], rule("    +"));
}

#[test]
fn test_scenario_02_child_frames_carry_prefix() {
    // GIVEN a group whose child has a frame with source
    let source = "def work():\n    explode()\n";
    let sources = InMemorySourceProvider::new().with_file(project_file("worker.py"), source);
    let child = FailureNode::new("OSError", "gone").with_frame(Frame::new(
        "work",
        project_file("worker.py"),
        Some(span(2, 2, 4, 13)),
    ));
    let group = FailureNode::new("ExceptionGroup", "workers").with_child(child);
    let mut handler = handler(sources, false);

    // WHEN reporting
    handler.report(&group).unwrap();

    // THEN every line of the child's report starts with the child prefix
    let text = output(handler);
    let child_lines: Vec<&str> = text
        .lines()
        .skip(2)
        .take_while(|l| !l.ends_with("--"))
        .collect();
    assert_eq!(
        child_lines,
        vec![
            "    | OSError: gone",
            "    |   at work (worker:2)",
            "    |     1 def work():",
            "    |     2     explode()",
            "    |           ^^^^^^^^^",
            "    | ",
        ]
    );
}

#[test]
fn test_scenario_02_chain_label_inside_group_keeps_prefix() {
    // GIVEN a group whose child was caused by another failure
    let child = FailureNode::new("KeyError", "k").with_cause(FailureNode::new("ValueError", "v"));
    let group = FailureNode::new("ExceptionGroup", "one").with_child(child);
    let mut handler = handler(InMemorySourceProvider::new(), false);

    // WHEN reporting
    handler.report(&group).unwrap();

    // THEN the label and its blank separators stay inside the child's gutter
    let text = output(handler);
    let lines: Vec<&str> = text.lines().skip(2).collect();
    assert_eq!(
        lines,
        vec![
            "    | KeyError: k".to_string(),
            "    | ".to_string(),
            "    | [Caused by]".to_string(),
            "    | ".to_string(),
            "    | ValueError: v".to_string(),
            rule("    +"),
        ]
    );
}
