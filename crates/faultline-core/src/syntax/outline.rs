//! Indentation-based outline parser
//!
//! Builds a coarse `Construct` tree for block-structured sources from
//! indentation and leading keywords. It does not understand expressions;
//! it only needs to be precise enough for line-containment lookup.

use crate::errors::{FaultlineError, Result};
use crate::syntax::{Construct, ConstructKind, SyntaxProvider};

/// `SyntaxProvider` for indentation-structured sources
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineParser;

impl SyntaxProvider for OutlineParser {
    fn parse(&self, file: &str, lines: &[String]) -> Result<Construct> {
        let statements = logical_statements(lines).map_err(|reason| {
            FaultlineError::SyntaxUnavailable {
                file: file.to_string(),
                reason,
            }
        })?;

        let mut pos = 0;
        let children = parse_block(&statements, &mut pos, 0);

        Ok(Construct::new(ConstructKind::Module, 1, lines.len().max(1)).with_children(children))
    }
}

/// What a statement's leading keyword makes of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opener {
    Construct(ConstructKind),
    /// `except` / `catch`: a handler attached to the preceding `Try`
    Handler,
    /// `elif` / `else` / `finally`: more body for the preceding construct
    Continuation,
}

/// One statement, possibly spanning several physical lines
#[derive(Debug, Clone)]
struct Logical {
    line_start: usize,
    line_end: usize,
    indent: usize,
    opener: Opener,
}

fn classify_keyword(text: &str) -> Opener {
    let text = text.trim_start_matches('}').trim_start();
    let text = ["async ", "pub ", "export ", "static "]
        .iter()
        .fold(text, |t, prefix| t.strip_prefix(prefix).unwrap_or(t));
    let word: String = text
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();

    match word.as_str() {
        "def" | "fn" | "function" => Opener::Construct(ConstructKind::Function),
        "class" | "struct" | "impl" | "trait" | "interface" => {
            Opener::Construct(ConstructKind::Class)
        }
        "if" => Opener::Construct(ConstructKind::Branch),
        "for" | "while" | "loop" => Opener::Construct(ConstructKind::Loop),
        "try" => Opener::Construct(ConstructKind::Try),
        "raise" | "throw" => Opener::Construct(ConstructKind::Raise),
        "except" | "catch" => Opener::Handler,
        "elif" | "else" | "finally" => Opener::Continuation,
        _ => Opener::Construct(ConstructKind::Statement),
    }
}

/// Whether a trimmed line carries no statement of its own
fn is_filler(trimmed: &str) -> bool {
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.chars().all(|c| matches!(c, '}' | ')' | ']' | ';' | ','))
}

/// Bracket/string scanner state carried across physical lines
#[derive(Default)]
struct Scanner {
    depth: usize,
    quote: Option<char>,
}

impl Scanner {
    /// Feed one line; returns whether the statement continues on the next line
    fn feed(&mut self, line: &str) -> bool {
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            match (self.quote, c) {
                (Some(_), '\\') => {
                    chars.next();
                }
                (Some(q), c) if c == q => self.quote = None,
                (Some(_), _) => {}
                (None, '"' | '\'' | '`') => self.quote = Some(c),
                (None, '#') => break,
                (None, '/') if chars.peek() == Some(&'/') => break,
                (None, '(' | '[' | '{') => self.depth += 1,
                (None, ')' | ']' | '}') => self.depth = self.depth.saturating_sub(1),
                (None, _) => {}
            }
        }
        self.depth > 0 || line.trim_end().ends_with('\\')
    }
}

fn logical_statements(lines: &[String]) -> std::result::Result<Vec<Logical>, String> {
    let mut statements = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let line = &lines[index];
        let trimmed = line.trim();
        if is_filler(trimmed) {
            index += 1;
            continue;
        }

        let line_start = index + 1;
        let indent = line.chars().count() - line.trim_start().chars().count();
        let opener = classify_keyword(trimmed);

        // Brace blocks open a body; they do not continue the header itself
        let mut scanner = Scanner::default();
        let mut continues = scanner.feed(line) && !trimmed.ends_with('{');
        while continues {
            index += 1;
            let Some(next) = lines.get(index) else {
                return Err(format!("unterminated statement starting at line {line_start}"));
            };
            continues = scanner.feed(next) && !next.trim_end().ends_with('{');
        }

        statements.push(Logical {
            line_start,
            line_end: index + 1,
            indent,
            opener,
        });
        index += 1;
    }

    Ok(statements)
}

/// Parse statements at `indent` or deeper into sibling constructs
fn parse_block(statements: &[Logical], pos: &mut usize, indent: usize) -> Vec<Construct> {
    let mut siblings: Vec<Construct> = Vec::new();

    while let Some(statement) = statements.get(*pos) {
        if statement.indent < indent {
            break;
        }
        *pos += 1;

        let body = match statements.get(*pos) {
            Some(next) if next.indent > statement.indent => {
                parse_block(statements, pos, next.indent)
            }
            _ => Vec::new(),
        };
        let line_end = body
            .last()
            .map_or(statement.line_end, |last| last.line_end.max(statement.line_end));

        match (statement.opener, siblings.last().map(|owner| owner.kind)) {
            (Opener::Handler, Some(ConstructKind::Try)) => {
                let handler =
                    Construct::new(ConstructKind::Handler, statement.line_start, line_end)
                        .with_children(body);
                extend_last(&mut siblings, vec![handler], line_end);
            }
            (
                Opener::Continuation,
                Some(ConstructKind::Branch | ConstructKind::Loop | ConstructKind::Try),
            ) => extend_last(&mut siblings, body, line_end),
            (opener, _) => {
                let kind = match opener {
                    Opener::Construct(kind) => kind,
                    Opener::Handler => ConstructKind::Handler,
                    Opener::Continuation => ConstructKind::Statement,
                };
                siblings.push(
                    Construct::new(kind, statement.line_start, line_end).with_children(body),
                );
            }
        }
    }

    siblings
}

/// Fold a clause into the preceding sibling (`except` into `try`, `else` into `if`)
fn extend_last(siblings: &mut [Construct], children: Vec<Construct>, line_end: usize) {
    if let Some(owner) = siblings.last_mut() {
        owner.children.extend(children);
        owner.line_end = owner.line_end.max(line_end);
    }
}
