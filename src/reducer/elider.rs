//! Method body elision
//!
//! Two phases: a signature regex finds where a method body opens, then a brace
//! counter finds where it closes. The matched region is replaced by the
//! signature and an empty block. Scanning resumes after the closing brace, so
//! methods nested inside a body (anonymous classes, local classes) go away with
//! it.
//!
//! Braces inside string and char literals are counted like any other brace.
//! Comments must already be stripped.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// A boundary (line start, `;`, `{` or `}`), then the signature:
    /// annotations, modifiers, type parameters, optional return type (absent
    /// for constructors), name, parameter list without nested parentheses,
    /// optional throws clause. Ends at the opening brace.
    static ref SIGNATURE: Regex = Regex::new(concat!(
        r"(?m)(?:^|[;{}])",
        r"(?P<sig>[ \t]*",
        r"(?:@[\w.$]+(?:\([^()]*\))?\s+)*",
        r"(?:(?:public|protected|private|static|final|abstract|synchronized|native|default|strictfp)\s+)*",
        r"(?:<[^{};()]*>\s*)?",
        r"(?:(?P<ret>[\w.$]+(?:\s*<[^{};()]*>)?(?:\s*\[\s*\])*)\s+)?",
        r"(?P<name>[\w$]+)",
        r"\s*\([^()]*\)",
        r"\s*(?:throws\s+[\w.$]+(?:\s*,\s*[\w.$]+)*\s*)?",
        r")\{",
    ))
    .unwrap();
}

/// Tokens that look like a return type or a name to the signature regex but
/// introduce a statement (`else if (x) {`, `} catch (E e) {`).
const STATEMENT_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "catch", "try", "synchronized",
    "return", "new", "throw",
];

/// Result of eliding one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElisionResult {
    /// Text with bodies collapsed
    pub content: String,
    /// Number of bodies collapsed
    pub elided: usize,
    /// A signature was found whose body never closed; text from that
    /// signature on was copied verbatim
    pub unterminated: bool,
}

impl ElisionResult {
    /// Wrap text that went through no elision
    pub fn unchanged(content: String) -> Self {
        Self {
            content,
            elided: 0,
            unterminated: false,
        }
    }
}

/// Collapses method and constructor bodies to empty blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyElider;

impl BodyElider {
    pub fn new() -> Self {
        Self
    }

    /// Elide every top-level method body in `source`.
    pub fn elide(&self, source: &str) -> ElisionResult {
        let mut out = String::with_capacity(source.len());
        let mut cursor = 0;
        let mut elided = 0;
        let mut unterminated = false;

        while cursor < source.len() {
            let Some(caps) = SIGNATURE.captures_at(source, search_start(source, cursor)) else {
                break;
            };
            let (Some(whole), Some(sig)) = (caps.get(0), caps.name("sig")) else {
                break;
            };
            if is_statement(&caps) {
                out.push_str(&source[cursor..whole.end()]);
                cursor = whole.end();
                continue;
            }

            let Some(close) = find_body_end(source, whole.end()) else {
                tracing::debug!(
                    offset = sig.start(),
                    "method body never closes; keeping remainder verbatim"
                );
                unterminated = true;
                break;
            };

            out.push_str(&source[cursor..sig.start()]);
            out.push_str(sig.as_str().trim_end());
            out.push_str("{\n}\n");
            elided += 1;

            cursor = skip_line_break(source, close + 1);
        }

        out.push_str(&source[cursor..]);
        ElisionResult {
            content: out,
            elided,
            unterminated,
        }
    }
}

/// Collapse method bodies in `source` to empty blocks.
pub fn elide_bodies(source: &str) -> String {
    BodyElider::new().elide(source).content
}

/// Where to resume matching. A boundary character just before `cursor` was
/// already copied to the output, but the regex still has to see it for a
/// signature starting at `cursor` mid-line.
fn search_start(source: &str, cursor: usize) -> usize {
    match cursor.checked_sub(1).map(|i| source.as_bytes()[i]) {
        Some(b';' | b'{' | b'}') => cursor - 1,
        _ => cursor,
    }
}

fn is_statement(caps: &Captures<'_>) -> bool {
    let ret = caps.name("ret").map_or("", |m| m.as_str());
    let name = caps.name("name").map_or("", |m| m.as_str());
    STATEMENT_KEYWORDS.contains(&ret) || STATEMENT_KEYWORDS.contains(&name)
}

/// Byte offset of the `}` closing a body whose `{` ends just before `start`.
fn find_body_end(source: &str, start: usize) -> Option<usize> {
    let mut depth: u32 = 1;
    for (offset, byte) in source.as_bytes()[start..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// The synthetic block ends its own line, so drop the break after the
/// original closing brace.
fn skip_line_break(source: &str, at: usize) -> usize {
    let rest = &source[at..];
    if rest.starts_with("\r\n") {
        at + 2
    } else if rest.starts_with('\n') {
        at + 1
    } else {
        at
    }
}
