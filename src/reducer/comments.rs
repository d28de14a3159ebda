//! Comment stripping
//!
//! Removes `/* ... */` block comments and `//` line comments, then deletes the
//! whitespace-only lines left behind. Delimiters inside string literals are not
//! protected: `"http://x"` loses everything from `//` on. Malformed input such as
//! an unterminated `/*` is left as is.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BLOCK_COMMENT: Regex = Regex::new(r"(?s)/\*.*?\*/").unwrap();
    static ref LINE_COMMENT: Regex = Regex::new(r"(?m)//.*$").unwrap();
    static ref BLANK_LINE: Regex = Regex::new(r"(?m)^\s*[\r\n]").unwrap();
}

/// Strip block and line comments, then drop blank lines.
pub fn strip_comments(source: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(source, "");
    let without_lines = LINE_COMMENT.replace_all(&without_blocks, "");
    BLANK_LINE.replace_all(&without_lines, "").into_owned()
}
