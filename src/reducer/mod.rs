//! Structural code reducer
//!
//! Turns a source file into its skeleton in a fixed order:
//!
//! 1. `comments`: strip `/* */` and `//` comments and the blank lines they leave
//! 2. `elider`: optionally collapse method bodies to empty blocks
//!
//! Both stages are best-effort text transforms. They never fail; malformed
//! input produces a partially reduced result instead of an error.

pub mod comments;
pub mod elider;

pub use comments::strip_comments;
pub use elider::{elide_bodies, BodyElider, ElisionResult};

/// Run the reducer pipeline over one file's text.
pub fn reduce(source: &str, elide: bool) -> ElisionResult {
    let stripped = strip_comments(source);
    if elide {
        BodyElider::new().elide(&stripped)
    } else {
        ElisionResult::unchanged(stripped)
    }
}
