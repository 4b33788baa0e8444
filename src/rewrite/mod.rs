//! Text rewriting
//!
//! This module implements the brand migration itself: an ordered table of
//! substitution rules applied over whole-file text, followed by exception
//! rules that restore protected hyperlink targets.

pub mod rewriter;
pub mod rules;

// Re-export commonly used items
pub use rewriter::{RewriteText, Rewriter};
pub use rules::Ruleset;
