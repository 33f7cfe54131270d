//! Shared error types for the compilation pipeline.
//!
//! No stage aborts a compilation: lexical problems ride along in the token
//! stream as `Error` tokens, parse failures are reported per statement, and
//! semantic diagnostics are advisory. The caret renderer formats messages
//! pointing at the offending byte, for drivers that want to show them.

use std::fmt;

use snafu::Snafu;

/// Per-statement parse failures. Each variant records the byte offset the
/// diagnostic points at.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ParseError {
  #[snafu(display("expected semicolon after assignment to \"{name}\", but got \"{got}\""))]
  MissingSemicolon {
    name: String,
    got: String,
    loc: usize,
  },

  #[snafu(display("expected a literal, identifier, or keyword, but got \"{got}\""))]
  ExpectedFactor { got: String, loc: usize },
}

impl ParseError {
  /// Byte offset in the source this diagnostic is anchored at.
  pub fn loc(&self) -> usize {
    match self {
      ParseError::MissingSemicolon { loc, .. } | ParseError::ExpectedFactor { loc, .. } => *loc,
    }
  }
}

/// Advisory diagnostics from the semantic pass.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum SemanticError {
  #[snafu(display("undeclared identifier \"{name}\""))]
  UndeclaredIdentifier { name: String },
}

/// Render a message anchored at a specific byte offset in the source,
/// pointing at the offending character with a caret.
pub fn render_at(source: &str, loc: usize, message: impl fmt::Display) -> String {
  let quoted = format!("'{source}'");
  let safe_loc = loc.min(source.len());
  let char_offset = source[..safe_loc].chars().count() + 1; // account for opening quote
  format!("{quoted}\n{}^ {message}", " ".repeat(char_offset))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn caret_points_at_the_offending_character() {
    let rendered = render_at("x = ;", 4, "boom");
    assert_eq!(rendered, "'x = ;'\n     ^ boom");
  }

  #[test]
  fn caret_offset_is_clamped_to_the_source() {
    let rendered = render_at("x", 10, "at end");
    assert_eq!(rendered, "'x'\n  ^ at end");
  }
}
