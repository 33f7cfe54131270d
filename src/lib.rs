//! Crate root: wires together the compilation pipeline.
//!
//! The stages are intentionally small and composable so they can be evolved
//! independently:
//! - `tokenizer` performs lexical analysis and produces a flat token stream.
//! - `parser` owns all syntactic knowledge and yields one result per statement.
//! - `analyzer` checks identifier use against a symbol table.
//! - `ir` lowers statement trees into stack-machine instructions.
//! - `codegen` renders the instruction sequence as the final program text.
//! - `error` centralises the error types shared by the other modules.
//!
//! Every stage is total over its input: lexical garbage travels inline as
//! error tokens, parse failures are per-statement values, and semantic
//! diagnostics are advisory. Presentation of any of it is the caller's job.

pub mod analyzer;
pub mod codegen;
pub mod error;
pub mod ir;
pub mod parser;
pub mod tokenizer;
pub mod ty;

pub use error::{ParseError, SemanticError};

use analyzer::SemanticAnalyzer;
use ir::Instr;
use parser::AstNode;
use tokenizer::Token;

/// Everything the pipeline produced for one source text.
#[derive(Debug)]
pub struct Compilation {
  pub tokens: Vec<Token>,
  pub statements: Vec<Result<AstNode, ParseError>>,
  pub diagnostics: Vec<SemanticError>,
  pub instructions: Vec<Instr>,
  pub machine_code: String,
}

impl Compilation {
  /// Statements that parsed successfully, in program order.
  pub fn parsed_statements(&self) -> impl Iterator<Item = &AstNode> {
    self.statements.iter().filter_map(|stmt| stmt.as_ref().ok())
  }

  pub fn has_parse_errors(&self) -> bool {
    self.statements.iter().any(Result::is_err)
  }
}

/// Run every stage over one source text. Nothing aborts early: analysis and
/// generation run over whichever statements parsed, and the result carries
/// all errors alongside the artifacts.
pub fn compile(source: &str) -> Compilation {
  let tokens = tokenizer::tokenize(source);
  let statements = parser::parse(&tokens, source);

  let parsed: Vec<AstNode> = statements
    .iter()
    .filter_map(|stmt| stmt.as_ref().ok().cloned())
    .collect();

  let mut analyzer = SemanticAnalyzer::new();
  let diagnostics = analyzer.analyze(&parsed);

  let instructions = ir::generate(&parsed);
  let machine_code = codegen::emit(&instructions);

  Compilation {
    tokens,
    statements,
    diagnostics,
    instructions,
    machine_code,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tokenizer::TokenKind;

  #[test]
  fn three_statement_program_compiles_end_to_end() {
    let result = compile("x = 10; y = x + 5; z = y * 2;");
    assert!(!result.has_parse_errors());
    assert!(result.diagnostics.is_empty());
    assert_eq!(result.parsed_statements().count(), 3);
    assert_eq!(result.instructions.len(), 10);
    assert_eq!(
      result.machine_code,
      "push 10\n\
       store x\n\
       load x\n\
       push 5\n\
       operate +\n\
       store y\n\
       load y\n\
       push 2\n\
       operate *\n\
       store z\n",
    );
  }

  #[test]
  fn malformed_statement_does_not_stop_the_pipeline() {
    let result = compile("a = 1; x = ; b = 2;");
    assert_eq!(result.statements.len(), 3);
    assert!(result.statements[1].is_err());
    assert!(result.has_parse_errors());
    assert_eq!(result.machine_code, "push 1\nstore a\npush 2\nstore b\n");
  }

  #[test]
  fn lexical_garbage_is_carried_as_error_tokens() {
    let result = compile("x = 10 $;");
    assert!(
      result
        .tokens
        .iter()
        .any(|token| token.kind == TokenKind::Error),
    );
    assert!(result.has_parse_errors());
  }

  #[test]
  fn diagnostics_do_not_block_generation() {
    let result = compile("y = w + 1;");
    assert_eq!(
      result.diagnostics,
      vec![SemanticError::UndeclaredIdentifier {
        name: "w".to_string(),
      }],
    );
    assert_eq!(result.machine_code, "load w\npush 1\noperate +\nstore y\n");
  }

  #[test]
  fn empty_source_yields_empty_artifacts() {
    let result = compile("");
    assert!(result.tokens.is_empty());
    assert!(result.statements.is_empty());
    assert!(result.diagnostics.is_empty());
    assert_eq!(result.machine_code, "");
  }
}
