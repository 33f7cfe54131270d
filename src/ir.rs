//! Intermediate representation: a flat stack-machine instruction sequence.
//!
//! Lowering is a post-order walk of each statement tree. Every call returns
//! its own owned fragment and the caller concatenates fragments explicitly,
//! so there is no shared accumulator threaded through the recursion.

use std::fmt;

use crate::parser::{AstNode, BinaryOp};

/// The IR vocabulary. Operands are carried verbatim from the AST; `Display`
/// gives the canonical one-line form of each instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instr {
  Push(String),
  Load(String),
  Store(String),
  Operate(BinaryOp),
}

impl fmt::Display for Instr {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Instr::Push(value) => write!(f, "push {value}"),
      Instr::Load(name) => write!(f, "load {name}"),
      Instr::Store(name) => write!(f, "store {name}"),
      Instr::Operate(op) => write!(f, "operate {op}"),
    }
  }
}

/// Lower a statement list into one flat instruction sequence, fragments
/// appended in program order.
pub fn generate(statements: &[AstNode]) -> Vec<Instr> {
  let mut code = Vec::new();
  for stmt in statements {
    code.extend(lower(stmt));
  }
  code
}

/// Post-order lowering of one tree: operands first, then the instruction
/// that consumes them.
fn lower(node: &AstNode) -> Vec<Instr> {
  match node {
    AstNode::Literal { value } => vec![Instr::Push(value.clone())],
    AstNode::Var { name } => vec![Instr::Load(name.clone())],
    AstNode::Binary { op, lhs, rhs } => {
      let mut code = lower(lhs);
      code.extend(lower(rhs));
      code.push(Instr::Operate(*op));
      code
    }
    AstNode::Assign { name, value } => {
      let mut code = lower(value);
      code.push(Instr::Store(name.clone()));
      code
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parser;
  use crate::tokenizer;

  fn generate_from(source: &str) -> Vec<Instr> {
    let statements: Vec<AstNode> = parser::parse(&tokenizer::tokenize(source), source)
      .into_iter()
      .filter_map(Result::ok)
      .collect();
    generate(&statements)
  }

  #[test]
  fn literal_assignment_lowers_to_push_store() {
    assert_eq!(
      generate_from("x = 10;"),
      vec![Instr::Push("10".to_string()), Instr::Store("x".to_string())],
    );
  }

  #[test]
  fn binary_operands_come_out_in_post_order() {
    assert_eq!(
      generate_from("x = 1 + 2 * 3;"),
      vec![
        Instr::Push("1".to_string()),
        Instr::Push("2".to_string()),
        Instr::Push("3".to_string()),
        Instr::Operate(BinaryOp::Mul),
        Instr::Operate(BinaryOp::Add),
        Instr::Store("x".to_string()),
      ],
    );
  }

  #[test]
  fn statement_fragments_append_in_program_order() {
    let code = generate_from("y = x + 5; z = y * 2;");
    assert_eq!(
      code,
      vec![
        Instr::Load("x".to_string()),
        Instr::Push("5".to_string()),
        Instr::Operate(BinaryOp::Add),
        Instr::Store("y".to_string()),
        Instr::Load("y".to_string()),
        Instr::Push("2".to_string()),
        Instr::Operate(BinaryOp::Mul),
        Instr::Store("z".to_string()),
      ],
    );
    // The second statement's fragment is intact and ordered after the
    // first statement's store.
    assert_eq!(
      &code[4..],
      &[
        Instr::Load("y".to_string()),
        Instr::Push("2".to_string()),
        Instr::Operate(BinaryOp::Mul),
        Instr::Store("z".to_string()),
      ],
    );
  }

  #[test]
  fn display_gives_the_wire_form() {
    assert_eq!(Instr::Push("10".to_string()).to_string(), "push 10");
    assert_eq!(Instr::Load("x".to_string()).to_string(), "load x");
    assert_eq!(Instr::Store("z".to_string()).to_string(), "store z");
    assert_eq!(Instr::Operate(BinaryOp::Mul).to_string(), "operate *");
  }

  #[test]
  fn empty_program_generates_no_code() {
    assert!(generate_from("").is_empty());
  }
}
