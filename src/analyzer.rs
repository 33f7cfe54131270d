//! Semantic analysis: undeclared-identifier checking over parsed statements.
//!
//! The language has no declaration statement; assigning to a name declares
//! it. The pass walks statement trees in program order against a symbol
//! table and collects diagnostics. Diagnostics are advisory – they never
//! block code generation or later statements.

use std::collections::HashMap;

use crate::error::SemanticError;
use crate::parser::AstNode;
use crate::ty::TypeTag;

/// Names declared so far, each mapped to its type.
#[derive(Debug, Default)]
pub struct SymbolTable {
  entries: HashMap<String, TypeTag>,
}

impl SymbolTable {
  pub fn declare(&mut self, name: &str) {
    self.entries.insert(name.to_string(), TypeTag::Numeric);
  }

  pub fn is_declared(&self, name: &str) -> bool {
    self.entries.contains_key(name)
  }

  pub fn type_of(&self, name: &str) -> Option<TypeTag> {
    self.entries.get(name).copied()
  }
}

/// One analyzer serves exactly one program: the symbol table starts empty
/// and lives for a single `analyze` pass.
#[derive(Debug, Default)]
pub struct SemanticAnalyzer {
  symbols: SymbolTable,
}

impl SemanticAnalyzer {
  pub fn new() -> Self {
    Self::default()
  }

  /// Check every statement in order and return the diagnostics, also in
  /// order of discovery.
  pub fn analyze(&mut self, statements: &[AstNode]) -> Vec<SemanticError> {
    let mut diagnostics = Vec::new();
    for stmt in statements {
      self.check(stmt, &mut diagnostics);
    }
    diagnostics
  }

  /// The symbol table built up so far, for drivers that want to inspect it.
  pub fn symbols(&self) -> &SymbolTable {
    &self.symbols
  }

  fn check(&mut self, node: &AstNode, diagnostics: &mut Vec<SemanticError>) {
    match node {
      AstNode::Literal { .. } => {}
      AstNode::Var { name } => {
        if !self.symbols.is_declared(name) {
          diagnostics.push(SemanticError::UndeclaredIdentifier { name: name.clone() });
        }
      }
      AstNode::Binary { lhs, rhs, .. } => {
        self.check(lhs, diagnostics);
        self.check(rhs, diagnostics);
      }
      AstNode::Assign { name, value } => {
        // Declare before checking the right-hand side: `x = x + 1` may
        // read the name it is about to define.
        self.symbols.declare(name);
        self.check(value, diagnostics);
      }
    }
  }
}
