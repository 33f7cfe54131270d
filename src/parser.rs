//! Recursive-descent parser producing one AST per statement.
//!
//! The parser keeps a precedence-climbing set of helpers over a cursor
//! struct, with a thin statement layer on top so sequencing lives outside
//! the expression tree. Statement parses are independent: each one yields
//! either a tree or a typed error, and a failure never prevents the
//! statements around it from parsing.

use std::fmt;

use snafu::ensure;

use crate::error::{ExpectedFactorSnafu, MissingSemicolonSnafu, ParseError};
use crate::tokenizer::{Token, TokenKind, describe_token, token_text};

/// Binary operators recognised by the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
  Add,
  Sub,
  Mul,
  Div,
}

impl BinaryOp {
  pub fn symbol(self) -> &'static str {
    match self {
      BinaryOp::Add => "+",
      BinaryOp::Sub => "-",
      BinaryOp::Mul => "*",
      BinaryOp::Div => "/",
    }
  }

  fn from_symbol(symbol: &str) -> Option<Self> {
    match symbol {
      "+" => Some(BinaryOp::Add),
      "-" => Some(BinaryOp::Sub),
      "*" => Some(BinaryOp::Mul),
      "/" => Some(BinaryOp::Div),
      _ => None,
    }
  }
}

impl fmt::Display for BinaryOp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.symbol())
  }
}

/// Statement and expression trees produced by the parser. Every child is
/// exclusively owned, so each statement is a finite tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
  Literal {
    value: String,
  },
  Var {
    name: String,
  },
  Binary {
    op: BinaryOp,
    lhs: Box<AstNode>,
    rhs: Box<AstNode>,
  },
  Assign {
    name: String,
    value: Box<AstNode>,
  },
}

impl AstNode {
  pub fn literal(value: &str) -> Self {
    Self::Literal {
      value: value.to_string(),
    }
  }

  pub fn var(name: &str) -> Self {
    Self::Var {
      name: name.to_string(),
    }
  }

  pub fn binary(op: BinaryOp, lhs: AstNode, rhs: AstNode) -> Self {
    Self::Binary {
      op,
      lhs: Box::new(lhs),
      rhs: Box::new(rhs),
    }
  }

  pub fn assign(name: &str, value: AstNode) -> Self {
    Self::Assign {
      name: name.to_string(),
      value: Box::new(value),
    }
  }
}

impl fmt::Display for AstNode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AstNode::Literal { value } => f.write_str(value),
      AstNode::Var { name } => f.write_str(name),
      AstNode::Binary { op, lhs, rhs } => write!(f, "({lhs} {op} {rhs})"),
      AstNode::Assign { name, value } => write!(f, "{name} = {value}"),
    }
  }
}

/// Parse the whole token stream into one result per attempted statement,
/// in program order.
///
/// A failed statement is reported in place and the cursor is guaranteed to
/// move forward before the next attempt, so malformed input can never stall
/// the loop.
pub fn parse(tokens: &[Token], source: &str) -> Vec<Result<AstNode, ParseError>> {
  let mut stream = TokenStream::new(tokens, source);
  let mut statements = Vec::new();

  while !stream.at_end() {
    let start = stream.pos;
    let result = parse_stmt(&mut stream);
    if let Err(err) = &result {
      match err {
        // The expression before the missing semicolon was already
        // consumed; the cursor sits at the next statement.
        ParseError::MissingSemicolon { .. } => stream.ensure_progress(start),
        ParseError::ExpectedFactor { .. } => stream.synchronize(start),
      }
    }
    statements.push(result);
  }

  statements
}

/// statement := Ident '=' expression ';' | expression
fn parse_stmt(stream: &mut TokenStream) -> Result<AstNode, ParseError> {
  if let Some(token) = stream.eat(TokenKind::Ident) {
    let name = token_text(token, stream.source);
    if stream.eat(TokenKind::Equals).is_some() {
      let value = parse_expr(stream)?;
      ensure!(
        stream.eat(TokenKind::Semicolon).is_some(),
        MissingSemicolonSnafu {
          name,
          got: stream.describe_current(),
          loc: stream.error_loc(),
        }
      );
      return Ok(AstNode::assign(name, value));
    }
    // Not an assignment after all: give the identifier back and fall
    // through to the bare-expression form.
    stream.backtrack(1);
  }

  parse_expr(stream)
}

/// expression := term (('+' | '-') term)*
fn parse_expr(stream: &mut TokenStream) -> Result<AstNode, ParseError> {
  let mut node = parse_term(stream)?;

  while let Some(op) = stream.eat_operator(&[BinaryOp::Add, BinaryOp::Sub]) {
    let rhs = parse_term(stream)?;
    node = AstNode::binary(op, node, rhs);
  }

  Ok(node)
}

/// term := factor (('*' | '/') factor)*
fn parse_term(stream: &mut TokenStream) -> Result<AstNode, ParseError> {
  let mut node = parse_factor(stream)?;

  while let Some(op) = stream.eat_operator(&[BinaryOp::Mul, BinaryOp::Div]) {
    let rhs = parse_factor(stream)?;
    node = AstNode::binary(op, node, rhs);
  }

  Ok(node)
}

/// factor := Num | Ident | Keyword
fn parse_factor(stream: &mut TokenStream) -> Result<AstNode, ParseError> {
  if let Some(token) = stream.eat(TokenKind::Num) {
    return Ok(AstNode::literal(token_text(token, stream.source)));
  }

  // Keywords are reserved by the tokenizer but the grammar has no use for
  // them yet, so here they read as ordinary names.
  if let Some(token) = stream
    .eat(TokenKind::Ident)
    .or_else(|| stream.eat(TokenKind::Keyword))
  {
    return Ok(AstNode::var(token_text(token, stream.source)));
  }

  ExpectedFactorSnafu {
    got: stream.describe_current(),
    loc: stream.error_loc(),
  }
  .fail()
}

/// Lightweight cursor over the token vector, shared by all parsing
/// functions so no two statements can overlap the same token.
struct TokenStream<'a> {
  tokens: &'a [Token],
  source: &'a str,
  pos: usize,
}

impl<'a> TokenStream<'a> {
  fn new(tokens: &'a [Token], source: &'a str) -> Self {
    Self {
      tokens,
      source,
      pos: 0,
    }
  }

  fn at_end(&self) -> bool {
    self.pos >= self.tokens.len()
  }

  /// Consume the current token if it has the given kind.
  fn eat(&mut self, kind: TokenKind) -> Option<&'a Token> {
    let token = self.tokens.get(self.pos)?;
    if token.kind == kind {
      self.pos += 1;
      Some(token)
    } else {
      None
    }
  }

  /// Consume the current token if it is one of the wanted operators. The
  /// operator is inspected before the cursor moves, so an operator of the
  /// wrong precedence level stays put for the caller above.
  fn eat_operator(&mut self, wanted: &[BinaryOp]) -> Option<BinaryOp> {
    let token = self.tokens.get(self.pos)?;
    if token.kind != TokenKind::Operator {
      return None;
    }
    let op = BinaryOp::from_symbol(token_text(token, self.source))?;
    if !wanted.contains(&op) {
      return None;
    }
    self.pos += 1;
    Some(op)
  }

  /// Rewind speculatively consumed tokens.
  fn backtrack(&mut self, count: usize) {
    self.pos -= count;
  }

  /// A failed statement must still move the cursor.
  fn ensure_progress(&mut self, start: usize) {
    if self.pos == start {
      self.pos += 1;
    }
  }

  /// Skip past the next statement boundary so one malformed statement
  /// consumes at most its own tokens.
  fn synchronize(&mut self, start: usize) {
    while let Some(kind) = self.tokens.get(self.pos).map(|token| token.kind) {
      self.pos += 1;
      if kind == TokenKind::Semicolon {
        break;
      }
    }
    self.ensure_progress(start);
  }

  fn describe_current(&self) -> String {
    describe_token(self.tokens.get(self.pos), self.source)
  }

  fn error_loc(&self) -> usize {
    self
      .tokens
      .get(self.pos)
      .map_or(self.source.len(), |token| token.loc)
  }
}
