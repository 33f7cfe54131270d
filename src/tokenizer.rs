//! Lexical analysis: turns the raw input string into a vector of tokens.
//!
//! The tokenizer is intentionally tiny – it knows nothing about semantics
//! beyond sorting characters into token kinds. It is total: anything it
//! does not recognise becomes an inline `Error` token and the scan simply
//! continues, so downstream stages always receive the full stream.

/// Kinds of tokens recognised by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  Keyword,
  Ident,
  Operator,
  Num,
  Semicolon,
  Equals,
  Error,
}

/// Thin wrapper for lexical information needed by later stages. The text is
/// not stored here; it is the source slice `[loc, loc + len)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub loc: usize,
  pub len: usize,
}

impl Token {
  /// Convenience constructor to keep the `tokenize` loop readable.
  pub fn new(kind: TokenKind, loc: usize, len: usize) -> Self {
    Self { kind, loc, len }
  }
}

/// Words reserved for future control-flow syntax. The grammar has no use
/// for them yet, but they already lex as keywords.
const KEYWORDS: [&str; 2] = ["if", "else"];

/// Lex the input into a flat vector of tokens. Whitespace is skipped and
/// never emitted; every other character lands in exactly one token, so the
/// concatenated token texts reproduce the input minus whitespace.
pub fn tokenize(input: &str) -> Vec<Token> {
  let mut tokens = Vec::new();
  let bytes = input.as_bytes();
  let mut i = 0;

  while i < bytes.len() {
    let c = bytes[i];
    if c.is_ascii_whitespace() {
      i += 1;
      continue;
    }

    if c.is_ascii_alphabetic() {
      let start = i;
      i += 1;
      while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
        i += 1;
      }
      let text = &input[start..i];
      let kind = if KEYWORDS.contains(&text) {
        TokenKind::Keyword
      } else {
        TokenKind::Ident
      };
      tokens.push(Token::new(kind, start, i - start));
      continue;
    }

    if c.is_ascii_digit() {
      let start = i;
      i += 1;
      while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
      }
      tokens.push(Token::new(TokenKind::Num, start, i - start));
      continue;
    }

    let kind = match c {
      b'+' | b'-' | b'*' | b'/' => Some(TokenKind::Operator),
      b';' => Some(TokenKind::Semicolon),
      b'=' => Some(TokenKind::Equals),
      _ => None,
    };
    if let Some(kind) = kind {
      tokens.push(Token::new(kind, i, 1));
      i += 1;
      continue;
    }

    // Unrecognised input becomes an inline error token spanning one whole
    // code point, so slicing the span can never split a character.
    let len = input[i..].chars().next().map_or(1, char::len_utf8);
    tokens.push(Token::new(TokenKind::Error, i, len));
    i += len;
  }

  tokens
}

/// Return the slice from the source that produced this token.
pub fn token_text<'a>(token: &Token, source: &'a str) -> &'a str {
  let end = token.loc + token.len;
  &source[token.loc..end]
}

/// Human-friendly description used in diagnostics.
pub fn describe_token(token: Option<&Token>, source: &str) -> String {
  match token {
    Some(token) => token_text(token, source).to_string(),
    None => "EOF".to_string(),
  }
}
