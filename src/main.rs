use std::env;
use std::process;

use exprc::error::render_at;
use exprc::tokenizer::{TokenKind, token_text};

fn main() {
  let args: Vec<String> = env::args().collect();
  if args.len() != 2 {
    let program = args.first().map(String::as_str).unwrap_or("exprc");
    eprintln!("usage: {program} <source>");
    process::exit(1);
  }

  let source = &args[1];
  let result = exprc::compile(source);

  for token in &result.tokens {
    if token.kind == TokenKind::Error {
      let text = token_text(token, source);
      eprintln!("warning: unrecognized character '{text}'");
    }
  }

  println!("tokens:");
  for token in &result.tokens {
    println!("  <{:?}, {}>", token.kind, token_text(token, source));
  }

  println!("ast:");
  for stmt in &result.statements {
    match stmt {
      Ok(node) => println!("  {node}"),
      Err(err) => eprintln!("{}", render_at(source, err.loc(), err)),
    }
  }

  for diagnostic in &result.diagnostics {
    eprintln!("error: {diagnostic}");
  }

  println!("code:");
  print!("{}", result.machine_code);

  if result.has_parse_errors() {
    process::exit(1);
  }
}
