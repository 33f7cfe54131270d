//! Final emission: render the instruction sequence as text, one line per
//! instruction.
//!
//! This stage is purely a formatter. Instruction content is written exactly
//! as its `Display` form, in input order, each line newline-terminated.

use crate::ir::Instr;

/// Join the instructions into the final program text.
pub fn emit(instructions: &[Instr]) -> String {
  let mut text = String::new();
  for instr in instructions {
    text.push_str(&instr.to_string());
    text.push('\n');
  }
  text
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parser::BinaryOp;

  #[test]
  fn every_line_is_newline_terminated() {
    let instructions = vec![
      Instr::Push("10".to_string()),
      Instr::Store("x".to_string()),
      Instr::Operate(BinaryOp::Add),
    ];
    assert_eq!(emit(&instructions), "push 10\nstore x\noperate +\n");
  }

  #[test]
  fn empty_sequence_emits_nothing() {
    assert_eq!(emit(&[]), "");
  }
}
