use std::fmt;

/// The language has exactly one value type today. The tag exists so the
/// symbol table records something richer than bare presence, leaving room
/// for more types later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
  Numeric,
}

impl TypeTag {
  pub fn name(self) -> &'static str {
    match self {
      TypeTag::Numeric => "numeric",
    }
  }
}

impl fmt::Display for TypeTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
