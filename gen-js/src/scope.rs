//! Persistent chain of lexical scopes.
//!
//! Entering a scope borrows the enclosing one and never mutates it, so names
//! bound inside a body are invisible once rendering or collection returns to
//! the parent.

use crate::ast::Statement;
use crate::identifier::Identifier;
use ahash::HashSet;

#[derive(Debug, Default)]
pub struct Scope<'a> {
  parent: Option<&'a Scope<'a>>,
  names: HashSet<Identifier>,
}

impl<'a> Scope<'a> {
  pub fn root(names: impl IntoIterator<Item = Identifier>) -> Scope<'static> {
    Scope {
      parent: None,
      names: names.into_iter().collect(),
    }
  }

  /// A child scope that additionally binds `names`.
  pub fn push(&'a self, names: impl IntoIterator<Item = Identifier>) -> Scope<'a> {
    Scope {
      parent: Some(self),
      names: names.into_iter().collect(),
    }
  }

  pub fn contains(&self, name: &str) -> bool {
    let mut scope = Some(self);
    while let Some(s) = scope {
      if s.names.contains(name) {
        return true;
      }
      scope = s.parent;
    }
    false
  }
}

/// Names declared directly in a block. They are visible to every statement of
/// the block, including those written before the declaration.
pub fn block_bindings(statements: &[Statement]) -> impl Iterator<Item = Identifier> + '_ {
  statements.iter().filter_map(|statement| match statement {
    Statement::VariableDefinition(variable) => Some(variable.name.clone()),
    Statement::FunctionDefinition(function) => Some(function.name.clone()),
    _ => None,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ids(names: &[&str]) -> Vec<Identifier> {
    names.iter().copied().map(Identifier::new).collect()
  }

  #[test]
  fn child_sees_parent_names() {
    let root = Scope::root(ids(&["a"]));
    let child = root.push(ids(&["b"]));
    assert!(child.contains("a"));
    assert!(child.contains("b"));
    assert!(!child.contains("c"));
  }

  #[test]
  fn parent_does_not_see_child_names() {
    let root = Scope::root(ids(&["a"]));
    {
      let child = root.push(ids(&["b"]));
      assert!(child.contains("b"));
    }
    assert!(!root.contains("b"));
  }

  #[test]
  fn siblings_are_independent() {
    let root = Scope::root(Vec::new());
    let left = root.push(ids(&["x"]));
    let right = root.push(ids(&["y"]));
    assert!(!left.contains("y"));
    assert!(!right.contains("x"));
  }
}
