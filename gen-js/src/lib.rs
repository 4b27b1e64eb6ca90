//! Generates JavaScript or TypeScript source from a typed syntax tree.
//!
//! Programs are described as data ([`ast::Module`]) rather than text, and the
//! generator takes care of the parts that are easy to get wrong by hand:
//! operator precedence, string escaping, import namespace names that never
//! collide with anything in the file, and `globalThis.` qualification when a
//! built-in is shadowed by a local binding.
//!
//! Generation runs in three steps. [`collect::collect`] walks the module once
//! to validate it and gather used names and module paths,
//! [`import::assign_import_names`] mints one namespace per module path, and
//! the renderer writes the text.
//!
//! ```
//! use gen_js::ast::Module;
//! use gen_js::build::*;
//! use gen_js::{generate, Dialect};
//!
//! let module = Module {
//!   definitions: vec![],
//!   statements: vec![console_log(string("hello"))],
//! };
//! let code = generate(&module, Dialect::JavaScript).unwrap();
//! assert!(code.contains("console.log(\"hello\");"));
//! ```

pub mod ast;
pub mod build;
pub mod collect;
pub mod error;
pub mod identifier;
pub mod import;
mod render;
pub mod scope;

pub use ast::{Dialect, Module};
pub use error::{GenerateError, NameKind, RenderError};
pub use identifier::Identifier;
pub use render::string_literal;

use tracing::debug_span;

/// How to treat a reference to a local variable that no enclosing scope binds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnresolvedVariables {
  /// Reject the module.
  #[default]
  Error,
  /// Log a warning and emit the reference as is.
  Warn,
}

#[derive(Clone, Debug)]
pub struct GenerateOptions {
  pub dialect: Dialect,
  /// Names or links of the tools that produced the module, listed in the
  /// banner comment.
  pub attribution_links: Vec<String>,
  pub unresolved_variables: UnresolvedVariables,
}

impl Default for GenerateOptions {
  fn default() -> Self {
    GenerateOptions {
      dialect: Dialect::TypeScript,
      attribution_links: Vec::new(),
      unresolved_variables: UnresolvedVariables::Error,
    }
  }
}

impl GenerateOptions {
  pub fn new(dialect: Dialect) -> Self {
    GenerateOptions {
      dialect,
      ..GenerateOptions::default()
    }
  }
}

pub fn generate(module: &Module, dialect: Dialect) -> Result<String, GenerateError> {
  generate_with_options(module, &GenerateOptions::new(dialect))
}

pub fn generate_with_options(
  module: &Module,
  options: &GenerateOptions,
) -> Result<String, GenerateError> {
  let span = debug_span!("generate", dialect = ?options.dialect);
  let _enter = span.enter();

  let collected = collect::collect(module, options.unresolved_variables)?;
  let module_map = import::assign_import_names(&collected);
  let text = render::render_module(
    module,
    &module_map,
    options.dialect,
    &options.attribution_links,
  )?;
  Ok(text)
}
