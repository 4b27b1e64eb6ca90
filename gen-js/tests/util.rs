#![allow(dead_code)]

use gen_js::ast::*;
use gen_js::{generate, Dialect, Identifier};
use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;
use similar::ChangeTag;
use similar::TextDiff;

pub fn module(definitions: Vec<Definition>, statements: Vec<Statement>) -> Module {
  Module {
    definitions,
    statements,
  }
}

pub fn script(statements: Vec<Statement>) -> Module {
  module(Vec::new(), statements)
}

pub fn export_variable(name: &str, ty: Option<Type>, expr: Expr) -> Definition {
  Definition::Variable(VariableDefinition {
    export: true,
    name: Identifier::new(name),
    document: String::new(),
    ty,
    expr,
  })
}

pub fn export_function(
  name: &str,
  parameters: Vec<(&str, Type)>,
  return_type: Type,
  statements: Vec<Statement>,
) -> Definition {
  Definition::Function(FunctionDefinition {
    export: true,
    is_async: false,
    name: Identifier::new(name),
    document: String::new(),
    type_parameters: Vec::new(),
    parameters: parameters
      .into_iter()
      .map(|(name, ty)| ParameterWithDocument {
        name: Identifier::new(name),
        document: String::new(),
        ty,
      })
      .collect(),
    return_type,
    statements,
  })
}

pub fn export_type_alias(name: &str, ty: Type) -> Definition {
  Definition::TypeAlias(TypeAlias {
    export: true,
    name: Identifier::new(name),
    type_parameters: Vec::new(),
    document: String::new(),
    ty,
  })
}

/// Panics with a line diff when `actual` differs from `expected`.
pub fn assert_text(actual: &str, expected: &str) {
  if actual == expected {
    return;
  }
  let mut msg = String::from("generated text differs:\n");
  for change in TextDiff::from_lines(expected, actual).iter_all_changes() {
    let sign = match change.tag() {
      ChangeTag::Delete => "-",
      ChangeTag::Insert => "+",
      ChangeTag::Equal => " ",
    };
    msg.push_str(sign);
    msg.push_str(&change.to_string_lossy());
    if change.missing_newline() {
      msg.push('\n');
    }
  }
  panic!("{}", msg);
}

/// Panics unless `code` parses as a module of `dialect`.
pub fn assert_parses(code: &str, dialect: Dialect) {
  let allocator = Allocator::default();
  let source_type = SourceType::default()
    .with_module(true)
    .with_typescript(dialect == Dialect::TypeScript);
  let ret = Parser::new(&allocator, code, source_type).parse();
  assert!(
    !ret.panicked && ret.errors.is_empty(),
    "{dialect:?} output does not parse: {:?}\n{code}",
    ret.errors
  );
}

/// Generates `module` and checks the output parses.
pub fn generate_checked(module: &Module, dialect: Dialect) -> String {
  let code = generate(module, dialect).expect("generate");
  assert_parses(&code, dialect);
  code
}

/// The lines of the top-level statement block, without its braces.
pub fn statement_lines(code: &str) -> Vec<String> {
  let start = code.rfind("\n\n{\n").expect("statement block") + 4;
  let end = code.rfind("\n}\n").expect("statement block end");
  code[start..end]
    .lines()
    .map(|line| line.strip_prefix("  ").unwrap_or(line).to_string())
    .collect()
}
