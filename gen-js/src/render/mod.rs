//! Turns a collected module into source text.
//!
//! Rendering is a set of mutually recursive `write_*` functions appending to a
//! `String`. Each takes the current indentation level and a [`Context`]; the
//! context is never mutated, entering a scope builds a new one on the stack.

mod escape;
mod expr;
mod precedence;
mod stmt;
mod ty;

use crate::ast::{Definition, Dialect, FunctionDefinition, Module, TypeAlias, VariableDefinition};
use crate::error::{RenderError, RenderResult};
use crate::identifier::Identifier;
use crate::import::ModuleMap;
use crate::scope::Scope;
use std::fmt::Write;
use tracing::{debug, debug_span};

pub use escape::string_literal;

#[derive(Clone, Copy)]
pub(crate) struct Context<'a> {
  pub module_map: &'a ModuleMap,
  /// Value names bound around the node being written.
  pub variables: &'a Scope<'a>,
  /// Type names bound around the node being written.
  pub types: &'a Scope<'a>,
  pub dialect: Dialect,
}

impl<'a> Context<'a> {
  pub fn is_typescript(&self) -> bool {
    self.dialect == Dialect::TypeScript
  }

  pub fn with_scopes<'b>(&self, variables: &'b Scope<'b>, types: &'b Scope<'b>) -> Context<'b>
  where
    'a: 'b,
  {
    Context {
      module_map: self.module_map,
      variables,
      types,
      dialect: self.dialect,
    }
  }

  pub fn namespace(&self, module_path: &str) -> RenderResult<&'a Identifier> {
    self
      .module_map
      .get(module_path)
      .ok_or_else(|| RenderError::UnknownModule(module_path.to_string()))
  }
}

pub(crate) fn indentation(indent: usize) -> String {
  "  ".repeat(indent)
}

/// Generated files are exempt from linting, then credit their generator.
fn write_banner(out: &mut String, attribution_links: &[String]) {
  out.push_str("/* eslint-disable */\n/* generated by ");
  if attribution_links.is_empty() {
    out.push_str("gen-js");
  } else {
    out.push_str(&attribution_links.join(", ").replace("*/", "* /"));
  }
  out.push_str(". Do not edit! */");
}

/// Renders the whole file: banner, imports, definitions, then the top-level
/// statements. Sections are separated by a blank line.
pub(crate) fn render_module(
  module: &Module,
  module_map: &ModuleMap,
  dialect: Dialect,
  attribution_links: &[String],
) -> RenderResult<String> {
  let span = debug_span!("render", ?dialect, definitions = module.definitions.len());
  let _enter = span.enter();

  let mut root_variables = Vec::new();
  let mut root_types = Vec::new();
  for definition in &module.definitions {
    match definition {
      Definition::TypeAlias(alias) => root_types.push(alias.name.clone()),
      Definition::Function(function) => root_variables.push(function.name.clone()),
      Definition::Variable(variable) => root_variables.push(variable.name.clone()),
    }
  }
  let variables = Scope::root(root_variables);
  let types = Scope::root(root_types);
  let ctx = Context {
    module_map,
    variables: &variables,
    types: &types,
    dialect,
  };

  let mut sections = Vec::new();

  let mut banner = String::new();
  write_banner(&mut banner, attribution_links);
  sections.push(banner);

  if !module_map.is_empty() {
    let mut imports = String::new();
    for (i, (path, name)) in module_map.iter().enumerate() {
      if i > 0 {
        imports.push('\n');
      }
      write!(imports, "import * as {name} from ")?;
      escape::write_string_literal(&mut imports, path);
      imports.push(';');
    }
    sections.push(imports);
  }

  for definition in &module.definitions {
    let mut out = String::new();
    match definition {
      Definition::TypeAlias(alias) => {
        if !ctx.is_typescript() {
          continue;
        }
        write_type_alias(&mut out, alias, &ctx)?;
      }
      Definition::Function(function) => write_function(&mut out, function, &ctx)?,
      Definition::Variable(variable) => write_variable(&mut out, variable, &ctx)?,
    }
    sections.push(out);
  }

  if !module.statements.is_empty() {
    let mut out = String::new();
    stmt::write_block(&mut out, &module.statements, 0, &ctx, Vec::new())?;
    sections.push(out);
  }

  let mut text = sections.join("\n\n");
  text.push('\n');
  debug!(bytes = text.len(), "rendered module");
  Ok(text)
}

fn write_export(out: &mut String, export: bool) {
  if export {
    out.push_str("export ");
  }
}

fn write_type_alias(out: &mut String, alias: &TypeAlias, ctx: &Context) -> RenderResult {
  escape::write_document(out, &alias.document, "");
  write_export(out, alias.export);
  write!(out, "type {}", alias.name)?;
  let types = ctx
    .types
    .push(alias.type_parameters.iter().map(|p| p.name.clone()));
  let inner = ctx.with_scopes(ctx.variables, &types);
  ty::write_type_parameters(out, &alias.type_parameters, 0, &inner)?;
  out.push_str(" = ");
  ty::write_type(out, &alias.ty, 0, &inner)?;
  out.push(';');
  Ok(())
}

fn function_document(function: &FunctionDefinition) -> String {
  let mut document = function.document.trim().to_string();
  for parameter in &function.parameters {
    let parameter_document = parameter.document.trim();
    if parameter_document.is_empty() {
      continue;
    }
    if !document.is_empty() {
      document.push('\n');
    }
    document.push_str("@param ");
    document.push_str(parameter.name.as_str());
    document.push(' ');
    document.push_str(parameter_document);
  }
  document
}

fn write_function(out: &mut String, function: &FunctionDefinition, ctx: &Context) -> RenderResult {
  escape::write_document(out, &function_document(function), "");
  write_export(out, function.export);
  write!(out, "const {} = ", function.name)?;
  let parameters: Vec<_> = function
    .parameters
    .iter()
    .map(|p| (&p.name, Some(&p.ty)))
    .collect();
  expr::write_function_parts(
    out,
    expr::FunctionParts {
      is_async: function.is_async,
      type_parameters: &function.type_parameters,
      parameters: &parameters,
      return_type: Some(&function.return_type),
      statements: &function.statements,
    },
    0,
    ctx,
  )?;
  out.push(';');
  Ok(())
}

fn write_variable(out: &mut String, variable: &VariableDefinition, ctx: &Context) -> RenderResult {
  escape::write_document(out, &variable.document, "");
  write_export(out, variable.export);
  write!(out, "const {}", variable.name)?;
  ty::write_annotation(out, variable.ty.as_ref(), 0, ctx)?;
  out.push_str(" = ");
  expr::write_expr(out, &variable.expr, 0, ctx)?;
  out.push(';');
  Ok(())
}
