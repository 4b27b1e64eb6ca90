use super::escape::{write_document, write_string_literal};
use super::expr::write_expr;
use super::{indentation, Context};
use crate::ast::{MemberType, PropertyName, Type, TypeNameAndArguments, TypeParameter};
use crate::error::RenderResult;
use crate::identifier::{create_identifier, is_safe_property_name, IdentifierIndex};
use indexmap::IndexSet;

/// Writes `: Type` in TypeScript. Does nothing in JavaScript or without a type.
pub(crate) fn write_annotation(
  out: &mut String,
  ty: Option<&Type>,
  indent: usize,
  ctx: &Context,
) -> RenderResult {
  match ty {
    Some(ty) if ctx.is_typescript() => {
      out.push_str(": ");
      write_type(out, ty, indent, ctx)
    }
    _ => Ok(()),
  }
}

/// `<T extends unknown, U extends string>`. Every parameter gets a bound so
/// `<T>(` is never mistaken for anything else.
pub(crate) fn write_type_parameters(
  out: &mut String,
  parameters: &[TypeParameter],
  indent: usize,
  ctx: &Context,
) -> RenderResult {
  if parameters.is_empty() || !ctx.is_typescript() {
    return Ok(());
  }
  out.push('<');
  for (i, parameter) in parameters.iter().enumerate() {
    if i > 0 {
      out.push_str(", ");
    }
    out.push_str(parameter.name.as_str());
    out.push_str(" extends ");
    match &parameter.constraint {
      Some(constraint) => write_type(out, constraint, indent, ctx)?,
      None => out.push_str("unknown"),
    }
  }
  out.push('>');
  Ok(())
}

pub(crate) fn write_type_arguments(
  out: &mut String,
  arguments: &[Type],
  indent: usize,
  ctx: &Context,
) -> RenderResult {
  if arguments.is_empty() {
    return Ok(());
  }
  out.push('<');
  for (i, argument) in arguments.iter().enumerate() {
    if i > 0 {
      out.push_str(", ");
    }
    write_type(out, argument, indent, ctx)?;
  }
  out.push('>');
  Ok(())
}

fn write_name_and_arguments(
  out: &mut String,
  name_and_arguments: &TypeNameAndArguments,
  indent: usize,
  ctx: &Context,
) -> RenderResult {
  out.push_str(name_and_arguments.name.as_str());
  write_type_arguments(out, &name_and_arguments.arguments, indent, ctx)
}

/// Writes `ty`, parenthesized when it is a function type, or `wrap_union` is
/// set and it is a union.
fn write_constituent(
  out: &mut String,
  ty: &Type,
  wrap_union: bool,
  indent: usize,
  ctx: &Context,
) -> RenderResult {
  let wrap = match ty {
    Type::Function(_) => true,
    Type::Union(types) => wrap_union && !types.is_empty(),
    _ => false,
  };
  if wrap {
    out.push('(');
  }
  write_type(out, ty, indent, ctx)?;
  if wrap {
    out.push(')');
  }
  Ok(())
}

pub(crate) fn write_type(out: &mut String, ty: &Type, indent: usize, ctx: &Context) -> RenderResult {
  match ty {
    Type::Number => out.push_str("number"),
    Type::String => out.push_str("string"),
    Type::Boolean => out.push_str("boolean"),
    Type::Undefined => out.push_str("undefined"),
    Type::Null => out.push_str("null"),
    Type::Never => out.push_str("never"),
    Type::Void => out.push_str("void"),
    Type::Unknown => out.push_str("unknown"),
    Type::Object(members) => write_object_type(out, members, indent, ctx)?,
    Type::Function(function) => {
      let types = ctx
        .types
        .push(function.type_parameters.iter().map(|p| p.name.clone()));
      let inner = ctx.with_scopes(ctx.variables, &types);
      write_type_parameters(out, &function.type_parameters, indent, &inner)?;
      out.push('(');
      let mut index = IdentifierIndex::INITIAL;
      let reserved = IndexSet::new();
      for (i, parameter) in function.parameters.iter().enumerate() {
        if i > 0 {
          out.push_str(", ");
        }
        let (name, next) = create_identifier(index, &reserved);
        index = next;
        out.push_str(name.as_str());
        out.push_str(": ");
        write_type(out, parameter, indent, &inner)?;
      }
      out.push_str(") => ");
      write_type(out, &function.return_type, indent, &inner)?;
    }
    Type::Union(types) => {
      if types.is_empty() {
        out.push_str("never");
      }
      for (i, ty) in types.iter().enumerate() {
        if i > 0 {
          out.push_str(" | ");
        }
        write_constituent(out, ty, false, indent, ctx)?;
      }
    }
    Type::Intersection(intersection) => {
      write_constituent(out, &intersection.left, true, indent, ctx)?;
      out.push_str(" & ");
      write_constituent(out, &intersection.right, true, indent, ctx)?;
    }
    Type::ImportedType(imported) => {
      let namespace = ctx.namespace(&imported.module_path)?;
      out.push_str(namespace.as_str());
      out.push('.');
      write_name_and_arguments(out, &imported.name_and_arguments, indent, ctx)?;
    }
    Type::ScopeInFile(name) => write_name_and_arguments(out, name, indent, ctx)?,
    Type::ScopeInGlobal(name) => {
      if ctx.types.contains(name.name.as_str()) {
        out.push_str("globalThis.");
      }
      write_name_and_arguments(out, name, indent, ctx)?;
    }
    Type::WithNamespace(namespaced) => {
      for segment in &namespaced.namespace {
        out.push_str(segment.as_str());
        out.push('.');
      }
      write_name_and_arguments(out, &namespaced.name_and_arguments, indent, ctx)?;
    }
    Type::StringLiteral(value) => write_string_literal(out, value),
    Type::UniqueSymbol => out.push_str("unique symbol"),
  }
  Ok(())
}

fn write_member(out: &mut String, member: &MemberType, indent: usize, ctx: &Context) -> RenderResult {
  if member.readonly {
    out.push_str("readonly ");
  }
  match &member.name {
    PropertyName::String(name) if is_safe_property_name(name) => out.push_str(name),
    PropertyName::String(name) => write_string_literal(out, name),
    PropertyName::SymbolExpr(expr) => {
      out.push('[');
      write_expr(out, expr, indent, ctx)?;
      out.push(']');
    }
  }
  if !member.required {
    out.push('?');
  }
  out.push_str(": ");
  write_type(out, &member.ty, indent, ctx)
}

/// `{ readonly a: A; b?: B }` on one line, or one member per line when any
/// member carries documentation.
fn write_object_type(
  out: &mut String,
  members: &[MemberType],
  indent: usize,
  ctx: &Context,
) -> RenderResult {
  if members.is_empty() {
    out.push_str("{}");
    return Ok(());
  }
  if members.iter().all(|m| m.document.trim().is_empty()) {
    out.push_str("{ ");
    for (i, member) in members.iter().enumerate() {
      if i > 0 {
        out.push_str("; ");
      }
      write_member(out, member, indent, ctx)?;
    }
    out.push_str(" }");
    return Ok(());
  }

  let member_indent = indentation(indent + 1);
  out.push_str("{\n");
  for member in members {
    write_document(out, &member.document, &member_indent);
    out.push_str(&member_indent);
    write_member(out, member, indent + 1, ctx)?;
    out.push_str(";\n");
  }
  out.push_str(&indentation(indent));
  out.push('}');
  Ok(())
}
