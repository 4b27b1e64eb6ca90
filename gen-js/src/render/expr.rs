use super::escape::write_string_literal;
use super::precedence::{
  binary_operator_text, child_min_prec_for_binary, expr_prec, has_call_in_member_chain,
  is_unary_like, mixes_nullish, needs_parens, operand_prec, peel, unary_operator_text, Prec, Side,
  CALL_MEMBER_PRECEDENCE, CONDITIONAL_PRECEDENCE, LAMBDA_PRECEDENCE, UNARY_PRECEDENCE,
};
use super::stmt::write_block;
use super::ty::{write_annotation, write_type, write_type_arguments, write_type_parameters};
use super::Context;
use crate::ast::*;
use crate::error::RenderResult;
use crate::identifier::{is_safe_property_name, is_valid_bare_identifier, Identifier};
use std::fmt::Write;

/// Writes `expr` with no surrounding parentheses.
pub(crate) fn write_expr(out: &mut String, expr: &Expr, indent: usize, ctx: &Context) -> RenderResult {
  match expr {
    Expr::NumberLiteral(value) => write!(out, "{value}")?,
    Expr::StringLiteral(value) => write_string_literal(out, value),
    Expr::BooleanLiteral(value) => out.push_str(if *value { "true" } else { "false" }),
    Expr::NullLiteral => out.push_str("null"),
    Expr::UndefinedLiteral => out.push_str("undefined"),
    Expr::UnaryOperator(unary) => write_unary(out, unary, indent, ctx)?,
    Expr::BinaryOperator(binary) => write_binary(out, binary, indent, ctx)?,
    Expr::ConditionalOperator(cond) => {
      write_operand(out, &cond.condition, CONDITIONAL_PRECEDENCE.tighter(), indent, ctx)?;
      out.push_str(" ? ");
      write_operand(out, &cond.then_expr, CONDITIONAL_PRECEDENCE, indent, ctx)?;
      out.push_str(" : ");
      write_operand(out, &cond.else_expr, CONDITIONAL_PRECEDENCE, indent, ctx)?;
    }
    Expr::ArrayLiteral(items) => {
      out.push('[');
      for (i, item) in items.iter().enumerate() {
        if i > 0 {
          out.push_str(", ");
        }
        if item.spread {
          out.push_str("...");
        }
        write_expr(out, &item.expr, indent, ctx)?;
      }
      out.push(']');
    }
    Expr::ObjectLiteral(members) => write_object_literal(out, members, indent, ctx)?,
    Expr::Lambda(lambda) => {
      let parameters: Vec<_> = lambda
        .parameters
        .iter()
        .map(|p| (&p.name, p.ty.as_ref()))
        .collect();
      write_function_parts(
        out,
        FunctionParts {
          is_async: lambda.is_async,
          type_parameters: &lambda.type_parameters,
          parameters: &parameters,
          return_type: lambda.return_type.as_ref(),
          statements: &lambda.statements,
        },
        indent,
        ctx,
      )?;
    }
    Expr::Variable(name) => out.push_str(name.as_str()),
    Expr::GlobalObject(name) => {
      if ctx.variables.contains(name.as_str()) {
        out.push_str("globalThis.");
      }
      out.push_str(name.as_str());
    }
    Expr::ImportedVariable(imported) => {
      let namespace = ctx.namespace(&imported.module_path)?;
      out.push_str(namespace.as_str());
      write_property_access(out, &imported.name);
    }
    Expr::Get(get) => write_get(out, get, indent, ctx)?,
    Expr::Call(call) => {
      write_operand(out, &call.expr, CALL_MEMBER_PRECEDENCE, indent, ctx)?;
      write_arguments(out, &call.arguments, indent, ctx)?;
    }
    Expr::New(call) => {
      out.push_str("new ");
      let wrap = needs_parens(operand_prec(&call.expr, ctx.dialect), CALL_MEMBER_PRECEDENCE)
        || has_call_in_member_chain(&call.expr, ctx.dialect);
      write_wrapped(out, &call.expr, wrap, indent, ctx)?;
      write_arguments(out, &call.arguments, indent, ctx)?;
    }
    Expr::TypeAssertion(assertion) => {
      if ctx.is_typescript() {
        write_operand(out, &assertion.expr, UNARY_PRECEDENCE, indent, ctx)?;
        out.push_str(" as ");
        write_type(out, &assertion.ty, indent, ctx)?;
      } else {
        write_expr(out, &assertion.expr, indent, ctx)?;
      }
    }
    Expr::WithTypeArguments(with) => {
      if ctx.is_typescript() {
        write_operand(out, &with.expr, CALL_MEMBER_PRECEDENCE, indent, ctx)?;
        write_type_arguments(out, &with.type_arguments, indent, ctx)?;
      } else {
        write_expr(out, &with.expr, indent, ctx)?;
      }
    }
  }
  Ok(())
}

fn write_wrapped(
  out: &mut String,
  expr: &Expr,
  wrap: bool,
  indent: usize,
  ctx: &Context,
) -> RenderResult {
  if wrap {
    out.push('(');
  }
  write_expr(out, expr, indent, ctx)?;
  if wrap {
    out.push(')');
  }
  Ok(())
}

/// Writes an operand, parenthesized when it binds looser than `min_prec`.
pub(crate) fn write_operand(
  out: &mut String,
  expr: &Expr,
  min_prec: Prec,
  indent: usize,
  ctx: &Context,
) -> RenderResult {
  let wrap = needs_parens(operand_prec(expr, ctx.dialect), min_prec);
  write_wrapped(out, expr, wrap, indent, ctx)
}

fn write_unary(
  out: &mut String,
  unary: &UnaryOperatorExpr,
  indent: usize,
  ctx: &Context,
) -> RenderResult {
  out.push_str(unary_operator_text(unary.operator));
  // Rendered first so `- -x` can be told apart from `--x`.
  let mut operand = String::new();
  write_expr(&mut operand, &unary.expr, indent, ctx)?;
  let wrap = needs_parens(operand_prec(&unary.expr, ctx.dialect), UNARY_PRECEDENCE)
    || (unary.operator == UnaryOperator::Minus && operand.starts_with('-'));
  if wrap {
    write!(out, "({operand})")?;
  } else {
    out.push_str(&operand);
  }
  Ok(())
}

fn write_binary(
  out: &mut String,
  binary: &BinaryOperatorExpr,
  indent: usize,
  ctx: &Context,
) -> RenderResult {
  let op = binary.operator;
  let left_min_prec = child_min_prec_for_binary(op, Side::Left);
  let right_min_prec = child_min_prec_for_binary(op, Side::Right);

  let wrap_left = needs_parens(operand_prec(&binary.left, ctx.dialect), left_min_prec)
    || (op == BinaryOperator::Exponentiation && is_unary_like(&binary.left, ctx.dialect))
    || mixes_nullish(op, &binary.left, ctx.dialect);
  let wrap_right = needs_parens(operand_prec(&binary.right, ctx.dialect), right_min_prec)
    || mixes_nullish(op, &binary.right, ctx.dialect);

  write_wrapped(out, &binary.left, wrap_left, indent, ctx)?;
  write!(out, " {} ", binary_operator_text(op))?;
  write_wrapped(out, &binary.right, wrap_right, indent, ctx)
}

fn write_property_access(out: &mut String, name: &str) {
  if is_safe_property_name(name) {
    out.push('.');
    out.push_str(name);
  } else {
    out.push('[');
    write_string_literal(out, name);
    out.push(']');
  }
}

fn write_get(out: &mut String, get: &GetExpr, indent: usize, ctx: &Context) -> RenderResult {
  let dot_access = match get.property.as_ref() {
    Expr::StringLiteral(name) if is_safe_property_name(name) => Some(name.as_str()),
    _ => None,
  };
  match peel(&get.expr, ctx.dialect) {
    // `1.x` would lex as a malformed number.
    Expr::NumberLiteral(value) if *value >= 0 && dot_access.is_some() => {
      write!(out, "{value}.")?;
    }
    // An instantiation expression cannot be followed by a property access.
    Expr::WithTypeArguments(_) if ctx.is_typescript() => {
      write_wrapped(out, &get.expr, true, indent, ctx)?;
    }
    _ => write_operand(out, &get.expr, CALL_MEMBER_PRECEDENCE, indent, ctx)?,
  }
  match dot_access {
    Some(name) => {
      out.push('.');
      out.push_str(name);
    }
    None => {
      out.push('[');
      write_expr(out, &get.property, indent, ctx)?;
      out.push(']');
    }
  }
  Ok(())
}

fn write_arguments(out: &mut String, arguments: &[Expr], indent: usize, ctx: &Context) -> RenderResult {
  out.push('(');
  for (i, argument) in arguments.iter().enumerate() {
    if i > 0 {
      out.push_str(", ");
    }
    write_expr(out, argument, indent, ctx)?;
  }
  out.push(')');
  Ok(())
}

fn write_object_literal(
  out: &mut String,
  members: &[Member],
  indent: usize,
  ctx: &Context,
) -> RenderResult {
  if members.is_empty() {
    out.push_str("{}");
    return Ok(());
  }
  out.push_str("{ ");
  for (i, member) in members.iter().enumerate() {
    if i > 0 {
      out.push_str(", ");
    }
    match member {
      Member::Spread(expr) => {
        out.push_str("...");
        write_expr(out, expr, indent, ctx)?;
      }
      Member::KeyValue(KeyValue {
        key: Expr::StringLiteral(key),
        value,
      }) => {
        if is_valid_bare_identifier(key)
          && matches!(value, Expr::Variable(name) if name.as_str() == key.as_str())
        {
          out.push_str(key);
          continue;
        }
        if is_safe_property_name(key) {
          out.push_str(key);
        } else {
          write_string_literal(out, key);
        }
        out.push_str(": ");
        write_expr(out, value, indent, ctx)?;
      }
      Member::KeyValue(KeyValue { key, value }) => {
        out.push('[');
        write_expr(out, key, indent, ctx)?;
        out.push_str("]: ");
        write_expr(out, value, indent, ctx)?;
      }
    }
  }
  out.push_str(" }");
  Ok(())
}

/// The shared shape of lambdas and function definitions:
/// `async <T extends unknown>(a: A): R => body`.
pub(crate) struct FunctionParts<'n> {
  pub is_async: bool,
  pub type_parameters: &'n [TypeParameter],
  pub parameters: &'n [(&'n Identifier, Option<&'n Type>)],
  pub return_type: Option<&'n Type>,
  pub statements: &'n [Statement],
}

pub(crate) fn write_function_parts(
  out: &mut String,
  parts: FunctionParts,
  indent: usize,
  ctx: &Context,
) -> RenderResult {
  let variables = ctx
    .variables
    .push(parts.parameters.iter().map(|(name, _)| Identifier::clone(name)));
  let types = ctx
    .types
    .push(parts.type_parameters.iter().map(|p| p.name.clone()));
  let inner = ctx.with_scopes(&variables, &types);

  if parts.is_async {
    out.push_str("async ");
  }
  write_type_parameters(out, parts.type_parameters, indent, &inner)?;
  out.push('(');
  for (i, (name, ty)) in parts.parameters.iter().enumerate() {
    if i > 0 {
      out.push_str(", ");
    }
    out.push_str(name.as_str());
    write_annotation(out, *ty, indent, &inner)?;
  }
  out.push(')');
  write_annotation(out, parts.return_type, indent, &inner)?;
  out.push_str(" => ");

  match parts.statements {
    // Compared against the lambda itself, so a bare object literal body gets
    // parenthesized instead of being read as a block.
    [Statement::Return(expr)] => {
      let wrap = needs_parens(expr_prec(expr, ctx.dialect), LAMBDA_PRECEDENCE);
      write_wrapped(out, expr, wrap, indent, &inner)
    }
    statements => write_block(out, statements, indent, &inner, Vec::new()),
  }
}
