use super::escape::write_string_literal;
use super::expr::{write_expr, write_function_parts, write_operand, FunctionParts};
use super::precedence::{assignment_operator_text, child_min_prec_for_binary, Side};
use super::ty::write_annotation;
use super::{indentation, Context};
use crate::ast::*;
use crate::error::RenderResult;
use crate::identifier::Identifier;
use crate::scope::block_bindings;

/// Writes `{ ... }` at `indent`, statements one level deeper. The block's own
/// declarations and `bindings` are in scope for all of its statements.
pub(crate) fn write_block(
  out: &mut String,
  statements: &[Statement],
  indent: usize,
  ctx: &Context,
  bindings: Vec<Identifier>,
) -> RenderResult {
  if statements.is_empty() {
    out.push_str("{}");
    return Ok(());
  }
  let variables = ctx
    .variables
    .push(bindings.into_iter().chain(block_bindings(statements)));
  let inner = ctx.with_scopes(&variables, ctx.types);

  out.push_str("{\n");
  for statement in statements {
    write_statement(out, statement, indent + 1, &inner)?;
    out.push('\n');
  }
  out.push_str(&indentation(indent));
  out.push('}');
  Ok(())
}

/// Writes an expression that opens a statement. A leading `{` would start a
/// block, so such expressions are parenthesized.
fn write_statement_expr(out: &mut String, expr: &Expr, indent: usize, ctx: &Context) -> RenderResult {
  let mut text = String::new();
  write_expr(&mut text, expr, indent, ctx)?;
  if text.starts_with('{') {
    out.push('(');
    out.push_str(&text);
    out.push(')');
  } else {
    out.push_str(&text);
  }
  Ok(())
}

fn write_statement(out: &mut String, statement: &Statement, indent: usize, ctx: &Context) -> RenderResult {
  out.push_str(&indentation(indent));
  match statement {
    Statement::EvaluateExpr(expr) => {
      write_statement_expr(out, expr, indent, ctx)?;
      out.push(';');
    }
    Statement::Set(set) => {
      write_statement_expr(out, &set.target, indent, ctx)?;
      out.push(' ');
      out.push_str(set.operator.map_or("=", assignment_operator_text));
      out.push(' ');
      write_expr(out, &set.expr, indent, ctx)?;
      out.push(';');
    }
    Statement::If(stmt) => {
      out.push_str("if (");
      write_expr(out, &stmt.condition, indent, ctx)?;
      out.push_str(") ");
      write_block(out, &stmt.then_statements, indent, ctx, Vec::new())?;
      if !stmt.else_statements.is_empty() {
        out.push_str(" else ");
        write_block(out, &stmt.else_statements, indent, ctx, Vec::new())?;
      }
    }
    Statement::ThrowError(expr) => {
      out.push_str("throw ");
      write_expr(out, expr, indent, ctx)?;
      out.push(';');
    }
    Statement::Return(expr) => {
      out.push_str("return ");
      write_expr(out, expr, indent, ctx)?;
      out.push(';');
    }
    Statement::ReturnVoid => out.push_str("return;"),
    Statement::Continue => out.push_str("continue;"),
    Statement::Break => out.push_str("break;"),
    Statement::VariableDefinition(variable) => {
      out.push_str(if variable.is_const { "const " } else { "let " });
      out.push_str(variable.name.as_str());
      write_annotation(out, variable.ty.as_ref(), indent, ctx)?;
      out.push_str(" = ");
      write_expr(out, &variable.expr, indent, ctx)?;
      out.push(';');
    }
    Statement::FunctionDefinition(function) => {
      out.push_str("const ");
      out.push_str(function.name.as_str());
      out.push_str(" = ");
      let parameters: Vec<_> = function
        .parameters
        .iter()
        .map(|p| (&p.name, p.ty.as_ref()))
        .collect();
      write_function_parts(
        out,
        FunctionParts {
          is_async: function.is_async,
          type_parameters: &function.type_parameters,
          parameters: &parameters,
          return_type: Some(&function.return_type),
          statements: &function.statements,
        },
        indent,
        ctx,
      )?;
      out.push(';');
    }
    Statement::For(stmt) => {
      let counter = stmt.counter.as_str();
      out.push_str("for (let ");
      out.push_str(counter);
      out.push_str(" = 0; ");
      out.push_str(counter);
      out.push_str(" < ");
      let variables = ctx.variables.push([stmt.counter.clone()]);
      write_operand(
        out,
        &stmt.until,
        child_min_prec_for_binary(BinaryOperator::LessThan, Side::Right),
        indent,
        &ctx.with_scopes(&variables, ctx.types),
      )?;
      out.push_str("; ");
      out.push_str(counter);
      out.push_str(" += 1) ");
      write_block(out, &stmt.statements, indent, ctx, vec![stmt.counter.clone()])?;
    }
    Statement::ForOf(stmt) => {
      out.push_str("for (const ");
      out.push_str(stmt.element.as_str());
      out.push_str(" of ");
      write_expr(out, &stmt.iterable, indent, ctx)?;
      out.push_str(") ");
      write_block(out, &stmt.statements, indent, ctx, vec![stmt.element.clone()])?;
    }
    Statement::WhileTrue(statements) => {
      out.push_str("while (true) ");
      write_block(out, statements, indent, ctx, Vec::new())?;
    }
    Statement::Switch(stmt) => write_switch(out, stmt, indent, ctx)?,
    Statement::TryCatch(stmt) => {
      out.push_str("try ");
      write_block(out, &stmt.try_statements, indent, ctx, Vec::new())?;
      out.push_str(" catch (");
      out.push_str(stmt.catch_parameter.as_str());
      out.push_str(") ");
      write_block(
        out,
        &stmt.catch_statements,
        indent,
        ctx,
        vec![stmt.catch_parameter.clone()],
      )?;
    }
  }
  Ok(())
}

/// Each case body is its own block, so declarations in one case never clash
/// with another.
fn write_switch(out: &mut String, stmt: &SwitchStatement, indent: usize, ctx: &Context) -> RenderResult {
  out.push_str("switch (");
  write_expr(out, &stmt.expr, indent, ctx)?;
  out.push_str(") ");
  if stmt.patterns.is_empty() {
    out.push_str("{}");
    return Ok(());
  }
  let case_indent = indentation(indent + 1);
  out.push_str("{\n");
  for pattern in &stmt.patterns {
    out.push_str(&case_indent);
    out.push_str("case ");
    write_string_literal(out, &pattern.case_string);
    out.push_str(": ");
    write_block(out, &pattern.statements, indent + 1, ctx, Vec::new())?;
    out.push('\n');
  }
  out.push_str(&indentation(indent));
  out.push('}');
  Ok(())
}
