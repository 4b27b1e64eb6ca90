use crate::ast::{AssignmentOperator, BinaryOperator, Dialect, Expr, UnaryOperator};

/// Binding strength of an expression. Higher binds tighter.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Prec(u8);

impl Prec {
  pub const fn new(value: u8) -> Self {
    Prec(value)
  }

  pub const fn tighter(self) -> Self {
    Prec(self.0 + 1)
  }
}

/// Literals, references, and instantiation expressions.
pub const PRIMARY_PRECEDENCE: Prec = Prec::new(23);
pub const LAMBDA_PRECEDENCE: Prec = Prec::new(22);
pub const OBJECT_LITERAL_PRECEDENCE: Prec = Prec::new(21);
/// Member access, calls and `new`.
pub const CALL_MEMBER_PRECEDENCE: Prec = Prec::new(20);
pub const UNARY_PRECEDENCE: Prec = Prec::new(17);
pub const CONDITIONAL_PRECEDENCE: Prec = Prec::new(4);
pub const TYPE_ASSERTION_PRECEDENCE: Prec = Prec::new(3);
/// A lambda in operand position (callee, member target, operator operand)
/// has to be parenthesized no matter the operator.
pub const LAMBDA_OPERAND_PRECEDENCE: Prec = Prec::new(2);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
  Left,
  Right,
}

#[derive(Clone, Copy, Debug)]
pub enum Side {
  Left,
  Right,
}

pub fn needs_parens(child_prec: Prec, min_prec: Prec) -> bool {
  child_prec < min_prec
}

pub fn binary_prec(op: BinaryOperator) -> Prec {
  use BinaryOperator::*;
  Prec::new(match op {
    Exponentiation => 16,
    Multiplication | Division | Remainder => 15,
    Addition | Subtraction => 14,
    LeftShift | SignedRightShift | UnsignedRightShift => 13,
    LessThan | LessThanOrEqual => 12,
    Equal | NotEqual => 11,
    BitwiseAnd => 10,
    BitwiseXor => 9,
    BitwiseOr => 8,
    LogicalAnd => 6,
    LogicalOr | NullishCoalescing => 5,
  })
}

pub fn associativity(op: BinaryOperator) -> Associativity {
  match op {
    BinaryOperator::Exponentiation => Associativity::Right,
    _ => Associativity::Left,
  }
}

/// Minimum strength an operand must have to be written bare on `side`. An
/// operand of equal strength on the side that associates away from it gets
/// parentheses.
pub fn child_min_prec_for_binary(op: BinaryOperator, side: Side) -> Prec {
  let prec = binary_prec(op);
  match (associativity(op), side) {
    (Associativity::Left, Side::Left) | (Associativity::Right, Side::Right) => prec,
    (Associativity::Left, Side::Right) | (Associativity::Right, Side::Left) => prec.tighter(),
  }
}

pub fn unary_operator_text(op: UnaryOperator) -> &'static str {
  match op {
    UnaryOperator::Minus => "-",
    UnaryOperator::BitwiseNot => "~",
    UnaryOperator::LogicalNot => "!",
    UnaryOperator::TypeOf => "typeof ",
    UnaryOperator::Await => "await ",
  }
}

pub fn assignment_operator_text(op: AssignmentOperator) -> &'static str {
  use AssignmentOperator::*;
  match op {
    Exponentiation => "**=",
    Multiplication => "*=",
    Division => "/=",
    Remainder => "%=",
    Addition => "+=",
    Subtraction => "-=",
    LeftShift => "<<=",
    SignedRightShift => ">>=",
    UnsignedRightShift => ">>>=",
    BitwiseAnd => "&=",
    BitwiseXor => "^=",
    BitwiseOr => "|=",
    LogicalAnd => "&&=",
    LogicalOr => "||=",
    NullishCoalescing => "??=",
  }
}

pub fn binary_operator_text(op: BinaryOperator) -> &'static str {
  use BinaryOperator::*;
  match op {
    Exponentiation => "**",
    Multiplication => "*",
    Division => "/",
    Remainder => "%",
    Addition => "+",
    Subtraction => "-",
    LeftShift => "<<",
    SignedRightShift => ">>",
    UnsignedRightShift => ">>>",
    LessThan => "<",
    LessThanOrEqual => "<=",
    Equal => "===",
    NotEqual => "!==",
    BitwiseAnd => "&",
    BitwiseXor => "^",
    BitwiseOr => "|",
    LogicalAnd => "&&",
    LogicalOr => "||",
    NullishCoalescing => "??",
  }
}

/// Strips nodes that produce no text in `dialect`, so decisions about the
/// surrounding syntax look at what is actually written.
pub fn peel(expr: &Expr, dialect: Dialect) -> &Expr {
  match (expr, dialect) {
    (Expr::TypeAssertion(assertion), Dialect::JavaScript) => peel(&assertion.expr, dialect),
    (Expr::WithTypeArguments(with), Dialect::JavaScript) => peel(&with.expr, dialect),
    _ => expr,
  }
}

pub fn expr_prec(expr: &Expr, dialect: Dialect) -> Prec {
  match peel(expr, dialect) {
    Expr::NumberLiteral(value) if *value < 0 => UNARY_PRECEDENCE,
    Expr::NumberLiteral(_)
    | Expr::StringLiteral(_)
    | Expr::BooleanLiteral(_)
    | Expr::NullLiteral
    | Expr::UndefinedLiteral
    | Expr::ArrayLiteral(_)
    | Expr::Variable(_)
    | Expr::GlobalObject(_)
    | Expr::ImportedVariable(_)
    | Expr::WithTypeArguments(_) => PRIMARY_PRECEDENCE,
    Expr::Lambda(_) => LAMBDA_PRECEDENCE,
    Expr::ObjectLiteral(_) => OBJECT_LITERAL_PRECEDENCE,
    Expr::Get(_) | Expr::Call(_) | Expr::New(_) => CALL_MEMBER_PRECEDENCE,
    Expr::UnaryOperator(_) => UNARY_PRECEDENCE,
    Expr::BinaryOperator(binary) => binary_prec(binary.operator),
    Expr::ConditionalOperator(_) => CONDITIONAL_PRECEDENCE,
    Expr::TypeAssertion(_) => TYPE_ASSERTION_PRECEDENCE,
  }
}

/// Strength of `expr` when it is the operand of an operator, callee, or
/// member target.
pub fn operand_prec(expr: &Expr, dialect: Dialect) -> Prec {
  match peel(expr, dialect) {
    Expr::Lambda(_) => LAMBDA_OPERAND_PRECEDENCE,
    _ => expr_prec(expr, dialect),
  }
}

/// `-x ** 2` and `(-1) ** 2` are syntax errors without parentheses.
pub fn is_unary_like(expr: &Expr, dialect: Dialect) -> bool {
  match peel(expr, dialect) {
    Expr::UnaryOperator(_) => true,
    Expr::NumberLiteral(value) => *value < 0,
    _ => false,
  }
}

fn is_logical_and_or(expr: &Expr, dialect: Dialect) -> bool {
  matches!(
    peel(expr, dialect),
    Expr::BinaryOperator(binary)
      if matches!(binary.operator, BinaryOperator::LogicalAnd | BinaryOperator::LogicalOr)
  )
}

fn is_nullish(expr: &Expr, dialect: Dialect) -> bool {
  matches!(
    peel(expr, dialect),
    Expr::BinaryOperator(binary) if binary.operator == BinaryOperator::NullishCoalescing
  )
}

/// `??` cannot be mixed with `&&` or `||` without explicit grouping.
pub fn mixes_nullish(op: BinaryOperator, operand: &Expr, dialect: Dialect) -> bool {
  match op {
    BinaryOperator::NullishCoalescing => is_logical_and_or(operand, dialect),
    BinaryOperator::LogicalAnd | BinaryOperator::LogicalOr => is_nullish(operand, dialect),
    _ => false,
  }
}

/// Whether a `new` callee has a call in its member chain, which would
/// otherwise be taken as the constructor's own argument list.
pub fn has_call_in_member_chain(expr: &Expr, dialect: Dialect) -> bool {
  match peel(expr, dialect) {
    Expr::Call(_) => true,
    Expr::Get(get) => has_call_in_member_chain(&get.expr, dialect),
    Expr::WithTypeArguments(with) => has_call_in_member_chain(&with.expr, dialect),
    _ => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn left_associative_operators_wrap_right_operand() {
    let add = child_min_prec_for_binary(BinaryOperator::Addition, Side::Right);
    assert!(needs_parens(binary_prec(BinaryOperator::Subtraction), add));
    let add = child_min_prec_for_binary(BinaryOperator::Addition, Side::Left);
    assert!(!needs_parens(binary_prec(BinaryOperator::Subtraction), add));
  }

  #[test]
  fn exponentiation_wraps_left_operand() {
    let left = child_min_prec_for_binary(BinaryOperator::Exponentiation, Side::Left);
    let right = child_min_prec_for_binary(BinaryOperator::Exponentiation, Side::Right);
    assert!(needs_parens(binary_prec(BinaryOperator::Exponentiation), left));
    assert!(!needs_parens(binary_prec(BinaryOperator::Exponentiation), right));
  }

  #[test]
  fn nullish_mixing_is_detected_both_ways() {
    let and = Expr::BinaryOperator(crate::ast::BinaryOperatorExpr {
      operator: BinaryOperator::LogicalAnd,
      left: Box::new(Expr::NullLiteral),
      right: Box::new(Expr::NullLiteral),
    });
    assert!(mixes_nullish(BinaryOperator::NullishCoalescing, &and, Dialect::TypeScript));
    assert!(!mixes_nullish(BinaryOperator::LogicalOr, &and, Dialect::TypeScript));
  }
}
