//! Shorthand constructors for tree values.

use crate::ast::*;
use crate::identifier::Identifier;

pub fn number(value: i32) -> Expr {
  Expr::NumberLiteral(value)
}

pub fn string(value: &str) -> Expr {
  Expr::StringLiteral(value.to_string())
}

pub fn boolean(value: bool) -> Expr {
  Expr::BooleanLiteral(value)
}

pub fn variable(name: &str) -> Expr {
  Expr::Variable(Identifier::new(name))
}

pub fn global_object(name: &str) -> Expr {
  Expr::GlobalObject(Identifier::new(name))
}

pub fn imported_variable(module_path: &str, name: &str) -> Expr {
  Expr::ImportedVariable(ImportedName {
    module_path: module_path.to_string(),
    name: name.to_string(),
  })
}

/// `expr.property`, or `expr["property"]` when the name needs quoting.
pub fn get(expr: Expr, property: &str) -> Expr {
  get_by_expr(expr, string(property))
}

pub fn get_by_expr(expr: Expr, property: Expr) -> Expr {
  Expr::Get(GetExpr {
    expr: Box::new(expr),
    property: Box::new(property),
  })
}

pub fn call(expr: Expr, arguments: Vec<Expr>) -> Expr {
  Expr::Call(CallExpr {
    expr: Box::new(expr),
    arguments,
  })
}

pub fn call_method(expr: Expr, method: &str, arguments: Vec<Expr>) -> Expr {
  call(get(expr, method), arguments)
}

pub fn new(expr: Expr, arguments: Vec<Expr>) -> Expr {
  Expr::New(CallExpr {
    expr: Box::new(expr),
    arguments,
  })
}

pub fn unary(operator: UnaryOperator, expr: Expr) -> Expr {
  Expr::UnaryOperator(UnaryOperatorExpr {
    operator,
    expr: Box::new(expr),
  })
}

pub fn minus(expr: Expr) -> Expr {
  unary(UnaryOperator::Minus, expr)
}

pub fn logical_not(expr: Expr) -> Expr {
  unary(UnaryOperator::LogicalNot, expr)
}

pub fn type_of(expr: Expr) -> Expr {
  unary(UnaryOperator::TypeOf, expr)
}

pub fn await_(expr: Expr) -> Expr {
  unary(UnaryOperator::Await, expr)
}

pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Expr {
  Expr::BinaryOperator(BinaryOperatorExpr {
    operator,
    left: Box::new(left),
    right: Box::new(right),
  })
}

pub fn exponentiation(left: Expr, right: Expr) -> Expr {
  binary(BinaryOperator::Exponentiation, left, right)
}

pub fn multiplication(left: Expr, right: Expr) -> Expr {
  binary(BinaryOperator::Multiplication, left, right)
}

pub fn addition(left: Expr, right: Expr) -> Expr {
  binary(BinaryOperator::Addition, left, right)
}

pub fn subtraction(left: Expr, right: Expr) -> Expr {
  binary(BinaryOperator::Subtraction, left, right)
}

pub fn less_than(left: Expr, right: Expr) -> Expr {
  binary(BinaryOperator::LessThan, left, right)
}

pub fn equal(left: Expr, right: Expr) -> Expr {
  binary(BinaryOperator::Equal, left, right)
}

pub fn not_equal(left: Expr, right: Expr) -> Expr {
  binary(BinaryOperator::NotEqual, left, right)
}

pub fn logical_and(left: Expr, right: Expr) -> Expr {
  binary(BinaryOperator::LogicalAnd, left, right)
}

pub fn logical_or(left: Expr, right: Expr) -> Expr {
  binary(BinaryOperator::LogicalOr, left, right)
}

pub fn nullish_coalescing(left: Expr, right: Expr) -> Expr {
  binary(BinaryOperator::NullishCoalescing, left, right)
}

pub fn conditional(condition: Expr, then_expr: Expr, else_expr: Expr) -> Expr {
  Expr::ConditionalOperator(ConditionalOperatorExpr {
    condition: Box::new(condition),
    then_expr: Box::new(then_expr),
    else_expr: Box::new(else_expr),
  })
}

pub fn array_literal(items: Vec<Expr>) -> Expr {
  Expr::ArrayLiteral(
    items
      .into_iter()
      .map(|expr| ArrayItem { expr, spread: false })
      .collect(),
  )
}

pub fn object_literal(members: Vec<Member>) -> Expr {
  Expr::ObjectLiteral(members)
}

pub fn member_key_value(key: &str, value: Expr) -> Member {
  Member::KeyValue(KeyValue {
    key: string(key),
    value,
  })
}

pub fn member_spread(expr: Expr) -> Member {
  Member::Spread(expr)
}

pub fn parameter(name: &str, ty: Type) -> Parameter {
  Parameter {
    name: Identifier::new(name),
    ty: Some(ty),
  }
}

pub fn lambda(parameters: Vec<Parameter>, return_type: Type, statements: Vec<Statement>) -> Expr {
  Expr::Lambda(LambdaExpr {
    is_async: false,
    type_parameters: Vec::new(),
    parameters,
    return_type: Some(return_type),
    statements,
  })
}

pub fn type_assertion(expr: Expr, ty: Type) -> Expr {
  Expr::TypeAssertion(TypeAssertionExpr {
    expr: Box::new(expr),
    ty,
  })
}

pub fn with_type_arguments(expr: Expr, type_arguments: Vec<Type>) -> Expr {
  Expr::WithTypeArguments(WithTypeArgumentsExpr {
    expr: Box::new(expr),
    type_arguments,
  })
}

/// `console.log(expr);`
pub fn console_log(expr: Expr) -> Statement {
  statement_evaluate(call_method(global_object("console"), "log", vec![expr]))
}

pub fn statement_evaluate(expr: Expr) -> Statement {
  Statement::EvaluateExpr(expr)
}

pub fn statement_return(expr: Expr) -> Statement {
  Statement::Return(expr)
}

pub fn statement_set(target: Expr, operator: Option<AssignmentOperator>, expr: Expr) -> Statement {
  Statement::Set(SetStatement {
    target,
    operator,
    expr,
  })
}

pub fn statement_if(condition: Expr, then_statements: Vec<Statement>) -> Statement {
  Statement::If(IfStatement {
    condition,
    then_statements,
    else_statements: Vec::new(),
  })
}

pub fn statement_const(name: &str, ty: Option<Type>, expr: Expr) -> Statement {
  Statement::VariableDefinition(LocalVariable {
    is_const: true,
    name: Identifier::new(name),
    ty,
    expr,
  })
}

pub fn statement_let(name: &str, ty: Option<Type>, expr: Expr) -> Statement {
  Statement::VariableDefinition(LocalVariable {
    is_const: false,
    name: Identifier::new(name),
    ty,
    expr,
  })
}

pub fn type_parameter(name: &str) -> TypeParameter {
  TypeParameter {
    name: Identifier::new(name),
    constraint: None,
  }
}

/// A required, readonly member.
pub fn member_type(name: &str, ty: Type) -> MemberType {
  MemberType {
    name: PropertyName::String(name.to_string()),
    required: true,
    readonly: true,
    ty,
    document: String::new(),
  }
}

pub fn type_object(members: Vec<MemberType>) -> Type {
  Type::Object(members)
}

pub fn type_union(types: Vec<Type>) -> Type {
  Type::Union(types)
}

pub fn type_scope_in_file(name: &str) -> Type {
  Type::ScopeInFile(TypeNameAndArguments {
    name: Identifier::new(name),
    arguments: Vec::new(),
  })
}

pub fn type_global(name: &str, arguments: Vec<Type>) -> Type {
  Type::ScopeInGlobal(TypeNameAndArguments {
    name: Identifier::new(name),
    arguments,
  })
}

pub fn type_imported(module_path: &str, name: &str) -> Type {
  Type::ImportedType(ImportedType {
    module_path: module_path.to_string(),
    name_and_arguments: TypeNameAndArguments {
      name: Identifier::new(name),
      arguments: Vec::new(),
    },
  })
}

pub fn promise_type(ty: Type) -> Type {
  type_global("Promise", vec![ty])
}

pub fn readonly_array_type(ty: Type) -> Type {
  type_global("ReadonlyArray", vec![ty])
}

pub fn date_type() -> Type {
  type_global("Date", Vec::new())
}
