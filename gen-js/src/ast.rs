//! Syntax tree consumed by the generator.
//!
//! The tree is plain owned data: every child is owned by its parent, there is
//! no sharing and no cycles. It serializes with serde so a module can be handed
//! over as JSON (see `gen-js-cli`); each enum is adjacently tagged as
//! `{"type": "...", "value": ...}`.

use crate::identifier::Identifier;
use serde::{Deserialize, Serialize};

/// Whether the emitted text carries static type annotations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
  /// TypeScript: annotations, type aliases, type parameters and `as` are emitted.
  TypeScript,
  /// JavaScript: everything type-level is omitted.
  JavaScript,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
  #[serde(default)]
  pub definitions: Vec<Definition>,
  /// Script-style statements emitted after the definitions.
  #[serde(default)]
  pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Definition {
  TypeAlias(TypeAlias),
  Function(FunctionDefinition),
  Variable(VariableDefinition),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeAlias {
  #[serde(default)]
  pub export: bool,
  pub name: Identifier,
  #[serde(default)]
  pub type_parameters: Vec<TypeParameter>,
  #[serde(default)]
  pub document: String,
  pub ty: Type,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
  #[serde(default)]
  pub export: bool,
  #[serde(default)]
  pub is_async: bool,
  pub name: Identifier,
  #[serde(default)]
  pub document: String,
  #[serde(default)]
  pub type_parameters: Vec<TypeParameter>,
  #[serde(default)]
  pub parameters: Vec<ParameterWithDocument>,
  pub return_type: Type,
  #[serde(default)]
  pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterWithDocument {
  pub name: Identifier,
  #[serde(default)]
  pub document: String,
  pub ty: Type,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableDefinition {
  #[serde(default)]
  pub export: bool,
  pub name: Identifier,
  #[serde(default)]
  pub document: String,
  /// Inferred by the consumer's compiler when absent.
  #[serde(default)]
  pub ty: Option<Type>,
  pub expr: Expr,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeParameter {
  pub name: Identifier,
  /// Emitted as `extends unknown` when absent.
  #[serde(default)]
  pub constraint: Option<Type>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Statement {
  EvaluateExpr(Expr),
  Set(SetStatement),
  If(IfStatement),
  ThrowError(Expr),
  Return(Expr),
  ReturnVoid,
  Continue,
  Break,
  VariableDefinition(LocalVariable),
  FunctionDefinition(LocalFunction),
  For(ForStatement),
  ForOf(ForOfStatement),
  WhileTrue(Vec<Statement>),
  Switch(SwitchStatement),
  TryCatch(TryCatchStatement),
}

/// `target = expr;` or, with an operator, `target += expr;`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetStatement {
  pub target: Expr,
  #[serde(default)]
  pub operator: Option<AssignmentOperator>,
  pub expr: Expr,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IfStatement {
  pub condition: Expr,
  pub then_statements: Vec<Statement>,
  /// The `else` block is omitted when empty.
  #[serde(default)]
  pub else_statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocalVariable {
  pub is_const: bool,
  pub name: Identifier,
  #[serde(default)]
  pub ty: Option<Type>,
  pub expr: Expr,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocalFunction {
  #[serde(default)]
  pub is_async: bool,
  pub name: Identifier,
  #[serde(default)]
  pub type_parameters: Vec<TypeParameter>,
  #[serde(default)]
  pub parameters: Vec<Parameter>,
  pub return_type: Type,
  pub statements: Vec<Statement>,
}

/// `for (let counter = 0; counter < until; counter += 1)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForStatement {
  pub counter: Identifier,
  pub until: Expr,
  pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForOfStatement {
  pub element: Identifier,
  pub iterable: Expr,
  pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwitchStatement {
  pub expr: Expr,
  pub patterns: Vec<SwitchPattern>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwitchPattern {
  pub case_string: String,
  pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TryCatchStatement {
  pub try_statements: Vec<Statement>,
  pub catch_parameter: Identifier,
  pub catch_statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Expr {
  NumberLiteral(i32),
  StringLiteral(String),
  BooleanLiteral(bool),
  NullLiteral,
  UndefinedLiteral,
  UnaryOperator(UnaryOperatorExpr),
  BinaryOperator(BinaryOperatorExpr),
  ConditionalOperator(ConditionalOperatorExpr),
  ArrayLiteral(Vec<ArrayItem>),
  ObjectLiteral(Vec<Member>),
  Lambda(LambdaExpr),
  /// Reference to a binding of the current module (root or local).
  Variable(Identifier),
  /// Reference to a built-in such as `Math` or `console`.
  GlobalObject(Identifier),
  ImportedVariable(ImportedName),
  Get(GetExpr),
  Call(CallExpr),
  New(CallExpr),
  TypeAssertion(TypeAssertionExpr),
  WithTypeArguments(WithTypeArgumentsExpr),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnaryOperatorExpr {
  pub operator: UnaryOperator,
  pub expr: Box<Expr>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
  Minus,
  BitwiseNot,
  LogicalNot,
  TypeOf,
  Await,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinaryOperatorExpr {
  pub operator: BinaryOperator,
  pub left: Box<Expr>,
  pub right: Box<Expr>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
  Exponentiation,
  Multiplication,
  Division,
  Remainder,
  Addition,
  Subtraction,
  LeftShift,
  SignedRightShift,
  UnsignedRightShift,
  LessThan,
  LessThanOrEqual,
  Equal,
  NotEqual,
  BitwiseAnd,
  BitwiseXor,
  BitwiseOr,
  LogicalAnd,
  LogicalOr,
  NullishCoalescing,
}

/// Operators allowed in a compound assignment. Comparisons have no `=` form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentOperator {
  Exponentiation,
  Multiplication,
  Division,
  Remainder,
  Addition,
  Subtraction,
  LeftShift,
  SignedRightShift,
  UnsignedRightShift,
  BitwiseAnd,
  BitwiseXor,
  BitwiseOr,
  LogicalAnd,
  LogicalOr,
  NullishCoalescing,
}

impl AssignmentOperator {
  pub const ALL: [AssignmentOperator; 15] = [
    AssignmentOperator::Exponentiation,
    AssignmentOperator::Multiplication,
    AssignmentOperator::Division,
    AssignmentOperator::Remainder,
    AssignmentOperator::Addition,
    AssignmentOperator::Subtraction,
    AssignmentOperator::LeftShift,
    AssignmentOperator::SignedRightShift,
    AssignmentOperator::UnsignedRightShift,
    AssignmentOperator::BitwiseAnd,
    AssignmentOperator::BitwiseXor,
    AssignmentOperator::BitwiseOr,
    AssignmentOperator::LogicalAnd,
    AssignmentOperator::LogicalOr,
    AssignmentOperator::NullishCoalescing,
  ];
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConditionalOperatorExpr {
  pub condition: Box<Expr>,
  pub then_expr: Box<Expr>,
  pub else_expr: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrayItem {
  pub expr: Expr,
  #[serde(default)]
  pub spread: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Member {
  Spread(Expr),
  KeyValue(KeyValue),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyValue {
  /// A string literal key is written bare when it is a safe property name,
  /// any other key is computed (`[key]`).
  pub key: Expr,
  pub value: Expr,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LambdaExpr {
  #[serde(default)]
  pub is_async: bool,
  #[serde(default)]
  pub type_parameters: Vec<TypeParameter>,
  #[serde(default)]
  pub parameters: Vec<Parameter>,
  #[serde(default)]
  pub return_type: Option<Type>,
  pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
  pub name: Identifier,
  #[serde(default)]
  pub ty: Option<Type>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportedName {
  pub module_path: String,
  /// Export name, read as a property of the namespace (`a.default` is fine).
  pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetExpr {
  pub expr: Box<Expr>,
  pub property: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
  pub expr: Box<Expr>,
  #[serde(default)]
  pub arguments: Vec<Expr>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeAssertionExpr {
  pub expr: Box<Expr>,
  pub ty: Type,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WithTypeArgumentsExpr {
  pub expr: Box<Expr>,
  pub type_arguments: Vec<Type>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Type {
  Number,
  String,
  Boolean,
  Undefined,
  Null,
  Never,
  Void,
  Unknown,
  Object(Vec<MemberType>),
  Function(FunctionType),
  /// An empty union is `never`.
  Union(Vec<Type>),
  Intersection(IntersectionType),
  ImportedType(ImportedType),
  /// A type alias or type parameter of the current module.
  ScopeInFile(TypeNameAndArguments),
  /// A built-in type such as `Date` or `Promise`.
  ScopeInGlobal(TypeNameAndArguments),
  /// A type reached through a global namespace, e.g. `Intl.DateTimeFormat`.
  WithNamespace(NamespacedType),
  StringLiteral(String),
  UniqueSymbol,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberType {
  pub name: PropertyName,
  pub required: bool,
  pub readonly: bool,
  pub ty: Type,
  #[serde(default)]
  pub document: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum PropertyName {
  String(String),
  /// Computed key such as `[Symbol.iterator]`.
  SymbolExpr(Expr),
}

/// Parameter names of function types are minted (`a`, `b`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionType {
  #[serde(default)]
  pub type_parameters: Vec<TypeParameter>,
  pub parameters: Vec<Type>,
  pub return_type: Box<Type>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntersectionType {
  pub left: Box<Type>,
  pub right: Box<Type>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportedType {
  pub module_path: String,
  pub name_and_arguments: TypeNameAndArguments,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeNameAndArguments {
  pub name: Identifier,
  #[serde(default)]
  pub arguments: Vec<Type>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamespacedType {
  pub namespace: Vec<Identifier>,
  pub name_and_arguments: TypeNameAndArguments,
}
