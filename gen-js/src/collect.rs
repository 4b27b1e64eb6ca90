//! Whole-module pass that runs before any text is produced.
//!
//! It gathers every name the import namespaces must avoid and every module
//! path that needs an import, and it rejects malformed trees: duplicated root
//! definitions, duplicated parameters or block locals, and references to
//! undefined locals.

use crate::ast::*;
use crate::error::{GenerateError, NameKind};
use crate::identifier::Identifier;
use crate::scope::{block_bindings, Scope};
use crate::UnresolvedVariables;
use ahash::HashSet;
use indexmap::IndexSet;
use tracing::{debug, debug_span, warn};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollectedNames {
  /// Names a minted import namespace must not take.
  pub used_names: IndexSet<Identifier>,
  /// Distinct module paths in the order they were first referenced.
  pub module_paths: IndexSet<String>,
}

/// Names bound at the top level of a module. Types and values live in
/// separate namespaces.
#[derive(Debug, Default)]
pub(crate) struct RootNames {
  pub types: IndexSet<Identifier>,
  pub variables: IndexSet<Identifier>,
}

pub(crate) fn root_names(definitions: &[Definition]) -> Result<RootNames, GenerateError> {
  let mut names = RootNames::default();
  for definition in definitions {
    let (set, name, kind) = match definition {
      Definition::TypeAlias(alias) => (&mut names.types, &alias.name, NameKind::RootTypeAlias),
      Definition::Function(function) => {
        (&mut names.variables, &function.name, NameKind::RootVariable)
      }
      Definition::Variable(variable) => {
        (&mut names.variables, &variable.name, NameKind::RootVariable)
      }
    };
    if !set.insert(name.clone()) {
      return Err(duplicate(kind, name));
    }
  }
  Ok(names)
}

fn duplicate(kind: NameKind, name: &Identifier) -> GenerateError {
  GenerateError::DuplicateName {
    kind,
    name: name.to_string(),
  }
}

fn check_unique<'a>(
  kind: NameKind,
  names: impl IntoIterator<Item = &'a Identifier>,
) -> Result<(), GenerateError> {
  let mut seen = HashSet::default();
  for name in names {
    if !seen.insert(name) {
      return Err(duplicate(kind, name));
    }
  }
  Ok(())
}

pub fn collect(
  module: &Module,
  unresolved: UnresolvedVariables,
) -> Result<CollectedNames, GenerateError> {
  let span = debug_span!("collect", definitions = module.definitions.len());
  let _enter = span.enter();

  let roots = root_names(&module.definitions)?;
  let mut collector = Collector {
    unresolved,
    out: CollectedNames::default(),
  };
  collector.out.used_names.extend(roots.types.iter().cloned());
  collector.out.used_names.extend(roots.variables.iter().cloned());

  let root_scope = Scope::root(roots.variables.iter().cloned());
  for definition in &module.definitions {
    collector.definition(definition, &root_scope)?;
  }
  collector.statements(&module.statements, &root_scope, Vec::new())?;

  debug!(
    used_names = collector.out.used_names.len(),
    module_paths = collector.out.module_paths.len(),
    "collected names"
  );
  Ok(collector.out)
}

struct Collector {
  unresolved: UnresolvedVariables,
  out: CollectedNames,
}

impl Collector {
  fn bind<'a>(&mut self, names: impl IntoIterator<Item = &'a Identifier>) {
    self.out.used_names.extend(names.into_iter().cloned());
  }

  fn type_parameters(
    &mut self,
    kind: NameKind,
    parameters: &[TypeParameter],
    scope: &Scope,
  ) -> Result<(), GenerateError> {
    check_unique(kind, parameters.iter().map(|p| &p.name))?;
    self.bind(parameters.iter().map(|p| &p.name));
    for parameter in parameters {
      if let Some(constraint) = &parameter.constraint {
        self.ty(constraint, scope)?;
      }
    }
    Ok(())
  }

  fn definition(&mut self, definition: &Definition, scope: &Scope) -> Result<(), GenerateError> {
    match definition {
      Definition::TypeAlias(alias) => {
        self.type_parameters(NameKind::TypeAliasTypeParameter, &alias.type_parameters, scope)?;
        self.ty(&alias.ty, scope)
      }
      Definition::Function(function) => {
        check_unique(
          NameKind::FunctionParameter,
          function.parameters.iter().map(|p| &p.name),
        )?;
        self.type_parameters(
          NameKind::FunctionTypeParameter,
          &function.type_parameters,
          scope,
        )?;
        self.bind(function.parameters.iter().map(|p| &p.name));
        for parameter in &function.parameters {
          self.ty(&parameter.ty, scope)?;
        }
        self.ty(&function.return_type, scope)?;
        self.statements(
          &function.statements,
          scope,
          function.parameters.iter().map(|p| p.name.clone()).collect(),
        )
      }
      Definition::Variable(variable) => {
        if let Some(ty) = &variable.ty {
          self.ty(ty, scope)?;
        }
        self.expr(&variable.expr, scope)
      }
    }
  }

  /// Collects a block. `bindings` are names bound by the construct owning the
  /// block (parameters, loop variables, the catch parameter).
  fn statements(
    &mut self,
    statements: &[Statement],
    scope: &Scope,
    bindings: Vec<Identifier>,
  ) -> Result<(), GenerateError> {
    let declared: Vec<Identifier> = block_bindings(statements).collect();
    check_unique(NameKind::BlockLocal, &declared)?;
    let locals: Vec<Identifier> = bindings.into_iter().chain(declared).collect();
    self.bind(&locals);
    let scope = scope.push(locals);
    for statement in statements {
      self.statement(statement, &scope)?;
    }
    Ok(())
  }

  fn statement(&mut self, statement: &Statement, scope: &Scope) -> Result<(), GenerateError> {
    match statement {
      Statement::EvaluateExpr(expr) | Statement::ThrowError(expr) | Statement::Return(expr) => {
        self.expr(expr, scope)
      }
      Statement::Set(set) => {
        self.expr(&set.target, scope)?;
        self.expr(&set.expr, scope)
      }
      Statement::If(stmt) => {
        self.expr(&stmt.condition, scope)?;
        self.statements(&stmt.then_statements, scope, Vec::new())?;
        self.statements(&stmt.else_statements, scope, Vec::new())
      }
      Statement::ReturnVoid | Statement::Continue | Statement::Break => Ok(()),
      Statement::VariableDefinition(variable) => {
        if let Some(ty) = &variable.ty {
          self.ty(ty, scope)?;
        }
        self.expr(&variable.expr, scope)
      }
      Statement::FunctionDefinition(function) => {
        check_unique(
          NameKind::LocalFunctionParameter,
          function.parameters.iter().map(|p| &p.name),
        )?;
        self.type_parameters(
          NameKind::LocalFunctionTypeParameter,
          &function.type_parameters,
          scope,
        )?;
        self.parameters(&function.parameters, scope)?;
        self.ty(&function.return_type, scope)?;
        self.statements(
          &function.statements,
          scope,
          function.parameters.iter().map(|p| p.name.clone()).collect(),
        )
      }
      Statement::For(stmt) => {
        // The bound is re-evaluated each iteration, with the counter in scope.
        let counter = scope.push([stmt.counter.clone()]);
        self.expr(&stmt.until, &counter)?;
        self.statements(&stmt.statements, scope, vec![stmt.counter.clone()])
      }
      Statement::ForOf(stmt) => {
        self.expr(&stmt.iterable, scope)?;
        self.statements(&stmt.statements, scope, vec![stmt.element.clone()])
      }
      Statement::WhileTrue(statements) => self.statements(statements, scope, Vec::new()),
      Statement::Switch(stmt) => {
        self.expr(&stmt.expr, scope)?;
        for pattern in &stmt.patterns {
          self.statements(&pattern.statements, scope, Vec::new())?;
        }
        Ok(())
      }
      Statement::TryCatch(stmt) => {
        self.statements(&stmt.try_statements, scope, Vec::new())?;
        self.statements(
          &stmt.catch_statements,
          scope,
          vec![stmt.catch_parameter.clone()],
        )
      }
    }
  }

  fn parameters(&mut self, parameters: &[Parameter], scope: &Scope) -> Result<(), GenerateError> {
    self.bind(parameters.iter().map(|p| &p.name));
    for parameter in parameters {
      if let Some(ty) = &parameter.ty {
        self.ty(ty, scope)?;
      }
    }
    Ok(())
  }

  fn variable(&mut self, name: &Identifier, scope: &Scope) -> Result<(), GenerateError> {
    if scope.contains(name.as_str()) {
      return Ok(());
    }
    match self.unresolved {
      UnresolvedVariables::Error => Err(GenerateError::UnresolvedVariable {
        name: name.to_string(),
      }),
      UnresolvedVariables::Warn => {
        warn!(name = %name, "variable is not defined in any enclosing scope");
        Ok(())
      }
    }
  }

  fn expr(&mut self, expr: &Expr, scope: &Scope) -> Result<(), GenerateError> {
    match expr {
      Expr::NumberLiteral(_)
      | Expr::StringLiteral(_)
      | Expr::BooleanLiteral(_)
      | Expr::NullLiteral
      | Expr::UndefinedLiteral => Ok(()),
      Expr::UnaryOperator(unary) => self.expr(&unary.expr, scope),
      Expr::BinaryOperator(binary) => {
        self.expr(&binary.left, scope)?;
        self.expr(&binary.right, scope)
      }
      Expr::ConditionalOperator(cond) => {
        self.expr(&cond.condition, scope)?;
        self.expr(&cond.then_expr, scope)?;
        self.expr(&cond.else_expr, scope)
      }
      Expr::ArrayLiteral(items) => {
        for item in items {
          self.expr(&item.expr, scope)?;
        }
        Ok(())
      }
      Expr::ObjectLiteral(members) => {
        for member in members {
          match member {
            Member::Spread(expr) => self.expr(expr, scope)?,
            Member::KeyValue(kv) => {
              self.expr(&kv.key, scope)?;
              self.expr(&kv.value, scope)?;
            }
          }
        }
        Ok(())
      }
      Expr::Lambda(lambda) => {
        check_unique(
          NameKind::LambdaParameter,
          lambda.parameters.iter().map(|p| &p.name),
        )?;
        self.type_parameters(NameKind::LambdaTypeParameter, &lambda.type_parameters, scope)?;
        self.parameters(&lambda.parameters, scope)?;
        if let Some(ty) = &lambda.return_type {
          self.ty(ty, scope)?;
        }
        self.statements(
          &lambda.statements,
          scope,
          lambda.parameters.iter().map(|p| p.name.clone()).collect(),
        )
      }
      Expr::Variable(name) => self.variable(name, scope),
      Expr::GlobalObject(name) => {
        self.out.used_names.insert(name.clone());
        Ok(())
      }
      Expr::ImportedVariable(imported) => {
        self.out.used_names.insert(Identifier::new(&imported.name));
        self.out.module_paths.insert(imported.module_path.clone());
        Ok(())
      }
      Expr::Get(get) => {
        self.expr(&get.expr, scope)?;
        self.expr(&get.property, scope)
      }
      Expr::Call(call) | Expr::New(call) => {
        self.expr(&call.expr, scope)?;
        for argument in &call.arguments {
          self.expr(argument, scope)?;
        }
        Ok(())
      }
      Expr::TypeAssertion(assertion) => {
        self.expr(&assertion.expr, scope)?;
        self.ty(&assertion.ty, scope)
      }
      Expr::WithTypeArguments(with) => {
        self.expr(&with.expr, scope)?;
        for ty in &with.type_arguments {
          self.ty(ty, scope)?;
        }
        Ok(())
      }
    }
  }

  fn name_and_arguments(
    &mut self,
    name_and_arguments: &TypeNameAndArguments,
    scope: &Scope,
  ) -> Result<(), GenerateError> {
    self.out.used_names.insert(name_and_arguments.name.clone());
    for argument in &name_and_arguments.arguments {
      self.ty(argument, scope)?;
    }
    Ok(())
  }

  fn ty(&mut self, ty: &Type, scope: &Scope) -> Result<(), GenerateError> {
    match ty {
      Type::Number
      | Type::String
      | Type::Boolean
      | Type::Undefined
      | Type::Null
      | Type::Never
      | Type::Void
      | Type::Unknown
      | Type::StringLiteral(_)
      | Type::UniqueSymbol => Ok(()),
      Type::Object(members) => {
        for member in members {
          if let PropertyName::SymbolExpr(expr) = &member.name {
            self.expr(expr, scope)?;
          }
          self.ty(&member.ty, scope)?;
        }
        Ok(())
      }
      Type::Function(function) => {
        self.type_parameters(
          NameKind::FunctionTypeTypeParameter,
          &function.type_parameters,
          scope,
        )?;
        for parameter in &function.parameters {
          self.ty(parameter, scope)?;
        }
        self.ty(&function.return_type, scope)
      }
      Type::Union(types) => {
        for ty in types {
          self.ty(ty, scope)?;
        }
        Ok(())
      }
      Type::Intersection(intersection) => {
        self.ty(&intersection.left, scope)?;
        self.ty(&intersection.right, scope)
      }
      Type::ImportedType(imported) => {
        self.out.module_paths.insert(imported.module_path.clone());
        self.name_and_arguments(&imported.name_and_arguments, scope)
      }
      Type::ScopeInFile(name) | Type::ScopeInGlobal(name) => self.name_and_arguments(name, scope),
      Type::WithNamespace(namespaced) => {
        if let Some(first) = namespaced.namespace.first() {
          self.out.used_names.insert(first.clone());
        }
        self.name_and_arguments(&namespaced.name_and_arguments, scope)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::build::*;

  #[test]
  fn block_locals_are_visible_before_their_declaration() {
    let module = Module {
      definitions: vec![],
      statements: vec![
        statement_evaluate(call(variable("later"), vec![])),
        Statement::FunctionDefinition(LocalFunction {
          is_async: false,
          name: Identifier::new("later"),
          type_parameters: vec![],
          parameters: vec![],
          return_type: Type::Void,
          statements: vec![],
        }),
      ],
    };
    assert!(collect(&module, UnresolvedVariables::Error).is_ok());
  }

  #[test]
  fn loop_counter_is_visible_in_bound() {
    let module = Module {
      definitions: vec![],
      statements: vec![Statement::For(ForStatement {
        counter: Identifier::new("i"),
        until: addition(variable("i"), number(1)),
        statements: vec![],
      })],
    };
    assert!(collect(&module, UnresolvedVariables::Error).is_ok());
  }

  #[test]
  fn warn_policy_continues() {
    let module = Module {
      definitions: vec![],
      statements: vec![statement_evaluate(variable("missing"))],
    };
    assert!(collect(&module, UnresolvedVariables::Warn).is_ok());
  }

  #[test]
  fn module_paths_keep_discovery_order() {
    let module = Module {
      definitions: vec![],
      statements: vec![
        statement_evaluate(imported_variable("zeta", "z")),
        statement_evaluate(imported_variable("alpha", "a")),
        statement_evaluate(imported_variable("zeta", "y")),
      ],
    };
    let collected = collect(&module, UnresolvedVariables::Error).unwrap();
    let paths: Vec<&str> = collected.module_paths.iter().map(String::as_str).collect();
    assert_eq!(paths, ["zeta", "alpha"]);
    assert!(collected.used_names.contains("z"));
    assert!(collected.used_names.contains("y"));
  }
}
