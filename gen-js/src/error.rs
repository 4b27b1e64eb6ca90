use std::fmt;

/// Which namespace or construct a duplicated name was declared in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameKind {
  RootTypeAlias,
  RootVariable,
  FunctionParameter,
  FunctionTypeParameter,
  LambdaParameter,
  LambdaTypeParameter,
  LocalFunctionParameter,
  LocalFunctionTypeParameter,
  FunctionTypeTypeParameter,
  TypeAliasTypeParameter,
  BlockLocal,
}

impl fmt::Display for NameKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      NameKind::RootTypeAlias => "root type alias",
      NameKind::RootVariable => "root function or variable",
      NameKind::FunctionParameter => "function parameter",
      NameKind::FunctionTypeParameter => "function type parameter",
      NameKind::LambdaParameter => "lambda parameter",
      NameKind::LambdaTypeParameter => "lambda type parameter",
      NameKind::LocalFunctionParameter => "local function parameter",
      NameKind::LocalFunctionTypeParameter => "local function type parameter",
      NameKind::FunctionTypeTypeParameter => "type parameter of function type",
      NameKind::TypeAliasTypeParameter => "type alias type parameter",
      NameKind::BlockLocal => "local variable or function",
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
  #[error("duplicate {kind} name `{name}`")]
  DuplicateName { kind: NameKind, name: String },
  #[error("variable `{name}` is not defined in any enclosing scope")]
  UnresolvedVariable { name: String },
  #[error(transparent)]
  Render(#[from] RenderError),
}

/// Failures while writing text. Both indicate a bug rather than bad input:
/// collection guarantees every module path is known before rendering starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
  #[error("module `{0}` was not collected before rendering")]
  UnknownModule(String),
  #[error("formatting failed")]
  Fmt(#[from] fmt::Error),
}

pub type RenderResult<T = ()> = Result<T, RenderError>;
