use gen_js::ast::*;
use gen_js::build::*;
use gen_js::{
  generate, generate_with_options, Dialect, GenerateError, GenerateOptions, Identifier, NameKind,
  UnresolvedVariables,
};
use util::export_function;
use util::export_type_alias;
use util::export_variable;
use util::generate_checked;
use util::module;
use util::script;
use util::statement_lines;

mod util;

#[test]
fn shadowed_global_value_is_qualified() {
  let code = generate_checked(
    &script(vec![
      statement_const("console", None, number(1)),
      console_log(variable("console")),
    ]),
    Dialect::JavaScript,
  );
  assert_eq!(
    statement_lines(&code),
    ["const console = 1;", "globalThis.console.log(console);"]
  );
}

#[test]
fn global_value_is_bare_outside_the_shadowing_scope() {
  let code = generate_checked(
    &module(
      vec![
        export_function(
          "inner",
          vec![("Date", Type::Number)],
          Type::Unknown,
          vec![statement_return(new(global_object("Date"), Vec::new()))],
        ),
        export_variable("now", None, new(global_object("Date"), Vec::new())),
      ],
      Vec::new(),
    ),
    Dialect::JavaScript,
  );
  assert!(
    code.contains("export const inner = (Date) => (new globalThis.Date());"),
    "{code}"
  );
  assert!(code.contains("export const now = new Date();"), "{code}");
}

#[test]
fn shadowed_global_type_is_qualified() {
  let code = generate_checked(
    &module(
      vec![export_type_alias(
        "Date",
        type_object(vec![member_type("at", date_type())]),
      )],
      Vec::new(),
    ),
    Dialect::TypeScript,
  );
  assert!(
    code.contains("export type Date = { readonly at: globalThis.Date };"),
    "{code}"
  );
}

#[test]
fn type_parameter_shadows_global_type() {
  let lambda = Expr::Lambda(LambdaExpr {
    is_async: false,
    type_parameters: vec![type_parameter("Promise")],
    parameters: vec![parameter("value", type_scope_in_file("Promise"))],
    return_type: Some(promise_type(type_scope_in_file("Promise"))),
    statements: vec![statement_return(call_method(
      global_object("Promise"),
      "resolve",
      vec![variable("value")],
    ))],
  });
  let code = generate_checked(
    &module(vec![export_variable("wrap", None, lambda)], Vec::new()),
    Dialect::TypeScript,
  );
  assert!(
    code.contains("(value: Promise): globalThis.Promise<Promise> => (Promise.resolve(value))"),
    "{code}"
  );
}

#[test]
fn later_local_definitions_are_visible_to_earlier_statements() {
  let helper = Statement::FunctionDefinition(LocalFunction {
    is_async: false,
    name: Identifier::new("helper"),
    type_parameters: Vec::new(),
    parameters: Vec::new(),
    return_type: Type::Number,
    statements: vec![statement_return(number(1))],
  });
  let code = generate_checked(
    &script(vec![
      statement_const("x", None, lambda(Vec::new(), Type::Number, vec![
        statement_return(call(variable("helper"), Vec::new())),
      ])),
      helper,
    ]),
    Dialect::TypeScript,
  );
  assert_eq!(
    statement_lines(&code),
    [
      "const x = (): number => (helper());",
      "const helper = (): number => 1;",
    ]
  );
}

#[test]
fn loop_bindings_stay_inside_the_loop() {
  let for_loop = Statement::For(ForStatement {
    counter: Identifier::new("i"),
    until: number(3),
    statements: vec![console_log(variable("i"))],
  });
  let code = generate_checked(&script(vec![for_loop.clone()]), Dialect::JavaScript);
  assert_eq!(
    statement_lines(&code),
    [
      "for (let i = 0; i < 3; i += 1) {",
      "  console.log(i);",
      "}",
    ]
  );

  let escaped = script(vec![for_loop, console_log(variable("i"))]);
  assert_eq!(
    generate(&escaped, Dialect::JavaScript),
    Err(GenerateError::UnresolvedVariable {
      name: "i".to_string()
    })
  );
}

#[test]
fn loop_bound_sees_the_counter() {
  let for_loop = Statement::For(ForStatement {
    counter: Identifier::new("Number"),
    until: call(
      get(global_object("Number"), "parseInt"),
      vec![string("3")],
    ),
    statements: vec![console_log(variable("Number"))],
  });
  let code = generate_checked(&script(vec![for_loop]), Dialect::JavaScript);
  assert_eq!(
    statement_lines(&code)[0],
    "for (let Number = 0; Number < globalThis.Number.parseInt(\"3\"); Number += 1) {"
  );
}

#[test]
fn unresolved_variable_can_be_allowed() {
  let module = script(vec![console_log(variable("missing"))]);
  assert_eq!(
    generate(&module, Dialect::JavaScript),
    Err(GenerateError::UnresolvedVariable {
      name: "missing".to_string()
    })
  );

  let options = GenerateOptions {
    unresolved_variables: UnresolvedVariables::Warn,
    ..GenerateOptions::new(Dialect::JavaScript)
  };
  let code = generate_with_options(&module, &options).unwrap();
  assert!(code.contains("console.log(missing);"), "{code}");
}

#[test]
fn duplicate_root_values_are_rejected() {
  let module = module(
    vec![
      export_variable("x", None, number(1)),
      export_function("x", Vec::new(), Type::Void, Vec::new()),
    ],
    Vec::new(),
  );
  assert_eq!(
    generate(&module, Dialect::TypeScript),
    Err(GenerateError::DuplicateName {
      kind: NameKind::RootVariable,
      name: "x".to_string()
    })
  );
}

#[test]
fn type_and_value_may_share_a_name() {
  let code = generate_checked(
    &module(
      vec![
        export_type_alias("Id", Type::String),
        export_variable("Id", Some(type_scope_in_file("Id")), string("id")),
      ],
      Vec::new(),
    ),
    Dialect::TypeScript,
  );
  assert!(code.contains("export type Id = string;"), "{code}");
  assert!(code.contains("export const Id: Id = \"id\";"), "{code}");
}

#[test]
fn duplicate_type_aliases_are_rejected() {
  let module = module(
    vec![
      export_type_alias("Id", Type::String),
      export_type_alias("Id", Type::Number),
    ],
    Vec::new(),
  );
  assert_eq!(
    generate(&module, Dialect::JavaScript),
    Err(GenerateError::DuplicateName {
      kind: NameKind::RootTypeAlias,
      name: "Id".to_string()
    })
  );
}

#[test]
fn duplicate_locals_in_one_block_are_rejected() {
  let module = script(vec![
    statement_const("x", None, number(3)),
    statement_const("x", None, number(3)),
  ]);
  assert_eq!(
    generate(&module, Dialect::JavaScript),
    Err(GenerateError::DuplicateName {
      kind: NameKind::BlockLocal,
      name: "x".to_string()
    })
  );
}

#[test]
fn nested_block_may_redeclare_a_local() {
  let module = script(vec![
    statement_const("x", None, number(1)),
    Statement::WhileTrue(vec![statement_const("x", None, number(2)), Statement::Break]),
  ]);
  let code = generate_checked(&module, Dialect::JavaScript);
  assert_eq!(
    statement_lines(&code),
    [
      "const x = 1;",
      "while (true) {",
      "  const x = 2;",
      "  break;",
      "}",
    ]
  );
}

#[test]
fn duplicate_parameters_are_rejected() {
  let function = export_function(
    "f",
    vec![("a", Type::Number), ("a", Type::String)],
    Type::Void,
    Vec::new(),
  );
  assert_eq!(
    generate(&module(vec![function], Vec::new()), Dialect::TypeScript),
    Err(GenerateError::DuplicateName {
      kind: NameKind::FunctionParameter,
      name: "a".to_string()
    })
  );

  let twice = lambda(
    vec![parameter("v", Type::Number), parameter("v", Type::Number)],
    Type::Void,
    Vec::new(),
  );
  assert_eq!(
    generate(
      &module(vec![export_variable("g", None, twice)], Vec::new()),
      Dialect::TypeScript
    ),
    Err(GenerateError::DuplicateName {
      kind: NameKind::LambdaParameter,
      name: "v".to_string()
    })
  );
}

#[test]
fn duplicate_type_parameters_are_rejected() {
  let alias = Definition::TypeAlias(TypeAlias {
    export: false,
    name: Identifier::new("Pair"),
    type_parameters: vec![type_parameter("T"), type_parameter("T")],
    document: String::new(),
    ty: type_scope_in_file("T"),
  });
  let error = generate(&module(vec![alias], Vec::new()), Dialect::TypeScript).unwrap_err();
  assert_eq!(
    error.to_string(),
    "duplicate type alias type parameter name `T`"
  );
}
