use gen_js::ast::*;
use gen_js::build::*;
use gen_js::{generate_with_options, Dialect, GenerateOptions, Identifier};
use util::assert_parses;
use util::assert_text;
use util::export_function;
use util::export_type_alias;
use util::export_variable;
use util::generate_checked;
use util::module;
use util::script;
use util::statement_lines;

mod util;

fn documented_parameter(name: &str, document: &str, ty: Type) -> ParameterWithDocument {
  ParameterWithDocument {
    name: Identifier::new(name),
    document: document.to_string(),
    ty,
  }
}

#[test]
fn express_middleware() {
  let middleware = Definition::Function(FunctionDefinition {
    export: true,
    is_async: false,
    name: Identifier::new("middleware"),
    document: "ミドルウェア".to_string(),
    type_parameters: Vec::new(),
    parameters: vec![
      documented_parameter("request", "リクエスト", type_imported("express", "Request")),
      documented_parameter("response", "レスポンス", type_imported("express", "Response")),
    ],
    return_type: Type::Void,
    statements: vec![
      statement_const(
        "accept",
        Some(type_union(vec![Type::String, Type::Undefined])),
        get(get(variable("request"), "headers"), "accept"),
      ),
      statement_if(
        logical_and(
          not_equal(variable("accept"), Expr::UndefinedLiteral),
          call_method(variable("accept"), "includes", vec![string("text/html")]),
        ),
        vec![statement_evaluate(call_method(
          variable("response"),
          "setHeader",
          vec![string("content-type"), string("text/html")],
        ))],
      ),
    ],
  });
  let options = GenerateOptions {
    attribution_links: vec!["https://jsr.io/@narumincho/js-ts-code-generator".to_string()],
    ..GenerateOptions::new(Dialect::TypeScript)
  };
  let code = generate_with_options(&module(vec![middleware], Vec::new()), &options).unwrap();
  assert_text(
    &code,
    r#"/* eslint-disable */
/* generated by https://jsr.io/@narumincho/js-ts-code-generator. Do not edit! */

import * as a from "express";

/**
 * ミドルウェア
 * @param request リクエスト
 * @param response レスポンス
 */
export const middleware = (request: a.Request, response: a.Response): void => {
  const accept: string | undefined = request.headers.accept;
  if (accept !== undefined && accept.includes("text/html")) {
    response.setHeader("content-type", "text/html");
  }
};
"#,
  );
  assert_parses(&code, Dialect::TypeScript);
}

#[test]
fn minimal_parentheses_for_arithmetic_and_equality() {
  let expr = equal(
    equal(
      addition(
        multiplication(number(3), number(9)),
        multiplication(number(7), number(6)),
      ),
      addition(
        addition(number(2), number(3)),
        addition(number(5), number(8)),
      ),
    ),
    multiplication(number(5), addition(number(7), number(8))),
  );
  let code = generate_checked(&script(vec![console_log(expr)]), Dialect::JavaScript);
  assert_text(
    &code,
    "/* eslint-disable */\n/* generated by gen-js. Do not edit! */\n\n{\n  console.log(3 * 9 + 7 * 6 === 2 + 3 + (5 + 8) === 5 * (7 + 8));\n}\n",
  );
}

#[test]
fn reserved_word_names_get_a_suffix() {
  let code = generate_checked(
    &module(
      vec![
        export_function("new", Vec::new(), Type::Void, Vec::new()),
        export_variable("class", Some(Type::Number), number(1)),
      ],
      Vec::new(),
    ),
    Dialect::TypeScript,
  );
  assert!(code.contains("export const new_ = (): void => {};"), "{code}");
  assert!(code.contains("export const class_: number = 1;"), "{code}");
}

#[test]
fn let_then_plain_and_compound_assignment() {
  let code = generate_checked(
    &script(vec![
      statement_let("v", Some(Type::Number), number(0)),
      statement_set(variable("v"), None, number(1)),
      statement_set(variable("v"), Some(AssignmentOperator::Addition), number(2)),
    ]),
    Dialect::TypeScript,
  );
  assert_eq!(
    statement_lines(&code),
    ["let v: number = 0;", "v = 1;", "v += 2;"]
  );
}

#[test]
fn switch_cases_are_separate_blocks() {
  let switch = Statement::Switch(SwitchStatement {
    expr: variable("kind"),
    patterns: vec![
      SwitchPattern {
        case_string: "A".to_string(),
        statements: vec![
          statement_const("label", None, string("first")),
          statement_return(variable("label")),
        ],
      },
      SwitchPattern {
        case_string: "B".to_string(),
        statements: vec![
          statement_const("label", None, string("second")),
          statement_return(variable("label")),
        ],
      },
    ],
  });
  let kind = type_union(vec![
    Type::StringLiteral("A".to_string()),
    Type::StringLiteral("B".to_string()),
  ]);
  let code = generate_checked(
    &module(
      vec![export_function(
        "describe",
        vec![("kind", kind)],
        Type::String,
        vec![switch],
      )],
      Vec::new(),
    ),
    Dialect::TypeScript,
  );
  assert_text(
    &code,
    r#"/* eslint-disable */
/* generated by gen-js. Do not edit! */

export const describe = (kind: "A" | "B"): string => {
  switch (kind) {
    case "A": {
      const label = "first";
      return label;
    }
    case "B": {
      const label = "second";
      return label;
    }
  }
};
"#,
  );
}

#[test]
fn object_spread_with_override() {
  let code = generate_checked(
    &module(
      vec![export_function(
        "withB",
        vec![(
          "value",
          type_object(vec![member_type("a", Type::Number)]),
        )],
        type_object(vec![
          member_type("a", Type::Number),
          member_type("b", Type::Number),
        ]),
        vec![statement_return(object_literal(vec![
          member_spread(variable("value")),
          member_key_value("b", number(987)),
        ]))],
      )],
      Vec::new(),
    ),
    Dialect::TypeScript,
  );
  assert!(
    code.contains(
      "export const withB = (value: { readonly a: number }): { readonly a: number; readonly b: number } => ({ ...value, b: 987 });"
    ),
    "{code}"
  );
}

#[test]
fn optional_readonly_member() {
  let user = type_object(vec![
    member_type("name", Type::String),
    MemberType {
      required: false,
      ..member_type("age", Type::Number)
    },
  ]);
  let code = generate_checked(
    &module(vec![export_type_alias("User", user)], Vec::new()),
    Dialect::TypeScript,
  );
  assert!(
    code.contains("export type User = { readonly name: string; readonly age?: number };"),
    "{code}"
  );
}

#[test]
fn generic_lambda_returning_object() {
  let lambda = Expr::Lambda(LambdaExpr {
    is_async: false,
    type_parameters: vec![type_parameter("t")],
    parameters: vec![parameter("input", type_scope_in_file("t"))],
    return_type: Some(type_object(vec![member_type(
      "value",
      type_scope_in_file("t"),
    )])),
    statements: vec![statement_return(object_literal(vec![member_key_value(
      "value",
      variable("input"),
    )]))],
  });
  let module = module(vec![export_variable("wrap", None, lambda)], Vec::new());

  let ts = generate_checked(&module, Dialect::TypeScript);
  assert!(
    ts.contains(
      "export const wrap = <t extends unknown>(input: t): { readonly value: t } => ({ value: input });"
    ),
    "{ts}"
  );
  let js = generate_checked(&module, Dialect::JavaScript);
  assert!(
    js.contains("export const wrap = (input) => ({ value: input });"),
    "{js}"
  );
}

#[test]
fn shorthand_property_when_key_matches_variable() {
  let code = generate_checked(
    &script(vec![
      statement_const("name", None, string("x")),
      console_log(object_literal(vec![
        member_key_value("name", variable("name")),
        member_key_value("size", variable("name")),
      ])),
    ]),
    Dialect::JavaScript,
  );
  assert_eq!(
    statement_lines(&code)[1],
    "console.log({ name, size: name });"
  );
}

#[test]
fn documented_object_members_render_one_per_line() {
  let point = type_object(vec![
    MemberType {
      document: "horizontal".to_string(),
      ..member_type("x", Type::Number)
    },
    member_type("y", Type::Number),
  ]);
  let code = generate_checked(
    &module(vec![export_type_alias("Point", point)], Vec::new()),
    Dialect::TypeScript,
  );
  assert!(
    code.contains(
      "export type Point = {\n  /**\n   * horizontal\n   */\n  readonly x: number;\n  readonly y: number;\n};"
    ),
    "{code}"
  );
}
