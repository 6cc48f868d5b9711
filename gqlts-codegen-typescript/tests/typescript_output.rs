//! End-to-end tests: SDL and a JSON configuration in, TypeScript out.

use gqlts_codegen_typescript::{Config, Error, plugin};
use gqlts_schema::Schema;
use serde_json::{Value, json};

fn config(value: Value) -> Config {
    serde_json::from_value(value).expect("valid configuration")
}

fn try_generate(sdl: &str, options: Value) -> Result<String, Error> {
    let schema = Schema::parse(sdl).expect("valid schema");
    plugin(&schema, &[], &config(options)).map(|output| output.render())
}

fn generate(sdl: &str, options: Value) -> String {
    try_generate(sdl, options).expect("generation succeeds")
}

const BASIC: &str = r#"
"""My scalar"""
scalar DateTime

interface Node {
  id: ID!
}

"A user"
type User implements Node {
  id: ID!
  name: String
  friends(first: Int = 10, after: String): [User!]!
  role: Role! @deprecated(reason: "use roles")
}

enum Role {
  ADMIN
  MEMBER
}

union SearchResult = User

input UserFilter {
  name: String
  role: Role!
}
"#;

#[test]
fn test_basic_schema() {
    let output = generate(BASIC, json!({}));
    insta::assert_snapshot!(output, @r#"
export type Maybe<T> = T | null;
export type InputMaybe<T> = Maybe<T>;

/** All built-in and custom scalars, mapped to their actual values */
export type Scalars = {
  ID: string;
  String: string;
  Boolean: boolean;
  Int: number;
  Float: number;
  /** My scalar */
  DateTime: any;
};

export type Node = {
  id: Scalars['ID'];
};

/** A user */
export type User = Node & {
  __typename?: 'User';
  id: Scalars['ID'];
  name?: Maybe<Scalars['String']>;
  friends: Array<User>;
  /** @deprecated use roles */
  role: Role;
};

export type UserFriendsArgs = {
  first?: InputMaybe<Scalars['Int']>;
  after?: InputMaybe<Scalars['String']>;
};

export enum Role {
  Admin = 'ADMIN',
  Member = 'MEMBER'
}

export type SearchResult = User;

export type UserFilter = {
  name?: InputMaybe<Scalars['String']>;
  role: Role;
};
"#);
}

#[test]
fn test_output_is_deterministic() {
    let options = json!({ "enumsAsConst": true, "useImplementingTypes": true });
    assert_eq!(generate(BASIC, options.clone()), generate(BASIC, options));
}

#[test]
fn test_enum_member_names() {
    let output = generate("enum MyEnum { A_B_C X_Y_Z _TEST My_Value }", json!({}));
    assert!(output.contains(
        "export enum MyEnum {\n  ABC = 'A_B_C',\n  XYZ = 'X_Y_Z',\n  Test = '_TEST',\n  MyValue = 'My_Value'\n}\n"
    ));
}

#[test]
fn test_enums_as_types_with_future_value() {
    let sdl = r#"
        "Colors"
        enum Color {
          "The red one"
          RED
          GREEN @deprecated
        }
    "#;
    let output = generate(sdl, json!({ "enumsAsTypes": true, "futureProofEnums": true }));
    assert!(output.contains(
        "/** Colors */\n\
         export type Color =\n  \
         /** The red one */\n  \
         | 'RED'\n  \
         /** @deprecated No longer supported */\n  \
         | 'GREEN'\n  \
         | '%future added value';\n"
    ));
}

#[test]
fn test_enums_as_const_keeps_numeric_override() {
    let output = generate(
        "enum MyEnum { A B }",
        json!({ "enumsAsConst": true, "enumValues": { "MyEnum": { "A": 42 } } }),
    );
    assert!(output.contains(
        "export const MyEnum = {\n  A: 42,\n  B: 'B',\n} as const;\n\n\
         export type MyEnum = typeof MyEnum[keyof typeof MyEnum];\n"
    ));
}

#[test]
fn test_const_enums() {
    let output = generate("enum E { ONE TWO }", json!({ "constEnums": true }));
    assert!(output.contains("export const enum E {\n  One = 'ONE',\n  Two = 'TWO'\n}\n"));
}

#[test]
fn test_enum_usage_extras() {
    let output = generate(
        "enum Color { RED } type Query { color: Color, colors(filter: Color): Boolean }",
        json!({ "futureProofEnums": true, "allowEnumStringTypes": true }),
    );
    assert!(output.contains(
        "color?: Maybe<Color | '%future added value' | `${Color}`>;"
    ));
    assert!(output.contains(
        "filter?: InputMaybe<Color | '%future added value' | `${Color}`>;"
    ));
}

#[test]
fn test_prefix_skips_enums_when_disabled() {
    let output = generate(
        "enum Color { RED } type User { color: Color }",
        json!({ "typesPrefix": "I", "enumPrefix": false }),
    );
    assert!(output.contains("export type Scalars = {"));
    assert!(output.contains("export enum Color {"));
    assert!(output.contains("export type IUser = {\n  __typename?: 'User';\n  color?: Maybe<Color>;\n};"));
}

#[test]
fn test_nullability_per_list_level() {
    let output = generate("type Query { a: [String!] b: [String]! }", json!({}));
    assert!(output.contains("  a?: Maybe<Array<Scalars['String']>>;\n"));
    assert!(output.contains("  b: Array<Maybe<Scalars['String']>>;\n"));
}

#[test]
fn test_interface_kind_immutable_avoid_optionals() {
    let sdl = "interface Node { id: ID! } type User implements Node { id: ID! tags: [String] }";
    let output = generate(
        sdl,
        json!({
            "declarationKind": "interface",
            "immutableTypes": true,
            "avoidOptionals": true
        }),
    );
    assert!(output.contains("export interface Node {\n  readonly id: Scalars['ID'];\n}\n"));
    assert!(output.contains(
        "export interface User extends Node {\n  \
         readonly __typename?: 'User';\n  \
         readonly id: Scalars['ID'];\n  \
         readonly tags: Maybe<ReadonlyArray<Maybe<Scalars['String']>>>;\n\
         }\n"
    ));
}

#[test]
fn test_class_kind_for_objects_only() {
    let output = generate(
        "interface Base { id: ID! } type MyType implements Base { id: ID! } input In { a: Int }",
        json!({ "declarationKind": { "type": "class" }, "skipTypename": true }),
    );
    assert!(output.contains("export class MyType implements Base {\n  id: Scalars['ID'];\n}\n"));
    assert!(output.contains("export type Base = {"));
    assert!(output.contains("export type In = {"));
}

#[test]
fn test_non_optional_typename() {
    let output = generate("type A { x: Int }", json!({ "nonOptionalTypename": true }));
    assert!(output.contains("  __typename: 'A';\n"));
}

#[test]
fn test_one_of_input() {
    let output = generate(
        "input Input @oneOf { int: Int boolean: Boolean }",
        json!({}),
    );
    assert!(output.contains(
        "export type Input =\n  \
         { int: Scalars['Int']; boolean?: never; }\n  \
         | { int?: never; boolean: Scalars['Boolean']; };\n"
    ));
}

#[test]
fn test_one_of_rejects_non_null_fields() {
    let err = try_generate("input Pick @oneOf { a: Int! b: String }", json!({})).unwrap_err();
    assert_eq!(
        err,
        Error::NonNullOneOfField {
            input: "Pick".into(),
            field: "a".into()
        }
    );
    assert_eq!(
        err.to_string(),
        "Fields on an input object type can not be non-nullable. It seems like the schema was not validated."
    );
}

#[test]
fn test_strict_scalars_names_the_scalar() {
    let err = try_generate(
        "scalar Json type Query { j: Json }",
        json!({ "strictScalars": true }),
    )
    .unwrap_err();
    assert_eq!(err, Error::UnknownScalar { name: "Json".into() });
}

#[test]
fn test_literal_scalar_mapping() {
    let output = generate(
        "scalar DateTime type Query { at: DateTime! }",
        json!({ "scalars": { "DateTime": "Date" } }),
    );
    assert!(output.contains("  DateTime: Date;\n"));
    assert!(output.contains("  at: Scalars['DateTime'];\n"));
    assert!(!output.contains("import "));
}

#[test]
fn test_external_enums_and_imported_scalars() {
    let sdl = "scalar DateTime enum Color { RED } enum Size { S } type Q { c: Color s: Size d: DateTime }";
    let output = generate(
        sdl,
        json!({
            "scalars": { "DateTime": "./scalars#DateTime" },
            "enumValues": { "Color": "./enums#Color", "Size": "./enums#NS.Size" }
        }),
    );
    assert!(output.starts_with(
        "import { DateTime } from './scalars';\n\
         import { Color, NS } from './enums';\n\
         import Size = NS.Size;\n\
         export type Maybe<T> = T | null;\n"
    ));
    assert!(!output.contains("enum Color"));
    assert!(output.contains("  c?: Maybe<Color>;\n  s?: Maybe<Size>;\n"));
    assert!(output.ends_with("export { Color };\nexport { Size };\n"));
}

#[test]
fn test_use_implementing_types() {
    let sdl = r#"
        interface Node { id: ID! }
        interface Entity implements Node { id: ID! }
        interface Orphan { id: ID! }
        type A implements Node { id: ID! }
        type B implements Entity & Node { id: ID! }
        type Query { node: Node entity: Entity! nodes: [Node!]! orphan: Orphan }
    "#;
    let output = generate(sdl, json!({ "useImplementingTypes": true }));
    assert!(output.contains("  node?: Maybe<A | B>;\n"));
    assert!(output.contains("  entity: B;\n"));
    assert!(output.contains("  nodes: Array<A | B>;\n"));
    assert!(output.contains("  orphan?: Maybe<never>;\n"));
}

#[test]
fn test_future_proof_unions() {
    let sdl = "type A { x: Int } type B { y: Int } union U = A | B";
    let output = generate(sdl, json!({ "futureProofUnions": true }));
    assert!(output.contains(r#"export type U = A | B | { __typename?: "%other" };"#));

    let output = generate(sdl, json!({ "futureProofUnions": true, "immutableTypes": true }));
    assert!(output.contains(r#"export type U = A | B | { readonly __typename?: "%other" };"#));
}

#[test]
fn test_directive_mappings() {
    let sdl = r#"
        "Treat as a number"
        directive @asNumber on ARGUMENT_DEFINITION | INPUT_FIELD_DEFINITION

        input MyInput { id: String @asNumber other: String }
        type Query { f(arg: String @asNumber): String }
    "#;
    let output = generate(
        sdl,
        json!({ "directiveArgumentAndInputFieldMappings": { "asNumber": "number" } }),
    );
    assert!(output.contains(
        "/** Type overrides using directives */\n\
         export type DirectiveArgumentAndInputFieldMappings = {\n  \
         /** Treat as a number */\n  \
         asNumber: number;\n\
         };\n"
    ));
    assert!(output.contains("  id?: InputMaybe<DirectiveArgumentAndInputFieldMappings['asNumber']>;\n"));
    assert!(output.contains("  other?: InputMaybe<Scalars['String']>;\n"));
    assert!(output.contains("  arg?: InputMaybe<DirectiveArgumentAndInputFieldMappings['asNumber']>;\n"));
}

#[test]
fn test_no_directive_mappings_no_record() {
    let output = generate(BASIC, json!({}));
    assert!(!output.contains("DirectiveArgumentAndInputFieldMappings"));
}

#[test]
fn test_no_export() {
    let output = generate(BASIC, json!({ "noExport": true }));
    assert!(!output.contains("export "));
    assert!(output.starts_with("type Maybe<T> = T | null;\n"));
    assert!(output.contains("enum Role {"));
}

#[test]
fn test_disable_descriptions_keeps_deprecation() {
    let output = generate(BASIC, json!({ "disableDescriptions": true }));
    assert!(!output.contains("All built-in and custom scalars"));
    assert!(!output.contains("My scalar"));
    assert!(!output.contains("A user"));
    assert!(output.contains("  /** @deprecated use roles */\n  role: Role;\n"));
}

#[test]
fn test_description_with_deprecation_is_a_block() {
    let output = generate(
        r#"type Query { "The name" name: String @deprecated(reason: "gone") }"#,
        json!({}),
    );
    assert!(output.contains("  /**\n   * The name\n   * @deprecated gone\n   */\n  name?: Maybe<Scalars['String']>;\n"));
}

#[test]
fn test_field_wrappers() {
    let output = generate(
        "type Query { list: [String!]! }",
        json!({
            "wrapFieldDefinitions": true,
            "fieldWrapperValue": "T | Promise<T>",
            "wrapEntireFieldDefinitions": true
        }),
    );
    assert!(output.contains("export type FieldWrapper<T> = T | Promise<T>;\n"));
    assert!(output.contains("export type EntireFieldWrapper<T> = T;\n"));
    assert!(output.contains("  list: EntireFieldWrapper<Array<FieldWrapper<Scalars['String']>>>;\n"));
}

#[test]
fn test_args_type_naming() {
    let output = generate(
        "type Query { myField(a: Int): Int }",
        json!({ "addUnderscoreToArgsType": true }),
    );
    assert!(output.contains("export type Query_MyFieldArgs = {"));
}

#[test]
fn test_introspection_types_are_skipped() {
    let output = generate("type __Hidden { a: Int } type Query { a: Int }", json!({}));
    assert!(!output.contains("Hidden"));
    assert!(output.contains("export type Query = {"));
}
