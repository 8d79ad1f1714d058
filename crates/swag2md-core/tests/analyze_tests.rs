use swag2md_core::error::Entity;
use swag2md_core::{AnalyzeError, Analyzer, ItemPolicy, Locale, RenderOptions, TermDictionary};

const OPENAPI3: &str = include_str!("fixtures/petstore-openapi3.json");
const SWAGGER2: &str = include_str!("fixtures/petstore-swagger2.json");

const MINIMAL: &str = r#"{"info":{"title":"T","version":"1.0","description":"D"},"paths":{"/x":{"get":{"operationId":"getX","responses":{"200":{"description":"OK"}}}}}}"#;

fn analyzer(locale: Locale) -> Analyzer {
    Analyzer::new(TermDictionary::builtin(locale).expect("builtin terms"))
}

#[test]
fn analyze_minimal_document() {
    let analysis = analyzer(Locale::En).analyze(MINIMAL).unwrap();
    let expected = "\
# T

## Overview

**D**

### Version

1.0

## Paths

1. ***getX***

    ```
    GET /x
    ```

    #### Responses

    | HTTP Code | Description | Schema |
    | --- | --- | --- |
    | 200 | OK | No Content |

    #### Tags
";
    assert_eq!(analysis.markdown, expected);
    assert!(analysis.warnings.is_empty());
}

#[test]
fn analyze_is_idempotent() {
    let analyzer = analyzer(Locale::En);
    let first = analyzer.analyze(OPENAPI3).unwrap();
    let second = analyzer.analyze(OPENAPI3).unwrap();
    assert_eq!(first.markdown, second.markdown);
}

#[test]
fn analyze_empty_input() {
    let err = analyzer(Locale::En).analyze("").unwrap_err();
    assert!(matches!(err, AnalyzeError::EmptyInput));
}

#[test]
fn analyze_malformed_input() {
    let err = analyzer(Locale::En).analyze("{\"info\": ").unwrap_err();
    assert!(matches!(err, AnalyzeError::MalformedInput(_)));
}

#[test]
fn analyze_propagates_missing_response_description() {
    let input = r#"{"paths": {"/x": {"get": {"operationId": "getX", "responses": {"500": {}}}}}}"#;
    match analyzer(Locale::En).analyze(input) {
        Err(AnalyzeError::MissingField(err)) => {
            assert_eq!(err.entity, Entity::Response);
            assert!(err.location.contains("500"));
            assert!(err.location.contains("/x"));
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn analyze_openapi3_document() {
    let analysis = analyzer(Locale::En).analyze(OPENAPI3).unwrap();
    let md = &analysis.markdown;

    let overview = md.find("## Overview").unwrap();
    let paths = md.find("## Paths").unwrap();
    let components = md.find("## Components").unwrap();
    assert!(md.starts_with("# Petstore\n"));
    assert!(overview < paths && paths < components);

    // overview
    assert!(md.contains("**A sample pet store**"));
    assert!(md.contains("### Contact\n\n+ name : API Team\n+ email : api@petstore.io"));
    assert!(md.contains("+ url : https://opensource.org/licenses/MIT"));
    assert!(md.contains("### Specification\n\nOpenAPI 3.0.1"));
    assert!(md.contains("+ Server-0\n    + url : https://petstore.io/v1\n    + description : Production"));
    assert!(md.contains("+ ***pet*** : Everything about pets\n+ ***store***"));
    assert!(!md.contains("### URI Scheme"));

    // paths, numbered in sorted order
    assert!(md.contains("1. ***listPets***"));
    assert!(md.contains("2. ***createPet***"));
    assert!(md.contains("5. ***getInventory***"));
    assert!(md.contains("    DELETE /pets/{petId}"));
    assert!(md.contains("    | Type | Name | Description | Schema |"));
    assert!(md.contains("    | query | status | Filter by status | string |"));
    assert!(md.contains("    | 200 | Pet list | array<Pet> |"));
    assert!(md.contains("    | 200 | Inventory \\| counts | No Content |"));
    assert!(md.contains("    #### Tags\n\n    + pet"));

    // components
    assert!(md.contains("+ Pet\n    + type : `object`"));
    assert!(md.contains("        | Property Name | Property Type | Required | Example |"));
    assert!(md.contains("        | photoUrls | `array<string>` | False | / |"));
    assert!(md.contains("        | id | `integer` | True | 10 |"));
    assert!(md.contains("        ```\n        {\n            \"properties\": {"));

    assert_eq!(analysis.warnings.len(), 1);
    assert_eq!(analysis.warnings[0].location, "parameter #2 of GET /pets");
}

#[test]
fn analyze_strict_policy_aborts() {
    let terms = TermDictionary::builtin(Locale::En).unwrap();
    let options = RenderOptions::default().with_item_policy(ItemPolicy::Abort);
    let err = Analyzer::with_options(terms, options).analyze(OPENAPI3).unwrap_err();
    assert!(matches!(err, AnalyzeError::MissingField(_)));
}

#[test]
fn analyze_swagger2_document() {
    let md = analyzer(Locale::En).analyze(SWAGGER2).unwrap().markdown;

    assert!(md.contains("### Version\n\n2"));
    assert!(md.contains("### Specification\n\nSwagger 2.0"));
    assert!(md.contains(
        "### URI Scheme\n\n+ host : petstore.swagger.io\n+ basePath : /v2\n+ schemes : https, http"
    ));
    assert!(md.contains("### Consumes\n\n+ `application/json`"));
    assert!(md.contains("### Produces\n\n+ `application/json`\n+ `application/xml`"));
    assert!(!md.contains("### Servers"));

    assert!(md.contains("1. ***updateUser***"));
    assert!(md.contains("    PUT /user/{username}"));
    assert!(md.contains("    | body | body | Updated user object | User |"));
    assert!(md.contains("    | 400 | Bad request | No Content |"));
    assert!(md.contains("        | tags | `array<string>` | False | / |"));
}

#[test]
fn analyze_without_components_omits_section() {
    let md = analyzer(Locale::En).analyze(MINIMAL).unwrap().markdown;
    assert!(!md.contains("## Components"));
}

#[test]
fn analyze_uses_locale_labels() {
    let md = analyzer(Locale::Zh).analyze(OPENAPI3).unwrap().markdown;
    assert!(md.contains("## 概览"));
    assert!(md.contains("## 路径"));
    assert!(md.contains("## 组件"));
    assert!(md.contains("    #### 参数"));
    assert!(!md.contains("## Overview"));
}

#[test]
fn custom_placeholder_and_columns() {
    let terms = TermDictionary::builtin(Locale::En).unwrap();
    let options = RenderOptions {
        placeholder: "-".to_string(),
        response_columns: vec![
            swag2md_core::render::Column::HttpCode,
            swag2md_core::render::Column::Schema,
        ],
        ..RenderOptions::default()
    };
    let md = Analyzer::with_options(terms, options).analyze(MINIMAL).unwrap().markdown;
    assert!(md.contains("    | HTTP Code | Schema |\n    | --- | --- |\n    | 200 | - |"));
}

#[test]
fn duplicate_parameters_render_as_separate_rows() {
    let input = r#"{"paths": {"/d": {"get": {"operationId": "dup", "parameters": [
        {"name": "a", "in": "query", "description": "d", "type": "string"},
        {"name": "a", "in": "query", "description": "d", "type": "string"}
    ]}}}}"#;
    let md = analyzer(Locale::En).analyze(input).unwrap().markdown;
    assert_eq!(md.matches("    | query | a | d | string |").count(), 2);
}

#[test]
fn untyped_property_shows_placeholder() {
    let input = r#"{"components": {"schemas": {"Loose": {"properties": {"x": {"description": "anything"}}}}}}"#;
    let md = analyzer(Locale::En).analyze(input).unwrap().markdown;
    assert!(md.contains("+ Loose\n    + type : `No Content`"));
    assert!(md.contains("        | x | No Content | False | / |"));
}

#[test]
fn multi_paragraph_description_is_bolded_per_paragraph() {
    let input = r#"{"info": {"title": "T", "description": "para one\n\npara two"}, "paths": {}}"#;
    let md = analyzer(Locale::En).analyze(input).unwrap().markdown;
    assert!(md.contains("## Overview\n\n**para one**\n\n**para two**\n"));
}
