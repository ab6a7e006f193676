//! Integration tests for rhtmx-schema
//!
//! Tests are organized by feature area and cover:
//! - Mask composition and normalization
//! - Id composition
//! - Placeholder compilation and pattern matching
//! - Endpoint assembly (skipping, ordering, error policy)
//! - Serialized schema layout

use pretty_assertions::assert_eq;
use rhtmx_schema::*;
use serde_json::json;

fn users_controller() -> ControllerDescriptor {
    ControllerDescriptor::new("app::controllers::UsersController")
        .with_group("api", "api")
        .with_group("v1", "v1")
        .with_path("users")
        .with_id("users")
        .with_tag("users")
        .with_method(
            MethodDescriptor::new("index")
                .with_path("/")
                .with_id("list")
                .with_http_method("GET"),
        )
        .with_method(
            MethodDescriptor::new("detail")
                .with_path("{id}")
                .with_id("detail")
                .with_argument("id", "i64")
                .with_http_method("GET")
                .with_parameter(
                    "id",
                    DeclaredParameter::new(ParameterType::Int).with_description("user id"),
                ),
        )
        .with_method(MethodDescriptor::new("draft").with_id("draft"))
}

// ============================================================================
// Mask & id composition
// ============================================================================

#[test]
fn test_mask_from_groups_controller_and_method() {
    assert_eq!(compose_mask(&["api", "v1"], "users", "{id}"), "/api/v1/users/{id}");
}

#[test]
fn test_mask_drops_empty_segments() {
    assert_eq!(compose_mask(&["", "foo"], "", "bar"), "/foo/bar");
}

#[test]
fn test_mask_root() {
    assert_eq!(compose_mask(&["", ""], "", ""), "/");
}

#[test]
fn test_id_absent_without_method_id() {
    assert_eq!(compose_id(&["admin"], "users", ""), None);
}

#[test]
fn test_id_joined_with_dots() {
    assert_eq!(compose_id(&["admin"], "users", "list").as_deref(), Some("admin.users.list"));
}

#[test]
fn test_id_does_not_collapse_like_mask() {
    // Masks drop empty segments, ids keep them
    assert_eq!(compose_mask(&[""], "", "list"), "/list");
    assert_eq!(compose_id(&[""], "", "list").as_deref(), Some("..list"));
}

// ============================================================================
// Placeholder compilation
// ============================================================================

#[test]
fn test_compile_without_declarations() {
    let compiled = compile("/users/{id}", &Default::default()).unwrap();
    assert_eq!(
        compiled.parameters["id"],
        ParameterMeta {
            name: "id".into(),
            group: "id".into(),
            pattern: "(?P<id>[^/]+)".into(),
            ty: ParameterType::Scalar,
            description: None,
        }
    );

    let regex = regex::Regex::new(&compiled.pattern).unwrap();
    let caps = regex.captures("/users/42").unwrap();
    assert_eq!(&caps["id"], "42");
}

#[test]
fn test_compile_hyphenated_and_numeric_names() {
    let compiled = compile("/users/{user-id}/pages/{1}", &Default::default()).unwrap();
    assert_eq!(
        compiled.pattern,
        "^/users/(?P<user_id>[^/]+)/pages/(?P<_1>[^/]+)/?$"
    );
    assert_eq!(compiled.parameters["user-id"].name, "user-id");
    assert_eq!(compiled.parameters["user-id"].group, "user_id");
    assert_eq!(compiled.parameters["1"].group, "_1");

    let regex = regex::Regex::new(&compiled.pattern).unwrap();
    let caps = regex.captures("/users/42/pages/7/").unwrap();
    assert_eq!(&caps[compiled.parameters["user-id"].group.as_str()], "42");
    assert_eq!(&caps[compiled.parameters["1"].group.as_str()], "7");
}

#[test]
fn test_compile_with_declarations() {
    let method = MethodDescriptor::new("detail").with_parameter(
        "id",
        DeclaredParameter::new(ParameterType::Int).with_description("user id"),
    );

    let compiled = compile("/users/{id}", &method.parameters).unwrap();
    assert_eq!(compiled.parameters["id"].ty, ParameterType::Int);
    assert_eq!(compiled.parameters["id"].description.as_deref(), Some("user id"));
}

#[test]
fn test_pattern_rejects_missing_literals_and_extra_segments() {
    let compiled = compile("/users/{id}/posts", &Default::default()).unwrap();
    let regex = regex::Regex::new(&compiled.pattern).unwrap();

    assert!(regex.is_match("/users/1/posts"));
    assert!(regex.is_match("/users/1/posts/"));
    assert!(!regex.is_match("/users/1"));
    assert!(!regex.is_match("/1/posts"));
    assert!(!regex.is_match("/users/1/posts/2"));
    assert!(!regex.is_match("/users/1/posts//"));
}

// ============================================================================
// Endpoint assembly
// ============================================================================

#[test]
fn test_controller_with_unroutable_method() {
    let controller = ControllerDescriptor::new("app::PingController")
        .with_method(MethodDescriptor::new("pending"))
        .with_method(MethodDescriptor::new("ping").with_path("ping"));

    let endpoints = assemble(&[controller]).unwrap();
    assert_eq!(endpoints.len(), 1);
    assert_eq!(endpoints[0].handler.method, "ping");
}

#[test]
fn test_assembly_preserves_input_order() {
    let zeta = ControllerDescriptor::new("app::ZetaController")
        .with_path("zeta")
        .with_method(MethodDescriptor::new("b").with_path("b"))
        .with_method(MethodDescriptor::new("a").with_path("a"));
    let alpha = ControllerDescriptor::new("app::AlphaController")
        .with_path("alpha")
        .with_method(MethodDescriptor::new("same").with_path("x"))
        .with_method(MethodDescriptor::new("same").with_path("x"));

    let masks: Vec<String> = assemble(&[zeta, alpha])
        .unwrap()
        .into_iter()
        .map(|e| e.mask)
        .collect();
    assert_eq!(masks, vec!["/zeta/b", "/zeta/a", "/alpha/x", "/alpha/x"]);
}

#[test]
fn test_users_controller_schema() {
    let endpoints = assemble(&[users_controller()]).unwrap();
    assert_eq!(endpoints.len(), 2);

    let index = &endpoints[0];
    assert_eq!(index.mask, "/api/v1/users");
    assert_eq!(index.id.as_deref(), Some("api.v1.users.list"));
    assert!(index.parameters.is_empty());

    let detail = &endpoints[1];
    assert_eq!(detail.mask, "/api/v1/users/{id}");
    assert_eq!(detail.pattern, "^/api/v1/users/(?P<id>[^/]+)/?$");

    let matcher = PatternMatcher::for_endpoint(detail).unwrap();
    assert_eq!(
        matcher.captures("/api/v1/users/42").unwrap().get("id"),
        Some(&"42".to_string())
    );
    assert!(!matcher.is_match("/api/v1/users"));
    assert!(!matcher.is_match("/api/v1/users/42/extra"));
}

#[test]
fn test_every_compiled_mask_is_normalized() {
    let controller = ControllerDescriptor::new("app::MessyController")
        .with_group("//api//", "api")
        .with_path("/users/")
        .with_method(MethodDescriptor::new("a").with_path("//{id}//"))
        .with_method(MethodDescriptor::new("b").with_path("/"));

    for endpoint in assemble(&[controller]).unwrap() {
        assert!(path::is_normalized_mask(&endpoint.mask), "{}", endpoint.mask);
    }
}

#[test]
fn test_malformed_mask_aborts_whole_pass() {
    let broken = ControllerDescriptor::new("app::BrokenController")
        .with_method(MethodDescriptor::new("broken").with_path("{user id}"));

    let err = assemble(&[users_controller(), broken]).unwrap_err();
    assert_eq!(err.mask(), Some("/{user id}"));
}

#[test]
fn test_malformed_mask_skipped_when_configured() {
    let broken = ControllerDescriptor::new("app::BrokenController")
        .with_method(MethodDescriptor::new("broken").with_path("{user id}"));

    let endpoints = EndpointAssembler::new()
        .on_error(ErrorPolicy::Skip)
        .assemble(&[users_controller(), broken])
        .unwrap();
    assert_eq!(endpoints.len(), 2);
}

// ============================================================================
// Serialized layout
// ============================================================================

#[test]
fn test_json_schema_layout() {
    let json = JsonSerializator::default()
        .serialize(&[users_controller()])
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        value[1],
        json!({
            "handler": {
                "class": "app::controllers::UsersController",
                "method": "detail",
                "arguments": [{"name": "id", "type": "i64"}]
            },
            "group": {"ids": ["api", "v1"], "paths": ["api", "v1"]},
            "id": "api.v1.users.detail",
            "tags": ["users"],
            "methods": ["GET"],
            "mask": "/api/v1/users/{id}",
            "parameters": {
                "id": {
                    "name": "id",
                    "group": "id",
                    "pattern": "(?P<id>[^/]+)",
                    "type": "int",
                    "description": "user id"
                }
            },
            "pattern": "^/api/v1/users/(?P<id>[^/]+)/?$"
        })
    );
}
