//! End-to-end tests for the policy template wire format.
//!
//! These tests drive the full path an embedding application uses: parse a
//! JSON policy template, optionally adjust its constructor registry,
//! materialize a role, and query it. Serialization details that unit
//! tests don't cover (field omission, registry reseeding on load,
//! malformed documents) live here.

use aegis_rbac::{
    AllowAll, BoxedPermission, PolicyError, PolicyTemplate, Substitutions,
};

/// Parse a template, panicking with the parse error on failure.
fn load(json: &str) -> PolicyTemplate {
    PolicyTemplate::from_json(json).expect("template should parse")
}

#[test]
fn test_admin_read_glob_scenario() {
    let template = load(
        r#"{
            "role_id": "admin",
            "permissions": [
                { "constructor": "glob", "action": "read*", "target": "/docs/*" }
            ]
        }"#,
    );

    let role = template.build_role(None);
    assert_eq!(role.role_id(), "admin");
    assert!(role.can("read-file", "/docs/report.pdf").unwrap());
    assert!(!role.can("write", "/docs/report.pdf").unwrap());
}

#[test]
fn test_deserialized_template_reseeds_builtins() {
    // The registry is not part of the wire format; loading must still
    // resolve all three built-in constructor names.
    let template = load(
        r#"{
            "role_id": "mixed",
            "permissions": [
                { "constructor": "glob",   "action": "read*",    "target": "*" },
                { "constructor": "regex",  "action": "^sync-\\d+$", "target": ".*" },
                { "constructor": "string", "action": "purge",    "target": "/tmp/scratch" }
            ]
        }"#,
    );
    assert_eq!(template.constructors().names(), vec!["glob", "regex", "string"]);

    let role = template.build_role(None);
    assert!(role.can("read-anything", "/x").unwrap());
    assert!(role.can("sync-42", "anywhere").unwrap());
    assert!(role.can("purge", "/tmp/scratch").unwrap());
    assert!(!role.can("purge", "/tmp/other").unwrap());
    assert!(!role.can("sync-x", "anywhere").unwrap());
}

#[test]
fn test_omitted_constructor_defaults_to_glob() {
    let template = load(
        r#"{
            "role_id": "open",
            "permissions": [
                { "action": "*", "target": "*" }
            ]
        }"#,
    );

    let role = template.build_role(None);
    assert!(role.can("anything", "anywhere").unwrap());
}

#[test]
fn test_unknown_constructor_defaults_to_glob() {
    let template = load(
        r#"{
            "role_id": "open",
            "permissions": [
                { "constructor": "bogus", "action": "*", "target": "*" }
            ]
        }"#,
    );

    let role = template.build_role(None);
    assert!(role.can("anything", "anywhere").unwrap());
}

#[test]
fn test_wire_format_round_trip() {
    let mut template = PolicyTemplate::new("editor");
    template.add_permission(Some("string"), "write", "/docs/draft");
    template.add_permission(None, "read*", "/docs/*");

    let json = template.to_json().unwrap();

    // The registry never appears on the wire, and an absent constructor
    // is omitted rather than serialized as null.
    assert!(!json.contains("constructors"));
    assert!(!json.contains("null"));

    let reloaded = load(&json);
    assert_eq!(reloaded.role_id, template.role_id);
    assert_eq!(reloaded.permissions, template.permissions);

    let role = reloaded.build_role(None);
    assert!(role.can("write", "/docs/draft").unwrap());
    assert!(role.can("read-file", "/docs/report.pdf").unwrap());
    assert!(!role.can("write", "/docs/published").unwrap());
}

#[test]
fn test_substitution_round_trip() {
    let template = load(
        r#"{
            "role_id": "tenant-reader",
            "permissions": [
                { "action": "read*", "target": "/{tenant}/*" }
            ]
        }"#,
    );

    let subs: Substitutions = [("{tenant}", "acme")].into_iter().collect();
    let role = template.build_role(Some(&subs));

    // The substituted literal matches; the placeholder text no longer does.
    assert!(role.can("read", "/acme/report").unwrap());
    assert!(!role.can("read", "/{tenant}/report").unwrap());
}

#[test]
fn test_custom_constructor_after_load() {
    let mut template = load(
        r#"{
            "role_id": "custom",
            "permissions": [
                { "constructor": "allow-all", "action": "x", "target": "y" }
            ]
        }"#,
    );

    // Before registration the unknown name falls back to glob, so the
    // rule only matches its literal patterns.
    let fallback_role = template.build_role(None);
    assert!(fallback_role.can("x", "y").unwrap());
    assert!(!fallback_role.can("anything", "anywhere").unwrap());

    template.set_constructor("allow-all", |_: &str, _: &str| -> BoxedPermission {
        Box::new(AllowAll)
    });
    let role = template.build_role(None);
    assert!(role.can("anything", "anywhere").unwrap());

    // The fallback role was a snapshot; registration did not change it.
    assert!(!fallback_role.can("anything", "anywhere").unwrap());
}

#[test]
fn test_invalid_regex_rule_fails_closed() {
    let template = load(
        r#"{
            "role_id": "broken",
            "permissions": [
                { "constructor": "regex", "action": "(unclosed", "target": ".*" },
                { "action": "*", "target": "*" }
            ]
        }"#,
    );

    // Materialization succeeds; the bad pattern surfaces on query, and it
    // is an error rather than a grant from the later wide-open rule.
    let role = template.build_role(None);
    assert!(role.can("read", "/docs").is_err());
}

#[test]
fn test_malformed_template_is_a_parse_error() {
    let missing_role_id = r#"{ "permissions": [] }"#;
    let err = PolicyTemplate::from_json(missing_role_id).unwrap_err();
    assert!(matches!(err, PolicyError::Parse(_)));

    let wrong_shape = r#"{ "role_id": "x", "permissions": [{ "action": 42, "target": "*" }] }"#;
    assert!(PolicyTemplate::from_json(wrong_shape).is_err());

    let not_json = "not json at all";
    assert!(PolicyTemplate::from_json(not_json).is_err());
}

#[test]
fn test_permission_order_is_preserved_on_the_wire() {
    let template = load(
        r#"{
            "role_id": "ordered",
            "permissions": [
                { "constructor": "string", "action": "a", "target": "1" },
                { "constructor": "string", "action": "b", "target": "2" },
                { "constructor": "string", "action": "c", "target": "3" }
            ]
        }"#,
    );

    let actions: Vec<&str> = template
        .permissions
        .iter()
        .map(|p| p.action.as_str())
        .collect();
    assert_eq!(actions, vec!["a", "b", "c"]);

    let role = template.build_role(None);
    assert_eq!(role.permissions().len(), 3);
    assert!(role.can("b", "2").unwrap());
}
