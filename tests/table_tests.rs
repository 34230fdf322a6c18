mod common;

use common::temp_files::{create_temp_json, create_temp_table, create_temp_toml, create_temp_yaml};
use common::DEMO_TABLE;
use roadmap::{RoutingTable, Router};
use serde_json::json;

#[test]
fn test_load_yaml_table_from_file() {
    let file = create_temp_yaml(DEMO_TABLE);
    let table = RoutingTable::load(file.path()).unwrap();

    let names: Vec<_> = table.routes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["com_address", "org_address", "yes", "no", "ends_with_w"]
    );
}

#[test]
fn test_yaml_table_router_matches_demo_behaviour() {
    let file = create_temp_yaml(DEMO_TABLE);
    let router = RoutingTable::load(file.path())
        .unwrap()
        .into_router()
        .unwrap();

    assert_eq!(
        router.route("bob@example.com", None).unwrap(),
        json!("Commercial address: bob@example.com")
    );
    assert_eq!(
        router.route("alice@example.org", None).unwrap(),
        json!("Organization address: alice")
    );
    assert_eq!(router.route("Yes please", None).unwrap(), json!("yes"));
    assert_eq!(
        router.route("nope", None).unwrap(),
        json!("You said no :( (\"nope\" to be exact)")
    );
    assert_eq!(
        router
            .route(json!(["woot", "scoot"]), Some("endbeforewwwwafter"))
            .unwrap(),
        json!("woot scoot before / after")
    );
    assert_eq!(
        router.route("something else", None).unwrap(),
        json!("Sorry, regex not found")
    );
}

#[test]
fn test_load_json_table_from_file() {
    let file = create_temp_json(
        r#"{
            "routes": [
                { "name": "greet", "pattern": "^hi (?P<who>\\w+)", "reply": "hello {who}" }
            ]
        }"#,
    );
    let router = RoutingTable::load(file.path())
        .unwrap()
        .into_router()
        .unwrap();
    assert_eq!(router.route("hi bob", None).unwrap(), json!("hello bob"));
}

#[test]
fn test_load_toml_table_from_file() {
    let file = create_temp_toml(
        r#"
[[routes]]
name = "yes"
pattern = '^[yY]'
pass_primary = false
reply = "YES"
"#,
    );
    let mut router = Router::direct();
    let handlers = RoutingTable::load(file.path())
        .unwrap()
        .install(&mut router)
        .unwrap();
    assert_eq!(handlers.len(), 1);
    assert_eq!(router.route("yep", None).unwrap(), json!("YES"));
}

#[test]
fn test_unknown_extension_is_rejected() {
    let file = create_temp_table("routes: []", "ini");
    let err = RoutingTable::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("Unsupported routing table format"));
}

#[test]
fn test_missing_file_reports_path() {
    let err = RoutingTable::load("/definitely/not/here.yaml").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.yaml"));
}

#[test]
fn test_malformed_yaml_is_rejected() {
    let file = create_temp_yaml("routes: [ { name: x } ]");
    assert!(RoutingTable::load(file.path()).is_err());
}

#[test]
fn test_missing_placeholder_fails_route_not_load() {
    let file = create_temp_yaml(
        r#"
routes:
  - name: needs_group
    pattern: '^x'
    pass_primary: false
    reply: "value: {0}"
"#,
    );
    let router = RoutingTable::load(file.path())
        .unwrap()
        .into_router()
        .unwrap();
    let err = router.route("x", None).unwrap_err();
    assert!(err.to_string().contains("needs_group"));
}
