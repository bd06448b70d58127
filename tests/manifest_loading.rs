use std::error::Error;
use std::io::Write;

use tempfile::NamedTempFile;

use dependgen::build_plan;
use dependgen::config::{effective_policy, load_and_validate, read_manifest};
use dependgen::errors::DependgenError;
use dependgen::types::{DuplicateInitPolicy, EmissionMode};
use dependgen_test_utils::builders::{ManifestBuilder, NodeConfigBuilder};
use dependgen_test_utils::emitted_lines;

type TestResult = Result<(), Box<dyn Error>>;

fn manifest_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn loads_nodes_edges_and_needed_from_toml() -> TestResult {
    let file = manifest_file(
        r#"
needed = ["C"]

[node.A]
init = "initA();"

[node.B]
init = "initB();"
after = ["A"]

[node.C]
init = "initC();"
after = ["B"]

[node.Dn]
init = "initDn();"
after = ["A"]
"#,
    );

    let manifest = load_and_validate(file.path())?;
    assert_eq!(manifest.node.len(), 4);
    assert_eq!(manifest.edge_count(), 3);

    let plan = build_plan(&[manifest], &[], None);
    assert_eq!(plan.mode(), EmissionMode::Needed);
    assert_eq!(emitted_lines(plan)?, vec!["initA();", "initB();", "initC();"]);
    Ok(())
}

#[test]
fn extra_needed_nodes_switch_to_needed_mode() -> TestResult {
    let manifest = ManifestBuilder::new()
        .with_node("A", NodeConfigBuilder::new().init("a();").build())
        .with_node("B", NodeConfigBuilder::new().init("b();").after("A").build())
        .with_node("Z", NodeConfigBuilder::new().init("z();").build())
        .build();

    let plan = build_plan(&[manifest], &["B".to_string()], None);
    assert_eq!(emitted_lines(plan)?, vec!["a();", "b();"]);
    Ok(())
}

#[test]
fn manifests_merge_in_order_with_first_registration_winning() -> TestResult {
    let base = ManifestBuilder::new()
        .with_node("log", NodeConfigBuilder::new().init("init_log();").build())
        .build();
    let extra = ManifestBuilder::new()
        .with_node("log", NodeConfigBuilder::new().init("init_log_verbose();").build())
        .with_node("app", NodeConfigBuilder::new().init("app();").after("log").build())
        .build();

    let plan = build_plan(&[base.clone(), extra.clone()], &[], None);
    assert_eq!(emitted_lines(plan)?, vec!["init_log();", "app();"]);

    let plan = build_plan(&[base, extra], &[], Some(DuplicateInitPolicy::Overwrite));
    assert_eq!(emitted_lines(plan)?, vec!["init_log_verbose();", "app();"]);
    Ok(())
}

#[test]
fn cli_policy_overrides_manifest_policy() {
    let manifests = vec![
        ManifestBuilder::new().build(),
        ManifestBuilder::new()
            .with_duplicate_init(DuplicateInitPolicy::Overwrite)
            .build(),
    ];

    assert_eq!(effective_policy(None, &manifests), DuplicateInitPolicy::Overwrite);
    assert_eq!(
        effective_policy(Some(DuplicateInitPolicy::KeepFirst), &manifests),
        DuplicateInitPolicy::KeepFirst
    );
    assert_eq!(effective_policy(None, &[]), DuplicateInitPolicy::KeepFirst);
}

#[test]
fn duplicate_init_is_read_from_config_section() -> TestResult {
    let manifest = read_manifest(
        r#"
[config]
duplicate_init = "overwrite"
"#
        .as_bytes(),
    )?;

    assert_eq!(manifest.config.duplicate_init, Some(DuplicateInitPolicy::Overwrite));
    Ok(())
}

#[test]
fn unknown_policy_is_a_toml_error() {
    let result = read_manifest(
        r#"
[config]
duplicate_init = "newest"
"#
        .as_bytes(),
    );

    match result {
        Err(DependgenError::TomlError(_)) => {}
        other => panic!("Expected TomlError, got: {:?}", other),
    }
}

#[test]
fn empty_dependency_name_returns_config_error() {
    let file = manifest_file(
        r#"
[node.A]
init = "a();"
after = ["  "]
"#,
    );

    match load_and_validate(file.path()) {
        Err(DependgenError::ConfigError(msg)) => {
            assert!(msg.contains("empty node name"));
            assert!(msg.contains("'A'"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_needed_name_returns_config_error() {
    let result = read_manifest(r#"needed = [""]"#.as_bytes());
    assert!(matches!(result, Err(DependgenError::ConfigError(_))));
}

#[test]
fn missing_file_returns_io_error() {
    let result = load_and_validate("/definitely/not/here/Depend.toml");
    assert!(matches!(result, Err(DependgenError::IoError(_))));
}

#[test]
fn cycles_are_left_to_the_engine() -> TestResult {
    let manifest = read_manifest(
        r#"
[node.A]
init = "a();"
after = ["B"]

[node.B]
init = "b();"
after = ["A"]
"#
        .as_bytes(),
    )?;

    let plan = build_plan(&[manifest], &[], None);
    assert!(matches!(
        emitted_lines(plan),
        Err(DependgenError::CycleDetected { .. })
    ));
    Ok(())
}
