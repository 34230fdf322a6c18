mod common;

use clap::Parser;
use common::temp_files::create_temp_yaml;
use common::DEMO_TABLE;
use roadmap::cli::{run_command, Cli, Commands};
use std::io::Write;
use std::process::{Command, Stdio};

fn run(args: &[&str], stdin: &str) -> String {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    run_command(&cli, stdin.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_cli_parses_route_arguments() {
    let cli = Cli::try_parse_from([
        "roadmap",
        "--table",
        "routes.yaml",
        "route",
        "--json",
        "--key",
        "endbeforewwwwafter",
        r#"["woot", "scoot"]"#,
    ])
    .unwrap();

    match cli.command {
        Commands::Route(input) => {
            assert!(input.json);
            assert_eq!(input.key.as_deref(), Some("endbeforewwwwafter"));
            assert_eq!(input.input, r#"["woot", "scoot"]"#);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_route_command_prints_result() {
    let table = create_temp_yaml(DEMO_TABLE);
    let path = table.path().to_str().unwrap();

    assert_eq!(
        run(&["roadmap", "--table", path, "route", "alice@example.org"], ""),
        "Organization address: alice\n"
    );
    assert_eq!(
        run(
            &[
                "roadmap",
                "--table",
                path,
                "route",
                "--json",
                "--key",
                "endbeforewwwwafter",
                r#"["woot", "scoot"]"#,
            ],
            ""
        ),
        "woot scoot before / after\n"
    );
}

#[test]
fn test_which_command_reports_handler_name() {
    let table = create_temp_yaml(DEMO_TABLE);
    let path = table.path().to_str().unwrap();

    assert_eq!(
        run(&["roadmap", "--table", path, "which", "bob@example.com"], ""),
        "com_address\n"
    );
    assert_eq!(
        run(&["roadmap", "--table", path, "which", "hello"], ""),
        "<none>\n"
    );
}

#[test]
fn test_list_command_prints_patterns_in_order() {
    let table = create_temp_yaml(DEMO_TABLE);
    let path = table.path().to_str().unwrap();

    let output = run(&["roadmap", "--table", path, "list"], "");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("0\tcom_address\t"));
    assert!(lines[1].ends_with("pass_primary=false"));
    assert!(lines[4].starts_with("4\tends_with_w\t"));
}

#[test]
fn test_repl_routes_each_line() {
    let table = create_temp_yaml(DEMO_TABLE);
    let path = table.path().to_str().unwrap();

    let output = run(
        &["roadmap", "--table", path, "repl", "--prompt", "> "],
        "yeah\nNo\nwhatever\n",
    );
    assert_eq!(
        output,
        "> yes\n> You said no :( (\"No\" to be exact)\n> Sorry, regex not found\n> \n"
    );
}

#[test]
fn test_binary_runs_repl_over_stdin() {
    let table = create_temp_yaml(DEMO_TABLE);

    let exe = env!("CARGO_BIN_EXE_roadmap");
    let mut child = Command::new(exe)
        .arg("--table")
        .arg(table.path())
        .arg("repl")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("run roadmap binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"alice@example.org\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Organization address: alice"));
}

#[test]
fn test_binary_fails_on_missing_table() {
    let exe = env!("CARGO_BIN_EXE_roadmap");
    let output = Command::new(exe)
        .args(["--table", "/definitely/not/here.yaml", "list"])
        .output()
        .expect("run roadmap binary");
    assert!(!output.status.success());
}
