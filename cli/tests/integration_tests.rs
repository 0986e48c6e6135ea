use std::fs;
use std::process::{Command, Output};

fn argmap(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_argmap"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run argmap")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is utf-8")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is utf-8")
}

#[test]
fn prints_tuple_notation_by_default() {
    let out = argmap(&["curl -s -SP8080 www.github.com www.pypi.org --basic --retry 5"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(
        stdout(&out).trim_end(),
        "{'utility': [('curl',)], '-s': [()], '-S': [()], '-P': [('8080',)], \
         'operands': [('www.github.com',), ('www.pypi.org',)], '--basic': [()], '--retry': [('5',)]}"
    );
}

#[test]
fn pretty_tuple_notation_puts_one_key_per_line() {
    let out = argmap(&["-p", "curl -P 8080 host"]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "{\n  'utility': [('curl',)],\n  '-P': [('8080',)],\n  'operands': [('host',)]\n}\n"
    );
}

#[test]
fn json_output_preserves_key_order() {
    let out = argmap(&["--json", "sips -s format jpeg infile --out outfile"]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out).trim_end(),
        r#"{"utility":[["sips"]],"-s":[["format"]],"operands":[["jpeg"],["infile"]],"--out":[["outfile"]]}"#
    );
}

#[test]
fn inline_limit_overrides_are_applied() {
    let out = argmap(&[
        "-j",
        "-l",
        r#"{"-s": 2}"#,
        "sips -s format jpeg infile --out outfile",
    ]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("valid JSON");
    assert_eq!(value["-s"], serde_json::json!([["format", "jpeg"]]));
    assert_eq!(value["operands"], serde_json::json!([["infile"]]));
}

#[test]
fn limits_file_is_loaded() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("limits.yaml");
    fs::write(&path, "-c: ~\n").expect("write limits");

    let out = argmap(&[
        "--json",
        "--pretty",
        "--limits-file",
        path.to_str().expect("utf-8 path"),
        "tar -c a b c -f out.tar",
    ]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("valid JSON");
    assert_eq!(value["-c"], serde_json::json!([["a", "b", "c"]]));
    assert_eq!(value["-f"], serde_json::json!([["out.tar"]]));
    assert!(value.get("operands").is_none());
}

#[test]
fn yaml_output() {
    let out = argmap(&["--yaml", "curl -s host"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("utility:"));
    assert!(text.contains("curl"));
    assert!(text.contains("host"));
}

#[test]
fn syntax_error_exits_with_failure() {
    let out = argmap(&["curl --ftp-port8084"]);
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("error: argument \"--ftp-port8084\" is invalid syntax"));
    assert!(stdout(&out).is_empty());
}

#[test]
fn negative_limit_override_exits_with_failure() {
    let out = argmap(&["-l", r#"{"-s": -2}"#, "sips -s a b"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Invalid --limit-overrides"));
}

#[test]
fn missing_limits_file_exits_with_failure() {
    let out = argmap(&["--limits-file", "/nonexistent/limits.yaml", "curl"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Failed to load limits file"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let out = argmap(&["--verbose", "-j", "curl -s host"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("valid JSON");
    assert_eq!(value["utility"], serde_json::json!([["curl"]]));
    assert!(stderr(&out).contains("Classified command"));
}
