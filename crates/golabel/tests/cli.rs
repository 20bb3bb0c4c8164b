use std::process::{Command, Output};

fn golabel(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_golabel"))
        .args(args)
        .env_remove("GOLABEL_ROOT_PREFIX")
        .env_remove("GOLABEL_PATH_ROOT")
        .env_remove("RUST_LOG")
        .output()
        .expect("golabel binary must run")
}

#[test]
fn prints_one_label_per_import() {
    let output = golabel(&[
        "--root-prefix",
        "example.com/repo",
        "--path-root",
        "go",
        "--dir",
        "cmd/server",
        "example.com/repo/lib/log",
        "example.com/repo/proto/api",
        "example.com/repo/cmd/server",
        "./handlers",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "example.com/repo/lib/log\t//go/lib/log:go_default_library",
            "example.com/repo/proto/api\t//proto/api:go_default_library",
            "example.com/repo/cmd/server\t:go_default_library",
            "./handlers\t//go/cmd/server/handlers:go_default_library",
        ]
    );
}

#[test]
fn json_output_carries_label_fields() {
    let output = golabel(&[
        "--root-prefix",
        "example.com/repo",
        "--json",
        "example.com/repo/lib/log",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
    let value: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("stdout must be one JSON object");
    assert_eq!(
        value,
        serde_json::json!({
            "import_path": "example.com/repo/lib/log",
            "label": "//lib/log:go_default_library",
            "pkg": "lib/log",
            "name": "go_default_library",
            "relative": false,
        })
    );
}

#[test]
fn external_import_fails_with_both_paths_in_message() {
    let output = golabel(&["--root-prefix", "example.com/repo", "other.org/lib"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("other.org/lib"), "stderr: {stderr}");
    assert!(stderr.contains("example.com/repo"), "stderr: {stderr}");
}

#[test]
fn rejects_root_prefix_with_trailing_slash() {
    let output = golabel(&["--root-prefix", "example.com/repo/", "example.com/repo/x"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid resolver configuration"), "stderr: {stderr}");
}
