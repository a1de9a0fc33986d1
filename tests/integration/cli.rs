//! CLI integration tests

use std::process::Command;

fn supertiny() -> Command {
    Command::new(env!("CARGO_BIN_EXE_supertiny"))
}

#[test]
fn test_eval_prints_output() {
    let output = supertiny()
        .args(["eval", "(add 2 (subtract 4 2))"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "add(2, subtract(4, 2))"
    );
}

#[test]
fn test_eval_error_exits_non_zero() {
    let output = supertiny().args(["eval", "(add 2"]).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unexpected end of input"));
}

#[test]
fn test_compile_file_with_recursive_strategy() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("input.lisp");
    std::fs::write(&file, "(a 1)\n(b \"x\")\n").unwrap();

    let output = supertiny()
        .current_dir(dir.path())
        .args(["--strategy", "recursive", "compile"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a(1)\nb(\"x\")\n");
}

#[test]
fn test_dump_tokens_is_json() {
    let output = supertiny()
        .args(["dump", "--stage", "tokens", "(f 1)"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let tokens: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tokens.as_array().map(|a| a.len()), Some(4));
    assert_eq!(tokens[1]["kind"], "Name");
    assert_eq!(tokens[1]["text"], "f");
}
