//! End-to-end checks of the `transformers` binary.

use std::process::Command;

fn transformers() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_transformers"));
    cmd.env_remove("RUST_LOG").env_remove("HF_MODEL");
    cmd
}

#[test]
fn test_failed_request_exits_with_error_prefix() {
    let output = transformers()
        .args([
            "classify",
            "great",
            "--endpoint",
            "http://127.0.0.1:1",
            "--token",
            "hf-x",
            "--timeout",
            "5s",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.starts_with("Error: classification failed: classification request failed"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_models_lists_aliases() {
    let output = transformers().arg("models").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Model aliases:"));
    assert!(stdout.contains("sentiment"));
    assert!(stdout.contains("distilbert-base-uncased-finetuned-sst-2-english"));
}
