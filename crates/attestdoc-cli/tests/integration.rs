//! Integration tests for CLI commands.

use std::process::Command;

use tempfile::TempDir;

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new("cargo")
        .args(["run", "--bin", "attestdoc", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let success = output.status.success();

    (success, stdout, stderr)
}

fn issue_args<'a>(ledger: &'a str, out: &'a str, connected: bool) -> Vec<&'a str> {
    let mut args = vec![
        "issue",
        "--business-name",
        "Acme",
        "--tx-hash",
        "0xabc",
        "--invoice-date",
        "2024-06-01",
        "--product-name",
        "Widget",
        "--category",
        "Hardware",
        "--quantity",
        "5",
        "--network",
        "sepolia",
        "--amount",
        "1000000000000000000",
        "--customer",
        "0x00112233445566778899aabbccddeeff00112233",
        "--ledger",
        ledger,
        "--out",
        out,
    ];
    if connected {
        args.push("--connected-chain");
        args.push("0xaa36a7");
    }
    args
}

#[test]
fn issue_then_verify_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = temp_dir.path().join("ledger.json");
    let artifact = temp_dir.path().join("invoice.atf");
    let ledger = ledger.to_string_lossy().to_string();
    let artifact = artifact.to_string_lossy().to_string();

    let (success, stdout, stderr) = run_cli(&issue_args(&ledger, &artifact, true));
    assert!(success, "issue failed: {}", stderr);
    assert!(stdout.contains("onchain_evm_11155111_1"));

    let (success, stdout, _) = run_cli(&["verify", &artifact, "--ledger", &ledger]);
    assert!(success);
    assert!(stdout.contains("Verified: onchain_evm_11155111_1"));
}

#[test]
fn issue_without_connection_is_gated() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = temp_dir.path().join("ledger.json");
    let artifact = temp_dir.path().join("invoice.atf");
    let ledger = ledger.to_string_lossy().to_string();
    let artifact = artifact.to_string_lossy().to_string();

    let (success, _, stderr) = run_cli(&issue_args(&ledger, &artifact, false));
    assert!(!success);
    assert!(stderr.contains("network not ready"));
    // The gate fires before anything touches the ledger or the artifact.
    assert!(!std::path::Path::new(&ledger).exists());
    assert!(!std::path::Path::new(&artifact).exists());
}

#[test]
fn verify_against_empty_ledger_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let issuing_ledger = temp_dir.path().join("ledger.json").to_string_lossy().to_string();
    let other_ledger = temp_dir.path().join("other.json").to_string_lossy().to_string();
    let artifact = temp_dir.path().join("invoice.atf").to_string_lossy().to_string();

    let (success, _, stderr) = run_cli(&issue_args(&issuing_ledger, &artifact, true));
    assert!(success, "issue failed: {}", stderr);

    let (success, stdout, _) = run_cli(&["verify", &artifact, "--ledger", &other_ledger]);
    assert!(success);
    assert!(stdout.contains("Rejected"));

    let (success, _, _) = run_cli(&["verify", &artifact, "--ledger", &other_ledger, "--strict"]);
    assert!(!success);
}

#[test]
fn inspect_and_extract_show_embedded_record() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = temp_dir.path().join("ledger.json").to_string_lossy().to_string();
    let artifact = temp_dir.path().join("invoice.atf").to_string_lossy().to_string();

    let (success, _, stderr) = run_cli(&issue_args(&ledger, &artifact, true));
    assert!(success, "issue failed: {}", stderr);

    let (success, stdout, _) = run_cli(&["inspect", &artifact]);
    assert!(success);
    assert!(stdout.contains("Acme"));
    assert!(stdout.contains("1000000000000000000 wei"));

    let (success, stdout, _) = run_cli(&["extract", &artifact]);
    assert!(success);
    assert!(stdout.contains(r#""fullAttestationId":"onchain_evm_11155111_1""#));
    assert!(stdout.contains(r#""amount":"1000000000000000000""#));
}

#[test]
fn verify_rejects_non_artifact_file() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = temp_dir.path().join("ledger.json").to_string_lossy().to_string();
    let bogus = temp_dir.path().join("bogus.atf");
    std::fs::write(&bogus, b"not an artifact").unwrap();
    let bogus = bogus.to_string_lossy().to_string();

    let (success, stdout, _) = run_cli(&["verify", &bogus, "--ledger", &ledger]);
    assert!(success);
    assert!(stdout.contains("Rejected"));
    assert!(stdout.contains("not a valid attestation document"));
}
