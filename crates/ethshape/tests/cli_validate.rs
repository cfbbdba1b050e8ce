#![cfg(feature = "cli")]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "ethshape-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn hex_of(byte: u8, len: usize) -> String {
    format!("0x{}", format!("{byte:02x}").repeat(len))
}

fn block_json() -> String {
    format!(
        r#"{{
            "number": 1,
            "hash": "{hash}",
            "parent_hash": "{hash}",
            "nonce": "{nonce}",
            "sha3_uncles": "{hash}",
            "logs_bloom": {bloom},
            "transactions_root": "{hash}",
            "state_root": "{hash}",
            "miner": "{miner}",
            "difficulty": 131072,
            "total_difficulty": 131072,
            "size": 512,
            "extra_data": "{hash}",
            "gas_limit": 3141592,
            "gas_used": 0,
            "timestamp": 1500000000,
            "transactions": [],
            "uncles": []
        }}"#,
        hash = hex_of(0x11, 32),
        nonce = hex_of(0x22, 8),
        miner = hex_of(0x33, 20),
        // 2^200: wider than any machine integer, well inside 2048 bits.
        bloom = "1606938044258990275541962092341162602522202993782792835301376",
    )
}

fn log_json(kind: &str, topic_len: usize) -> String {
    let position = if kind == "pending" {
        r#""transaction_index": null, "block_hash": null, "block_number": null"#.to_string()
    } else {
        format!(
            r#""transaction_index": 0, "block_hash": "{}", "block_number": 1"#,
            hex_of(0x44, 32)
        )
    };
    format!(
        r#"{{
            "type": "{kind}",
            "log_index": 0,
            {position},
            "transaction_hash": "{tx}",
            "address": "{address}",
            "data": "0x",
            "topics": ["{t1}", "{t2}"]
        }}"#,
        tx = hex_of(0x55, 32),
        address = hex_of(0x66, 20),
        t1 = hex_of(0x77, 32),
        t2 = hex_of(0x88, topic_len),
    )
}

fn run_validate(kind: &str, contents: &str, tag: &str) -> Output {
    run_validate_with(kind, contents.as_bytes(), tag, &[])
}

fn run_validate_with(kind: &str, contents: &[u8], tag: &str, extra: &[&str]) -> Output {
    let dir = unique_temp_dir(tag);
    let path = dir.join("records.json");
    std::fs::write(&path, contents).expect("fixture should be writable");

    let output = Command::new(env!("CARGO_BIN_EXE_ethshape"))
        .arg("--log-level")
        .arg("error")
        .arg("--format")
        .arg("json")
        .arg("validate")
        .arg(&path)
        .arg("--kind")
        .arg(kind)
        .args(extra)
        .output()
        .expect("validate should run");

    let _ = std::fs::remove_dir_all(&dir);
    output
}

fn report(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("report should be json")
}

#[test]
fn valid_block_exits_zero() {
    let output = run_validate("block", &block_json(), "block-ok");

    assert!(output.status.success());
    let payload = report(&output);
    assert_eq!(payload["valid"], serde_json::Value::Bool(true));
    assert_eq!(payload["kind"], "block");
    assert!(String::from_utf8_lossy(&output.stdout).contains("validation-report.schema.json"));
}

#[test]
fn block_with_extra_key_returns_60() {
    let contents = block_json().replacen("\"number\": 1,", "\"number\": 1, \"mix_hash\": \"0x\",", 1);
    let output = run_validate("block", &contents, "block-extra");

    assert_eq!(output.status.code(), Some(60));
    let payload = report(&output);
    let error = payload["records"][0]["error"].as_str().unwrap_or_default();
    assert!(error.contains("Got extra keys: 'mix_hash'"), "{error}");
}

#[test]
fn log_entry_batch_reports_each_record() {
    let contents = format!(
        "[{}, {}, {}]",
        log_json("pending", 32),
        log_json("mined", 32),
        log_json("mined", 31)
    );
    let output = run_validate("log-entry", &contents, "log-batch");

    assert_eq!(output.status.code(), Some(60));
    let payload = report(&output);
    let records = payload["records"].as_array().expect("records array");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["valid"], serde_json::Value::Bool(true));
    assert_eq!(records[1]["valid"], serde_json::Value::Bool(true));
    assert_eq!(records[2]["valid"], serde_json::Value::Bool(false));
    assert!(records[2]["error"]
        .as_str()
        .map(|s| s.ends_with("of length 31"))
        .unwrap_or(false));
}

#[test]
fn unknown_log_type_fails() {
    let contents = log_json("mined", 32).replace("\"mined\"", "\"unknown\"");
    let output = run_validate("log-entry", &contents, "log-type");
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn malformed_json_returns_60() {
    let output = run_validate("block", "{\"number\": ", "bad-json");

    assert_eq!(output.status.code(), Some(60));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed decoding"));
}

#[test]
fn validate_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ethshape"))
        .arg("--format")
        .arg("json")
        .arg("validate")
        .arg("-")
        .arg("--kind")
        .arg("log-entry")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("validate should start");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(log_json("pending", 32).as_bytes())
        .expect("stdin should be writable");

    let output = child.wait_with_output().expect("validate should finish");
    assert!(output.status.success());
    assert_eq!(report(&output)["source"], "<stdin>");
}

#[test]
fn missing_input_file_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_ethshape"))
        .arg("validate")
        .arg("/nonexistent/ethshape/records.json")
        .arg("--kind")
        .arg("block")
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn oversize_input_cut_inside_a_character_is_too_large() {
    // Each euro sign is three bytes; a 2-byte limit cuts the first one in half.
    let contents = format!("\"{}\"", "\u{20ac}".repeat(10));
    let output = run_validate_with(
        "block",
        contents.as_bytes(),
        "utf8-cut",
        &["--max-input-size", "2"],
    );

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("input too large"), "{stderr}");
}

#[test]
fn input_that_is_not_utf8_returns_60() {
    let output = run_validate_with("block", b"{\"number\": \xff}", "not-utf8", &[]);

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not valid UTF-8"), "{stderr}");
}

#[test]
fn overlong_integer_literal_is_rejected_before_validation() {
    let size = format!("\"size\": {}", "7".repeat(100_000));
    let contents = block_json().replacen("\"size\": 512", &size, 1);
    let output = run_validate("block", &contents, "long-integer");

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("integer literal too long"), "{stderr}");
}

#[test]
fn integer_digit_limit_is_configurable() {
    let output = run_validate_with(
        "block",
        block_json().as_bytes(),
        "digit-limit",
        &["--max-integer-digits", "20"],
    );

    // Every other integer in the fixture is shorter; the 61-digit logs bloom is not.
    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("(61 digits, max 20)"), "{stderr}");
}

#[test]
fn hash_command_checks_length() {
    let ok = Command::new(env!("CARGO_BIN_EXE_ethshape"))
        .arg("--format")
        .arg("json")
        .arg("hash")
        .arg(hex_of(0xab, 32))
        .output()
        .expect("hash should run");
    assert!(ok.status.success());

    let short = Command::new(env!("CARGO_BIN_EXE_ethshape"))
        .arg("hash")
        .arg(hex_of(0xab, 31))
        .output()
        .expect("hash should run");
    assert_eq!(short.status.code(), Some(60));

    let not_hex = Command::new(env!("CARGO_BIN_EXE_ethshape"))
        .arg("hash")
        .arg("0xzz")
        .output()
        .expect("hash should run");
    assert_eq!(not_hex.status.code(), Some(64));
}

#[test]
fn schema_lists_declared_fields() {
    let output = Command::new(env!("CARGO_BIN_EXE_ethshape"))
        .arg("--format")
        .arg("json")
        .arg("schema")
        .arg("--kind")
        .arg("block")
        .output()
        .expect("schema should run");

    assert!(output.status.success());
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("schema should emit json");
    let fields = payload["fields"].as_array().expect("fields array");
    assert_eq!(fields.len(), 18);
    assert_eq!(fields[5]["name"], "logs_bloom");
}

#[test]
fn version_reports_package_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_ethshape"))
        .arg("version")
        .output()
        .expect("version should run");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        format!("ethshape {}", env!("CARGO_PKG_VERSION"))
    );
}
