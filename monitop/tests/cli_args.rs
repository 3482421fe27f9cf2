//! CLI arg parsing tests for monitop (binary-level)
use std::process::Command;

#[test]
fn test_help_mentions_short_and_long_flags() {
    let output = Command::new(env!("CARGO_BIN_EXE_monitop"))
        .arg("--help")
        .output()
        .expect("run monitop --help");
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        text.contains("--tls-ca")
            && text.contains("-t")
            && text.contains("--profile")
            && text.contains("-P")
            && text.contains("--dry-run"),
        "help text missing expected flags (--tls-ca/-t, --profile/-P, --dry-run)\n{text}"
    );
}

#[test]
fn test_flags_accepted_alongside_help() {
    let exe = env!("CARGO_BIN_EXE_monitop");
    // Long form with help
    let out = Command::new(exe)
        .args(["--tls-ca", "/tmp/cert.pem", "--help"])
        .output()
        .expect("run monitop");
    assert!(
        out.status.success(),
        "monitop --tls-ca … --help did not succeed"
    );
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(text.contains("Usage:"));
    // Short form with help
    let out2 = Command::new(exe)
        .args(["-t", "/tmp/cert.pem", "--help"])
        .output()
        .expect("run monitop");
    assert!(out2.status.success(), "monitop -t … --help did not succeed");
    let text2 = format!(
        "{}{}",
        String::from_utf8_lossy(&out2.stdout),
        String::from_utf8_lossy(&out2.stderr)
    );
    assert!(text2.contains("Usage:"));

    // Profile flags with help (should not error)
    let out3 = Command::new(exe)
        .args(["--profile", "dev", "--help"])
        .output()
        .expect("run monitop");
    assert!(
        out3.status.success(),
        "monitop --profile dev --help did not succeed"
    );
    let text3 = format!(
        "{}{}",
        String::from_utf8_lossy(&out3.stdout),
        String::from_utf8_lossy(&out3.stderr)
    );
    assert!(text3.contains("Usage:"));
}

#[test]
fn test_invalid_url_reported() {
    let out = Command::new(env!("CARGO_BIN_EXE_monitop"))
        .args(["http://[bad", "--dry-run"])
        .output()
        .expect("run monitop");
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(text.contains("Invalid URL"), "expected URL error: {text}");
}
