use assert_cmd::cargo::cargo_bin_cmd;

/// Tests that `--help` is handled successfully by the CLI.
///
/// This test verifies:
/// 1. Running `review-scheduler-cli --help` exits successfully
/// 2. The help text is written to stdout (captured and printed for visibility)
/// 3. No unexpected stderr output is produced
#[test]
fn test_cli_help_success() {
  let mut cmd = cargo_bin_cmd!("review-scheduler-cli");

  let assert = cmd.arg("--help").assert().success();

  let out = assert.get_output();
  println!("=== review-scheduler-cli --help stdout ===\n\n{}\n=====================================", String::from_utf8_lossy(&out.stdout));

  assert!(
  	!out.stdout.is_empty(),
  	"expected non-empty stdout for --help"
  );
  assert!(
  	out.stderr.is_empty(),
  	"expected empty stderr for --help, got:\n{}",
  	String::from_utf8_lossy(&out.stderr)
  );
}

/// An invalid `user-id` (not a UUID) should fail clap's value parsing before
/// any HTTP request is attempted, so no server needs to be running.
#[test]
fn test_review_create_rejects_a_non_uuid_user_id() {
  let mut cmd = cargo_bin_cmd!("review-scheduler-cli");

  cmd.args([
    "review",
    "create",
    "--user-id",
    "not-a-uuid",
    "--card-id",
    "00000000-0000-0000-0000-000000000000",
    "--rating",
    "1",
    "--idempotency-key",
    "k",
  ])
  .assert()
  .failure();
}
