//! Cross-process determinism: spawns the `search_fixture` binary under
//! several environment variants and asserts identical output. Report
//! digests must not depend on cwd, locale, env vars or hash seeds.

use std::path::Path;
use std::process::Command;

/// `cargo test` puts test binaries in `target/<profile>/deps/`; the fixture
/// binary lives one directory up.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("search_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

/// Run the fixture with the given cwd and environment overrides; return stdout.
fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn field<'a>(output: &'a str, key: &str) -> &'a str {
    output
        .lines()
        .find_map(|line| line.strip_prefix(key)?.strip_prefix('='))
        .unwrap_or_else(|| panic!("missing {key} in output:\n{output}"))
}

#[test]
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    let alt_cwd = std::env::temp_dir().to_string_lossy().to_string();
    assert_eq!(
        baseline,
        run_variant(&alt_cwd, &[]),
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    assert_eq!(
        baseline,
        run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]),
        "output differs when LC_ALL=C LANG=C"
    );

    assert_eq!(
        baseline,
        run_variant(&root, &[("RUST_LOG", "trace")]),
        "output differs when tracing is enabled"
    );

    assert_eq!(
        baseline,
        run_variant(
            &root,
            &[
                ("WAYFIND_NOISE", "should_not_matter"),
                ("TZ", "America/New_York"),
                ("HOME", "/nonexistent"),
            ],
        ),
        "output differs with spurious env vars"
    );
}

#[test]
fn crossproc_output_reports_expected_outcomes() {
    let output = run_variant(&workspace_root(), &[]);

    assert_eq!(field(&output, "grid.termination"), "goal_reached");
    assert_eq!(field(&output, "grid.edges"), "10");
    assert_eq!(field(&output, "hex.edges"), "2");
    assert_eq!(field(&output, "floors.edges"), "11");
    assert!(field(&output, "grid.digest").starts_with("sha256:"));
    assert!(field(&output, "explore.digest").starts_with("sha256:"));
    assert_ne!(
        field(&output, "grid.policy_digest"),
        field(&output, "hex.policy_digest"),
        "policy snapshot binds the world id"
    );
}
