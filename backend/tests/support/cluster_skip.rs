//! `SKIP_TEST_CLUSTER` policy for suites that need embedded PostgreSQL.

/// Opt-in switch for the embedded PostgreSQL suites.
pub const RUN_PG_EMBEDDED: &str = "RUN_PG_EMBEDDED";

/// True when `SKIP_TEST_CLUSTER` is `1`, `true` or `yes` (any case).
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// True unless `RUN_PG_EMBEDDED=1`; prints a skip marker when not enabled.
pub fn embedded_postgres_disabled() -> bool {
    let disabled = std::env::var(RUN_PG_EMBEDDED).as_deref() != Ok("1");
    if disabled {
        eprintln!("SKIP-TEST-CLUSTER: set {RUN_PG_EMBEDDED}=1 to run");
    }
    disabled
}

/// Handle a cluster setup failure.
///
/// Returns `None` with a skip marker when `SKIP_TEST_CLUSTER` is truthy and
/// panics otherwise so CI breakage is not masked.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
