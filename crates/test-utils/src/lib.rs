pub mod builders;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

use dependgen::dag::{InitPlan, OrderEngine};
use dependgen::emit::CollectingEmitter;
use dependgen::errors::Result;

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Run `plan` to completion and return the emitted lines.
pub fn emitted_lines(plan: InitPlan) -> Result<Vec<String>> {
    let mut emitter = CollectingEmitter::new();
    OrderEngine::new(plan).run(&mut emitter)?;
    Ok(emitter.lines().into_iter().map(str::to_string).collect())
}

/// Run `plan` and return the collector even when the run fails, together
/// with the outcome.
pub fn run_collecting(plan: InitPlan) -> (CollectingEmitter, Result<()>) {
    let mut emitter = CollectingEmitter::new();
    let outcome = OrderEngine::new(plan).run(&mut emitter).map(|_| ());
    (emitter, outcome)
}
