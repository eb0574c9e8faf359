//! Seed logging.
//!
//! Every seed a generator is built with, or reseeded to, is logged so that a
//! failing test can be replayed deterministically. Logging never affects the
//! generators themselves.

use tracing_subscriber::EnvFilter;

/// Target used for all seed log records.
pub const RANDOMIZATION_TARGET: &str = "devtesting::randomization";

/// Returns an identifier for the currently executing test, if any.
///
/// The test harness runs each test on a thread named after the test's path
/// (`tests::test_name`, or `test_name` at a test crate's root). Thread names
/// that are not Rust paths, such as `tokio-runtime-worker`, and the main
/// thread yield `None`.
#[must_use]
pub fn current_test_name() -> Option<String> {
    std::thread::current()
        .name()
        .filter(|name| *name != "main" && is_test_path(name))
        .map(str::to_owned)
}

fn is_test_path(name: &str) -> bool {
    name.split("::").all(|segment| {
        let mut chars = segment.chars();
        chars
            .next()
            .is_some_and(|first| first == '_' || first.is_ascii_alphabetic())
            && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
    })
}

/// Emits a diagnostic record for `seed`, prefixed with the current test's
/// name when one is known.
pub fn log_seed(seed: u64) {
    match current_test_name() {
        Some(test) => tracing::info!(
            target: RANDOMIZATION_TARGET,
            seed,
            test = %test,
            "{test}: Using random seed {seed}"
        ),
        None => tracing::info!(target: RANDOMIZATION_TARGET, seed, "Using random seed {seed}"),
    }
}

/// Installs a global `tracing` subscriber that writes through the test
/// harness's captured output. Filtering follows `RUST_LOG` and defaults to
/// `info`. Calling this more than once is harmless.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

    impl CapturedOutput {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedOutput {
        type Writer = CapturedOutput;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let output = CapturedOutput::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(output.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        output.contents()
    }

    #[test]
    fn test_log_seed_records_seed_value() {
        let logged = capture(|| log_seed(9_876_543_210));

        assert!(logged.contains("Using random seed 9876543210"), "{logged}");
        assert!(logged.contains(RANDOMIZATION_TARGET), "{logged}");
    }

    #[test]
    fn test_log_seed_prefixes_current_test_name() {
        let logged = capture(|| log_seed(7));

        if let Some(test) = current_test_name() {
            assert!(logged.contains(&format!("{test}: Using random seed 7")), "{logged}");
        }
    }

    #[test]
    fn test_log_seed_on_unnamed_thread_has_no_prefix() {
        let logged = std::thread::Builder::new()
            .spawn(|| capture(|| log_seed(11)))
            .unwrap()
            .join()
            .unwrap();

        assert!(logged.contains("Using random seed 11"), "{logged}");
        assert!(!logged.contains("test="), "{logged}");
    }

    #[test]
    fn test_current_test_name_is_none_on_unnamed_thread() {
        let name = std::thread::spawn(current_test_name).join().unwrap();

        assert_eq!(name, None);
    }

    #[test]
    fn test_current_test_name_is_this_test() {
        assert_eq!(
            current_test_name().as_deref(),
            Some("logging::tests::test_current_test_name_is_this_test")
        );
    }

    #[test]
    fn test_current_test_name_is_none_on_named_worker_thread() {
        for thread_name in ["tokio-runtime-worker", "pool worker 3", "rayon-1", "a::::b"] {
            let name = std::thread::Builder::new()
                .name(thread_name.to_owned())
                .spawn(current_test_name)
                .unwrap()
                .join()
                .unwrap();

            assert_eq!(name, None, "{thread_name}");
        }
    }

    #[test]
    fn test_current_test_name_accepts_root_level_test_name() {
        let name = std::thread::Builder::new()
            .name("test_replays_seed".to_owned())
            .spawn(current_test_name)
            .unwrap()
            .join()
            .unwrap();

        assert_eq!(name.as_deref(), Some("test_replays_seed"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_current_test_name_is_none_in_spawned_runtime_task() {
        let name = tokio::spawn(async { current_test_name() }).await.unwrap();

        assert_eq!(name, None);
    }

    #[test]
    fn test_init_test_tracing_is_idempotent() {
        init_test_tracing();
        init_test_tracing();
        log_seed(1);
    }
}
