use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the runner's debug
/// switch (`RUNNER_DEBUG=1` enables debug output, as re-running a job with
/// debug logging does).
pub fn init() {
    let default_level = default_level(std::env::var("RUNNER_DEBUG").ok().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_level(runner_debug: Option<&str>) -> &'static str {
    match runner_debug {
        Some("1") => "debug",
        _ => "info",
    }
}

/// Formats a message as a workflow `error` command so the runner annotates the job.
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_command_data(message))
}

fn escape_command_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
