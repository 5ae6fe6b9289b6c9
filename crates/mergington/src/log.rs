pub use tracing::{debug, error, info, trace, warn};

use crate::errors::LogError;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,tower_http=debug,mergington_backend=debug";

#[cfg(all(target_arch = "wasm32", feature = "dev-logging"))]
/// Setup the logging system for the landing page.
/// Installs the panic hook and routes [`tracing`] events to the browser console
/// through [`tracing-web`].
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::fmt::format::{FmtSpan, Pretty};
    use tracing_subscriber::fmt::time::UtcTime;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(tracing_web::MakeConsoleWriter)
        .with_span_events(FmtSpan::ACTIVE);
    let perf_layer = tracing_web::performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .try_init()
        .map_err(|e| LogError::TracingSubscriber(Box::new(e)))?;

    Ok(())
}

#[cfg(all(target_arch = "wasm32", not(feature = "dev-logging")))]
/// Without `dev-logging` only the panic hook is installed.
pub fn setup() -> Result<(), LogError> {
    console_error_panic_hook::set_once();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
/// Setup the logging system for the server.
///
/// Installs [`color_eyre`] for error reports and a [`tracing-subscriber`]
/// formatter. The filter comes from `RUST_LOG` when it is set and falls back
/// to [`DEFAULT_FILTER`] otherwise.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::EnvFilter;

    color_eyre::install().map_err(|e| LogError::ColorEyre(e.to_string()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(LogError::TracingSubscriber)?;

    Ok(())
}
