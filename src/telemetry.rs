use crate::configuration::TelemetrySettings;
use anyhow::{Context, Result};
use tracing::{subscriber::set_global_default, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

/// Compose the bunyan JSON layers into a `tracing`'s subscriber.
///
/// `RUST_LOG` takes precedence over `env_filter` when it is set.
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(name, sink))
}

/// Same as [`get_subscriber`] with name and filter taken from the settings file.
pub fn subscriber_from_settings<Sink>(
    settings: &TelemetrySettings,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    get_subscriber(settings.name.clone(), settings.env_filter.clone(), sink)
}

/// Register a subscriber as global default and redirect `log` records into it.
/// Fails if called twice in the same process.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<()> {
    LogTracer::init().with_context(|| {
        format!(
            "{}::telemetry::init_subscriber: Failed to bridge log records into tracing",
            env!("CARGO_PKG_NAME")
        )
    })?;
    set_global_default(subscriber).with_context(|| {
        format!(
            "{}::telemetry::init_subscriber: Failed to initialize tracing subscriber",
            env!("CARGO_PKG_NAME")
        )
    })
}
