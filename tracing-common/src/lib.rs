use std::{collections::HashMap, time::Duration};

use color_eyre::{eyre::WrapErr, Result};
use opentelemetry_otlp::WithExportConfig;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{fmt::MakeWriter, prelude::*, EnvFilter, Registry};
use tracing_tree::HierarchicalLayer;

const DEFAULT_RUST_LOG: &str = "warn,server=trace,posts=debug,tower_http=debug";

/// Starts Sentry when `SENTRY_DSN` is set. Keep the guard alive for the life of
/// the process so queued events get flushed on exit.
#[must_use]
pub fn setup_sentry() -> Option<sentry::ClientInitGuard> {
    let dsn = std::env::var("SENTRY_DSN").ok()?;

    let guard = sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            traces_sample_rate: 1.0,
            ..Default::default()
        },
    ));
    eprintln!("Sentry configured");

    Some(guard)
}

/// Indented span tree logging into `writer`.
///
/// Binaries hand this stderr so stdout stays free for command output.
pub fn tree_layer<W>(writer: W) -> HierarchicalLayer<W>
where
    W: for<'writer> MakeWriter<'writer> + 'static,
{
    HierarchicalLayer::default()
        .with_writer(writer)
        .with_indent_lines(true)
        .with_indent_amount(2)
        .with_thread_names(true)
        .with_thread_ids(true)
        .with_verbose_exit(true)
        .with_verbose_entry(true)
        .with_targets(true)
}

/// Stderr tree logging, plus Honeycomb export when `HONEYCOMB_API_KEY` is set.
///
/// The OTLP batch exporter needs a running Tokio runtime, so call this from
/// inside one.
pub fn setup_tracing(service_name: &str) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.into());

    let env_filter = EnvFilter::builder()
        .parse(&rust_log)
        .wrap_err_with(|| format!("Couldn't create env filter from {rust_log}"))?;

    let opentelemetry_layer = if let Ok(honeycomb_key) = std::env::var("HONEYCOMB_API_KEY") {
        let mut map = HashMap::<String, String>::new();
        map.insert("x-honeycomb-team".to_string(), honeycomb_key);
        map.insert("x-honeycomb-dataset".to_string(), service_name.to_string());

        let tracer = opentelemetry_otlp::new_pipeline()
            .tracing()
            .with_exporter(
                opentelemetry_otlp::new_exporter()
                    .http()
                    .with_endpoint("https://api.honeycomb.io/v1/traces")
                    .with_timeout(Duration::from_secs(3))
                    .with_headers(map),
            )
            .install_batch(opentelemetry_sdk::runtime::Tokio)
            .wrap_err("Couldn't install the OTLP trace pipeline")?;

        eprintln!("Honeycomb layer configured");

        Some(OpenTelemetryLayer::new(tracer))
    } else {
        eprintln!("Skipping Honeycomb layer");

        None
    };

    Registry::default()
        .with(tree_layer(std::io::stderr))
        .with(opentelemetry_layer)
        .with(sentry_tracing::layer())
        .with(env_filter)
        .try_init()
        .wrap_err("Couldn't install the global tracing subscriber")?;

    Ok(())
}
