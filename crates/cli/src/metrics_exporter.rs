//! Prometheus exposition of the shortcut invocation counter.
//!
//! Installs a global `PrometheusRecorder` with an HTTP listener serving
//! `/metrics`. The exporter runs for the life of the process.

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

pub struct MetricsExporter {
    bind_addr: SocketAddr,
}

impl MetricsExporter {
    /// Install the exporter as the global metrics recorder.
    pub fn install(bind_addr: &str) -> Result<Self, MetricsExporterError> {
        let addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| MetricsExporterError::InvalidBindAddress(bind_addr.to_string(), e))?;

        PrometheusBuilder::new()
            .with_http_listener(addr)
            .install()
            .map_err(|e| MetricsExporterError::Install(e.to_string()))?;

        tracing::info!("Prometheus metrics exporter started on http://{}/metrics", addr);
        Ok(Self { bind_addr: addr })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MetricsExporterError {
    #[error("Invalid bind address '{0}': {1}")]
    InvalidBindAddress(String, std::net::AddrParseError),

    #[error("Failed to start metrics exporter: {0}")]
    Install(String),
}
