//! One-shot connectivity probe.
//!
//! The probe sends a single test message through the orchestrator at startup
//! and records whether the remote path answered. The result is written once
//! and read lock-free for the rest of the process.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use tracing::{info, instrument, warn};

use crate::domain::models::{AgentId, ConnectivityStatus, ModelDescriptor, Provenance};
use crate::services::orchestrator::Orchestrator;

/// Message sent by the probe
pub const PROBE_MESSAGE: &str = "Test connection";

/// Process-scoped holder of the probe outcome
#[derive(Debug, Default)]
pub struct ConnectivityMonitor {
    started: AtomicBool,
    outcome: OnceLock<ConnectivityStatus>,
}

/// Records the probe as failed if it is dropped before finishing.
struct UnfinishedProbe<'a> {
    outcome: &'a OnceLock<ConnectivityStatus>,
    model: Option<ModelDescriptor>,
}

impl Drop for UnfinishedProbe<'_> {
    fn drop(&mut self) {
        if self.outcome.get().is_none() {
            warn!("connectivity probe abandoned before completing");
            let model = self.model.take();
            self.outcome.get_or_init(|| ConnectivityStatus {
                probed: true,
                remote_available: Some(false),
                model,
            });
        }
    }
}

impl ConnectivityMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the probe if it has not run yet, then return the status.
    ///
    /// Later calls, and calls racing with an in-flight probe, return the
    /// current snapshot without issuing another request. A probe whose future
    /// is dropped mid-flight counts as failed.
    #[instrument(skip_all)]
    pub async fn probe(&self, orchestrator: &Orchestrator) -> ConnectivityStatus {
        if self
            .started
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return self.status();
        }

        let model = orchestrator.client().model_descriptor();
        let _unfinished = UnfinishedProbe {
            outcome: &self.outcome,
            model: Some(model.clone()),
        };

        let available = match orchestrator.respond(AgentId::Policy, PROBE_MESSAGE, &[]).await {
            Ok(result) => {
                if let Some(err) = &result.error {
                    warn!(error = %err, "remote completion unavailable, running in fallback mode");
                }
                result.provenance == Provenance::Remote
            }
            Err(err) => {
                warn!(error = %err, "connectivity probe could not run");
                false
            }
        };

        let status = ConnectivityStatus {
            probed: true,
            remote_available: Some(available),
            model: Some(model),
        };
        info!(remote_available = available, mode = status.mode_label(), "connectivity probe finished");

        self.outcome.get_or_init(|| status).clone()
    }

    /// Snapshot of the current state; `remote_available` is `None` until the
    /// probe resolves.
    pub fn status(&self) -> ConnectivityStatus {
        self.outcome.get().cloned().unwrap_or_default()
    }

    pub fn is_probed(&self) -> bool {
        self.outcome.get().is_some()
    }
}
