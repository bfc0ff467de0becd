//! In-flight request coalescing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures::future::{BoxFuture, FutureExt, Shared};
use tracing::debug;

use vidsight_models::{VideoInsightInput, VideoInsightResult};

use crate::engine::InsightEngine;

type SharedRun = Shared<BoxFuture<'static, VideoInsightResult>>;

/// Coalesces concurrent identical insight requests.
///
/// Keyed by a fingerprint of the video identifier: at most one orchestration
/// run is in flight per fingerprint, and callers arriving while it runs
/// await the same shared handle instead of starting another run. The entry
/// is dropped when the run completes, so a later request starts fresh.
pub struct InflightRegistry {
    engine: Arc<InsightEngine>,
    inflight: Arc<Mutex<HashMap<String, SharedRun>>>,
}

impl InflightRegistry {
    pub fn new(engine: InsightEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            inflight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Produce insights for `input`, attaching to an in-flight run for the
    /// same fingerprint when one exists.
    pub async fn produce(&self, fingerprint: &str, input: VideoInsightInput) -> VideoInsightResult {
        let run = {
            let mut inflight = self.inflight.lock().unwrap();
            if let Some(existing) = inflight.get(fingerprint) {
                debug!(fingerprint, "attaching to in-flight insight run");
                existing.clone()
            } else {
                let engine = Arc::clone(&self.engine);
                let registry = Arc::clone(&self.inflight);
                let key = fingerprint.to_string();
                let run: SharedRun = async move {
                    let result = engine.produce(&input).await;
                    registry.lock().unwrap().remove(&key);
                    result
                }
                .boxed()
                .shared();
                inflight.insert(fingerprint.to_string(), run.clone());
                run
            }
        };

        run.await
    }

    /// Number of runs currently in flight.
    pub fn inflight_len(&self) -> usize {
        self.inflight.lock().unwrap().len()
    }
}
