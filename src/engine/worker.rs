use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use crate::data::MarketDataProvider;

use super::messages::{FetchJob, FetchOutcome};

/// Spawn the background fetch thread.
///
/// The worker owns a single-threaded tokio runtime and serializes provider
/// calls, so at most one request per jobs-channel entry is ever running. It
/// exits when the engine drops its job sender or stops reading results.
pub fn spawn_fetch_worker(
    provider: Arc<dyn MarketDataProvider>,
    rx: Receiver<FetchJob>,
    tx: Sender<FetchOutcome>,
) {
    thread::Builder::new()
        .name("fcpo-fetch".into())
        .spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create fetch runtime");

            log::debug!("Fetch worker up, serving via {}", provider.signature());

            while let Ok(job) = rx.recv() {
                let outcome = match job {
                    FetchJob::Primary { timeframe, epoch } => {
                        let result = rt
                            .block_on(provider.fetch_primary(timeframe))
                            .map_err(|e| format!("{e:#}"));
                        FetchOutcome::Primary { epoch, result }
                    }
                    FetchJob::Comparison {
                        timeframe,
                        mode,
                        reference,
                        epoch,
                        primary_epoch,
                    } => {
                        let result = rt
                            .block_on(provider.fetch_comparison(timeframe, mode, &reference))
                            .map_err(|e| format!("{e:#}"));
                        FetchOutcome::Comparison {
                            epoch,
                            primary_epoch,
                            result,
                        }
                    }
                };

                // Receiver gone means the engine is shutting down
                if tx.send(outcome).is_err() {
                    break;
                }
            }
        })
        .expect("Failed to spawn fetch worker thread");
}
