//! Periodic score perturbation task

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::task::JoinHandle;
use tracing::info;

use podium_index::RankedIndex;

/// Spawn the recurring batch task: every `interval`, perturb `batch` records
/// and recompute every rank under one exclusive lock acquisition.
///
/// The immediate first tick is consumed so the seeded state serves for a
/// full interval before the first perturbation. The task runs for the
/// process lifetime; there is no mid-cycle cancellation.
pub fn spawn(index: Arc<RankedIndex>, interval: Duration, batch: usize) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut rng = StdRng::from_entropy();
        let mut ticker = tokio::time::interval(interval);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            index.run_update_batch(batch, &mut rng);
            info!(batch, "ratings updated and ranks recalculated");
        }
    })
}
