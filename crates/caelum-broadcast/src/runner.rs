use std::sync::Arc;
use std::time::Duration;

use jiff::Zoned;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::jobs::{BroadcastContext, BroadcastJob};

/// Spawn one long-running task per broadcast job
///
/// Each task sleeps until the job's next firing instant, runs it, logs
/// the outcome, and goes back to sleep. A failed execution is logged
/// and skipped; there is no retry or dead-letter path.
pub fn start_broadcasts(context: Arc<BroadcastContext>, jobs: impl IntoIterator<Item = BroadcastJob>) -> Vec<JoinHandle<()>> {
    jobs.into_iter()
        .map(|job| {
            let context = Arc::clone(&context);
            tokio::spawn(async move {
                run_job_loop(&context, job).await;
            })
        })
        .collect()
}

async fn run_job_loop(context: &BroadcastContext, job: BroadcastJob) {
    tracing::info!(job = job.name, "starting broadcast task");

    loop {
        let now = Zoned::now();
        let next = match job.schedule.next_after(&now) {
            Ok(next) => next,
            Err(e) => {
                tracing::error!(job = job.name, error = %e, "schedule arithmetic failed, stopping task");
                return;
            }
        };

        tracing::debug!(job = job.name, next = %next, "sleeping until next broadcast");
        sleep(until(&now, &next)).await;

        match job.run(context).await {
            Ok(sid) => {
                tracing::info!(job = job.name, sid = %sid, "broadcast dispatched");
            }
            Err(e) => {
                tracing::error!(job = job.name, error = %e, "broadcast failed");
            }
        }
    }
}

/// Wall-clock gap between two instants, clamped at zero
fn until(now: &Zoned, next: &Zoned) -> Duration {
    let millis = next.timestamp().as_millisecond() - now.timestamp().as_millisecond();
    Duration::from_millis(u64::try_from(millis).unwrap_or(0))
}
