use std::future::Future;
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};

use crate::config::WatchSet;
use crate::output;
use crate::snapshot::{self, Change, Snapshot};

/// Drive the poll loop: sleep, rescan, compare, report.
///
/// A baseline snapshot is built before the first tick; its contents are never
/// reported. Each cycle rebuilds the snapshot wholesale, diffs it against the
/// previous one, and prints the reload instructions when anything changed.
/// The previous snapshot is explicit loop state, replaced after every cycle.
///
/// Returns when `shutdown` resolves (the binary passes Ctrl+C); scan failures
/// such as the watch root disappearing propagate as errors.
pub async fn run(
    watch: WatchSet,
    interval: Duration,
    shutdown: impl Future<Output = ()>,
    verbose: bool,
) -> anyhow::Result<()> {
    let mut previous = snapshot::build_snapshot(&watch, verbose)?;
    output::print_watch_banner(&watch, previous.len(), interval);

    let mut ticker = time::interval(interval);
    // A slow scan must not cause a burst of catch-up ticks afterwards.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; consume it so the first rescan
    // happens a full interval after the baseline.
    ticker.tick().await;

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let (current, changes) = poll_cycle(&watch, &previous)?;
                if !changes.is_empty() {
                    output::print_changes(&changes);
                    output::print_reload_instructions(&watch.name);
                }
                previous = current;
            }
            () = &mut shutdown => {
                output::print_farewell();
                return Ok(());
            }
        }
    }
}

/// One scan-and-compare cycle against the previous snapshot.
///
/// Runs to completion within the cycle; there is no mid-scan cancellation.
fn poll_cycle(watch: &WatchSet, previous: &Snapshot) -> anyhow::Result<(Snapshot, Vec<Change>)> {
    let current = snapshot::build_snapshot(watch, false)?;
    let changes = snapshot::diff(previous, &current);
    Ok((current, changes))
}
