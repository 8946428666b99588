//! Statistics display command

use crate::output::print_statistics;
use crate::stats::StatsStore;

/// Print the persisted statistics record
///
/// Missing or corrupt data prints as zeroed counters, matching what the
/// game itself would start from.
pub fn run_stats(store: &StatsStore) {
    let stats = store.load();
    print_statistics(&stats);
    println!("   (stored at {})\n", store.path().display());
}
