use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Batch and data item counters shared by every producer of a load run.
///
/// Clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct LoadCounters {
    batches_generated: Arc<AtomicU64>,
    data_items_generated: Arc<AtomicU64>,
}

impl LoadCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more batch and returns the new total.
    pub fn next_batch(&self) -> u64 {
        self.batches_generated.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Counts one more data item and returns the new total.
    pub fn next_data_item(&self) -> u64 {
        self.data_items_generated.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn add_data_items(&self, count: u64) {
        self.data_items_generated.fetch_add(count, Ordering::Relaxed);
    }

    pub fn batches_generated(&self) -> u64 {
        self.batches_generated.load(Ordering::Relaxed)
    }

    pub fn data_items_generated(&self) -> u64 {
        self.data_items_generated.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_counters_start_at_one() {
        let counters = LoadCounters::new();
        assert_eq!(counters.next_batch(), 1);
        assert_eq!(counters.next_batch(), 2);
        assert_eq!(counters.next_data_item(), 1);
        counters.add_data_items(5);
        assert_eq!(counters.data_items_generated(), 6);
        assert_eq!(counters.batches_generated(), 2);
    }

    #[test]
    fn test_concurrent_producers_never_share_a_number() {
        let counters = LoadCounters::new();

        let seen: Vec<u64> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let counters = counters.clone();
                    scope.spawn(move || (0..1000).map(|_| counters.next_data_item()).collect::<Vec<_>>())
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(counters.data_items_generated(), 8000);
        let unique: HashSet<_> = seen.iter().copied().collect();
        assert_eq!(unique.len(), 8000);
        assert_eq!(unique.iter().max(), Some(&8000));
    }
}
