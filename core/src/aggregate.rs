use crate::{Bounds, LoadError, LoadOptions, Record, load_file};
use std::collections::HashMap;
use std::path::Path;

/// Holds the tick records of one run in input order and derives per-symbol
/// reports from them on demand.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    records: Vec<Record>,
}

impl Aggregator {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn from_path(path: impl AsRef<Path>, options: LoadOptions) -> Result<Self, LoadError> {
        load_file(path, options).map(Self::new)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of traded volume per symbol, accumulated in input order.
    pub fn total_volume_by_stock(&self) -> HashMap<String, f64> {
        let mut totals: HashMap<String, f64> = HashMap::new();
        for r in &self.records {
            *totals.entry(r.symbol.clone()).or_insert(0.0) += r.volume;
        }
        totals
    }

    /// `record.volume` as a percentage of `total`.
    ///
    /// `total` must be the total for the record's own symbol. A zero total is
    /// passed straight through the division, giving `NaN` or infinity.
    pub fn volume_percentage(record: &Record, total: f64) -> f64 {
        (record.volume / total) * 100.0
    }

    /// Every record in input order, paired with its share of its symbol's volume.
    pub fn volume_percentages(&self) -> Vec<(&Record, f64)> {
        let totals = self.total_volume_by_stock();
        self.records
            .iter()
            .map(|r| {
                let total = totals.get(&r.symbol).copied().unwrap_or_default();
                (r, Self::volume_percentage(r, total))
            })
            .collect()
    }

    /// Highest high and lowest low per symbol. High and low are tracked
    /// independently; a symbol whose lows sit above its highs is kept as-is.
    pub fn bounds_by_stock(&self) -> HashMap<String, Bounds> {
        let mut bounds: HashMap<String, Bounds> = HashMap::new();
        for r in &self.records {
            bounds
                .entry(r.symbol.clone())
                .or_insert(Bounds::SENTINEL)
                .observe(r);
        }
        bounds
    }
}

impl From<Vec<Record>> for Aggregator {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Aggregator {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
