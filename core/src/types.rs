/// One parsed tick line: `symbol interval volume high low`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub symbol: String,
    pub interval: i64,
    pub volume: f64,
    pub high: f64,
    pub low: f64,
}

impl Record {
    pub fn new(symbol: impl Into<String>, interval: i64, volume: f64, high: f64, low: f64) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
            volume,
            high,
            low,
        }
    }
}

/// Highest `high` and lowest `low` seen for one symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub max_high: f64,
    pub min_low: f64,
}

impl Bounds {
    /// Starting point for a fresh symbol; the first observation replaces both sides.
    pub const SENTINEL: Bounds = Bounds {
        max_high: f64::MIN,
        min_low: f64::MAX,
    };

    pub fn observe(&mut self, record: &Record) {
        self.max_high = self.max_high.max(record.high);
        self.min_low = self.min_low.min(record.low);
    }
}

/// What ingestion does with a line that does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Abort on the first malformed line.
    #[default]
    Fail,
    /// Log the line and keep going.
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub malformed: MalformedPolicy,
}

impl LoadOptions {
    pub fn skip_malformed() -> Self {
        Self {
            malformed: MalformedPolicy::Skip,
        }
    }
}
