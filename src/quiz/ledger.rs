//! Per-question timing record and its display formatting.

/// Append-only record of elapsed answer times, one entry per question, in
/// milliseconds and in question order. Cleared when a new session starts.
#[derive(Debug, Clone, Default)]
pub struct ScoreLedger {
    entries: Vec<f64>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, elapsed_ms: f64) {
        debug_assert!(elapsed_ms >= 0.0, "negative elapsed time");
        self.entries.push(elapsed_ms);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[f64] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Formats an elapsed time for the score list: truncate to whole
/// milliseconds, then present as seconds with up to three decimals and no
/// trailing zeros (1200 -> "1.2", 1234 -> "1.234", 1000 -> "1").
///
/// Truncation, not rounding: the displayed value is the floor of the measured
/// milliseconds, an observable behavior the score screen preserves.
pub fn format_seconds(elapsed_ms: f64) -> String {
    let ms = elapsed_ms.trunc() as i64;
    let (secs, frac) = (ms / 1000, ms % 1000);
    if frac == 0 {
        return secs.to_string();
    }
    let mut out = format!("{secs}.{frac:03}");
    while out.ends_with('0') {
        out.pop();
    }
    out
}
