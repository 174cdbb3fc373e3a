use std::time::{Duration, Instant};

/// Search box state: the raw text follows every keystroke, the effective text
/// (what the pipeline sees) catches up only after `quiet` passes with no edits.
///
/// Time is passed in by the caller so the owner decides how to wait.
#[derive(Debug, Clone)]
pub struct SearchInput {
    raw: String,
    effective: String,
    quiet: Duration,
    last_edit: Option<Instant>,
}

impl SearchInput {
    pub fn new(quiet: Duration) -> Self {
        Self { raw: String::new(), effective: String::new(), quiet, last_edit: None }
    }

    pub fn raw(&self) -> &str { &self.raw }

    pub fn effective(&self) -> &str { &self.effective }

    /// True while the raw text has not been promoted yet.
    pub fn is_pending(&self) -> bool { self.raw != self.effective }

    pub fn edit(&mut self, raw: &str, now: Instant) {
        self.raw = raw.to_string();
        self.last_edit = Some(now);
    }

    /// When the pending edit becomes effective, if any.
    pub fn deadline(&self) -> Option<Instant> { self.last_edit.map(|t| t + self.quiet) }

    /// Promote the raw text once the quiet period has elapsed. Returns the new
    /// effective text only when it actually changed.
    pub fn poll(&mut self, now: Instant) -> Option<&str> {
        let last = self.last_edit?;
        if now.saturating_duration_since(last) < self.quiet { return None; }
        self.last_edit = None;
        if self.raw == self.effective { return None; }
        self.effective = self.raw.clone();
        Some(&self.effective)
    }

    /// Reset both values at once, skipping the quiet period.
    pub fn clear(&mut self) {
        self.raw.clear();
        self.effective.clear();
        self.last_edit = None;
    }
}
