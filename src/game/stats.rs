use super::OutcomeKind;

/// Per-round outcome tally. In-memory only; nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct RoundStats {
    pub perfect_count: u32,
    pub good_count: u32,
    pub late_count: u32,
    pub wrong_count: u32,
    pub missed_count: u32,
    pub rejected_count: u32,
    pub suppressed_count: u32,
    pub combo: u32,
    pub max_combo: u32,
    pub rounds_completed: u32,
}

impl RoundStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: OutcomeKind) {
        match kind {
            OutcomeKind::Perfect => self.perfect_count += 1,
            OutcomeKind::Good => self.good_count += 1,
            OutcomeKind::LateButCorrect => self.late_count += 1,
            OutcomeKind::Wrong => self.wrong_count += 1,
            OutcomeKind::Missed => self.missed_count += 1,
            OutcomeKind::Rejected => self.rejected_count += 1,
            OutcomeKind::Suppressed => self.suppressed_count += 1,
        }

        if kind.is_hit() {
            self.combo += 1;
        } else if kind.breaks_combo() {
            self.combo = 0;
        }

        self.max_combo = self.max_combo.max(self.combo);
    }

    /// Mark a full pass over the sequence.
    pub fn complete_round(&mut self) {
        self.rounds_completed += 1;
    }

    /// Symbols consumed so far (hits plus misses).
    pub fn consumed(&self) -> u32 {
        self.perfect_count + self.good_count + self.late_count + self.missed_count
    }

    /// Fraction of consumed symbols that were hit, as a percentage.
    pub fn hit_rate(&self) -> f64 {
        let consumed = self.consumed();
        if consumed == 0 {
            return 100.0;
        }
        let hits = self.perfect_count + self.good_count + self.late_count;
        (hits as f64 / consumed as f64) * 100.0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
