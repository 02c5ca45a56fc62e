use std::iter::Sum;

/// Completed/total counter pair for a phase, category, or topic list.
///
/// `completed` never exceeds `total`: construction and increments both
/// clamp, so the derived fraction stays in `[0, 1]` no matter what the
/// catalog reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    completed: u32,
    total: u32,
}

impl Progress {
    #[must_use]
    pub fn new(completed: u32, total: u32) -> Self {
        Self {
            completed: completed.min(total),
            total,
        }
    }

    #[must_use]
    pub fn completed(self) -> u32 {
        self.completed
    }

    #[must_use]
    pub fn total(self) -> u32 {
        self.total
    }

    /// Completion fraction in `[0, 1]`. An empty group is `0.0`, not NaN.
    #[must_use]
    pub fn fraction(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.completed) / f64::from(self.total)
    }

    /// Whole-number percentage, 0–100, rounded half up.
    #[must_use]
    pub fn percent(self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let completed = u64::from(self.completed);
        let total = u64::from(self.total);
        // completed <= total, so this is at most 100
        u32::try_from((200 * completed + total) / (2 * total)).unwrap_or(100)
    }

    /// Records one more completion, saturating at `total`.
    pub fn increment(&mut self) {
        self.completed = self.completed.saturating_add(1).min(self.total);
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Summing weights groups by topic count: the overall figure across phases
/// is `sum(completed) / sum(total)`, not an average of per-phase
/// percentages.
impl Sum for Progress {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, p| {
            Self::new(
                acc.completed.saturating_add(p.completed),
                acc.total.saturating_add(p.total),
            )
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_group_is_zero_not_nan() {
        let p = Progress::new(0, 0);
        assert_eq!(p.fraction(), 0.0);
        assert_eq!(p.percent(), 0);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(Progress::new(1, 8).percent(), 13); // 12.5
        assert_eq!(Progress::new(1, 2).percent(), 50);
        assert_eq!(Progress::new(5, 7).percent(), 71); // 71.43
        assert_eq!(Progress::new(2, 3).percent(), 67); // 66.67
        assert_eq!(Progress::new(7, 7).percent(), 100);
    }

    #[test]
    fn construction_clamps_completed_to_total() {
        let p = Progress::new(9, 5);
        assert_eq!(p.completed(), 5);
        assert_eq!(p.total(), 5);
        assert_eq!(p.percent(), 100);
    }

    #[test]
    fn increment_saturates_at_total() {
        let mut p = Progress::new(4, 5);
        p.increment();
        assert_eq!(p.completed(), 5);
        p.increment();
        assert_eq!(p.completed(), 5);
        assert!(p.is_complete());
    }

    #[test]
    fn sum_weights_by_topic_count() {
        // 1/2 and 0/8 overall is 1/10, not the 25% a percentage average
        // would give
        let overall: Progress = [Progress::new(1, 2), Progress::new(0, 8)]
            .into_iter()
            .sum();
        assert_eq!(overall.completed(), 1);
        assert_eq!(overall.total(), 10);
        assert_eq!(overall.percent(), 10);
    }

    #[test]
    fn fraction_of_partial_progress() {
        let p = Progress::new(3, 4);
        assert!((p.fraction() - 0.75).abs() < f64::EPSILON);
        assert!(!p.is_complete());
    }
}
