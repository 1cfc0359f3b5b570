//! Prize-set derivation rules.

use super::DomainRuleViolation;
use crate::event::domain::PrizeSetPayload;

/// Normalized prize information derived from an event's prize-set list.
#[derive(Debug, Clone, PartialEq)]
pub struct PrizeSummary {
    checkpoint_count: usize,
    checkpoint_prize: f64,
    prizes: Vec<f64>,
}

impl PrizeSummary {
    /// Number of checkpoint prizes, zero when no checkpoint set exists.
    #[must_use]
    pub const fn checkpoint_count(&self) -> usize {
        self.checkpoint_count
    }

    /// Value of the first checkpoint prize, zero when no checkpoint set
    /// exists.
    #[must_use]
    pub const fn checkpoint_prize(&self) -> f64 {
        self.checkpoint_prize
    }

    /// Main prize values, sorted descending. Never empty: a `[0]` sentinel
    /// stands in when the event carried no non-checkpoint prize-set.
    #[must_use]
    pub fn prizes(&self) -> &[f64] {
        &self.prizes
    }
}

/// Derives the prize summary from an event's prize-set list.
///
/// At most one prize-set may carry the checkpoint type; its entry count
/// and first value populate the checkpoint fields. After removing the
/// checkpoint set, zero or one set may remain: zero yields the `[0]`
/// sentinel used by learning tracks, one yields its values sorted
/// descending.
///
/// # Errors
///
/// Returns [`DomainRuleViolation::MultiplePrizeSets`] when more than one
/// non-checkpoint prize-set remains.
pub fn derive_prize_summary(
    prize_sets: &[PrizeSetPayload],
) -> Result<PrizeSummary, DomainRuleViolation> {
    let checkpoint = prize_sets.iter().find(|set| set.is_checkpoint());
    let (checkpoint_count, checkpoint_prize) = checkpoint.map_or((0, 0.0), |set| {
        let first = set.prizes.first().map_or(0.0, |prize| prize.value);
        (set.prizes.len(), first)
    });

    let remaining: Vec<&PrizeSetPayload> = prize_sets
        .iter()
        .filter(|set| !set.is_checkpoint())
        .collect();
    if remaining.len() > 1 {
        return Err(DomainRuleViolation::MultiplePrizeSets(remaining.len()));
    }

    let prizes = remaining.first().map_or_else(
        || vec![0.0],
        |set| {
            let mut values: Vec<f64> = set.prizes.iter().map(|prize| prize.value).collect();
            values.sort_by(|left, right| right.total_cmp(left));
            values
        },
    );

    Ok(PrizeSummary {
        checkpoint_count,
        checkpoint_prize,
        prizes,
    })
}
