use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::budget::errors::BudgetError;
use crate::core::budget::growth::BudgetGrowth;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetSettings {
    pub growth: BudgetGrowth,
    pub base_iterations: u32,
    /// Scale treated as zoom depth one.
    pub reference_scale: f64,
    pub min_iterations: u32,
    pub hard_cap: u32,
}

impl BudgetSettings {
    pub fn validate(&self) -> Result<(), BudgetError> {
        self.growth.validate()?;

        if !self.reference_scale.is_finite() || self.reference_scale <= 0.0 {
            return Err(BudgetError::InvalidReferenceScale {
                reference_scale: self.reference_scale,
            });
        }

        if self.min_iterations > self.hard_cap {
            return Err(BudgetError::MinAboveCap {
                min_iterations: self.min_iterations,
                hard_cap: self.hard_cap,
            });
        }

        Ok(())
    }
}

impl Default for BudgetSettings {
    fn default() -> Self {
        Self {
            growth: BudgetGrowth::default(),
            base_iterations: 100,
            reference_scale: 1.5,
            min_iterations: 32,
            hard_cap: 10_000,
        }
    }
}

/// Derives the per-frame iteration cap from zoom depth plus a manual offset.
#[derive(Debug, Clone)]
pub struct IterationBudgetPolicy {
    settings: BudgetSettings,
    manual_offset: i64,
    last_automatic: u32,
    current: u32,
}

impl IterationBudgetPolicy {
    pub fn new(settings: BudgetSettings) -> Result<Self, BudgetError> {
        settings.validate()?;

        let initial = settings
            .base_iterations
            .clamp(settings.min_iterations, settings.hard_cap);

        Ok(Self {
            settings,
            manual_offset: 0,
            last_automatic: initial,
            current: initial,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &BudgetSettings {
        &self.settings
    }

    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub fn manual_offset(&self) -> i64 {
        self.manual_offset
    }

    /// Automatic budget for `scale`, clamped to `[min_iterations, hard_cap]`.
    #[must_use]
    pub fn automatic(&self, scale: f64) -> u32 {
        let BudgetSettings {
            growth,
            base_iterations,
            reference_scale,
            min_iterations,
            hard_cap,
        } = self.settings;

        if scale.is_nan() {
            return min_iterations;
        }

        let depth = (reference_scale / scale).max(1.0);
        let raw = growth.budget_at(f64::from(base_iterations), depth);

        if raw.is_nan() {
            return min_iterations;
        }

        raw.clamp(f64::from(min_iterations), f64::from(hard_cap)) as u32
    }

    pub fn recompute(&mut self, scale: f64) -> u32 {
        let automatic = self.automatic(scale);
        self.last_automatic = automatic;

        let effective = (i64::from(automatic) + self.manual_offset)
            .clamp(0, i64::from(self.settings.hard_cap)) as u32;

        if effective != self.current {
            debug!(
                "iteration budget {} -> {} (auto {}, offset {})",
                self.current, effective, automatic, self.manual_offset
            );
        }

        self.current = effective;
        effective
    }

    /// Adds `delta` to the manual offset, keeping the effective budget inside
    /// `[0, hard_cap]` against the last automatic value.
    pub fn apply_manual(&mut self, delta: i64) -> u32 {
        let automatic = i64::from(self.last_automatic);
        let lower = -automatic;
        let upper = i64::from(self.settings.hard_cap) - automatic;

        self.manual_offset = self.manual_offset.saturating_add(delta).clamp(lower, upper);
        self.current = (automatic + self.manual_offset) as u32;

        self.current
    }

    pub fn reset_manual(&mut self) -> u32 {
        self.manual_offset = 0;
        self.current = self.last_automatic;

        self.current
    }

    /// Nudge size for one manual step at the `current` budget.
    #[must_use]
    pub fn manual_step(current: u32) -> u32 {
        let scaled = f64::from(current).powf(1.01) / 200.0;

        (scaled.floor() as u32).max(1)
    }
}
