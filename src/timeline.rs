//! The fixed four-phase timeline and progress derived from elapsed time.
//!
//! Nothing here stores state: every value is a function of elapsed
//! milliseconds and the phase durations, so progress is identical no matter
//! how many frames were drawn to reach a given instant.

use serde::Deserialize;

use crate::ease::clamp01;

/// Durations of the four phases, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Timeline {
    pub grid_ms: f64,
    pub scaffold_ms: f64,
    pub letterform_ms: f64,
    pub hold_ms: f64,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            grid_ms: 1100.0,
            scaffold_ms: 900.0,
            letterform_ms: 1200.0,
            hold_ms: 500.0,
        }
    }
}

/// A visual phase with its own progress value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Grid,
    Scaffold,
    Letterform,
}

/// Lifecycle of one playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    Initializing,
    Playing(Phase),
    Holding,
    Completed,
}

/// Normalized progress of each visual phase, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhaseProgress {
    pub grid: f64,
    pub scaffold: f64,
    pub letterform: f64,
}

impl PhaseProgress {
    #[must_use]
    pub fn get(&self, phase: Phase) -> f64 {
        match phase {
            Phase::Grid => self.grid,
            Phase::Scaffold => self.scaffold,
            Phase::Letterform => self.letterform,
        }
    }
}

impl Timeline {
    #[must_use]
    pub fn total_ms(&self) -> f64 {
        self.grid_ms + self.scaffold_ms + self.letterform_ms + self.hold_ms
    }

    /// Duration of a phase.
    #[must_use]
    pub fn duration(&self, phase: Phase) -> f64 {
        match phase {
            Phase::Grid => self.grid_ms,
            Phase::Scaffold => self.scaffold_ms,
            Phase::Letterform => self.letterform_ms,
        }
    }

    /// Sum of the durations of every phase before `phase`.
    #[must_use]
    pub fn offset(&self, phase: Phase) -> f64 {
        match phase {
            Phase::Grid => 0.0,
            Phase::Scaffold => self.grid_ms,
            Phase::Letterform => self.grid_ms + self.scaffold_ms,
        }
    }

    /// `(elapsed - offset) / duration`, clamped. A zero-length phase jumps
    /// straight from 0 to 1 at its start instant.
    #[must_use]
    pub fn phase_progress(&self, phase: Phase, elapsed_ms: f64) -> f64 {
        let local = elapsed_ms - self.offset(phase);
        let duration = self.duration(phase);
        if duration <= 0.0 {
            return if local >= 0.0 { 1.0 } else { 0.0 };
        }
        clamp01(local / duration)
    }

    #[must_use]
    pub fn progress(&self, elapsed_ms: f64) -> PhaseProgress {
        PhaseProgress {
            grid: self.phase_progress(Phase::Grid, elapsed_ms),
            scaffold: self.phase_progress(Phase::Scaffold, elapsed_ms),
            letterform: self.phase_progress(Phase::Letterform, elapsed_ms),
        }
    }

    /// State for a running session at `elapsed_ms`. Never returns
    /// `Initializing`; that state only exists before the first frame.
    #[must_use]
    pub fn state_at(&self, elapsed_ms: f64) -> LoaderState {
        if elapsed_ms >= self.total_ms() {
            return LoaderState::Completed;
        }
        for phase in [Phase::Grid, Phase::Scaffold, Phase::Letterform] {
            if elapsed_ms < self.offset(phase) + self.duration(phase) {
                return LoaderState::Playing(phase);
            }
        }
        LoaderState::Holding
    }
}
