//! Search phase selection
//!
//! Chooses search depth and guess sampling from the current pool size.

use std::fmt;

/// Pool-size thresholds that pick the search phase
///
/// ## How Thresholds Work
///
/// Thresholds use cascading `>` comparisons:
/// ```text
/// if pool > huge_threshold      → Huge (depth 1, sample huge_sample guesses)
/// else if pool > end_threshold  → Mid  (depth 1, every guess)
/// else                          → End  (depth 2, every guess)
/// ```
///
/// With default thresholds (1000, 500):
/// - **1001+ words**: `Huge`
/// - **501-1000 words**: `Mid`
/// - **1-500 words**: `End`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSelector {
    /// Pools larger than this are `Huge` (default: 1000)
    pub huge_threshold: usize,

    /// Guesses scored in the `Huge` phase (default: 1000)
    pub huge_sample: usize,

    /// Pools larger than this (and not huge) are `Mid` (default: 500)
    pub end_threshold: usize,
}

impl PhaseSelector {
    #[must_use]
    pub const fn new(huge_threshold: usize, huge_sample: usize, end_threshold: usize) -> Self {
        Self {
            huge_threshold,
            huge_sample,
            end_threshold,
        }
    }

    #[must_use]
    pub const fn get_phase(&self, pool_size: usize) -> Phase {
        if pool_size > self.huge_threshold {
            Phase::Huge
        } else if pool_size > self.end_threshold {
            Phase::Mid
        } else {
            Phase::End
        }
    }

    /// Depth and sampling for a pool of `pool_size` words
    #[must_use]
    pub const fn plan(&self, pool_size: usize) -> SearchPlan {
        let phase = self.get_phase(pool_size);
        match phase {
            Phase::Huge => SearchPlan {
                phase,
                depth: 1,
                sample: Some(self.huge_sample),
            },
            Phase::Mid => SearchPlan {
                phase,
                depth: 1,
                sample: None,
            },
            Phase::End => SearchPlan {
                phase,
                depth: 2,
                sample: None,
            },
        }
    }
}

impl Default for PhaseSelector {
    fn default() -> Self {
        Self::new(
            1000, // huge_threshold: 1001+ words
            1000, // huge_sample
            500,  // end_threshold: 501-1000 words are Mid, the rest End
        )
    }
}

/// Search phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Very large pool: sampled depth-1 search
    Huge,
    /// Large pool: full depth-1 search
    Mid,
    /// Small pool: full depth-2 search
    End,
}

impl Phase {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Huge => "huge",
            Self::Mid => "mid",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Phase plus the search settings it implies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPlan {
    pub phase: Phase,
    pub depth: u8,
    /// Number of guesses to sample, or `None` for all of them
    pub sample: Option<usize>,
}
