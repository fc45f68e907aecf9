//! Game configuration.
//!
//! `Options` is fixed for the lifetime of one game. A new configuration
//! means a new `Game`.
//!
//! The `*_RANGE` constants are the ranges a settings screen offers. The
//! engine itself accepts any `size >= 1` and any number of seeding rounds.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Board sizes offered by a settings screen.
pub const SIZE_RANGE: RangeInclusive<usize> = 3..=20;

/// Seeding rounds offered by a settings screen.
pub const SEEDING_ROUNDS_RANGE: RangeInclusive<u32> = 1..=4;

/// Undo slider positions. The top position means unlimited.
pub const UNDO_SETTING_RANGE: RangeInclusive<u32> = 0..=6;

/// Per-side undo allowance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UndoQuota {
    Finite(u32),
    Unlimited,
}

impl UndoQuota {
    /// Map an undo slider position to a quota.
    ///
    /// The top of `UNDO_SETTING_RANGE` means unlimited; values above it are
    /// treated the same way.
    #[must_use]
    pub fn from_setting(value: u32) -> Self {
        if value >= *UNDO_SETTING_RANGE.end() {
            UndoQuota::Unlimited
        } else {
            UndoQuota::Finite(value)
        }
    }

    /// Inverse of `from_setting`.
    #[must_use]
    pub fn setting(self) -> u32 {
        match self {
            UndoQuota::Finite(n) => n.min(*UNDO_SETTING_RANGE.end()),
            UndoQuota::Unlimited => *UNDO_SETTING_RANGE.end(),
        }
    }

    /// True if at least one undo remains.
    #[must_use]
    pub fn is_available(self) -> bool {
        match self {
            UndoQuota::Finite(n) => n > 0,
            UndoQuota::Unlimited => true,
        }
    }

    /// Quota after spending one undo. Unlimited stays unlimited.
    #[must_use]
    pub fn consume(self) -> Self {
        match self {
            UndoQuota::Finite(n) => UndoQuota::Finite(n.saturating_sub(1)),
            UndoQuota::Unlimited => UndoQuota::Unlimited,
        }
    }
}

impl std::fmt::Display for UndoQuota {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UndoQuota::Finite(n) => write!(f, "{}", n),
            UndoQuota::Unlimited => write!(f, "Unlimited"),
        }
    }
}

/// Configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Board is `size × size`.
    pub size: usize,

    /// Rounds (one move per side) of free placement before the automaton runs.
    pub seeding_rounds: u32,

    /// Undos available to each side.
    pub undos: UndoQuota,

    /// Neighbor lookups wrap around the edges (torus).
    pub wrap_at_boundary: bool,

    /// Render rule hints. Stored for the front end; no effect on the rules.
    pub show_hints: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            size: 9,
            seeding_rounds: 2,
            undos: UndoQuota::Finite(3),
            wrap_at_boundary: false,
            show_hints: false,
        }
    }
}

impl Options {
    /// Default options with the given board size.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_seeding_rounds(mut self, rounds: u32) -> Self {
        self.seeding_rounds = rounds;
        self
    }

    #[must_use]
    pub fn with_undos(mut self, undos: UndoQuota) -> Self {
        self.undos = undos;
        self
    }

    #[must_use]
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap_at_boundary = wrap;
        self
    }

    #[must_use]
    pub fn with_hints(mut self, show: bool) -> Self {
        self.show_hints = show;
        self
    }

    /// Number of moves (both sides) played before the automaton kicks in.
    #[must_use]
    pub fn seeding_moves(&self) -> u32 {
        self.seeding_rounds.saturating_mul(2)
    }

    /// Check the options describe a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        Ok(())
    }
}
