//! Process-wide enable switch and per-styler color modes.
//!
//! The switch is a single relaxed [`AtomicBool`]. Writers race with readers
//! and the last write wins; a reader is only guaranteed to eventually see
//! a new value. That is enough for a display toggle, so no lock is taken.

use std::sync::atomic::{AtomicBool, Ordering};

static DISABLED: AtomicBool = AtomicBool::new(false);

/// Turns styling off (`true`) or back on (`false`) for the whole process.
///
/// Affects every [`ColorMode::Global`] encode and paint performed afterwards,
/// including painters compiled earlier.
pub fn set_disabled(disabled: bool) {
    let previous = DISABLED.swap(disabled, Ordering::Relaxed);
    if previous != disabled {
        tracing::debug!(disabled, "ansi styling switch changed");
    }
}

/// Returns `true` if styling is currently disabled process-wide.
pub fn is_disabled() -> bool {
    DISABLED.load(Ordering::Relaxed)
}

/// How a [`Styler`](crate::Styler) decides whether to emit escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// Follow the process-wide switch, read at each call.
    #[default]
    Global,
    /// Always emit escape sequences.
    Always,
    /// Never emit escape sequences.
    Never,
}

impl ColorMode {
    /// Returns whether escape sequences should be emitted right now.
    pub fn is_enabled(self) -> bool {
        match self {
            ColorMode::Global => !is_disabled(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl From<bool> for ColorMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            ColorMode::Always
        } else {
            ColorMode::Never
        }
    }
}
