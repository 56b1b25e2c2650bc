// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! This module provides type-safe wrappers for toast timing and overflow
//! values, ensuring they are always within valid ranges.

// =============================================================================
// Display Bounds
// =============================================================================

/// Display timing bounds.
pub mod display_bounds {
    /// Slide-in time included in every finite display duration (ms).
    pub const ENTRY_ANIMATION_MS: u64 = 400;
    /// Longest configurable display time (seconds).
    pub const MAX_SECS: u64 = 3600;
    /// Absolute lower bound of an armed countdown (ms).
    pub const MIN_REMAINING_MS: u64 = 100;
    /// The countdown floor is also at least `1 / MIN_REMAINING_DIVISOR` of the duration.
    pub const MIN_REMAINING_DIVISOR: u64 = 10;
}

/// Overflow limit bounds.
pub mod limit_bounds {
    /// Largest accepted limit; `0` means unlimited.
    pub const MAX: usize = 1000;
}

// =============================================================================
// DisplayDuration
// =============================================================================

/// Total time a toast stays up, entry animation included.
///
/// A zero duration means the toast never removes itself and waits for a
/// manual dismissal.
///
/// # Example
///
/// ```
/// use toast_stack::domain::toast::DisplayDuration;
///
/// let four_secs = DisplayDuration::from_secs(4);
/// assert_eq!(four_secs.as_millis(), 4400);
///
/// let sticky = DisplayDuration::from_secs(0);
/// assert!(sticky.is_infinite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayDuration(u64);

impl DisplayDuration {
    /// Never auto-remove.
    pub const INFINITE: DisplayDuration = DisplayDuration(0);

    /// Builds the duration from a configured number of seconds.
    ///
    /// Seconds above the maximum are clamped; zero stays zero.
    #[must_use]
    pub fn from_secs(secs: u64) -> Self {
        if secs == 0 {
            return Self::INFINITE;
        }
        let secs = secs.min(display_bounds::MAX_SECS);
        Self(display_bounds::ENTRY_ANIMATION_MS + secs * 1000)
    }

    /// Wraps a raw millisecond value without adding the entry animation.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Returns the duration in milliseconds (0 when infinite).
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns true if the toast never removes itself.
    #[must_use]
    pub fn is_infinite(self) -> bool {
        self.0 == 0
    }

    /// Shortest countdown that may ever be armed for this duration.
    ///
    /// Keeps a toast from dropping out instantly after a resume and starving
    /// the siblings queued behind it.
    #[must_use]
    pub fn floor_millis(self) -> u64 {
        (self.0 / display_bounds::MIN_REMAINING_DIVISOR).max(display_bounds::MIN_REMAINING_MS)
    }
}

// =============================================================================
// VisibleLimit
// =============================================================================

/// Maximum number of simultaneously visible toasts, `0` meaning unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleLimit(usize);

impl VisibleLimit {
    /// No cap on visible toasts.
    pub const UNLIMITED: VisibleLimit = VisibleLimit(0);

    /// Creates a new limit, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.min(limit_bounds::MAX))
    }

    /// Returns the raw limit.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if every toast may be visible.
    #[must_use]
    pub fn is_unlimited(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the toast at `order_index` belongs to the visible window.
    #[must_use]
    pub fn admits(self, order_index: usize) -> bool {
        self.is_unlimited() || order_index < self.0
    }

    /// Number of visible toasts among `members` non-removing toasts.
    #[must_use]
    pub fn visible_count(self, members: usize) -> usize {
        if self.is_unlimited() {
            members
        } else {
            members.min(self.0)
        }
    }
}
