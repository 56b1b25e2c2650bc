// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.
//!
//! This module provides type-safe wrappers for diagnostics values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Journal Capacity Bounds
// =============================================================================

/// Journal capacity bounds (16 to 10000 events).
pub mod journal_capacity_bounds {
    /// Minimum journal capacity.
    pub const MIN: usize = 16;
    /// Maximum journal capacity.
    pub const MAX: usize = 10_000;
    /// Default journal capacity.
    pub const DEFAULT: usize = 256;
}

// =============================================================================
// JournalCapacity
// =============================================================================

/// Number of lifecycle events retained by a toast stack.
///
/// Values outside 16–10000 are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalCapacity(usize);

impl JournalCapacity {
    /// Creates a new journal capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(journal_capacity_bounds::MIN, journal_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for JournalCapacity {
    fn default() -> Self {
        Self(journal_capacity_bounds::DEFAULT)
    }
}
