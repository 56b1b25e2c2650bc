// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration and timing constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. All durations are integer milliseconds unless the
//! name says otherwise.
//!
//! # Categories
//!
//! - **Display**: Per-toast display duration and overflow limit
//! - **Animation**: Entry/exit animation lengths and layout-settling delays
//! - **Removal**: Countdown floor and blocked-removal polling
//! - **Overflow**: Follow-up enforcement passes after attach
//! - **Journal**: Lifecycle journal capacity

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default display time in seconds for every flash kind.
pub const DEFAULT_DURATION_SECS: u64 = 4;

/// Upper bound for a configured display time (one hour).
pub const MAX_DURATION_SECS: u64 = 3600;

/// Default overflow limit (0 = unlimited).
pub const DEFAULT_LIMIT: usize = 0;

/// Upper bound for the overflow limit.
pub const MAX_LIMIT: usize = 1000;

/// Key of the fallback entry in a per-kind duration table.
pub const DEFAULT_DURATION_KEY: &str = "default";

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Length of the slide-in animation, counted as part of the display time.
pub const ENTRY_ANIMATION_MS: u64 = 400;

/// Length of the fade-out animation played by the rendering layer.
pub const EXIT_ANIMATION_MS: u64 = 300;

/// Interval between two paint ticks.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Layout-settling delay after the first paint tick of a freshly rendered toast.
pub const INITIAL_SETTLE_MS: u64 = 100;

/// Layout-settling delay for a toast revealed by the overflow window.
pub const REVEAL_SETTLE_MS: u64 = 10;

// ==========================================================================
// Removal Defaults
// ==========================================================================

/// Absolute lower bound of any armed removal countdown.
pub const MIN_REMAINING_MS: u64 = 100;

/// Share of the display duration used as countdown floor (1/10).
pub const MIN_REMAINING_DIVISOR: u64 = 10;

/// Safety-net poll interval while a removal is blocked by a sibling.
pub const REMOVAL_POLL_MS: u64 = 50;

// ==========================================================================
// Overflow Defaults
// ==========================================================================

/// Delays of the follow-up enforcement passes scheduled after attach,
/// absorbing late-attaching siblings.
pub const ENFORCE_FOLLOW_UP_MS: [u64; 2] = [200, 500];

/// Page scroll offset past which the container reports itself as scrolled.
pub const SCROLLED_THRESHOLD_PX: f32 = 100.0;

// ==========================================================================
// Journal Defaults
// ==========================================================================

/// Default number of lifecycle events kept in the journal.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 256;

/// Minimum journal capacity.
pub const MIN_JOURNAL_CAPACITY: usize = 16;

/// Maximum journal capacity.
pub const MAX_JOURNAL_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_REMAINING_MS > 0);
    assert!(REMOVAL_POLL_MS < MIN_REMAINING_MS);
    assert!(REVEAL_SETTLE_MS < INITIAL_SETTLE_MS);
    assert!(ENFORCE_FOLLOW_UP_MS[0] < ENFORCE_FOLLOW_UP_MS[1]);
    assert!(MIN_JOURNAL_CAPACITY <= DEFAULT_JOURNAL_CAPACITY);
    assert!(DEFAULT_JOURNAL_CAPACITY <= MAX_JOURNAL_CAPACITY);
    assert!(DEFAULT_LIMIT <= MAX_LIMIT);
};
