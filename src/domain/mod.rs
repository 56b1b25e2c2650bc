// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) so that the rules they
//! enforce can be tested in isolation.
//!
//! # Modules
//!
//! - [`diagnostics`]: Journal types ([`JournalCapacity`](diagnostics::JournalCapacity))
//! - [`toast`]: Toast value objects ([`DisplayDuration`](toast::DisplayDuration),
//!   [`VisibleLimit`](toast::VisibleLimit), [`DismissMode`](toast::DismissMode))

pub mod diagnostics;
pub mod toast;
