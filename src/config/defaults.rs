// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Swipe**: Touch gesture distance threshold
//! - **Overlay**: Lightbox chrome visibility
//! - **Spinner**: Loading indicator animation

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Default horizontal distance a finger must travel to count as a swipe
/// (logical pixels).
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Minimum allowed swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum allowed swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Whether the "n / N" position counter is shown.
pub const DEFAULT_SHOW_COUNTER: bool = true;

/// Whether the photo title is shown under the image.
pub const DEFAULT_SHOW_CAPTIONS: bool = true;

/// Whether clicking the backdrop outside the photo closes the lightbox.
pub const DEFAULT_CLOSE_ON_BACKDROP: bool = true;

// ==========================================================================
// Spinner Defaults
// ==========================================================================

/// Interval between spinner animation ticks (milliseconds).
pub const SPINNER_TICK_MS: u64 = 100;
