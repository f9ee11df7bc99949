// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Page**: Scroll threshold for the condensed navbar
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Page Defaults
// ==========================================================================

/// Vertical scroll offset (in pixels) past which the navbar condenses.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f32 = 50.0;

/// Minimum allowed scroll threshold.
pub const MIN_SCROLL_THRESHOLD_PX: f32 = 0.0;

/// Maximum allowed scroll threshold.
pub const MAX_SCROLL_THRESHOLD_PX: f32 = 1000.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
