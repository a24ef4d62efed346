// SPDX-License-Identifier: MPL-2.0
//! Shared UI building blocks.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Button and overlay styles
//! - [`theming`] - Light/Dark/System theme mode
//! - [`widgets`] - Custom widgets (loading spinner)

pub mod design_tokens;
pub mod styles;
pub mod theming;
pub mod widgets;
