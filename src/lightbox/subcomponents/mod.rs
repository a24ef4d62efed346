// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the lightbox.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! `component.rs` orchestrates them.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── loading    - Load tokens + spinner
//!     ├── navigation - Bounded current index
//!     ├── swipe      - Touch gesture recognition
//!     └── keyboard   - Key → command mapping
//! ```

pub mod keyboard;
pub mod loading;
pub mod navigation;
pub mod swipe;
