// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation files embedded at build time (`assets/i18n/*.ftl`)
//! - Runtime language switching
//! - Fallback to `en-US` when no preferred locale is bundled

pub mod fluent;
