// SPDX-License-Identifier: MPL-2.0
//! `photo_lightbox` is a full-screen photo lightbox built with the Iced GUI
//! framework.
//!
//! The [`lightbox`] component opens on one photo of an ordered sequence,
//! loads it asynchronously, and lets the user page through the rest with
//! arrow buttons, the keyboard, or touch swipes. Only the most recently
//! requested photo is ever shown, however loads finish. Share and download
//! are delegated to caller-supplied [`actions::Hooks`].
//!
//! The bundled application ([`app`]) hosts the lightbox over a thumbnail
//! gallery built from files, folders, URLs, or TOML manifests.

#![doc(html_root_url = "https://docs.rs/photo_lightbox/0.1.0")]

pub mod actions;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod lightbox;
pub mod logging;
pub mod media;
pub mod photo;
pub mod ui;
