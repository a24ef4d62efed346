// SPDX-License-Identifier: MPL-2.0
//! Share and download hooks.
//!
//! The lightbox never shares or downloads anything itself. It hands the
//! photo on screen to whichever [`ActionHook`] the host registered and lets
//! the returned future run to completion. [`share`] and [`download`] hold
//! the helpers the bundled host application plugs in.

pub mod download;
pub mod share;

use crate::photo::PhotoDescriptor;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Caller-supplied action invoked with the displayed photo.
pub type ActionHook = Arc<dyn Fn(PhotoDescriptor) -> BoxFuture<'static, ()> + Send + Sync>;

/// Optional share/download hooks.
#[derive(Clone, Default)]
pub struct Hooks {
    pub on_share: Option<ActionHook>,
    pub on_download: Option<ActionHook>,
}

impl Hooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_share<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(PhotoDescriptor) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.on_share = Some(boxed(hook));
        self
    }

    #[must_use]
    pub fn with_download<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(PhotoDescriptor) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.on_download = Some(boxed(hook));
        self
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_share", &self.on_share.is_some())
            .field("on_download", &self.on_download.is_some())
            .finish()
    }
}

fn boxed<F, Fut>(hook: F) -> ActionHook
where
    F: Fn(PhotoDescriptor) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    Arc::new(move |photo| hook(photo).boxed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn default_hooks_are_empty() {
        let hooks = Hooks::new();
        assert!(hooks.on_share.is_none());
        assert!(hooks.on_download.is_none());
        assert_eq!(
            format!("{hooks:?}"),
            "Hooks { on_share: false, on_download: false }"
        );
    }

    #[tokio::test]
    async fn builder_wraps_async_closures() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let hooks = Hooks::new().with_share(move |photo: PhotoDescriptor| {
            let sink = Arc::clone(&sink);
            async move {
                sink.lock().unwrap().push(photo.image_url);
            }
        });

        let hook = hooks.on_share.expect("share hook registered");
        hook(PhotoDescriptor::new("a.jpg")).await;

        assert_eq!(*seen.lock().unwrap(), vec!["a.jpg".to_string()]);
    }
}
