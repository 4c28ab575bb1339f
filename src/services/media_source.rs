// SPDX-License-Identifier: MPL-2.0
//! Image acquisition for the wizard's first step.
//!
//! Camera capture and gallery pick are both mediated by this trait. On
//! desktop both map to a file dialog; a mobile backend would request the
//! corresponding platform permission and may answer `Denied`.

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::path::PathBuf;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Which acquisition path the user chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaRequest {
    Camera,
    Gallery,
}

/// Result of an acquisition request. Cancellation is an ordinary outcome,
/// not an error; denial leaves the draft image untouched and is surfaced as
/// a dismissible notice. Every new request re-asks, there is no
/// persistent-denial tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaOutcome {
    Acquired(PathBuf),
    Cancelled,
    Denied,
}

pub trait MediaSource: Send + Sync {
    fn acquire(&self, request: MediaRequest) -> BoxFuture<'static, MediaOutcome>;
}

/// Production implementation backed by the platform file dialog.
#[derive(Debug, Default)]
pub struct DialogMediaSource;

impl MediaSource for DialogMediaSource {
    fn acquire(&self, request: MediaRequest) -> BoxFuture<'static, MediaOutcome> {
        let title = match request {
            MediaRequest::Camera => "Capture Product Photo",
            MediaRequest::Gallery => "Select Product Image",
        };
        async move {
            let picked = rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_file()
                .await;

            match picked {
                Some(handle) => MediaOutcome::Acquired(handle.path().to_path_buf()),
                None => MediaOutcome::Cancelled,
            }
        }
        .boxed()
    }
}

/// Test double with a scripted outcome.
#[derive(Debug, Clone)]
pub struct FakeMediaSource {
    outcome: MediaOutcome,
}

impl FakeMediaSource {
    pub fn new(outcome: MediaOutcome) -> Self {
        Self { outcome }
    }
}

impl MediaSource for FakeMediaSource {
    fn acquire(&self, _request: MediaRequest) -> BoxFuture<'static, MediaOutcome> {
        let outcome = self.outcome.clone();
        async move { outcome }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fake_source_returns_scripted_outcome() {
        let source = FakeMediaSource::new(MediaOutcome::Acquired(PathBuf::from("/tmp/p.jpg")));
        let outcome = source.acquire(MediaRequest::Gallery).await;
        assert_eq!(outcome, MediaOutcome::Acquired(PathBuf::from("/tmp/p.jpg")));

        let source = FakeMediaSource::new(MediaOutcome::Denied);
        let outcome = source.acquire(MediaRequest::Camera).await;
        assert_eq!(outcome, MediaOutcome::Denied);
    }
}
