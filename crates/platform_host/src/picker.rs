//! Local image upload contracts.
//!
//! An upload is a single async operation: the host shows its file chooser, reads the chosen file,
//! and hands back an inline `data:` URL. The result feeds the same mutation path as a typed URL.

use std::{future::Future, pin::Pin};

/// Object-safe boxed future used by [`ImagePickerService`].
pub type ImagePickerFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that lets the user choose a local image.
pub trait ImagePickerService {
    /// Prompts for an image file and returns its contents as an inline `data:` URL.
    fn pick_image_data_url<'a>(&'a self) -> ImagePickerFuture<'a, Result<String, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Picker for hosts without a file chooser.
pub struct NoopImagePickerService;

impl ImagePickerService for NoopImagePickerService {
    fn pick_image_data_url<'a>(&'a self) -> ImagePickerFuture<'a, Result<String, String>> {
        Box::pin(async { Err("image picker unavailable".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Picker that returns a preset data URL, for tests and scripted hosts.
pub struct FixedImagePickerService {
    data_url: Option<String>,
}

impl FixedImagePickerService {
    /// Creates a picker that yields `data_url`, or a cancellation error when `None`.
    pub fn new(data_url: Option<String>) -> Self {
        Self { data_url }
    }
}

impl ImagePickerService for FixedImagePickerService {
    fn pick_image_data_url<'a>(&'a self) -> ImagePickerFuture<'a, Result<String, String>> {
        Box::pin(async move {
            self.data_url
                .clone()
                .ok_or_else(|| "image selection was cancelled".to_string())
        })
    }
}
