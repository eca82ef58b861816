//! File download command definitions.
//!
//! The Core hands the Shell a ready `data:` URL; the Shell only has to click
//! a temporary anchor with the given file name.

use base64::prelude::*;
use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DownloadOperation {
    Save { file_name: String, url: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DownloadOutput {
    Completed,
    Failed { message: String },
}

impl Operation for DownloadOperation {
    type Output = DownloadOutput;
}

/// Base64 `data:` URL of `contents`
pub fn data_url(mime_type: &str, contents: &str) -> String {
    format!(
        "data:{mime_type};base64,{}",
        BASE64_STANDARD.encode(contents.as_bytes())
    )
}

/// Command-based download API
pub struct Download<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Download<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DownloadOperation>> + 'static,
    Event: Send + 'static,
{
    /// Offer `contents` as a file download
    pub fn save(
        file_name: impl Into<String>,
        mime_type: &str,
        contents: &str,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = DownloadOutput>>
    {
        let operation = DownloadOperation::Save {
            file_name: file_name.into(),
            url: data_url(mime_type, contents),
        };
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(operation)
                .into_future(ctx)
                .await
        })
    }
}
