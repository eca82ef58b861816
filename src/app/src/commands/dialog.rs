//! Confirmation dialog command definitions.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Blocking yes/no prompt shown by the Shell
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DialogOperation {
    Confirm { message: String },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DialogOutput {
    Confirmed,
    Declined,
}

impl Operation for DialogOperation {
    type Output = DialogOutput;
}

/// Command-based dialog API
pub struct Dialog<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Dialog<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DialogOperation>> + 'static,
    Event: Send + 'static,
{
    /// Ask the user to confirm `message`
    pub fn confirm(
        message: impl Into<String>,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = DialogOutput>>
    {
        let operation = DialogOperation::Confirm {
            message: message.into(),
        };
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(operation)
                .into_future(ctx)
                .await
        })
    }
}
