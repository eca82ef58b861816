//! Timer command definitions.
//!
//! The core never sleeps. Every delay (simulator tick, toast expiry, activity
//! end, simulated save) is a timer the Shell runs and reports back on.
//!
//! Each `Start` request is resolved exactly once, with `Elapsed` when the
//! delay ran out or with `Cancelled` when a later `Cancel` for the same id
//! arrived first. `Cancel` itself is a notification and gets no answer.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

pub type TimerId = u64;

// Operations that the Shell needs to perform for timers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerOperation {
    /// Fire once after `millis`
    Start { id: TimerId, millis: u64 },
    /// Drop a pending timer; its `Start` request resolves with `Cancelled`
    Cancel { id: TimerId },
}

// How a `Start` request ended
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerOutput {
    Elapsed { id: TimerId },
    Cancelled { id: TimerId },
}

impl TimerOutput {
    pub fn id(&self) -> TimerId {
        match self {
            Self::Elapsed { id } | Self::Cancelled { id } => *id,
        }
    }
}

impl Operation for TimerOperation {
    type Output = TimerOutput;
}

/// Command-based timer API
pub struct Timer<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Timer<Effect, Event>
where
    Effect: Send + From<crux_core::Request<TimerOperation>> + 'static,
    Event: Send + 'static,
{
    /// Start a one-shot timer
    pub fn start(
        id: TimerId,
        millis: u64,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = TimerOutput>>
    {
        let operation = TimerOperation::Start { id, millis };
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(operation)
                .into_future(ctx)
                .await
        })
    }

    /// Tell the Shell to drop a pending timer
    pub fn cancel(id: TimerId) -> Command<Effect, Event> {
        Command::notify_shell(TimerOperation::Cancel { id }).into()
    }
}
