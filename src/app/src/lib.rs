pub mod commands;
pub mod events;
pub mod macros;
pub mod model;
pub mod settings;
pub mod types;
pub mod update;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(test)]
mod tests;

use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::{
        dialog::{DialogOperation, DialogOutput},
        download::{DownloadOperation, DownloadOutput},
        timer::{TimerId, TimerOperation, TimerOutput},
    },
    events::Event,
    model::{Model, ViewModel},
    settings::PanelSettings,
    types::*,
};

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Timer(TimerOperation),
    Dialog(DialogOperation),
    Download(DownloadOperation),
}

pub type TimerCmd = crate::commands::timer::Timer<Effect, Event>;
pub type DialogCmd = crate::commands::dialog::Dialog<Effect, Event>;
pub type DownloadCmd = crate::commands::download::Download<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        model.view()
    }
}
