//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod display;
mod view;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

pub use app::update_app;
pub use display::update_display;
pub use view::update_view;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::View(m) => view::update_view(model, m),
        Msg::Display(m) => display::update_display(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}
