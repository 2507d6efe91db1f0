//! Application-level update handlers (window events, export, quit).

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.window_size = (width, height);
            Some(Cmd::Redraw)
        }
        AppMsg::Save(path) => Some(Cmd::SaveImage { path }),
        AppMsg::CopyToClipboard => Some(Cmd::CopyToClipboard),
        AppMsg::Quit => Some(Cmd::Quit),
    }
}
