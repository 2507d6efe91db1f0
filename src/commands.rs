//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

/// A side effect requested by an update
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw of the window
    Redraw,
    /// Encode the displayed frame to a file (format by extension)
    SaveImage { path: PathBuf },
    /// Place the displayed frame on the system clipboard
    CopyToClipboard,
    /// Request application exit
    Quit,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Whether executing this command should be followed by a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_redraw_detection() {
        assert!(Cmd::Redraw.needs_redraw());
        assert!(!Cmd::Quit.needs_redraw());
        assert!(Cmd::Batch(vec![Cmd::None, Cmd::Redraw]).needs_redraw());
        assert!(!Cmd::Batch(vec![Cmd::None]).needs_redraw());
    }
}
