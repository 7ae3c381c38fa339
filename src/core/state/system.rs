use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// Process lifecycle flags read by the app runner
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    /// Last runtime error, flattened to one line
    pub last_error: Option<String>,
}

impl SystemState {
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => self.should_quit = true,
            SystemMsg::Suspend => self.should_suspend = true,
            SystemMsg::Resume => self.should_suspend = false,
            SystemMsg::Resize(width, height) => {
                return vec![Cmd::Tui(TuiCommand::Resize { width, height })];
            }
            SystemMsg::ShowError(error) => {
                log::warn!("{error}");
                self.last_error = Some(format!("Error: {}", error.replace('\n', " ")));
            }
        }
        vec![]
    }
}
