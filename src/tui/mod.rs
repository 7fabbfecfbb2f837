// TUI module for the interactive lookup form
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::{App, Focus};
use terminal::TerminalManager;

use crate::api::PincodeClient;

/// Run the interactive TUI
pub fn run_interactive(client: PincodeClient) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    let mut app = App::new(client);
    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
