//! TUI application state and event handling.
//!
//! The `App` struct owns the lookup form state and runs the main event loop
//! via `run()`. It manages:
//!
//! - **Two inputs**: the pincode field and the name filter, with Tab focus
//! - **Background lookups**: each submit runs on its own thread and reports
//!   back over an mpsc channel tagged with its request sequence number
//! - **State transitions**: all form state changes go through [`LookupState`]
//! - **Dirty state tracking**: rendering only happens when state changes
//!   (or continuously while the loading spinner is animating)
//!
//! Submitting while a lookup is still in flight starts a second one; the
//! channel replies carry sequence numbers so the state can drop whichever
//! reply is stale, regardless of arrival order.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::api::{LookupError, PincodeClient};
use crate::models::{Pincode, PostOfficeRecord};
use crate::state::{LookupState, RequestSeq};

/// Maximum accepted length for either text input
const INPUT_LIMIT: usize = 256;

/// Which text input receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Pincode,
    Filter,
}

impl Focus {
    fn toggled(self) -> Self {
        match self {
            Focus::Pincode => Focus::Filter,
            Focus::Filter => Focus::Pincode,
        }
    }
}

/// Completion of one background lookup
struct LookupReply {
    seq: RequestSeq,
    outcome: Result<Vec<PostOfficeRecord>, LookupError>,
}

pub struct App {
    state: LookupState,
    client: PincodeClient,
    pincode_input: String,
    focus: Focus,
    scroll: usize,
    should_quit: bool,
    tx: Sender<LookupReply>,
    rx: Receiver<LookupReply>,
    spinner_frame: usize,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(client: PincodeClient) -> Self {
        let (tx, rx) = channel();

        Self {
            state: LookupState::new(),
            client,
            pincode_input: String::new(),
            focus: Focus::Pincode,
            scroll: 0,
            should_quit: false,
            tx,
            rx,
            spinner_frame: 0,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.drain_replies();

            if self.state.is_loading() {
                // Keep the spinner moving
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                self.needs_redraw = true;
            }

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let visible = self.state.visible();
                let scroll = self.scroll.min(visible.len().saturating_sub(1));
                terminal.draw(|f| {
                    let render_state = RenderState {
                        pincode_input: &self.pincode_input,
                        filter_input: self.state.filter(),
                        focus: self.focus,
                        loading: self.state.is_loading(),
                        error: self.state.error(),
                        visible: &visible,
                        total: self.state.records().len(),
                        scroll,
                        spinner_frame: self.spinner_frame,
                    };
                    render_ui(f, &render_state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Apply completed lookups waiting on the channel
    fn drain_replies(&mut self) {
        while let Ok(reply) = self.rx.try_recv() {
            if self.state.complete(reply.seq, reply.outcome) {
                self.scroll = 0;
                self.needs_redraw = true;
            }
        }
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearInput => self.clear_focused_input(),
            Action::SwitchFocus => {
                self.focus = self.focus.toggled();
                self.needs_redraw = true;
            }
            Action::Submit => self.submit(),
            Action::ScrollUp => self.scroll_by(-1),
            Action::ScrollDown => self.scroll_by(1),
            Action::InputChar(c) => self.input_char(c),
            Action::DeleteChar => self.delete_char(),
            Action::None => {}
        }
    }

    /// Esc clears the focused input, or quits when it is already empty
    fn clear_focused_input(&mut self) {
        match self.focus {
            Focus::Pincode => {
                if self.pincode_input.is_empty() {
                    self.should_quit = true;
                } else {
                    self.pincode_input.clear();
                    self.needs_redraw = true;
                }
            }
            Focus::Filter => {
                if self.state.filter().is_empty() {
                    self.should_quit = true;
                } else {
                    self.state.set_filter("");
                    self.scroll = 0;
                    self.needs_redraw = true;
                }
            }
        }
    }

    fn submit(&mut self) {
        if let Some((seq, pincode)) = self.state.submit(&self.pincode_input) {
            self.spawn_lookup(seq, pincode);
        }
        self.needs_redraw = true;
    }

    /// Run one lookup on its own thread; the reply is matched back to the
    /// state by sequence number when it arrives
    fn spawn_lookup(&self, seq: RequestSeq, pincode: Pincode) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let outcome = client.lookup(&pincode);
            // A closed channel means the app already exited
            let _ = tx.send(LookupReply { seq, outcome });
        });
    }

    fn input_char(&mut self, c: char) {
        match self.focus {
            Focus::Pincode => {
                if self.pincode_input.len() < INPUT_LIMIT {
                    self.pincode_input.push(c);
                    self.needs_redraw = true;
                }
            }
            Focus::Filter => {
                if self.state.filter().len() < INPUT_LIMIT {
                    let mut filter = self.state.filter().to_string();
                    filter.push(c);
                    self.state.set_filter(filter);
                    self.scroll = 0;
                    self.needs_redraw = true;
                }
            }
        }
    }

    fn delete_char(&mut self) {
        match self.focus {
            Focus::Pincode => {
                if self.pincode_input.pop().is_some() {
                    self.needs_redraw = true;
                }
            }
            Focus::Filter => {
                let mut filter = self.state.filter().to_string();
                if filter.pop().is_some() {
                    self.state.set_filter(filter);
                    self.scroll = 0;
                    self.needs_redraw = true;
                }
            }
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        let total = self.state.visible().len();
        if total == 0 {
            self.scroll = 0;
            return;
        }

        let old = self.scroll;
        let new = (self.scroll as isize + delta).max(0) as usize;
        self.scroll = new.min(total - 1);

        if old != self.scroll {
            self.needs_redraw = true;
        }
    }
}
