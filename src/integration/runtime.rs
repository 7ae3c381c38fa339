use std::{collections::VecDeque, sync::Arc, time::Duration};

use color_eyre::eyre::{eyre, Result};
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    infrastructure::{
        profile_service::RemoteProfileService, tui::textarea_engine::TuiTextAreaEngine,
    },
};

/// Owns the application state and drives the translate/update/execute cycle.
/// `update` runs only here, so state has a single writer.
pub struct Runtime {
    ctx: UpdateContext<'static>,
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a Runtime without an executor; commands stay queued
    pub fn new(initial_state: AppState) -> Self {
        static ENGINE: TuiTextAreaEngine = TuiTextAreaEngine;
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            ctx: UpdateContext { text_area: &ENGINE },
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a Runtime whose commands are executed against `service`
    pub fn new_with_service(
        initial_state: AppState,
        service: Arc<dyn RemoteProfileService>,
    ) -> Self {
        let mut runtime = Self::new(initial_state);
        let mut executor = CmdExecutor::new(service, runtime.raw_msg_tx.clone());
        executor.set_request_timeout(
            runtime
                .state
                .config
                .config
                .service
                .request_timeout_ms
                .map(Duration::from_millis),
        );
        runtime.cmd_executor = Some(executor);
        runtime
    }

    /// Add TUI command sender support to existing executor
    pub fn add_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) -> Result<()> {
        match &mut self.cmd_executor {
            Some(executor) => {
                executor.set_tui_sender(tui_sender);
                Ok(())
            }
            None => Err(eyre!("No executor available. Use new_with_service() first.")),
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Sender that background tasks use to report back
    pub fn raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Drain pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>> {
        if self.cmd_executor.is_none() {
            return Err(eyre!(
                "No command executor available. Use new_with_service() to configure."
            ));
        }

        let commands = self.pending_commands();
        match &self.cmd_executor {
            Some(executor) if !commands.is_empty() => executor.execute_commands(&commands),
            _ => Ok(vec![]),
        }
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (new_state, commands) = update_with_context(msg, self.state.clone(), &self.ctx);
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all queued and received messages
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Drain raw messages from the loop first, then from background tasks
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        // Each result is translated against the state its predecessors produced
        loop {
            while let Some(msg) = self.msg_queue.pop_front() {
                all_commands.extend(self.process_message(msg));
            }
            match self.raw_msg_rx.try_recv() {
                Ok(raw_msg) => {
                    let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
                    self.msg_queue.extend(domain_msgs);
                }
                Err(_) => break,
            }
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>> {
        let _commands = self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len() + self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            phase: format!("{:?}", self.state.editor.phase),
            has_profile: self.state.store.is_ready(),
            request_in_flight: self.state.editor.in_flight().is_some(),
            has_executor: self.cmd_executor.is_some(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub phase: String,
    pub has_profile: bool,
    pub request_in_flight: bool,
    pub has_executor: bool,
}
