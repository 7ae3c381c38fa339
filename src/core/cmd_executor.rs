use std::{future::Future, sync::Arc, time::Duration};

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
    },
    domain::ServiceError,
    infrastructure::profile_service::RemoteProfileService,
};

/// Carries out commands produced by `update`.
/// Service calls and timers run on spawned tasks and report back as `RawMsg`.
#[derive(Clone)]
pub struct CmdExecutor {
    service: Arc<dyn RemoteProfileService>,
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    request_timeout: Option<Duration>,
}

impl CmdExecutor {
    pub fn new(
        service: Arc<dyn RemoteProfileService>,
        raw_tx: mpsc::UnboundedSender<RawMsg>,
    ) -> Self {
        Self {
            service,
            raw_tx,
            tui_sender: None,
            request_timeout: None,
        }
    }

    /// Bounds every fetch and save; `None` waits indefinitely
    pub fn set_request_timeout(&mut self, timeout: Option<Duration>) {
        self.request_timeout = timeout;
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::FetchProfile { request } => {
                let request = *request;
                let service = Arc::clone(&self.service);
                let raw_tx = self.raw_tx.clone();
                let timeout = self.request_timeout;
                tokio::spawn(async move {
                    let result = with_timeout(timeout, service.fetch_profile()).await;
                    if raw_tx
                        .send(RawMsg::ProfileFetched { request, result })
                        .is_err()
                    {
                        log::debug!("Runtime gone before fetch #{} finished", request.0);
                    }
                });
            }

            Cmd::SaveProfile { request, candidate } => {
                let request = *request;
                let candidate = candidate.clone();
                let service = Arc::clone(&self.service);
                let raw_tx = self.raw_tx.clone();
                let timeout = self.request_timeout;
                tokio::spawn(async move {
                    let result = with_timeout(timeout, service.save_profile(candidate)).await;
                    if raw_tx
                        .send(RawMsg::ProfileSaved { request, result })
                        .is_err()
                    {
                        log::debug!("Runtime gone before save #{} finished", request.0);
                    }
                });
            }

            Cmd::ScheduleToastDismiss {
                generation,
                after_ms,
            } => {
                let generation = *generation;
                let delay = Duration::from_millis(*after_ms);
                let raw_tx = self.raw_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    if raw_tx.send(RawMsg::ToastExpired { generation }).is_err() {
                        log::debug!("Runtime gone before toast #{generation} expired");
                    }
                });
            }

            Cmd::Tui(tui_cmd) => {
                if let Some(sender) = &self.tui_sender {
                    sender.send(tui_cmd.clone())?;
                } else {
                    log::warn!("TuiCommand ignored: no TUI sender available");
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands, returning a log line per command
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut results = Vec::with_capacity(commands.len());

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => results.push(format!("Executed: {}", cmd.name())),
                Err(e) => {
                    let error_msg = format!("Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    results.push(error_msg);
                }
            }
        }

        Ok(results)
    }
}

/// Runs `call`, turning an overrun into `ServiceError::Timeout`
pub async fn with_timeout<T>(
    timeout: Option<Duration>,
    call: impl Future<Output = Result<T, ServiceError>>,
) -> Result<T, ServiceError> {
    match timeout {
        None => call.await,
        Some(limit) => match tokio::time::timeout(limit, call).await {
            Ok(result) => result,
            Err(_) => Err(ServiceError::Timeout {
                after_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
            }),
        },
    }
}
