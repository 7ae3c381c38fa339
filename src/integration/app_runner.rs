use std::{sync::Arc, time::Duration};

use color_eyre::eyre::Result;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{profile::ProfileMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        config::Config,
        profile_service::{RemoteProfileService, SimulatedProfileService},
        tui::{self, event_source::EventSource, real::RealTui},
    },
    integration::{renderer::Renderer, runtime::Runtime},
};

/// Drives the application: terminal events in, update cycle, render out.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    events: EventSource,
    renderer: Renderer,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Build a runner over any terminal and service
    pub fn new(
        config: Config,
        service: Arc<dyn RemoteProfileService>,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    ) -> Result<Self> {
        let mut runtime = Runtime::new_with_service(AppState::new_with_config(config), service);
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_tx)?;

        Ok(Self {
            runtime,
            events: EventSource::real(Arc::clone(&tui)),
            tui,
            renderer: Renderer::new(),
            tui_rx,
        })
    }

    /// Production wiring: crossterm terminal and the simulated service from config
    pub fn new_with_real(config: Config, tui: Arc<Mutex<RealTui>>) -> Result<Self> {
        let service = Arc::new(SimulatedProfileService::from_config(&config.service));
        Self::new(config, service, tui)
    }

    /// Enter the terminal and request the initial load
    pub async fn start(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.runtime.send_msg(Msg::Profile(ProfileMsg::LoadRequested));
        self.runtime.run_update_cycle()?;
        self.render().await
    }

    /// Run until the user quits
    pub async fn run(&mut self) -> Result<()> {
        self.start().await?;
        while self.run_one_cycle().await? {}
        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// One pass of the loop. Returns false once the app should quit.
    pub async fn run_one_cycle(&mut self) -> Result<bool> {
        match self.events.next().await {
            Some(event) => self.handle_event(event),
            // test terminals run dry; avoid a busy loop
            None => tokio::time::sleep(Duration::from_millis(1)).await,
        }

        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }

        while let Ok(cmd) = self.tui_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(ratatui::prelude::Rect::new(0, 0, width, height))?;
                }
            }
        }

        if self.runtime.state().system.should_suspend {
            self.suspend().await?;
        }

        self.render().await?;

        Ok(!self.runtime.state().system.should_quit)
    }

    fn handle_event(&mut self, event: tui::Event) {
        let raw = match event {
            tui::Event::Quit | tui::Event::Closed => RawMsg::Quit,
            tui::Event::Tick => RawMsg::Tick,
            tui::Event::Render => RawMsg::Render,
            tui::Event::Resize(w, h) => RawMsg::Resize(w, h),
            tui::Event::Key(key) => RawMsg::Key(key),
            tui::Event::Paste(text) => RawMsg::Paste(text),
            tui::Event::Error => RawMsg::Error("terminal event error".to_string()),
            tui::Event::Init | tui::Event::FocusGained | tui::Event::FocusLost => return,
        };
        self.runtime.send_raw_msg(raw);
    }

    /// Hands the terminal back to the shell until the process is continued
    async fn suspend(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.runtime.run_update_cycle()?;
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }
}
