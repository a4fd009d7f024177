use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::Mutex;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::system::SystemMsg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    infrastructure::tui::{Event, Frame, TuiLike},
    presentation::components::Components,
};

/// Drives the Elm loop: terminal event → raw message → domain messages →
/// update → commands, then a redraw.
pub struct AppRunner {
    state: AppState,
    components: Components,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
}

impl AppRunner {
    pub fn new(state: AppState, tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        Self {
            state,
            components: Components::new(),
            tui,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Map a terminal event to the raw message the translator understands.
    pub fn raw_msg(event: Event) -> Option<RawMsg> {
        match event {
            Event::Quit | Event::Closed => Some(RawMsg::Quit),
            Event::Tick => Some(RawMsg::Tick),
            Event::Render => Some(RawMsg::Render),
            Event::Resize(w, h) => Some(RawMsg::Resize(w, h)),
            Event::Key(key) => Some(RawMsg::Key(key)),
            Event::Mouse(mouse) => Some(RawMsg::Mouse(mouse)),
            Event::Error(message) => Some(RawMsg::Error(message)),
            Event::Init | Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
        }
    }

    /// Translate and apply one raw message, returning the commands it produced.
    pub fn dispatch(&mut self, raw: RawMsg) -> Vec<Cmd> {
        if !raw.is_frequent() {
            log::debug!("{raw:?}");
        }
        translate_raw_to_domain(raw, &self.state)
            .into_iter()
            .flat_map(|msg| update(msg, &mut self.state))
            .collect()
    }

    /// Run until quit is requested or the terminal runs out of events.
    pub async fn run(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.enter()?;
            let size = tui.size()?;
            self.state.system.viewport = Rect::new(0, 0, size.width, size.height);
        }
        self.render().await?;

        loop {
            let event = {
                let mut tui = self.tui.lock().await;
                tui.next().await
            };
            let Some(event) = event else {
                log::info!("Event source closed");
                break;
            };

            if let Some(raw) = Self::raw_msg(event) {
                let is_tick = raw == RawMsg::Tick;
                let cmds = self.dispatch(raw);
                self.execute(cmds).await?;
                if !is_tick {
                    self.render().await?;
                }
            }

            if self.state.system.should_quit {
                break;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    async fn execute(&mut self, cmds: Vec<Cmd>) -> Result<()> {
        for cmd in Cmd::batch(cmds).flatten() {
            match cmd {
                Cmd::Tui(TuiCommand::Resize { width, height }) => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                }
                Cmd::Tui(TuiCommand::Suspend) => {
                    {
                        let mut tui = self.tui.lock().await;
                        tui.suspend()?;
                        tui.resume()?;
                    }
                    self.state.system.update(SystemMsg::Resume);
                }
                Cmd::Batch(_) | Cmd::None => {}
            }
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let tui = Arc::clone(&self.tui);
        let mut tui = tui.lock().await;
        let state = &self.state;
        let components = &mut self.components;
        tui.draw(&mut |frame: &mut Frame<'_>| components.render(frame, state))?;
        Ok(())
    }
}
