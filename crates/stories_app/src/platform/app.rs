use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use stories_core::{update, AppState, Msg, SEARCH_KEY};
use stories_logging::{stories_debug, stories_info};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui::keys::{handle_key, KeyOutcome};
use super::ui::{self, UiState};

/// Poll interval; also the latency for engine completions to reach the screen.
const TICK: Duration = Duration::from_millis(50);

pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let store = config.open_store();
    let stored_term = store.get(SEARCH_KEY);
    stories_info!("Starting with stored search term {:?}", stored_term);

    let state = AppState::with_settings(config.search_settings(), stored_term);
    let effects = EffectRunner::new(config.engine_config(), store)
        .context("failed to start fetch engine")?;

    let mut terminal = ratatui::init();
    let result = EventLoop::new(state, effects).run(&mut terminal);
    ratatui::restore();
    result
}

struct EventLoop {
    state: AppState,
    ui: UiState,
    effects: EffectRunner,
    needs_render: bool,
    should_quit: bool,
}

impl EventLoop {
    fn new(state: AppState, effects: EffectRunner) -> Self {
        Self {
            state,
            ui: UiState::default(),
            effects,
            needs_render: true,
            should_quit: false,
        }
    }

    fn run(mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        self.dispatch_msg(Msg::Mounted);

        while !self.should_quit {
            if self.needs_render {
                let view = self.state.view();
                self.ui.clamp(view.stories.len(), view.history.len());
                terminal.draw(|frame| ui::render::draw(frame, &view, &self.ui))?;
                self.needs_render = false;
            }

            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                } else {
                    // Resize and friends.
                    self.needs_render = true;
                }
            }

            for msg in self.effects.drain_events() {
                self.dispatch_msg(msg);
            }
        }

        stories_info!("Quit requested");
        Ok(())
    }

    fn handle_key(&mut self, key: event::KeyEvent) {
        let view = self.state.view();
        match handle_key(key, &mut self.ui, &view) {
            KeyOutcome::Dispatch(msg) => self.dispatch_msg(msg),
            KeyOutcome::Redraw => self.needs_render = true,
            KeyOutcome::Quit => self.should_quit = true,
            KeyOutcome::Ignored => {}
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        stories_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.needs_render = true;
        }
        self.state = state;
        self.effects.enqueue(effects);
    }
}
