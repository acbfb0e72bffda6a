use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use engine_logging::{engine_info, engine_warn, LogDestination};
use summarizer_core::{update, AppState, AppViewModel, Msg};
use summarizer_engine::BackendConfig;

use super::effects::EffectRunner;
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    engine_logging::initialize(LogDestination::default(), engine_logging::level_from_env());

    let config = BackendConfig::from_env().unwrap_or_else(|err| {
        engine_warn!("{}; using default backend configuration", err);
        BackendConfig::default()
    });
    engine_info!("Starting with primary backend {}", config.primary_url);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let mut app = App::new(
        AppState::new(config.primary_url.clone()),
        EffectRunner::new(config, msg_tx.clone()).context("starting engine")?,
    );

    let mut out = io::stdout().lock();
    write_lines(&mut out, &ui::layout::initial_lines())?;

    spawn_input_reader(msg_tx.clone());
    // The reader and engine hold their own senders; ours would keep the loop alive forever.
    drop(msg_tx);

    app.dispatch(Msg::Started);
    app.render_if_dirty(&mut out)?;

    while let Ok(msg) = msg_rx.recv() {
        app.dispatch(msg);
        while let Ok(msg) = msg_rx.try_recv() {
            app.dispatch(msg);
        }
        app.render_if_dirty(&mut out)?;
        if app.state.view().should_exit {
            break;
        }
    }

    engine_info!("Exiting");
    Ok(())
}

struct App {
    state: AppState,
    effects: EffectRunner,
}

impl App {
    fn new(state: AppState, effects: EffectRunner) -> Self {
        Self { state, effects }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.enqueue(effects);
    }

    fn render_if_dirty(&mut self, out: &mut impl Write) -> io::Result<()> {
        if !self.state.consume_dirty() {
            return Ok(());
        }
        let view: AppViewModel = self.state.view();
        write_lines(out, &ui::render::render(&view))
    }
}

/// Each non-blank line is typed into the URL field and submitted.
fn spawn_input_reader(msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            let url = line.trim();
            // The form field is required; a blank line is not a submission.
            if url.is_empty() {
                continue;
            }
            let sent = msg_tx
                .send(Msg::InputChanged(url.to_string()))
                .and_then(|()| msg_tx.send(Msg::SubmitClicked));
            if sent.is_err() {
                return;
            }
        }
        let _ = msg_tx.send(Msg::InputClosed);
    });
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
