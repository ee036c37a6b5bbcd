//! Menu loop: read one choice per line, apply it, print the result.
//!
//! The loop is generic over its input and output so it can be driven by a
//! terminal or by a scripted session in tests.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::{GameConfig, OutputFormat};
use crate::core::{ActionError, GameController, GameSnapshot, Outcome};
use crate::input::{parse_choice, MenuChoice};
use crate::term::{json, GameView, LineRenderer};
use crate::types::GameAction;

/// Totals reported when a session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub applied: u64,
    pub rejected: u32,
    pub invalid_inputs: u32,
    pub final_snapshot: GameSnapshot,
}

/// Run a full session until an exit choice or end of input.
pub fn run_session<R: BufRead, W: Write>(
    config: &GameConfig,
    input: R,
    output: W,
) -> Result<SessionSummary> {
    let mut game = config.new_game()?;
    info!(
        seed = config.seed,
        queue_size = config.queue_size,
        reserve_size = config.reserve_size,
        "session started"
    );

    let mut out = Output::new(config, output);
    let summary = drive(&mut game, input, &mut out)?;

    info!(
        applied = summary.applied,
        rejected = summary.rejected,
        invalid_inputs = summary.invalid_inputs,
        "session finished"
    );
    Ok(summary)
}

fn drive<R: BufRead, W: Write>(
    game: &mut GameController,
    mut input: R,
    out: &mut Output<W>,
) -> Result<SessionSummary> {
    let mut rejected = 0u32;
    let mut invalid_inputs = 0u32;
    let mut snap = GameSnapshot::default();

    game.snapshot_into(&mut snap);
    out.start(&snap)?;

    let mut raw = Vec::new();
    loop {
        out.menu()?;

        raw.clear();
        let read = input
            .read_until(b'\n', &mut raw)
            .context("read menu choice")?;
        if read == 0 {
            break;
        }
        // Undecodable bytes become U+FFFD and are reported as an invalid choice.
        let line = String::from_utf8_lossy(&raw);

        match parse_choice(&line) {
            Some(MenuChoice::Exit) => break,
            Some(MenuChoice::Action(action)) => {
                let result = game.apply(action);
                if result.is_err() {
                    rejected += 1;
                }
                game.snapshot_into(&mut snap);
                out.result(action, &result, &snap)?;
            }
            None => {
                warn!(input = line.trim(), "invalid menu choice");
                invalid_inputs += 1;
                out.invalid(&line)?;
            }
        }
    }

    out.finish()?;
    Ok(SessionSummary {
        applied: game.actions_applied(),
        rejected,
        invalid_inputs,
        final_snapshot: snap,
    })
}

/// Text or JSON output, chosen once per session.
struct Output<W: Write> {
    format: OutputFormat,
    view: GameView,
    renderer: LineRenderer<W>,
}

impl<W: Write> Output<W> {
    fn new(config: &GameConfig, output: W) -> Self {
        let color = config.color && config.format == OutputFormat::Text;
        Self {
            format: config.format,
            view: GameView::default(),
            renderer: LineRenderer::new(output, color),
        }
    }

    fn start(&mut self, snap: &GameSnapshot) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                self.renderer.draw(&self.view.banner())?;
                self.renderer.draw(&self.view.render(snap))
            }
            OutputFormat::Json => self.json_line(&json::snapshot_value(snap)?),
        }
    }

    fn menu(&mut self) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                self.renderer.draw(&self.view.menu())?;
                let prompt = self.view.prompt();
                self.renderer.prompt(&prompt)
            }
            OutputFormat::Json => Ok(()),
        }
    }

    fn result(
        &mut self,
        action: GameAction,
        result: &Result<Outcome, ActionError>,
        snap: &GameSnapshot,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                self.renderer.draw(&self.view.outcome(action, result))?;
                self.renderer.draw(&self.view.render(snap))
            }
            OutputFormat::Json => {
                self.json_line(&json::outcome_value(action, result)?)?;
                self.json_line(&json::snapshot_value(snap)?)
            }
        }
    }

    fn invalid(&mut self, line: &str) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.renderer.draw(&self.view.invalid_choice(line)),
            OutputFormat::Json => self.json_line(&json::invalid_value(line)),
        }
    }

    fn finish(&mut self) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.renderer.draw(&self.view.farewell()),
            OutputFormat::Json => Ok(()),
        }
    }

    fn json_line(&mut self, v: &json::Value) -> Result<()> {
        self.renderer.write_line(&json::to_line(v)?)
    }
}
