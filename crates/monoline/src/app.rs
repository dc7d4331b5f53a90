use anyhow::{Context, Result};
use monocore::{render, EditorState, Outcome, HELP};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::config::Config;
use crate::display::Display;

pub struct App {
    pub config: Config,
    state: EditorState,
    display: Display,
    /// Print each command after the prompt, for non-interactive input
    echo_input: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let state = EditorState::new()
            .with_history_limit(config.history.max_entries)
            .with_cursor_visible(config.display.show_cursor);
        let display = Display::from_config(&config.display);

        Self {
            config,
            state,
            display,
            echo_input: false,
        }
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo_input = echo;
        self
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Processes one input line and writes whatever it produces.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Outcome> {
        let outcome = self.state.execute(line);

        match outcome {
            Outcome::Help => writeln!(out, "{}", HELP)?,
            Outcome::Render => self.display.write_line(&render(&self.state), out)?,
            Outcome::Quit => log::info!("Quit requested"),
        }

        Ok(outcome)
    }

    /// Reads commands until `q` or end of input.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();

        loop {
            write!(out, "{}", self.config.prompt)?;
            out.flush()?;

            let Some(line) = lines.next_line().await.context("Failed to read command")? else {
                log::info!("Input closed, ending session");
                writeln!(out)?;
                break;
            };

            if self.echo_input {
                writeln!(out, "{}", line)?;
            }

            if self.handle_line(&line, out)? == Outcome::Quit {
                break;
            }
        }

        log::info!(
            "Session ended with {} undo entries",
            self.state.history().len()
        );
        Ok(())
    }
}
