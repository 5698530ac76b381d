//! Interactive session: the composition root that owns the calculator,
//! feeds it parsed input and projects the result.

use std::io::BufRead;
use std::ops::ControlFlow;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::calculator::Calculator;
use crate::display::{DisplayProjector, DisplaySnapshot};
use crate::input::{Command, parse_line};

type CopyCallback = Box<dyn FnMut(&str) -> Result<()>>;

/// One calculator wired to one display.
pub struct Session<P: DisplayProjector> {
    calculator: Calculator,
    projector: P,
    on_copy: Option<CopyCallback>,
}

impl<P: DisplayProjector> Session<P> {
    pub fn new(calculator: Calculator, projector: P) -> Self {
        Self {
            calculator,
            projector,
            on_copy: None,
        }
    }

    /// Set the handler for copy requests. Without one, copies are dropped.
    pub fn set_on_copy(&mut self, callback: impl FnMut(&str) -> Result<()> + 'static) {
        self.on_copy = Some(Box::new(callback));
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Tear the session down, returning the projector (and its output).
    pub fn into_projector(self) -> P {
        self.projector
    }

    /// Redraw the display from the current state.
    pub fn render(&mut self) -> Result<()> {
        let snapshot = DisplaySnapshot::capture(&self.calculator);
        self.projector.render(&snapshot)
    }

    /// Process every line of `input` until it ends or asks to quit.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        info!("Session started");
        self.render()?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if self.handle_line(&line)?.is_break() {
                break;
            }
        }

        info!(history = self.calculator.history().len(), "Session ended");
        Ok(())
    }

    /// Apply one line of input and redraw once.
    ///
    /// A line is one batch of key presses: the display shows the state after
    /// the whole batch, while notices are emitted as they happen.
    pub fn handle_line(&mut self, line: &str) -> Result<ControlFlow<()>> {
        let commands = parse_line(line);
        if commands.is_empty() {
            return Ok(ControlFlow::Continue(()));
        }

        for command in commands {
            match command {
                Command::Action(action) => {
                    if let Err(err) = self.calculator.apply(action) {
                        debug!(?action, %err, "Notifying user");
                        self.projector.notify(&err)?;
                    }
                }
                Command::Copy => self.copy_current(),
                Command::Quit => {
                    self.render()?;
                    return Ok(ControlFlow::Break(()));
                }
            }
        }

        self.render()?;
        Ok(ControlFlow::Continue(()))
    }

    fn copy_current(&mut self) {
        let text = self.calculator.current_operand().as_str();
        match self.on_copy.as_mut() {
            Some(on_copy) => {
                if let Err(err) = on_copy(text) {
                    warn!("{:#}", err);
                }
            }
            None => warn!("Copy requested but no clipboard is attached"),
        }
    }
}
