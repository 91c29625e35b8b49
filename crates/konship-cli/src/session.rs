//! The console session loop.
//!
//! A session reads one command per line, parses it with clap, and executes it
//! against a [`Registry`]. Failures are printed and the loop continues unless
//! fail-fast mode is on. Hazard notices raised while a command runs are
//! printed before that command's result.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use konship_lib::{RecordingNotifier, Registry, RegistryConfig};

use crate::commands::{dispatch, Flow, ShellLine};
use crate::terminal::ColorPalette;

/// Prompt printed before each line in interactive mode.
pub const PROMPT: &str = "konship> ";

/// Session options taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Print a prompt before reading each line.
    pub interactive: bool,
    /// Stop at the first failed command and report it as an error.
    pub fail_fast: bool,
}

pub struct Session<W: Write> {
    registry: Registry,
    notifier: Arc<RecordingNotifier>,
    palette: ColorPalette,
    options: SessionOptions,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(
        config: RegistryConfig,
        palette: ColorPalette,
        options: SessionOptions,
        out: W,
    ) -> Self {
        let notifier = Arc::new(RecordingNotifier::new());
        let registry = Registry::new(config).with_notifier(Arc::clone(&notifier));
        Self {
            registry,
            notifier,
            palette,
            options,
            out,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Consume the session, returning its writer.
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Read and execute commands until `exit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if self.options.interactive {
                write!(
                    self.out,
                    "{}{PROMPT}{}",
                    self.palette.muted, self.palette.reset
                )?;
                self.out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            match self.execute_line(&line)? {
                Flow::Continue => {}
                Flow::Exit => break,
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Execute a single line of input.
    ///
    /// Blank lines and `#` comments are ignored. Command failures are printed
    /// and reported as `Flow::Continue`, except in fail-fast mode where they are
    /// returned as errors.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let words = match split_words(trimmed) {
            Ok(words) => words,
            Err(message) => return self.fail(&message),
        };

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                | ErrorKind::DisplayVersion => {
                    write!(self.out, "{}", err.render())?;
                    return Ok(Flow::Continue);
                }
                _ => {
                    let message = parse_error_message(&err.render().to_string());
                    return self.fail(&message);
                }
            },
        };

        debug!(command = ?parsed.command, "executing console command");
        let result = dispatch(
            parsed.command,
            &mut self.registry,
            &self.palette,
            &mut self.out,
        );
        self.flush_hazards()?;

        match result {
            Ok(flow) => Ok(flow),
            Err(err) => self.fail(&format!("{err:#}")),
        }
    }

    fn flush_hazards(&mut self) -> Result<()> {
        for notice in self.notifier.drain() {
            writeln!(
                self.out,
                "{}Hazard Notification for {}: {}{}",
                self.palette.hazard, notice.serial, notice.message, self.palette.reset
            )?;
        }
        Ok(())
    }

    fn fail(&mut self, message: &str) -> Result<Flow> {
        writeln!(
            self.out,
            "{}error: {}{}",
            self.palette.error, message, self.palette.reset
        )?;
        if self.options.fail_fast {
            self.out.flush()?;
            bail!("{message}");
        }
        Ok(Flow::Continue)
    }
}

/// Collapse a rendered clap error into one line.
///
/// Keeps every detail line (missing argument names, tips) and drops the
/// `Usage:` and `--help` footer.
fn parse_error_message(rendered: &str) -> String {
    rendered
        .lines()
        .take_while(|line| !line.starts_with("Usage:"))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.strip_prefix("error: ").unwrap_or(line))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a command line into words, honouring single and double quotes.
pub fn split_words(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {q} quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
