// Mode-aware CLI output: colored for terminals, plain for pipes, JSON for tools
use colored::Colorize;
use serde::Serialize;
use std::io::{self, IsTerminal, Stdout, Write};
use std::str::FromStr;

use crate::error::DialecticsError;

/// Output mode for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output with colors and emojis
    Human,
    /// Machine-readable JSON output
    Json,
    /// Plain text without colors (for pipes/logs)
    Plain,
}

impl OutputMode {
    /// Auto-detect output mode based on environment
    pub fn auto() -> Self {
        if std::env::var("DIALECTICS_JSON").is_ok() {
            Self::Json
        } else if !io::stdout().is_terminal() {
            Self::Plain
        } else {
            Self::Human
        }
    }
}

impl FromStr for OutputMode {
    type Err = DialecticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            _ => Err(DialecticsError::invalid_input(format!(
                "unknown output format: {}. Supported: human, plain, json",
                s
            ))),
        }
    }
}

/// CLI output writer with mode awareness
pub struct OutputWriter<W: Write = Stdout> {
    mode: OutputMode,
    out: W,
}

impl OutputWriter<Stdout> {
    pub fn stdout(mode: OutputMode) -> Self {
        Self::new(mode, io::stdout())
    }

    pub fn auto() -> Self {
        Self::stdout(OutputMode::auto())
    }
}

impl<W: Write> OutputWriter<W> {
    pub fn new(mode: OutputMode, out: W) -> Self {
        Self { mode, out }
    }

    /// Top-level banner with a heavy rule underneath
    pub fn banner(&mut self, title: &str, width: usize) -> io::Result<()> {
        match self.mode {
            OutputMode::Human => {
                writeln!(self.out, "{}", title.bold())?;
                writeln!(self.out, "{}", "=".repeat(width))
            }
            OutputMode::Plain => {
                writeln!(self.out, "{}", title)?;
                writeln!(self.out, "{}", "=".repeat(width))
            }
            OutputMode::Json => Ok(()),
        }
    }

    /// Print a section header
    pub fn section(&mut self, title: &str) -> io::Result<()> {
        match self.mode {
            OutputMode::Human => {
                writeln!(self.out)?;
                writeln!(self.out, "{}", title.cyan().bold())?;
                writeln!(self.out, "{}", "-".repeat(50).cyan())
            }
            OutputMode::Plain => {
                writeln!(self.out)?;
                writeln!(self.out, "{}", title)?;
                writeln!(self.out, "{}", "-".repeat(50))
            }
            OutputMode::Json => Ok(()),
        }
    }

    /// Smaller header without a rule
    pub fn heading(&mut self, title: &str) -> io::Result<()> {
        match self.mode {
            OutputMode::Human => {
                writeln!(self.out)?;
                writeln!(self.out, "{}", title.yellow())
            }
            OutputMode::Plain => {
                writeln!(self.out)?;
                writeln!(self.out, "{}", title)
            }
            OutputMode::Json => Ok(()),
        }
    }

    pub fn line(&mut self, message: &str) -> io::Result<()> {
        match self.mode {
            OutputMode::Json => Ok(()),
            _ => writeln!(self.out, "{}", message),
        }
    }

    /// `label: value` with the label emphasised
    pub fn labeled(&mut self, label: &str, value: &str) -> io::Result<()> {
        match self.mode {
            OutputMode::Human => writeln!(self.out, "{} {}", label.green(), value),
            OutputMode::Plain => writeln!(self.out, "{} {}", label, value),
            OutputMode::Json => Ok(()),
        }
    }

    /// 1-based numbered list, indented
    pub fn numbered<S: AsRef<str>>(&mut self, items: &[S]) -> io::Result<()> {
        if self.mode == OutputMode::Json {
            return Ok(());
        }
        for (i, item) in items.iter().enumerate() {
            writeln!(self.out, "   {}. {}", i + 1, item.as_ref())?;
        }
        Ok(())
    }

    pub fn bullets<S: AsRef<str>>(&mut self, items: &[S]) -> io::Result<()> {
        let marker = match self.mode {
            OutputMode::Human => "•",
            OutputMode::Plain => "-",
            OutputMode::Json => return Ok(()),
        };
        for item in items {
            writeln!(self.out, "   {} {}", marker, item.as_ref())?;
        }
        Ok(())
    }

    /// Print a metric
    pub fn metric(&mut self, label: &str, value: &str) -> io::Result<()> {
        match self.mode {
            OutputMode::Human => writeln!(self.out, "   • {}: {}", label, value.green()),
            OutputMode::Plain => writeln!(self.out, "   - {}: {}", label, value),
            OutputMode::Json => Ok(()),
        }
    }

    /// Print a success message
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        match self.mode {
            OutputMode::Human => writeln!(self.out, "{} {}", "✓".green(), message),
            OutputMode::Plain => writeln!(self.out, "[OK] {}", message),
            OutputMode::Json => Ok(()),
        }
    }

    /// Pre-rendered block such as a comfy-table
    pub fn block(&mut self, text: &str) -> io::Result<()> {
        match self.mode {
            OutputMode::Json => Ok(()),
            _ => writeln!(self.out, "{}", text),
        }
    }

    /// Emit a structured value; only JSON mode writes anything
    pub fn emit_json<T: Serialize>(&mut self, value: &T) -> crate::Result<()> {
        if self.mode == OutputMode::Json {
            let json = serde_json::to_string_pretty(value)?;
            writeln!(self.out, "{}", json)?;
        }
        Ok(())
    }

    /// Get the output mode
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Check if output is human-friendly
    pub fn is_human(&self) -> bool {
        matches!(self.mode, OutputMode::Human)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
