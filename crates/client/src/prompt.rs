//! Line-based prompts.
//!
//! Every question loops until it gets an answer it can parse; closing the
//! input ends the program instead of looping forever.
use std::fmt::Display;
use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow};
use console::{Term, style};
use cricket_core::{BatBowlDecision, Pick, TossChoice};

/// Where answers come from.
pub trait LineSource {
    /// Next line without its terminator, or `None` once input is closed.
    ///
    /// `hidden` asks the source not to echo the answer, so a second player at
    /// the same terminal cannot see the first player's pick.
    fn read_line(&mut self, hidden: bool) -> io::Result<Option<String>>;
}

/// Reads from the process's terminal, hiding input when it is a tty.
pub struct TerminalSource {
    term: Term,
}

impl TerminalSource {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for TerminalSource {
    fn read_line(&mut self, hidden: bool) -> io::Result<Option<String>> {
        if hidden && self.term.is_term() {
            return self.term.read_secure_line().map(Some);
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}

/// Fixed answers, consumed in order.
#[cfg(test)]
pub struct ScriptedSource {
    lines: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
impl LineSource for ScriptedSource {
    fn read_line(&mut self, _hidden: bool) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

pub struct Prompter<S, W> {
    source: S,
    out: W,
}

impl<S: LineSource, W: Write> Prompter<S, W> {
    pub fn new(source: S, out: W) -> Self {
        Self { source, out }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    /// Asks until `parse` accepts the answer, printing `hint` after each
    /// rejected one.
    pub fn ask<T>(
        &mut self,
        question: impl Display,
        hint: &str,
        hidden: bool,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        loop {
            write!(self.out, "{} ", style(&question).cyan())?;
            self.out.flush()?;

            let line = self
                .source
                .read_line(hidden)?
                .ok_or_else(|| anyhow!("input closed"))?;
            if hidden {
                writeln!(self.out)?;
            }
            if let Some(answer) = parse(line.trim()) {
                return Ok(answer);
            }
            self.warn(hint)?;
        }
    }

    pub fn warn(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.out, "{}", style(message).yellow())?;
        Ok(())
    }

    pub fn ask_pick(&mut self, question: impl Display, hidden: bool) -> Result<u32> {
        self.ask(question, "Show a number from 1 to 6.", hidden, parse_pick)
    }

    pub fn ask_toss_choice(&mut self, question: impl Display) -> Result<TossChoice> {
        self.ask(question, "Answer odd or even.", false, parse_toss_choice)
    }

    pub fn ask_decision(&mut self, question: impl Display) -> Result<BatBowlDecision> {
        self.ask(question, "Answer bat or bowl.", false, parse_decision)
    }

    pub fn confirm(&mut self, question: impl Display) -> Result<bool> {
        self.ask(question, "Answer y or n.", false, parse_yes_no)
    }
}

pub fn parse_pick(input: &str) -> Option<u32> {
    let value: u32 = input.parse().ok()?;
    Pick::new(value).ok().map(Pick::value)
}

pub fn parse_toss_choice(input: &str) -> Option<TossChoice> {
    match input.to_ascii_lowercase().as_str() {
        "o" => Some(TossChoice::Odd),
        "e" => Some(TossChoice::Even),
        other => other.parse().ok(),
    }
}

pub fn parse_decision(input: &str) -> Option<BatBowlDecision> {
    match input.to_ascii_lowercase().as_str() {
        "1" => Some(BatBowlDecision::Bat),
        "2" => Some(BatBowlDecision::Bowl),
        other => other.parse().ok(),
    }
}

pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
