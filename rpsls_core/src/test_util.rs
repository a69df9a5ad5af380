use std::collections::VecDeque;

use crate::{Console, Error};

/// Console fed from a fixed script of input lines that records everything
/// written to it. Running out of script behaves like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
    errors: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|x| format!("{}\n", x)).collect(),
            ..Self::default()
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    pub fn is_drained(&self) -> bool {
        self.input.is_empty()
    }

    /// True if any written line contains `needle`
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|x| x.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, Error> {
        self.prompts.push(prompt.to_owned());
        self.input.pop_front().ok_or(Error::ConsoleClosed)
    }

    fn write_line(&mut self, text: &str) -> Result<(), Error> {
        self.output.push(text.to_owned());
        Ok(())
    }

    fn write_error(&mut self, text: &str) -> Result<(), Error> {
        self.errors.push(text.to_owned());
        self.write_line(text)
    }
}
