use colored::*;
use rpsls_core::{Console, Error};
use std::io::{self, BufRead, Stdin, Stdout, Write};

use crate::display;

/// The process's stdin/stdout as a [`Console`].
pub struct Terminal {
    stdin: Stdin,
    stdout: Stdout,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Console for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<String, Error> {
        {
            let mut out = self.stdout.lock();
            write!(out, "{}", prompt.cyan())?;
            out.flush()?;
        }

        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Err(Error::ConsoleClosed);
        }
        Ok(line)
    }

    fn write_line(&mut self, text: &str) -> Result<(), Error> {
        writeln!(self.stdout.lock(), "{}", text)?;
        Ok(())
    }

    fn write_error(&mut self, text: &str) -> Result<(), Error> {
        self.write_line(&display::error(text))
    }
}
