use crate::Error;

/// Line-based, blocking console the engine reads from and writes to.
/// Implementations own all decoration; the engine only hands over text.
pub trait Console {
    /// Shows `prompt` and blocks until a full line is available.
    /// End of input is reported as [`Error::ConsoleClosed`].
    fn read_line(&mut self, prompt: &str) -> Result<String, Error>;

    fn write_line(&mut self, text: &str) -> Result<(), Error>;

    /// Recoverable problem the player should see, such as rejected input
    fn write_error(&mut self, text: &str) -> Result<(), Error> {
        self.write_line(text)
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self, prompt: &str) -> Result<String, Error> {
        (**self).read_line(prompt)
    }

    fn write_line(&mut self, text: &str) -> Result<(), Error> {
        (**self).write_line(text)
    }

    fn write_error(&mut self, text: &str) -> Result<(), Error> {
        (**self).write_error(text)
    }
}
