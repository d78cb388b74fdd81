use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

/// The sink and source behind `print`, `output` and `input`.
///
/// Writes are synchronous and happen in program order. A failed write or
/// read surfaces as a runtime I/O error at the call that caused it.
pub trait Console {
    /// Writes `text` exactly as given; line breaks are the caller's.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Reads one line without its terminator. `None` means end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<T: Console + ?Sized> Console for &mut T {
    fn write(&mut self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}

/// Console backed by the process's standard output and standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line_ending(line)))
    }
}

/// In-memory console: collects output in a string and serves input from a
/// queue of prepared lines.
///
/// # Example
/// ```
/// use arrow_lang::interpreter::evaluator::console::{BufferConsole, Console};
///
/// let mut console = BufferConsole::with_input(["Ada"]);
/// console.write("name? ").unwrap();
///
/// assert_eq!(console.read_line().unwrap(), Some("Ada".to_string()));
/// assert_eq!(console.read_line().unwrap(), None);
/// assert_eq!(console.output(), "name? ");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BufferConsole {
    output: String,
    input:  VecDeque<String>,
}

impl BufferConsole {
    /// Creates a console with no pending input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console that answers reads with `lines`, in order.
    pub fn with_input<I, S>(lines: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { output: String::new(),
               input:  lines.into_iter().map(Into::into).collect(), }
    }

    /// Everything written so far.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }
}

impl Console for BufferConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }
}

fn trim_line_ending(mut line: String) -> String {
    while line.ends_with(['\n', '\r']) {
        line.pop();
    }
    line
}
