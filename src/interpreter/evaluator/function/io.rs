use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        evaluator::{console::Console, core::EvalResult, utils::join_values},
        value::core::Value,
    },
};

/// Writes the arguments separated by spaces, then a line break.
///
/// Text is written without quotes. Returns `null`.
///
/// # Example
/// ```
/// use arrow_lang::{
///     ast::Position,
///     interpreter::{
///         evaluator::{console::BufferConsole, function::io::print},
///         value::core::Value,
///     },
/// };
///
/// let mut console = BufferConsole::new();
/// print(&mut console, &[Value::from("Total Sum:"), Value::Integer(60)], Position::new(1, 1)).unwrap();
///
/// assert_eq!(console.output(), "Total Sum: 60\n");
/// ```
pub fn print(console: &mut dyn Console, args: &[Value], position: Position) -> EvalResult<Value> {
    write(console, &format!("{}\n", join_values(args)), position)?;
    Ok(Value::Null)
}

/// Writes the arguments separated by spaces, without a line break.
pub fn output(console: &mut dyn Console, args: &[Value], position: Position) -> EvalResult<Value> {
    write(console, &join_values(args), position)?;
    Ok(Value::Null)
}

/// Writes the optional prompt, then reads one line.
///
/// Returns the line as text, or `null` once input is exhausted.
pub fn input(console: &mut dyn Console, args: &[Value], position: Position) -> EvalResult<Value> {
    if let Some(prompt) = args.first() {
        write(console, &prompt.to_string(), position)?;
    }

    let line = console.read_line()
                      .map_err(|source| RuntimeError::Io { source, position })?;
    Ok(line.map_or(Value::Null, Value::Text))
}

fn write(console: &mut dyn Console, text: &str, position: Position) -> EvalResult<()> {
    console.write(text)
           .map_err(|source| RuntimeError::Io { source, position })
}

#[cfg(test)]
mod tests {
    use std::io;

    use test_log::test;

    use super::*;
    use crate::interpreter::evaluator::console::BufferConsole;

    const AT: Position = Position::new(3, 7);

    struct BrokenConsole;

    impl Console for BrokenConsole {
        fn write(&mut self, _: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn read_line(&mut self) -> io::Result<Option<String>> {
            Ok(None)
        }
    }

    #[test]
    fn input_prompts_then_reads() {
        let mut console = BufferConsole::with_input(["Ada"]);

        let name = input(&mut console, &[Value::from("Name: ")], AT).unwrap();
        let eof = input(&mut console, &[], AT).unwrap();

        assert_eq!(name, Value::from("Ada"));
        assert_eq!(eof, Value::Null);
        assert_eq!(console.output(), "Name: ");
    }

    #[test]
    fn output_has_no_line_break() {
        let mut console = BufferConsole::new();
        output(&mut console, &[Value::Integer(1), Value::Null], AT).unwrap();
        output(&mut console, &[], AT).unwrap();

        assert_eq!(console.output(), "1 null");
    }

    #[test]
    fn write_failures_carry_the_call_position() {
        let err = print(&mut BrokenConsole, &[Value::Integer(1)], AT).unwrap_err();
        assert!(matches!(err, RuntimeError::Io { position: AT, .. }));
    }
}
