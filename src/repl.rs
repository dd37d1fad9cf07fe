use std::io::{self, BufRead, Write};

use log::debug;

use crate::{interpreter::value::Environment, run};

/// Printed before every line the shell reads.
pub const PROMPT: &str = ">> ";

/// Typing this line ends the session.
pub const EXIT_COMMAND: &str = "exit";

/// Runs an interactive session reading from `input` and writing to `output`.
///
/// Every line is run as a program against one environment that lives for the
/// whole session, so bindings carry over from line to line. After each line
/// the shell writes either the resulting value or the error; an error never
/// ends the session. Blank lines are skipped.
///
/// The session ends on the line `exit` or at the end of `input`.
///
/// # Errors
/// Only I/O errors of `input` or `output` are returned.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use mandrill::repl;
///
/// let mut output = Vec::new();
/// repl::start(Cursor::new("var x = 2;\nx * 21\n"), &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), ">> 2\n>> 42\n>> ");
/// ```
pub fn start<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let env = Environment::global();
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim_end_matches('\r');

        if line == EXIT_COMMAND {
            debug!("shell session ended by '{EXIT_COMMAND}'");
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        match run(line, &env) {
            Ok(value) => writeln!(output, "{value}")?,
            Err(e) => writeln!(output, "{e}")?,
        }
    }

    debug!("shell session ended at end of input");
    Ok(())
}
