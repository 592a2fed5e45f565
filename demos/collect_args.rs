//! This program shows how to report every problem with the command line
//! at once, instead of stopping at the first one.
//!
//! It expects three options, each in the form of "--key=value" (1 argument)
//! or "--key value" (2 arguments):
//!     --name, --input, --output
//!
//! Try:
//!     cargo run --example collect_args -- --name demo --input=a --output b
//!     cargo run --example collect_args -- --name a --name b --bogus --input

use std::env;
use std::io::{self, Write};
use std::process::{ExitCode, Termination};

use multierror::AggregateError;

const OPTION_NAMES: [&str; 3] = ["--name", "--input", "--output"];

mod log {
    use std::fmt;

    // Treatment of newlines at the end:
    //     No newline -> Add a newline at the end.
    //     1 newline -> Do nothing.
    //     2 or more newlines -> Remove a newline.
    // Returns None if there is nothing to log.
    fn process_input(mut content: String) -> Option<String> {
        let mut chars = content.chars();
        match (chars.next_back(), chars.next_back()) {
            (None, _) => {
                return None;
            },
            (Some('\n'), Some('\n')) => {
                content.pop();
            },
            (Some('\n'), _) => {
            },
            (Some(_), _) => {
                content.push('\n');
            },
        }
        Some(content)
    }

    #[derive(Debug)]
    pub struct LogMessage(String);
    impl From<String> for LogMessage {
        fn from(contents: String) -> Self {
            LogMessage(contents)
        }
    }
    impl From<&str> for LogMessage {
        fn from(contents: &str) -> Self {
            LogMessage(contents.to_owned())
        }
    }
    impl From<fmt::Arguments<'_>> for LogMessage {
        fn from(contents: fmt::Arguments) -> Self {
            LogMessage(fmt::format(contents))
        }
    }

    /// Logs an info message to stdout.
    pub fn info<T: Into<LogMessage>>(message: T) {
        if let Some(contents) = process_input(message.into().0) {
            print!("{contents}");
        }
    }
    /// Same as [`info`], except logs to stderr.
    pub fn error<T: Into<LogMessage>>(message: T) {
        if let Some(contents) = process_input(message.into().0) {
            eprint!("{contents}");
        }
    }
}

#[derive(thiserror::Error, Debug)]
enum ArgError {
    #[error("no argument given for option {0}")]
    MissingValue(&'static str),
    #[error("cannot set option {0} multiple times")]
    Repeated(&'static str),
    #[error("unknown argument: {0}")]
    Unknown(String),
    #[error("no {0} option provided")]
    Missing(&'static str),
}

#[derive(Debug)]
struct Options {
    name: String,
    input: String,
    output: String,
}

/// Parses the command line arguments (without the program name).
/// Every problem found is returned, not just the first one.
fn parse_args(args: impl IntoIterator<Item = String>)
    -> Result<Options, AggregateError<ArgError>>
{
    let mut values: [Option<String>; 3] = Default::default();
    let mut errors = AggregateError::new();

    let mut args = args.into_iter();
    'args_loop: while let Some(arg) = args.next() {
        for (key_name, set_var) in OPTION_NAMES.into_iter().zip(values.iter_mut()) {
            let value = if arg == key_name {
                // "--option value"
                match args.next() {
                    Some(x) => x,
                    None => {
                        errors.push(ArgError::MissingValue(key_name));
                        break 'args_loop;
                    },
                }
            } else {
                // "--option=value"
                match arg.strip_prefix(key_name).and_then(|x| x.strip_prefix('=')) {
                    Some(x) => x.to_owned(),
                    None => continue,
                }
            };

            if set_var.is_some() {
                errors.push(ArgError::Repeated(key_name));
                continue 'args_loop;
            }
            *set_var = Some(value);
            continue 'args_loop;
        }

        errors.push(ArgError::Unknown(arg));
    }

    for (key_name, set_var) in OPTION_NAMES.into_iter().zip(values.iter()) {
        if set_var.is_none() {
            errors.push(ArgError::Missing(key_name));
        }
    }

    let [name, input, output] = match errors.resolve() {
        Some(errors) => return Err(errors),
        None => values.map(Option::unwrap_or_default),
    };
    Ok(Options { name, input, output })
}

struct MainReturn(Result<ExitCode, anyhow::Error>);
impl Termination for MainReturn {
    fn report(self) -> ExitCode {
        match self.0 {
            Ok(x) => x,
            Err(err) => {
                let _ = writeln!(io::stderr(), "Error: {err:?}");
                ExitCode::FAILURE
            },
        }
    }
}

fn run() -> Result<ExitCode, anyhow::Error> {
    match parse_args(env::args().skip(1)) {
        Ok(options) => {
            log::info(format_args!(
                "name: {}\ninput: {}\noutput: {}",
                options.name, options.input, options.output,
            ));
            Ok(ExitCode::SUCCESS)
        },
        Err(errors) => {
            // The alternate form lists every error on its own line.
            log::error(format_args!("{errors:#}"));
            Err(errors.into())
        },
    }
}

fn main() -> MainReturn {
    MainReturn(run())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn both_option_forms() {
        let options = parse_args(args(&["--name", "a", "--input=b", "--output", "c"])).unwrap();
        assert_eq!(options.name, "a");
        assert_eq!(options.input, "b");
        assert_eq!(options.output, "c");
    }

    #[test]
    fn collects_every_problem() {
        let errors = parse_args(args(&["--name", "a", "--name=b", "--bogus", "--input"]))
            .unwrap_err();
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        assert_eq!(messages, [
            "cannot set option --name multiple times",
            "unknown argument: --bogus",
            "no argument given for option --input",
            "no --input option provided",
            "no --output option provided",
        ]);
        assert_eq!(
            errors.to_string(),
            "cannot set option --name multiple times (and 4 other errors)",
        );
    }
}
