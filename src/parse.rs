use std::path::PathBuf;

use crate::errors::BenchError;
use crate::types::{CommandSpec, Precision, RunConfig};

/// Coarse pre-check, not a grammar check: the shortest conceivable
/// invocation needs at least this many tokens.
const MIN_TOKENS: usize = 5;

/// Sentinel meaning "no working directory change" / "no arguments".
const PLACEHOLDER: &str = ".";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    ExpectIterations,
    CollectingCommands,
    CollectingDirs,
    CollectingArgs,
}

impl State {
    fn is_collecting(self) -> bool {
        matches!(
            self,
            State::CollectingCommands | State::CollectingDirs | State::CollectingArgs
        )
    }
}

/// Parse the raw token list (program name excluded) into a `RunConfig`.
///
/// Value lists are greedy: a token belongs to the current list unless it
/// starts with `-`, so a command or directory value that itself begins
/// with `-` cannot be expressed. `--args` values must be wrapped in
/// literal double quotes; the first non-quoted token ends that list.
/// Unrecognized tokens outside a value list are skipped.
pub fn parse_args(tokens: &[String]) -> Result<RunConfig, BenchError> {
    if tokens.len() < MIN_TOKENS {
        return Err(BenchError::NotEnoughArguments);
    }

    let mut iterations: Option<u32> = None;
    let mut precision = Precision::Millis;
    let mut commands: Vec<String> = Vec::new();
    let mut directories: Vec<String> = Vec::new();
    let mut arguments: Vec<String> = Vec::new();

    let mut state = State::Start;
    for token in tokens {
        // A flag token ends any value list and is dispatched itself.
        if state.is_collecting() && token.starts_with('-') {
            state = State::Start;
        }

        state = match state {
            State::Start => match token.as_str() {
                "--iterations" | "-i" => State::ExpectIterations,
                "--commands" => State::CollectingCommands,
                "--wdirectories" => State::CollectingDirs,
                "--args" => State::CollectingArgs,
                "--precise" => {
                    precision = Precision::Fractional;
                    State::Start
                }
                _ => State::Start,
            },
            State::ExpectIterations => {
                iterations = Some(parse_iterations(token)?);
                State::Start
            }
            State::CollectingCommands => {
                commands.push(token.clone());
                State::CollectingCommands
            }
            State::CollectingDirs => {
                directories.push(token.clone());
                State::CollectingDirs
            }
            State::CollectingArgs => match unquote(token) {
                Some(inner) => {
                    arguments.push(inner);
                    State::CollectingArgs
                }
                // First non-quoted token ends the list; the token itself
                // is skipped like any other stray token.
                None => State::Start,
            },
        };
    }

    let iterations = iterations.ok_or(BenchError::MissingIterations)?;

    if commands.is_empty() {
        return Err(BenchError::NoCommands);
    }
    if directories.len() != commands.len() {
        return Err(BenchError::DirectoryCountMismatch {
            commands: commands.len(),
            directories: directories.len(),
        });
    }
    if arguments.len() > commands.len() {
        return Err(BenchError::ArgumentCountMismatch {
            commands: commands.len(),
            arguments: arguments.len(),
        });
    }

    let commands = commands
        .into_iter()
        .enumerate()
        .map(|(index, program)| CommandSpec {
            program,
            working_dir: non_placeholder(&directories[index]).map(PathBuf::from),
            extra_args: arguments.get(index).and_then(|args| non_placeholder(args)),
        })
        .collect();

    Ok(RunConfig {
        iterations,
        precision,
        commands,
    })
}

/// Digit-only validation, then range validation: the count must fit in a
/// `u32` and be at least 1.
fn parse_iterations(token: &str) -> Result<u32, BenchError> {
    let invalid = || BenchError::InvalidIterations {
        value: token.to_string(),
    };

    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let value: u32 = token.parse().map_err(|_| invalid())?;
    if value == 0 {
        return Err(invalid());
    }
    Ok(value)
}

/// Accepts a token only if it carries a leading literal double quote,
/// stripping the surrounding quotes.
fn unquote(token: &str) -> Option<String> {
    let inner = token.strip_prefix('"')?;
    Some(inner.strip_suffix('"').unwrap_or(inner).to_string())
}

fn non_placeholder(value: &str) -> Option<String> {
    if value == PLACEHOLDER {
        None
    } else {
        Some(value.to_string())
    }
}
