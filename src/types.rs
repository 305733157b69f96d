use std::path::PathBuf;

/// Fully validated benchmark run, built once from the command line and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub iterations: u32,
    pub precision: Precision,
    pub commands: Vec<CommandSpec>,
}

/// Launch configuration for one benchmarked command. The `.` placeholders
/// of the CLI grammar are already resolved to `None` here: no directory
/// change, no extra arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSpec {
    pub program: String,
    pub working_dir: Option<PathBuf>,
    pub extra_args: Option<String>,
}

impl CommandSpec {
    /// The line handed to the shell: the command string plus the optional
    /// argument string.
    pub fn shell_line(&self) -> String {
        match &self.extra_args {
            Some(args) => format!("{} {}", self.program, args),
            None => self.program.clone(),
        }
    }
}

/// How statistics are computed and reported. `Millis` keeps integer
/// arithmetic over whole milliseconds end to end; `Fractional` computes
/// the same aggregates in floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Millis,
    Fractional,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(program: &str, extra_args: Option<&str>) -> CommandSpec {
        CommandSpec {
            program: program.to_string(),
            working_dir: None,
            extra_args: extra_args.map(|s| s.to_string()),
        }
    }

    #[test]
    fn shell_line_without_args() {
        assert_eq!(spec("ls", None).shell_line(), "ls");
    }

    #[test]
    fn shell_line_appends_argument_string() {
        assert_eq!(spec("grep", Some("-r needle .")).shell_line(), "grep -r needle .");
    }

    #[test]
    fn shell_line_keeps_program_with_spaces_intact() {
        // The program field is an opaque shell fragment, not a single word.
        assert_eq!(spec("du -sh", Some("/tmp")).shell_line(), "du -sh /tmp");
    }
}
