#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    #[error("Not enough arguments")]
    NotEnoughArguments,

    #[error("Invalid iteration count '{value}': expected a positive decimal integer")]
    InvalidIterations { value: String },

    #[error("Missing iteration count. Pass --iterations N or -i N")]
    MissingIterations,

    #[error("Expected one working directory per command (got {commands} commands, {directories} directories)")]
    DirectoryCountMismatch { commands: usize, directories: usize },

    #[error("More argument strings ({arguments}) than commands ({commands})")]
    ArgumentCountMismatch { commands: usize, arguments: usize },

    #[error("No commands to benchmark")]
    NoCommands,

    #[error("Failed to launch shell for command '{command}': {source}")]
    ShellSpawn {
        command: String,
        source: std::io::Error,
    },
}

impl BenchError {
    /// Usage errors get the help text on stdout; everything else is a
    /// runtime failure reported on stderr.
    pub fn is_usage(&self) -> bool {
        !matches!(self, BenchError::ShellSpawn { .. })
    }
}
