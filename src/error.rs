//! Error type for writing the cheat sheet.

/// Errors that can occur while printing.
#[derive(Debug)]
pub enum CheatError {
    IoError(std::io::Error),
}

impl CheatError {
    /// The reader went away (e.g. output piped into `head`).
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            CheatError::IoError(e) => e.kind() == std::io::ErrorKind::BrokenPipe,
        }
    }

    /// Process exit code: a closed pipe is a normal end of output.
    pub fn exit_code(&self) -> i32 {
        if self.is_broken_pipe() { 0 } else { 1 }
    }
}

impl std::fmt::Display for CheatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheatError::IoError(e) => write!(f, "IO error writing output: {}", e),
        }
    }
}

impl std::error::Error for CheatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheatError::IoError(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for CheatError {
    fn from(e: std::io::Error) -> Self {
        CheatError::IoError(e)
    }
}

pub type Result<T> = std::result::Result<T, CheatError>;
