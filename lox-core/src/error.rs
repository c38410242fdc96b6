/// Records diagnostics reported by the pipeline stages.
///
/// Stages only ever record through this trait; deciding what to do once
/// diagnostics exist (abort, change the exit code, ...) is the driver's call.
pub trait ErrorReporter {
    /// Records a diagnostic at the given 1-based source line, with a location
    /// qualifier (eg. ` at 'foo'`), which may be empty.
    fn error_at(&mut self, line: usize, location: &str, message: &str);

    /// Records a diagnostic at the given 1-based source line.
    fn error(&mut self, line: usize, message: &str) {
        self.error_at(line, "", message);
    }

    /// Whether any diagnostic has been recorded so far.
    fn had_error(&self) -> bool;
}

/// A reporter that prints diagnostics to the standard error stream.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    had_error: bool,
}

impl ConsoleReporter {
    /// Creates a reporter with no recorded diagnostics.
    pub fn new() -> ConsoleReporter {
        ConsoleReporter { had_error: false }
    }
}

impl ErrorReporter for ConsoleReporter {
    fn error_at(&mut self, line: usize, location: &str, message: &str) {
        eprintln!("[line {}] Error{}: {}", line, location, message);
        self.had_error = true;
    }

    fn had_error(&self) -> bool {
        self.had_error
    }
}

/// A single recorded diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// The 1-based source line the diagnostic refers to.
    pub line: usize,
    /// The location qualifier, possibly empty.
    pub location: String,
    /// The human-readable message.
    pub message: String,
}

/// A reporter that retains diagnostics in memory, in the order they were
/// recorded. Useful for tests and for tools that post-process diagnostics.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    /// The recorded diagnostics, oldest first.
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingReporter {
    /// Creates a reporter with no recorded diagnostics.
    pub fn new() -> CollectingReporter {
        CollectingReporter {
            diagnostics: Vec::new(),
        }
    }
}

impl ErrorReporter for CollectingReporter {
    fn error_at(&mut self, line: usize, location: &str, message: &str) {
        self.diagnostics.push(Diagnostic {
            line,
            location: location.to_string(),
            message: message.to_string(),
        });
    }

    fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
