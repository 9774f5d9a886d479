//! The sole channel through which an assembly failure or warning reaches the
//! user: every phase hands its diagnostics here instead of printing
//! directly, so the line format stays in one place.

use std::fmt;

/// The pipeline stage a diagnostic was raised from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Preprocessor,
    Parse,
    FirstPass,
    SecondPass,
    Io,
}

/// Whether a diagnostic blocks output or is merely informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Preprocessor => "preprocessor",
            Phase::Parse => "parse",
            Phase::FirstPass => "first-pass",
            Phase::SecondPass => "second-pass",
            Phase::Io => "io",
        };
        f.write_str(s)
    }
}

/// One reportable failure, attributed to a file and, where available, a
/// source line number.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub phase: Phase,
    pub file: String,
    pub line: Option<usize>,
    pub message: String,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn new(phase: Phase, file: impl Into<String>, line: Option<usize>, message: impl Into<String>) -> Self {
        Diagnostic {
            phase,
            file: file.into(),
            line,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// A diagnostic that does not, by itself, block output.
    pub fn warning(phase: Phase, file: impl Into<String>, line: Option<usize>, message: impl Into<String>) -> Self {
        Diagnostic {
            phase,
            file: file.into(),
            line,
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Warning => "warning: ",
            Severity::Error => "",
        };
        match self.line {
            Some(line) => write!(f, "[{}][{}:{}] {tag}{}", self.phase, self.file, line, self.message),
            None => write!(f, "[{}][{}] {tag}{}", self.phase, self.file, self.message),
        }
    }
}

/// Writes one line per diagnostic to stderr, in order.
pub fn report(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{diagnostic}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_line() {
        let d = Diagnostic::new(Phase::Parse, "prog.as", Some(7), "bad syntax");
        assert_eq!(format!("{d}"), "[parse][prog.as:7] bad syntax");
    }

    #[test]
    fn formats_without_line() {
        let d = Diagnostic::new(Phase::Io, "prog.as", None, "file not found");
        assert_eq!(format!("{d}"), "[io][prog.as] file not found");
    }

    #[test]
    fn warning_carries_a_tag() {
        let d = Diagnostic::warning(Phase::FirstPass, "prog.as", Some(3), "label discarded");
        assert_eq!(format!("{d}"), "[first-pass][prog.as:3] warning: label discarded");
    }
}
