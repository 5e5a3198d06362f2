//! Error types for EAN collections.
//!
//! Uses `thiserror` for error definitions. Only the fail-fast operations
//! produce these; out-of-range reads and writes are silent and never
//! construct an error.

use std::fmt;

use thiserror::Error;

/// The main error type for collection operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        log::debug!("index {index} out of bounds for length {length}");
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Creates an invalid slice error (`start >= end`).
    #[must_use]
    pub fn invalid_slice(start: usize, end: usize) -> Self {
        log::debug!("invalid slice {start}..{end}");
        Self::new(ErrorKind::InvalidSlice { start, end })
    }

    /// Creates an empty sequence error for an operation that needs an element.
    #[must_use]
    pub fn empty_sequence(operation: &'static str) -> Self {
        log::debug!("{operation} called on an empty sequence");
        Self::new(ErrorKind::EmptySequence { operation })
    }

    /// Creates a non-numeric value error.
    #[must_use]
    pub fn not_numeric(index: usize, found: impl Into<String>) -> Self {
        let found = found.into();
        log::debug!("non-numeric value {found} at index {index}");
        Self::new(ErrorKind::NotNumeric { index, found })
    }

    /// Returns true if this error was caused by an empty sequence.
    #[must_use]
    pub const fn is_empty_sequence(&self) -> bool {
        matches!(self.kind, ErrorKind::EmptySequence { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Index past the end of the sequence on insertion.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The length of the sequence at the time.
        length: usize,
    },

    /// Slice bounds with `start >= end`.
    #[error("invalid slice: start {start} must be less than end {end}")]
    InvalidSlice {
        /// Inclusive start of the requested range.
        start: usize,
        /// Exclusive end of the requested range, after clamping.
        end: usize,
    },

    /// Operation requires at least one element.
    #[error("{operation} of an empty sequence")]
    EmptySequence {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },

    /// A selected value could not be treated as a number.
    #[error("value at index {index} is not numeric: {found}")]
    NotNumeric {
        /// Position of the offending element.
        index: usize,
        /// Rendering of the offending value.
        found: String,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the operation being performed.
    pub operation: Option<String>,
    /// Free-form notes, outermost last.
    pub notes: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Adds a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "in {operation}")?;
        }
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}
