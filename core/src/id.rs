//! Stable identifiers for measurable views.

use alloc::borrow::Cow;
use core::{fmt, panic::Location};

/// Identity of one measurable view.
///
/// Identifiers derived from a call site stay the same across re-renders of the
/// same logical view, which is what lets a selection survive layout passes.
/// They are not meant to be stable across builds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MeasureId {
    /// Source location of the `measurable()` call.
    Location {
        /// Source file.
        file: &'static str,
        /// Line within `file`.
        line: u32,
        /// Column within `line`.
        column: u32,
    },
    /// Caller-supplied name.
    Named(Cow<'static, str>),
}

impl MeasureId {
    /// Derives an identifier from the caller's source location.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Creates an identifier from an explicit name.
    #[must_use]
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Named(name.into())
    }
}

impl From<&'static Location<'static>> for MeasureId {
    fn from(location: &'static Location<'static>) -> Self {
        Self::Location {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl From<&'static str> for MeasureId {
    fn from(name: &'static str) -> Self {
        Self::named(name)
    }
}

impl From<alloc::string::String> for MeasureId {
    fn from(name: alloc::string::String) -> Self {
        Self::named(name)
    }
}

impl fmt::Display for MeasureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Location { file, line, column } => write!(f, "{file}:{line}:{column}"),
            Self::Named(name) => f.write_str(name),
        }
    }
}
