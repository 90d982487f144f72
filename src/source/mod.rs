//! Path fragment lookup.
//!
//! A [`PathFragmentSource`] answers "which route fragment is declared on this
//! type or method?". Sources return failures as values; the descriptor layer
//! decides how they are reported.

pub mod manifest;
pub mod static_source;

pub use manifest::*;
pub use static_source::*;

use crate::descriptor::HandlerMethod;
use std::fmt;
use thiserror::Error;

/// Element whose route fragment is being looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentTarget<'a> {
    /// The declaring type, by fully-qualified path
    Type(&'a str),
    /// The handler method itself
    Method(&'a HandlerMethod),
}

impl fmt::Display for FragmentTarget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentTarget::Type(owner) => f.write_str(owner),
            FragmentTarget::Method(method) => write!(f, "{method}"),
        }
    }
}

/// Failure while reading a route fragment from its source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("route attribute missing on {target}")]
    MissingAttribute { target: String },

    #[error("route metadata for {target} is not accessible: {reason}")]
    Inaccessible { target: String, reason: String },

    #[error("malformed route attribute on {target}: {reason}")]
    Malformed { target: String, reason: String },
}

/// Capability that reads the raw route fragment declared on a target.
///
/// `Ok(None)` means no fragment is declared.
pub trait PathFragmentSource: Send + Sync {
    fn lookup(&self, target: &FragmentTarget<'_>) -> Result<Option<String>, LookupError>;
}

impl<F> PathFragmentSource for F
where
    F: Fn(&FragmentTarget<'_>) -> Result<Option<String>, LookupError> + Send + Sync,
{
    fn lookup(&self, target: &FragmentTarget<'_>) -> Result<Option<String>, LookupError> {
        self(target)
    }
}
