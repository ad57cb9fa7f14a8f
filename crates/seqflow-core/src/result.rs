//! Non-failing lookup results.
//!
//! Lookups return an explicit tag instead of a sentinel because any sentinel
//! value could also be a legitimate element.

use crate::error::{Error, Result};

/// Outcome of a First/Single style lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementResult<T> {
    Success(T),
    /// No element qualified.
    Empty,
    /// More than one element qualified where exactly one was required.
    NotSingle,
}

impl<T> ElementResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ElementResult::Success(_))
    }

    /// The element, dropping the distinction between `Empty` and `NotSingle`.
    pub fn ok(self) -> Option<T> {
        match self {
            ElementResult::Success(v) => Some(v),
            _ => None,
        }
    }

    /// Convert to the failing form: `Empty` -> `EmptySequence`,
    /// `NotSingle` -> `MultipleElements`.
    pub fn into_result(self) -> Result<T> {
        match self {
            ElementResult::Success(v) => Ok(v),
            ElementResult::Empty => Err(Error::EmptySequence),
            ElementResult::NotSingle => Err(Error::MultipleElements),
        }
    }

    /// Like `into_result` but an empty outcome yields `T::default()`.
    /// `NotSingle` still fails.
    pub fn or_default(self) -> Result<T>
    where
        T: Default,
    {
        match self {
            ElementResult::Success(v) => Ok(v),
            ElementResult::Empty => Ok(T::default()),
            ElementResult::NotSingle => Err(Error::MultipleElements),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ElementResult<U> {
        match self {
            ElementResult::Success(v) => ElementResult::Success(f(v)),
            ElementResult::Empty => ElementResult::Empty,
            ElementResult::NotSingle => ElementResult::NotSingle,
        }
    }
}

/// An element together with its position in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found<T> {
    pub index: usize,
    pub value: T,
}
