//! The four-state result value
//!
//! `RemoteResult<F, S>` models the whole lifecycle of a deferred computation
//! (a network fetch, a background job) as one immutable value:
//!
//! - `Initial` - the computation has not been requested yet
//! - `Pending` - the computation is in flight
//! - `Success(S)` - the computation finished with a value
//! - `Failure(F)` - the computation finished with an error
//!
//! Every combinator consumes the value and returns a new one. Combinators never
//! fail because of the state they are given: states they do not act on pass
//! through unchanged.
//!
//! # Example
//!
//! ```
//! use remote_result::RemoteResult;
//!
//! let loaded: RemoteResult<String, u32> = RemoteResult::success(20);
//! let doubled = loaded.map(|n| n * 2);
//! assert_eq!(doubled, RemoteResult::success(40));
//!
//! let loading: RemoteResult<String, u32> = RemoteResult::pending();
//! assert!(loading.map(|n| n * 2).is_pending());
//! ```

use std::fmt;

mod async_ops;
mod combinators;
mod convert;
mod unwrap;


pub use combinators::chain_fn;
pub use unwrap::UnwrapHandlers;

/// Discriminant of a [`RemoteResult`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Not requested yet
    Initial,
    /// In flight
    Pending,
    /// Finished with a value
    Success,
    /// Finished with an error
    Failure,
}

impl State {
    /// All states, in declaration order
    pub const ALL: [State; 4] = [State::Initial, State::Pending, State::Success, State::Failure];

    pub const fn name(self) -> &'static str {
        match self {
            State::Initial => "Initial",
            State::Pending => "Pending",
            State::Success => "Success",
            State::Failure => "Failure",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A result extended with the two states that precede completion
///
/// `F` is the failure payload, `S` the success payload. `Initial` and `Pending`
/// carry nothing, so every `Initial` (and every `Pending`) is interchangeable
/// with any other; there is no shared instance to initialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteResult<F, S> {
    /// Not requested yet
    Initial,
    /// In flight
    Pending,
    /// Finished with a value
    Success(S),
    /// Finished with an error
    Failure(F),
}

impl<F, S> Default for RemoteResult<F, S> {
    fn default() -> Self {
        RemoteResult::Initial
    }
}

impl<F, S> RemoteResult<F, S> {
    // ========== Constructors ==========

    /// The "not requested yet" value
    pub const fn initial() -> Self {
        RemoteResult::Initial
    }

    /// The "in flight" value
    pub const fn pending() -> Self {
        RemoteResult::Pending
    }

    pub const fn success(value: S) -> Self {
        RemoteResult::Success(value)
    }

    pub const fn failure(error: F) -> Self {
        RemoteResult::Failure(error)
    }

    /// Alias of [`RemoteResult::success`]
    pub const fn from_value(value: S) -> Self {
        RemoteResult::Success(value)
    }

    // ========== Predicates ==========

    pub const fn state(&self) -> State {
        match self {
            RemoteResult::Initial => State::Initial,
            RemoteResult::Pending => State::Pending,
            RemoteResult::Success(_) => State::Success,
            RemoteResult::Failure(_) => State::Failure,
        }
    }

    pub const fn is_initial(&self) -> bool {
        matches!(self, RemoteResult::Initial)
    }

    pub const fn is_pending(&self) -> bool {
        matches!(self, RemoteResult::Pending)
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, RemoteResult::Success(_))
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, RemoteResult::Failure(_))
    }

    // ========== Borrowing accessors ==========

    /// Converts from `&RemoteResult<F, S>` to `RemoteResult<&F, &S>`
    pub const fn as_ref(&self) -> RemoteResult<&F, &S> {
        match self {
            RemoteResult::Initial => RemoteResult::Initial,
            RemoteResult::Pending => RemoteResult::Pending,
            RemoteResult::Success(value) => RemoteResult::Success(value),
            RemoteResult::Failure(error) => RemoteResult::Failure(error),
        }
    }

    pub const fn success_ref(&self) -> Option<&S> {
        match self {
            RemoteResult::Success(value) => Some(value),
            _ => None,
        }
    }

    pub const fn failure_ref(&self) -> Option<&F> {
        match self {
            RemoteResult::Failure(error) => Some(error),
            _ => None,
        }
    }

    /// Returns the failure payload, if any, consuming self
    pub fn into_failure(self) -> Option<F> {
        match self {
            RemoteResult::Failure(error) => Some(error),
            _ => None,
        }
    }
}

impl<F: fmt::Display, S: fmt::Display> fmt::Display for RemoteResult<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteResult::Initial => f.write_str("Initial"),
            RemoteResult::Pending => f.write_str("Pending"),
            RemoteResult::Success(value) => write!(f, "Success({})", value),
            RemoteResult::Failure(error) => write!(f, "Failure({})", error),
        }
    }
}

/// Type-level access to the payload types of a result
///
/// ```
/// use remote_result::{FailureOf, RemoteResult, SuccessOf};
///
/// type Fetch = RemoteResult<String, Vec<u8>>;
/// let bytes: SuccessOf<Fetch> = vec![1, 2, 3];
/// let error: FailureOf<Fetch> = "timeout".to_string();
/// # let _ = (bytes, error);
/// ```
pub trait ResultTypes {
    type Success;
    type Failure;
}

impl<F, S> ResultTypes for RemoteResult<F, S> {
    type Success = S;
    type Failure = F;
}

/// The success payload type of a result type
pub type SuccessOf<R> = <R as ResultTypes>::Success;

/// The failure payload type of a result type
pub type FailureOf<R> = <R as ResultTypes>::Failure;
