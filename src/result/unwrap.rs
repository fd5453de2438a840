//! Extracting the success payload

use std::fmt;

use super::{RemoteResult, State};
use crate::error::RemoteResultError;

type StateHandler<'a, E> = Box<dyn FnOnce() -> E + 'a>;
type FailureHandler<'a, F, E> = Box<dyn FnOnce(F) -> E + 'a>;

/// Per-state error factories for [`RemoteResult::unwrap_or_raise`]
///
/// A state without a handler falls back to
/// [`RemoteResultError::NotSuccess`], converted into `E`.
///
/// ```
/// use remote_result::{RemoteResult, RemoteResultError, UnwrapHandlers};
///
/// #[derive(Debug, PartialEq)]
/// enum FetchError {
///     StillLoading,
///     Other(String),
/// }
///
/// impl From<RemoteResultError> for FetchError {
///     fn from(err: RemoteResultError) -> Self {
///         FetchError::Other(err.to_string())
///     }
/// }
///
/// let loading: RemoteResult<String, u32> = RemoteResult::pending();
/// let handlers = UnwrapHandlers::new().on_pending(|| FetchError::StillLoading);
/// assert_eq!(loading.unwrap_or_raise(handlers), Err(FetchError::StillLoading));
/// ```
pub struct UnwrapHandlers<'a, F, E> {
    initial: Option<StateHandler<'a, E>>,
    pending: Option<StateHandler<'a, E>>,
    failure: Option<FailureHandler<'a, F, E>>,
}

impl<'a, F, E> UnwrapHandlers<'a, F, E> {
    pub fn new() -> Self {
        Self {
            initial: None,
            pending: None,
            failure: None,
        }
    }

    pub fn on_initial(mut self, handler: impl FnOnce() -> E + 'a) -> Self {
        self.initial = Some(Box::new(handler));
        self
    }

    pub fn on_pending(mut self, handler: impl FnOnce() -> E + 'a) -> Self {
        self.pending = Some(Box::new(handler));
        self
    }

    pub fn on_failure(mut self, handler: impl FnOnce(F) -> E + 'a) -> Self {
        self.failure = Some(Box::new(handler));
        self
    }
}

impl<F, E> Default for UnwrapHandlers<'_, F, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, E> fmt::Debug for UnwrapHandlers<'_, F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnwrapHandlers")
            .field("initial", &self.initial.is_some())
            .field("pending", &self.pending.is_some())
            .field("failure", &self.failure.is_some())
            .finish()
    }
}

impl<F, S> RemoteResult<F, S> {
    /// Returns the success payload
    ///
    /// # Panics
    ///
    /// Panics if the result is not a success. Use
    /// [`RemoteResult::try_unwrap`] or [`RemoteResult::unwrap_or_raise`] to
    /// get an error instead.
    #[track_caller]
    pub fn unwrap(self) -> S
    where
        F: fmt::Debug,
    {
        match self {
            RemoteResult::Success(value) => value,
            RemoteResult::Failure(error) => {
                panic!("called `RemoteResult::unwrap()` on a `Failure` value: {:?}", error)
            }
            other => panic!(
                "called `RemoteResult::unwrap()` on a `{}` value",
                other.state()
            ),
        }
    }

    /// Returns the success payload
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the result is not a success.
    #[track_caller]
    pub fn expect(self, msg: &str) -> S
    where
        F: fmt::Debug,
    {
        match self {
            RemoteResult::Success(value) => value,
            RemoteResult::Failure(error) => panic!("{}: {:?}", msg, error),
            other => panic!("{}: {}", msg, other.state()),
        }
    }

    /// Returns the success payload, or the generic "not in Success state" error
    pub fn try_unwrap(self) -> Result<S, RemoteResultError> {
        match self {
            RemoteResult::Success(value) => Ok(value),
            other => Err(RemoteResultError::not_success(other.state())),
        }
    }

    /// Returns the success payload, or the error built by the handler for the
    /// current state
    pub fn unwrap_or_raise<E>(self, handlers: UnwrapHandlers<'_, F, E>) -> Result<S, E>
    where
        E: From<RemoteResultError>,
    {
        let UnwrapHandlers {
            initial,
            pending,
            failure,
        } = handlers;

        match self {
            RemoteResult::Success(value) => Ok(value),
            RemoteResult::Initial => Err(raise(State::Initial, initial)),
            RemoteResult::Pending => Err(raise(State::Pending, pending)),
            RemoteResult::Failure(error) => match failure {
                Some(handler) => Err(handler(error)),
                None => Err(fallback(State::Failure)),
            },
        }
    }

    /// Returns the success payload or `default`
    pub fn unwrap_or(self, default: S) -> S {
        match self {
            RemoteResult::Success(value) => value,
            _ => default,
        }
    }

    /// Returns the success payload or `S::default()`
    pub fn unwrap_or_default(self) -> S
    where
        S: Default,
    {
        match self {
            RemoteResult::Success(value) => value,
            _ => S::default(),
        }
    }

    /// Returns the success payload, or computes one from the failure payload
    ///
    /// `Initial` and `Pending` have no failure payload to hand to `f`, so they
    /// are rejected with [`RemoteResultError::ContractViolation`].
    ///
    /// ```
    /// use remote_result::RemoteResult;
    ///
    /// let r: RemoteResult<String, usize> = RemoteResult::failure("oops".into());
    /// assert_eq!(r.unwrap_or_else(|e| e.len()), Ok(4));
    ///
    /// let r: RemoteResult<String, usize> = RemoteResult::pending();
    /// assert!(r.unwrap_or_else(|e| e.len()).is_err());
    /// ```
    pub fn unwrap_or_else<O>(self, f: O) -> Result<S, RemoteResultError>
    where
        O: FnOnce(F) -> S,
    {
        match self {
            RemoteResult::Success(value) => Ok(value),
            RemoteResult::Failure(error) => Ok(f(error)),
            other => Err(RemoteResultError::contract_violation(
                "unwrap_or_else",
                other.state(),
            )),
        }
    }
}

fn raise<E>(state: State, handler: Option<StateHandler<'_, E>>) -> E
where
    E: From<RemoteResultError>,
{
    match handler {
        Some(handler) => handler(),
        None => fallback(state),
    }
}

fn fallback<E>(state: State) -> E
where
    E: From<RemoteResultError>,
{
    tracing::trace!("No unwrap handler for {} state, using generic error", state);
    RemoteResultError::not_success(state).into()
}
