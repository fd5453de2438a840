//! Conversions to and from `Option` and `std::result::Result`
//!
//! `Option<S>` plays the optional-value role (present / absent) and
//! `std::result::Result<S, F>` the two-state result role (`Ok` is the right
//! side, `Err` the left side).

use std::panic::{self, UnwindSafe};

use super::RemoteResult;
use crate::error::PanicError;

impl<F, S> RemoteResult<F, S> {
    /// `Success(v)` for `Some(v)`, `Initial` for `None`
    pub fn from_nullable(value: Option<S>) -> Self {
        match value {
            Some(value) => RemoteResult::Success(value),
            None => RemoteResult::Initial,
        }
    }

    /// Same mapping as [`RemoteResult::from_nullable`]
    pub fn from_maybe(value: Option<S>) -> Self {
        Self::from_nullable(value)
    }

    /// `Success` for `Ok`, `Failure` for `Err`
    pub fn from_either(value: Result<S, F>) -> Self {
        match value {
            Ok(value) => RemoteResult::Success(value),
            Err(error) => RemoteResult::Failure(error),
        }
    }

    /// Runs a fallible computation and records its outcome
    ///
    /// ```
    /// use remote_result::RemoteResult;
    ///
    /// let port = RemoteResult::from_try(|| "8080".parse::<u16>());
    /// assert_eq!(port.unwrap_or(0), 8080);
    ///
    /// let port = RemoteResult::from_try(|| "http".parse::<u16>());
    /// assert!(port.is_failure());
    /// ```
    pub fn from_try<T>(f: T) -> Self
    where
        T: FnOnce() -> Result<S, F>,
    {
        Self::from_either(f())
    }

    /// Converts into a two-state result
    ///
    /// `Initial` and `Pending` have no error of their own, so one is built by
    /// the matching factory.
    pub fn to_either<OI, OP>(self, on_initial: OI, on_pending: OP) -> Result<S, F>
    where
        OI: FnOnce() -> F,
        OP: FnOnce() -> F,
    {
        match self {
            RemoteResult::Success(value) => Ok(value),
            RemoteResult::Failure(error) => Err(error),
            RemoteResult::Initial => Err(on_initial()),
            RemoteResult::Pending => Err(on_pending()),
        }
    }

    /// `Some` for a success, `None` for every other state
    pub fn to_maybe(self) -> Option<S> {
        match self {
            RemoteResult::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Alias of [`RemoteResult::to_maybe`]
    ///
    /// Consumes the result and hands back the owned payload. Use
    /// [`RemoteResult::to_nullable`] to peek without giving the result up.
    pub fn to_undefined(self) -> Option<S> {
        self.to_maybe()
    }

    /// Borrowing form of [`RemoteResult::to_maybe`]
    ///
    /// Unlike [`RemoteResult::to_undefined`] this leaves the result usable,
    /// so the payload comes back as a reference.
    ///
    /// ```
    /// use remote_result::RemoteResult;
    ///
    /// let r: RemoteResult<String, Vec<u8>> = RemoteResult::success(vec![1, 2]);
    /// assert_eq!(r.to_nullable().map(Vec::len), Some(2));
    /// assert_eq!(r.to_undefined(), Some(vec![1, 2]));
    /// ```
    pub fn to_nullable(&self) -> Option<&S> {
        self.success_ref()
    }
}

impl<S> RemoteResult<PanicError, S> {
    /// Runs `f`, recording a panic as a failure
    ///
    /// The panic still reaches the installed panic hook (and is printed by the
    /// default one); only the unwinding stops here.
    pub fn from_catch_unwind<T>(f: T) -> Self
    where
        T: FnOnce() -> S + UnwindSafe,
    {
        match panic::catch_unwind(f) {
            Ok(value) => RemoteResult::Success(value),
            Err(payload) => {
                let error = PanicError::from_payload(payload);
                tracing::debug!("Caught panic in wrapped computation: {}", error.message);
                RemoteResult::Failure(error)
            }
        }
    }
}

impl<F, S> From<Option<S>> for RemoteResult<F, S> {
    fn from(value: Option<S>) -> Self {
        RemoteResult::from_nullable(value)
    }
}

impl<F, S> From<Result<S, F>> for RemoteResult<F, S> {
    fn from(value: Result<S, F>) -> Self {
        RemoteResult::from_either(value)
    }
}

impl<F, S> From<RemoteResult<F, S>> for Option<S> {
    fn from(value: RemoteResult<F, S>) -> Self {
        value.to_maybe()
    }
}
