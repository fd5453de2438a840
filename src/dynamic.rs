//! Run-time inspection of type-erased values
//!
//! Statically typed code never needs this module: the compiler already knows
//! whether a value is a `RemoteResult` and whether a payload is callable. It
//! exists for code that handles values as `dyn Any` (plugin boundaries,
//! heterogeneous registries) and has to find out at run time.

use std::any::{type_name, Any};

use tracing::trace;

use crate::error::RemoteResultError;
use crate::RemoteResult;

/// A type-erased payload
pub type DynPayload = Box<dyn Any>;

/// A type-erased unary function, stored inside a [`DynPayload`]
pub type DynFn<A, B> = Box<dyn FnOnce(A) -> B>;

/// Erases a plain value
pub fn dyn_value<T: 'static>(value: T) -> DynPayload {
    Box::new(value)
}

/// Erases a function so that [`apply_dyn`] can find it
pub fn dyn_fn<A, B>(f: impl FnOnce(A) -> B + 'static) -> DynPayload
where
    A: 'static,
    B: 'static,
{
    let f: DynFn<A, B> = Box::new(f);
    Box::new(f)
}

/// Returns true if `value` is a `RemoteResult<F, S>`
pub fn is_result<F: 'static, S: 'static>(value: &dyn Any) -> bool {
    value.is::<RemoteResult<F, S>>()
}

pub fn is_initial<F: 'static, S: 'static>(value: &dyn Any) -> bool {
    value
        .downcast_ref::<RemoteResult<F, S>>()
        .is_some_and(RemoteResult::is_initial)
}

pub fn is_pending<F: 'static, S: 'static>(value: &dyn Any) -> bool {
    value
        .downcast_ref::<RemoteResult<F, S>>()
        .is_some_and(RemoteResult::is_pending)
}

pub fn is_success<F: 'static, S: 'static>(value: &dyn Any) -> bool {
    value
        .downcast_ref::<RemoteResult<F, S>>()
        .is_some_and(RemoteResult::is_success)
}

pub fn is_failure<F: 'static, S: 'static>(value: &dyn Any) -> bool {
    value
        .downcast_ref::<RemoteResult<F, S>>()
        .is_some_and(RemoteResult::is_failure)
}

/// Applies whichever operand holds a [`DynFn<A, B>`] to the other one
///
/// A failure on either side wins, `lhs` first. Otherwise the left payload is
/// tried as the function, then the right one.
///
/// # Errors
///
/// - [`RemoteResultError::NotCallable`] if neither side holds a successful
///   `DynFn<A, B>`
/// - [`RemoteResultError::PayloadType`] if the argument side is a success
///   whose payload is not an `A`
///
/// ```
/// use remote_result::dynamic::{apply_dyn, dyn_fn, dyn_value};
/// use remote_result::RemoteResult;
///
/// let func: RemoteResult<String, _> = RemoteResult::success(dyn_fn(|n: i32| n * 3));
/// let arg = RemoteResult::success(dyn_value(5_i32));
///
/// // Operand order does not matter
/// let applied = apply_dyn::<_, i32, i32>(arg, func).unwrap();
/// assert_eq!(applied, RemoteResult::success(15));
/// ```
pub fn apply_dyn<F, A, B>(
    lhs: RemoteResult<F, DynPayload>,
    rhs: RemoteResult<F, DynPayload>,
) -> Result<RemoteResult<F, B>, RemoteResultError>
where
    A: 'static,
    B: 'static,
{
    let (lhs, rhs) = match (lhs, rhs) {
        (RemoteResult::Failure(error), _) | (_, RemoteResult::Failure(error)) => {
            return Ok(RemoteResult::Failure(error));
        }
        operands => operands,
    };

    let lhs = match lhs {
        RemoteResult::Success(payload) => match payload.downcast::<DynFn<A, B>>() {
            Ok(func) => {
                trace!("Left operand holds the function");
                return call(*func, rhs);
            }
            Err(payload) => RemoteResult::Success(payload),
        },
        other => other,
    };

    if let RemoteResult::Success(payload) = rhs {
        if let Ok(func) = payload.downcast::<DynFn<A, B>>() {
            trace!("Right operand holds the function");
            return call(*func, lhs);
        }
    }

    Err(RemoteResultError::not_callable())
}

fn call<F, A, B>(
    func: DynFn<A, B>,
    arg: RemoteResult<F, DynPayload>,
) -> Result<RemoteResult<F, B>, RemoteResultError>
where
    A: 'static,
{
    match arg {
        RemoteResult::Success(payload) => payload
            .downcast::<A>()
            .map(|value| RemoteResult::Success(func(*value)))
            .map_err(|_| RemoteResultError::payload_type(type_name::<A>())),
        RemoteResult::Initial => Ok(RemoteResult::Initial),
        RemoteResult::Pending => Ok(RemoteResult::Pending),
        RemoteResult::Failure(error) => Ok(RemoteResult::Failure(error)),
    }
}
