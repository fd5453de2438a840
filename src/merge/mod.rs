//! Merging sequences of results
//!
//! Every merge scans its input strictly left to right, so the payload order
//! and the "first failure" are fixed by the input order.
//!
//! The default precedence is `Initial > Pending > Failure > Success`:
//! a single `Initial` anywhere makes the whole merge `Initial`, otherwise a
//! single `Pending` makes it `Pending`, otherwise the first failure wins, and
//! only a sequence of successes merges into `Success(payloads)`.
//!
//! # Example
//!
//! ```
//! use remote_result::merge::merge;
//! use remote_result::RemoteResult;
//!
//! let all: Vec<RemoteResult<&str, u8>> = vec![RemoteResult::success(1), RemoteResult::success(2)];
//! assert_eq!(merge(all), RemoteResult::success(vec![1, 2]));
//!
//! let some: Vec<RemoteResult<&str, u8>> = vec![
//!     RemoteResult::success(1),
//!     RemoteResult::failure("e"),
//!     RemoteResult::pending(),
//! ];
//! assert!(merge(some).is_pending());
//! ```

use tracing::debug;

use crate::RemoteResult;

pub mod config;

pub use config::{MergeConfig, MergePriority};

/// Combines two results under the default precedence, `a` first
fn pair<F, A, B>(a: RemoteResult<F, A>, b: RemoteResult<F, B>) -> RemoteResult<F, (A, B)> {
    match (a, b) {
        (RemoteResult::Initial, _) | (_, RemoteResult::Initial) => RemoteResult::Initial,
        (RemoteResult::Pending, _) | (_, RemoteResult::Pending) => RemoteResult::Pending,
        (RemoteResult::Failure(error), _) | (_, RemoteResult::Failure(error)) => {
            RemoteResult::Failure(error)
        }
        (RemoteResult::Success(a), RemoteResult::Success(b)) => RemoteResult::Success((a, b)),
    }
}

/// Merges a sequence into one result holding every success payload
///
/// Under the default precedence; an empty sequence merges into
/// `Success(vec![])`.
pub fn merge_in_one<F, S, I>(values: I) -> RemoteResult<F, Vec<S>>
where
    I: IntoIterator<Item = RemoteResult<F, S>>,
{
    let mut merged = RemoteResult::Success(Vec::new());
    for value in values {
        merged = pair(merged, value).map(|(mut items, item)| {
            items.push(item);
            items
        });
        // Nothing outranks Initial
        if merged.is_initial() {
            break;
        }
    }

    debug!("Merged results into {}", merged.state());
    merged
}

/// Alias of [`merge_in_one`]
pub fn merge<F, S, I>(values: I) -> RemoteResult<F, Vec<S>>
where
    I: IntoIterator<Item = RemoteResult<F, S>>,
{
    merge_in_one(values)
}

/// Merges a sequence under a configurable precedence
///
/// With [`MergePriority::Pending`] this is [`merge_in_one`]. With
/// [`MergePriority::Failure`] the first failure anywhere in the sequence wins
/// before `Initial` and `Pending` are considered.
///
/// ```
/// use remote_result::merge::{merge_with_config, MergeConfig};
/// use remote_result::RemoteResult;
///
/// let values: Vec<RemoteResult<&str, u8>> = vec![
///     RemoteResult::success(1),
///     RemoteResult::failure("error"),
///     RemoteResult::initial(),
///     RemoteResult::pending(),
/// ];
///
/// assert!(merge_with_config(values.clone(), &MergeConfig::pending_first()).is_initial());
/// assert_eq!(
///     merge_with_config(values, &MergeConfig::failure_first()),
///     RemoteResult::failure("error")
/// );
/// ```
pub fn merge_with_config<F, S, I>(values: I, config: &MergeConfig) -> RemoteResult<F, Vec<S>>
where
    I: IntoIterator<Item = RemoteResult<F, S>>,
{
    let mut values: Vec<_> = values.into_iter().collect();

    if config.priority == MergePriority::Failure {
        if let Some(index) = values.iter().position(RemoteResult::is_failure) {
            if let RemoteResult::Failure(error) = values.swap_remove(index) {
                debug!("Failure found at position {}, taking priority", index);
                return RemoteResult::Failure(error);
            }
        }
    }

    merge_in_one(values)
}

/// Merges a sequence, collecting every failure payload
///
/// Precedence is `Initial > Pending > Failure > Success` as in
/// [`merge_in_one`], but a failing merge carries the errors of all failures,
/// in order, instead of only the first one.
///
/// ```
/// use remote_result::merge::merge_in_many;
/// use remote_result::RemoteResult;
///
/// let values: Vec<RemoteResult<&str, u8>> = vec![
///     RemoteResult::failure("a"),
///     RemoteResult::success(1),
///     RemoteResult::failure("b"),
/// ];
/// assert_eq!(merge_in_many(values), RemoteResult::failure(vec!["a", "b"]));
/// ```
pub fn merge_in_many<F, S, I>(values: I) -> RemoteResult<Vec<F>, Vec<S>>
where
    I: IntoIterator<Item = RemoteResult<F, S>>,
{
    let mut merged: RemoteResult<Vec<F>, Vec<S>> = RemoteResult::Success(Vec::new());
    for value in values {
        merged = match (merged, value) {
            (RemoteResult::Initial, _) | (_, RemoteResult::Initial) => RemoteResult::Initial,
            (RemoteResult::Pending, _) | (_, RemoteResult::Pending) => RemoteResult::Pending,
            (RemoteResult::Failure(mut errors), RemoteResult::Failure(error)) => {
                errors.push(error);
                RemoteResult::Failure(errors)
            }
            (RemoteResult::Failure(errors), RemoteResult::Success(_)) => {
                RemoteResult::Failure(errors)
            }
            (RemoteResult::Success(_), RemoteResult::Failure(error)) => {
                RemoteResult::Failure(vec![error])
            }
            (RemoteResult::Success(mut items), RemoteResult::Success(item)) => {
                items.push(item);
                RemoteResult::Success(items)
            }
        };
        if merged.is_initial() {
            break;
        }
    }

    debug!("Merged results into {}", merged.state());
    merged
}

/// Merges two results of different success types into a pair
pub fn merge2<F, A, B>(a: RemoteResult<F, A>, b: RemoteResult<F, B>) -> RemoteResult<F, (A, B)> {
    pair(a, b)
}

/// Merges three results of different success types into a triple
pub fn merge3<F, A, B, C>(
    a: RemoteResult<F, A>,
    b: RemoteResult<F, B>,
    c: RemoteResult<F, C>,
) -> RemoteResult<F, (A, B, C)> {
    pair(pair(a, b), c).map(|((a, b), c)| (a, b, c))
}

/// Merges four results of different success types into a 4-tuple
pub fn merge4<F, A, B, C, D>(
    a: RemoteResult<F, A>,
    b: RemoteResult<F, B>,
    c: RemoteResult<F, C>,
    d: RemoteResult<F, D>,
) -> RemoteResult<F, (A, B, C, D)> {
    pair(pair(pair(a, b), c), d).map(|(((a, b), c), d)| (a, b, c, d))
}
