//! Per-value combinators
//!
//! Combinators act on the state they target and pass every other state
//! through untouched. Where two results are combined, the combined state
//! follows the precedence `Initial > Pending > Failure > Success`.

use super::RemoteResult;
use crate::merge::merge2;

impl<F, S> RemoteResult<F, S> {
    // ========== Transformation ==========

    /// Applies `f` to the success payload
    ///
    /// # Example
    ///
    /// ```
    /// use remote_result::RemoteResult;
    ///
    /// let r: RemoteResult<String, i32> = RemoteResult::success(2);
    /// assert_eq!(r.map(|n| n + 1), RemoteResult::success(3));
    ///
    /// let r: RemoteResult<String, i32> = RemoteResult::failure("down".into());
    /// assert_eq!(r.map(|n| n + 1), RemoteResult::failure("down".into()));
    /// ```
    pub fn map<T, M>(self, f: M) -> RemoteResult<F, T>
    where
        M: FnOnce(S) -> T,
    {
        match self {
            RemoteResult::Initial => RemoteResult::Initial,
            RemoteResult::Pending => RemoteResult::Pending,
            RemoteResult::Success(value) => RemoteResult::Success(f(value)),
            RemoteResult::Failure(error) => RemoteResult::Failure(error),
        }
    }

    /// Alias of [`RemoteResult::map`]
    pub fn map_success<T, M>(self, f: M) -> RemoteResult<F, T>
    where
        M: FnOnce(S) -> T,
    {
        self.map(f)
    }

    /// Applies `f` to the failure payload
    pub fn map_failure<G, M>(self, f: M) -> RemoteResult<G, S>
    where
        M: FnOnce(F) -> G,
    {
        match self {
            RemoteResult::Initial => RemoteResult::Initial,
            RemoteResult::Pending => RemoteResult::Pending,
            RemoteResult::Success(value) => RemoteResult::Success(value),
            RemoteResult::Failure(error) => RemoteResult::Failure(f(error)),
        }
    }

    /// Maps both payloads at once
    pub fn bimap<G, T, MF, MS>(self, on_failure: MF, on_success: MS) -> RemoteResult<G, T>
    where
        MF: FnOnce(F) -> G,
        MS: FnOnce(S) -> T,
    {
        match self {
            RemoteResult::Initial => RemoteResult::Initial,
            RemoteResult::Pending => RemoteResult::Pending,
            RemoteResult::Success(value) => RemoteResult::Success(on_success(value)),
            RemoteResult::Failure(error) => RemoteResult::Failure(on_failure(error)),
        }
    }

    /// Monadic bind
    ///
    /// `f` only runs on a success payload, so the inner result is only ever
    /// combined with a `Success`: it is returned as-is. Every other state
    /// wins over the inner result and is returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_result::RemoteResult;
    ///
    /// fn parse(s: &str) -> RemoteResult<String, i32> {
    ///     s.parse::<i32>().map_err(|_| format!("not a number: {}", s)).into()
    /// }
    ///
    /// let raw: RemoteResult<String, &str> = RemoteResult::success("42");
    /// assert_eq!(raw.chain(parse), RemoteResult::success(42));
    ///
    /// let raw: RemoteResult<String, &str> = RemoteResult::success("x");
    /// assert!(raw.chain(parse).is_failure());
    ///
    /// let raw: RemoteResult<String, &str> = RemoteResult::pending();
    /// assert!(raw.chain(parse).is_pending());
    /// ```
    pub fn chain<T, C>(self, f: C) -> RemoteResult<F, T>
    where
        C: FnOnce(S) -> RemoteResult<F, T>,
    {
        match self {
            RemoteResult::Initial => RemoteResult::Initial,
            RemoteResult::Pending => RemoteResult::Pending,
            RemoteResult::Failure(error) => RemoteResult::Failure(error),
            RemoteResult::Success(value) => f(value),
        }
    }

    /// Alias of [`RemoteResult::chain`]
    pub fn and_then<T, C>(self, f: C) -> RemoteResult<F, T>
    where
        C: FnOnce(S) -> RemoteResult<F, T>,
    {
        self.chain(f)
    }

    /// Alias of [`RemoteResult::chain`]
    pub fn filter_map<T, C>(self, f: C) -> RemoteResult<F, T>
    where
        C: FnOnce(S) -> RemoteResult<F, T>,
    {
        self.chain(f)
    }

    /// Turns a success rejected by `predicate` into a failure holding the value
    ///
    /// ```
    /// use remote_result::RemoteResult;
    ///
    /// let even = |n: &i32| n % 2 == 0;
    /// assert_eq!(RemoteResult::<i32, i32>::success(4).filter(even), RemoteResult::success(4));
    /// assert_eq!(RemoteResult::<i32, i32>::success(3).filter(even), RemoteResult::failure(3));
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&S) -> bool,
        F: From<S>,
    {
        self.filter_or(predicate, F::from)
    }

    /// Like [`RemoteResult::filter`], building the failure with `on_reject`
    pub fn filter_or<P, R>(self, predicate: P, on_reject: R) -> Self
    where
        P: FnOnce(&S) -> bool,
        R: FnOnce(S) -> F,
    {
        match self {
            RemoteResult::Success(value) => {
                if predicate(&value) {
                    RemoteResult::Success(value)
                } else {
                    RemoteResult::Failure(on_reject(value))
                }
            }
            other => other,
        }
    }

    // ========== Combination ==========

    /// Pairs two success payloads
    ///
    /// Both sides are inspected: an `Initial` on either side wins, then a
    /// `Pending`, then the first failure (`self` before `other`).
    ///
    /// ```
    /// use remote_result::RemoteResult;
    ///
    /// let loading: RemoteResult<String, u8> = RemoteResult::pending();
    /// let idle: RemoteResult<String, u8> = RemoteResult::initial();
    /// assert!(loading.zip(idle).is_initial());
    /// ```
    pub fn zip<T>(self, other: RemoteResult<F, T>) -> RemoteResult<F, (S, T)> {
        merge2(self, other)
    }

    /// Combines two success payloads with `f`
    ///
    /// States propagate as in [`RemoteResult::zip`].
    pub fn zip_with<T, R, Z>(self, other: RemoteResult<F, T>, f: Z) -> RemoteResult<F, R>
    where
        Z: FnOnce(S, T) -> R,
    {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    /// Returns self if it is a success, `other` otherwise
    pub fn or(self, other: Self) -> Self {
        match self {
            RemoteResult::Success(_) => self,
            _ => other,
        }
    }

    /// Lazy version of [`RemoteResult::or`]
    pub fn or_else<O>(self, other: O) -> Self
    where
        O: FnOnce() -> Self,
    {
        match self {
            RemoteResult::Success(_) => self,
            _ => other(),
        }
    }

    /// Applies a wrapped function held by `func` to this value
    ///
    /// The failure of `self` is checked before the failure of `func`.
    pub fn apply_to<B, G>(self, func: RemoteResult<F, G>) -> RemoteResult<F, B>
    where
        G: FnOnce(S) -> B,
    {
        match self {
            RemoteResult::Failure(error) => RemoteResult::Failure(error),
            arg => func.apply(arg),
        }
    }

    // ========== Elimination ==========

    /// Collapses every state into a single value
    ///
    /// ```
    /// use remote_result::RemoteResult;
    ///
    /// let label = |r: RemoteResult<String, u8>| {
    ///     r.fold(
    ///         || "idle".to_string(),
    ///         || "loading".to_string(),
    ///         |e| format!("error: {}", e),
    ///         |v| format!("value: {}", v),
    ///     )
    /// };
    /// assert_eq!(label(RemoteResult::pending()), "loading");
    /// assert_eq!(label(RemoteResult::success(7)), "value: 7");
    /// ```
    pub fn fold<D, OI, OP, OF, OS>(
        self,
        on_initial: OI,
        on_pending: OP,
        on_failure: OF,
        on_success: OS,
    ) -> D
    where
        OI: FnOnce() -> D,
        OP: FnOnce() -> D,
        OF: FnOnce(F) -> D,
        OS: FnOnce(S) -> D,
    {
        match self {
            RemoteResult::Initial => on_initial(),
            RemoteResult::Pending => on_pending(),
            RemoteResult::Failure(error) => on_failure(error),
            RemoteResult::Success(value) => on_success(value),
        }
    }

    // ========== Recovery ==========

    /// Replaces any non-success state with `Success(value)`
    pub fn recover(self, value: S) -> Self {
        match self {
            RemoteResult::Success(_) => self,
            _ => RemoteResult::Success(value),
        }
    }

    /// Replaces a failure with the result of `f`
    ///
    /// `Initial` and `Pending` are left alone.
    pub fn recover_with<G, R>(self, f: R) -> RemoteResult<G, S>
    where
        R: FnOnce(F) -> RemoteResult<G, S>,
    {
        match self {
            RemoteResult::Initial => RemoteResult::Initial,
            RemoteResult::Pending => RemoteResult::Pending,
            RemoteResult::Success(value) => RemoteResult::Success(value),
            RemoteResult::Failure(error) => f(error),
        }
    }

    // ========== Side effects ==========

    /// Runs `f` on the success payload and returns self unchanged
    pub fn tap<T>(self, f: T) -> Self
    where
        T: FnOnce(&S),
    {
        if let RemoteResult::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Runs `f` on the failure payload and returns self unchanged
    pub fn tap_failure<T>(self, f: T) -> Self
    where
        T: FnOnce(&F),
    {
        if let RemoteResult::Failure(error) = &self {
            f(error);
        }
        self
    }

    // ========== Comparison ==========

    /// Structural equality
    ///
    /// Same as `==`, spelled as a method for symmetry with [`RemoteResult::equal_by`].
    pub fn equal(&self, other: &Self) -> bool
    where
        F: PartialEq,
        S: PartialEq,
    {
        match (self, other) {
            (RemoteResult::Initial, RemoteResult::Initial)
            | (RemoteResult::Pending, RemoteResult::Pending) => true,
            (RemoteResult::Failure(a), RemoteResult::Failure(b)) => a == b,
            (RemoteResult::Success(a), RemoteResult::Success(b)) => a == b,
            _ => false,
        }
    }

    /// Equality where success payloads are compared through `extractor`
    ///
    /// ```
    /// use remote_result::RemoteResult;
    ///
    /// #[derive(Debug)]
    /// struct User { id: u32, name: &'static str }
    ///
    /// let a: RemoteResult<(), User> = RemoteResult::success(User { id: 1, name: "ann" });
    /// let b: RemoteResult<(), User> = RemoteResult::success(User { id: 1, name: "Ann" });
    /// assert!(a.equal_by(&b, |u| u.id));
    /// assert!(!a.equal_by(&b, |u| u.name));
    /// ```
    pub fn equal_by<K, X>(&self, other: &Self, extractor: X) -> bool
    where
        F: PartialEq,
        K: PartialEq,
        X: Fn(&S) -> K,
    {
        match (self, other) {
            (RemoteResult::Initial, RemoteResult::Initial)
            | (RemoteResult::Pending, RemoteResult::Pending) => true,
            (RemoteResult::Failure(a), RemoteResult::Failure(b)) => a == b,
            (RemoteResult::Success(a), RemoteResult::Success(b)) => extractor(a) == extractor(b),
            _ => false,
        }
    }
}

impl<F, S> RemoteResult<F, RemoteResult<F, S>> {
    /// Flattens a nested result
    pub fn join(self) -> RemoteResult<F, S> {
        self.chain(|inner| inner)
    }
}

impl<F, G> RemoteResult<F, G> {
    /// Applies the wrapped function to the payload of `arg`
    ///
    /// A failure on either side wins, `self` first. Otherwise the state
    /// follows `Initial > Pending > Success`.
    ///
    /// ```
    /// use remote_result::RemoteResult;
    ///
    /// let add_one: RemoteResult<String, fn(i32) -> i32> = RemoteResult::success(|n| n + 1);
    /// assert_eq!(add_one.apply(RemoteResult::success(1)), RemoteResult::success(2));
    /// ```
    pub fn apply<A, B>(self, arg: RemoteResult<F, A>) -> RemoteResult<F, B>
    where
        G: FnOnce(A) -> B,
    {
        match (self, arg) {
            (RemoteResult::Failure(error), _) | (_, RemoteResult::Failure(error)) => {
                RemoteResult::Failure(error)
            }
            (RemoteResult::Success(func), RemoteResult::Success(value)) => {
                RemoteResult::Success(func(value))
            }
            (RemoteResult::Initial, _) | (_, RemoteResult::Initial) => RemoteResult::Initial,
            _ => RemoteResult::Pending,
        }
    }
}

/// Curried form of [`RemoteResult::chain`]
///
/// ```
/// use remote_result::{chain_fn, RemoteResult};
///
/// let halve = chain_fn(|n: i32| {
///     if n % 2 == 0 {
///         RemoteResult::success(n / 2)
///     } else {
///         RemoteResult::failure("odd")
///     }
/// });
/// assert_eq!(halve(RemoteResult::success(8)), RemoteResult::success(4));
/// ```
pub fn chain_fn<F, S, T, C>(f: C) -> impl FnOnce(RemoteResult<F, S>) -> RemoteResult<F, T>
where
    C: FnOnce(S) -> RemoteResult<F, T>,
{
    move |result| result.chain(f)
}
