//! Asynchronous combinators
//!
//! Each operation awaits exactly one underlying task (two for `async_apply`,
//! awaited together) and resolves to a plain `RemoteResult`. A task that
//! resolves to `Err` is recorded as a failure; nothing here returns an error.
//! There is no cancellation: dropping the returned future drops the task.

use std::future::IntoFuture;

use futures::future;

use super::RemoteResult;

impl<F, S> RemoteResult<F, S> {
    /// Awaits `task` and records its outcome
    ///
    /// ```
    /// use remote_result::RemoteResult;
    ///
    /// # tokio_test::block_on(async {
    /// let fetched = RemoteResult::from_future(async { Ok::<_, String>(3) }).await;
    /// assert_eq!(fetched, RemoteResult::success(3));
    ///
    /// let fetched = RemoteResult::from_future(async { Err::<u8, _>("timeout") }).await;
    /// assert_eq!(fetched, RemoteResult::failure("timeout"));
    /// # });
    /// ```
    pub async fn from_future<T>(task: T) -> Self
    where
        T: IntoFuture<Output = Result<S, F>>,
    {
        match task.await {
            Ok(value) => RemoteResult::Success(value),
            Err(error) => {
                tracing::debug!("Awaited task was rejected, recording failure");
                RemoteResult::Failure(error)
            }
        }
    }

    /// Like [`RemoteResult::map`], with an asynchronous `f`
    ///
    /// `f` is only invoked (and awaited) for a success. `Initial`, `Pending`
    /// and `Failure` pass through without touching `f`.
    pub async fn async_map<T, M, Fut>(self, f: M) -> RemoteResult<F, T>
    where
        M: FnOnce(S) -> Fut,
        Fut: IntoFuture<Output = T>,
    {
        match self {
            RemoteResult::Initial => RemoteResult::Initial,
            RemoteResult::Pending => RemoteResult::Pending,
            RemoteResult::Failure(error) => RemoteResult::Failure(error),
            RemoteResult::Success(value) => RemoteResult::Success(f(value).await),
        }
    }

    /// Like [`RemoteResult::chain`], with an asynchronous `f`
    pub async fn async_chain<T, C, Fut>(self, f: C) -> RemoteResult<F, T>
    where
        C: FnOnce(S) -> Fut,
        Fut: IntoFuture<Output = RemoteResult<F, T>>,
    {
        match self {
            RemoteResult::Initial => RemoteResult::Initial,
            RemoteResult::Pending => RemoteResult::Pending,
            RemoteResult::Failure(error) => RemoteResult::Failure(error),
            RemoteResult::Success(value) => f(value).await,
        }
    }
}

impl<F, GF> RemoteResult<F, GF> {
    /// Applies an asynchronous wrapped function to an asynchronous argument
    ///
    /// Both payloads are tasks: the function payload resolves to the function,
    /// the argument payload to its argument. They are awaited concurrently
    /// before the function runs.
    ///
    /// For an argument that is already a plain value, use
    /// [`RemoteResult::async_apply_value`]. A plain function payload can be
    /// lifted with [`futures::future::ready`].
    ///
    /// State precedence is the same as [`RemoteResult::apply`].
    ///
    /// ```
    /// use futures::future::ready;
    /// use remote_result::RemoteResult;
    ///
    /// # tokio_test::block_on(async {
    /// let double = RemoteResult::<String, _>::success(ready(|n: u32| ready(n * 2)));
    /// let applied = double.async_apply(RemoteResult::success(ready(21))).await;
    /// assert_eq!(applied, RemoteResult::success(42));
    /// # });
    /// ```
    pub async fn async_apply<A, AF, B, Fut>(self, arg: RemoteResult<F, AF>) -> RemoteResult<F, B>
    where
        GF: IntoFuture,
        GF::Output: FnOnce(A) -> Fut,
        AF: IntoFuture<Output = A>,
        Fut: IntoFuture<Output = B>,
    {
        match (self, arg) {
            (RemoteResult::Failure(error), _) | (_, RemoteResult::Failure(error)) => {
                RemoteResult::Failure(error)
            }
            (RemoteResult::Success(func), RemoteResult::Success(value)) => {
                let (func, value) = futures::join!(func.into_future(), value.into_future());
                RemoteResult::Success(func(value).await)
            }
            (RemoteResult::Initial, _) | (_, RemoteResult::Initial) => RemoteResult::Initial,
            _ => RemoteResult::Pending,
        }
    }

    /// Like [`RemoteResult::async_apply`], with an argument that is a plain
    /// value instead of a task
    ///
    /// ```
    /// use futures::future::ready;
    /// use remote_result::RemoteResult;
    ///
    /// # tokio_test::block_on(async {
    /// let double = RemoteResult::<String, _>::success(ready(|n: u32| ready(n * 2)));
    /// let applied = double.async_apply_value(RemoteResult::success(21)).await;
    /// assert_eq!(applied, RemoteResult::success(42));
    /// # });
    /// ```
    pub async fn async_apply_value<A, B, Fut>(self, arg: RemoteResult<F, A>) -> RemoteResult<F, B>
    where
        GF: IntoFuture,
        GF::Output: FnOnce(A) -> Fut,
        Fut: IntoFuture<Output = B>,
    {
        self.async_apply(arg.map(future::ready)).await
    }
}
