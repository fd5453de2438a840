//! # Remote Result
//!
//! A result type that also knows about the time before a computation
//! finishes. `RemoteResult<F, S>` is `Initial`, `Pending`, `Success(S)` or
//! `Failure(F)`, so the whole lifecycle of a fetch fits in one immutable value
//! instead of a `loading` flag next to an `Option<Result<S, F>>`.
//!
//! ## Usage
//!
//! ```
//! use remote_result::prelude::*;
//!
//! let profile: RemoteResult<String, &str> = RemoteResult::success("ann");
//! let posts: RemoteResult<String, u32> = RemoteResult::pending();
//!
//! // Still waiting on the posts
//! let page = merge2(profile, posts);
//! assert!(page.is_pending());
//!
//! let label = page.fold(
//!     || "nothing requested".to_string(),
//!     || "loading...".to_string(),
//!     |e| format!("error: {}", e),
//!     |(name, count)| format!("{} has {} posts", name, count),
//! );
//! assert_eq!(label, "loading...");
//! ```
//!
//! ## Modules
//!
//! - `result` - The `RemoteResult` type, its constructors, combinators and conversions
//! - `merge` - Merging sequences of results, with configurable state precedence
//! - `dynamic` - Type guards and function application for type-erased values
//! - `error` - Misuse errors and their code registry
pub mod dynamic;
pub mod error;
pub mod merge;
pub mod result;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{PanicError, RemoteResultError};
pub use merge::{MergeConfig, MergePriority};
pub use result::{
    chain_fn, FailureOf, RemoteResult, ResultTypes, State, SuccessOf, UnwrapHandlers,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PanicError, RemoteResultError};
    pub use crate::merge::{
        merge, merge2, merge3, merge4, merge_in_many, merge_in_one, merge_with_config,
        MergeConfig, MergePriority,
    };
    pub use crate::result::{chain_fn, RemoteResult, State, UnwrapHandlers};
}
