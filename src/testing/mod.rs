//! Testing utilities and fixtures
//!
//! Fixtures and proptest strategies shared by the unit and property tests.

use crate::RemoteResult;
use proptest::prelude::*;

/// Result type used throughout the unit tests
pub(crate) type Fixture = RemoteResult<String, i32>;

/// One value of every state
pub(crate) fn all_states() -> [Fixture; 4] {
    [
        RemoteResult::initial(),
        RemoteResult::pending(),
        RemoteResult::success(1),
        RemoteResult::failure("error".to_string()),
    ]
}

/// Strategy producing results of any state
pub(crate) fn arb_result() -> impl Strategy<Value = Fixture> {
    prop_oneof![
        Just(RemoteResult::Initial),
        Just(RemoteResult::Pending),
        any::<i32>().prop_map(RemoteResult::success),
        "[a-z]{1,8}".prop_map(RemoteResult::failure),
    ]
}

/// Strategy producing successes only
pub(crate) fn arb_success() -> impl Strategy<Value = Fixture> {
    any::<i32>().prop_map(RemoteResult::success)
}
