//! End-to-end merge scenarios

mod common;

use remote_result::prelude::*;

type Fetch = RemoteResult<String, i32>;

fn failure(error: &str) -> Fetch {
    RemoteResult::failure(error.to_string())
}

#[test]
fn test_merge_resolves_as_states_settle() {
    common::init_test_tracing();

    // Every state present: Initial wins
    let values = vec![Fetch::initial(), Fetch::pending(), failure("e1"), Fetch::success(1)];
    assert!(merge(values).is_initial());

    // Initial removed: Pending wins
    let values = vec![Fetch::pending(), failure("e1"), Fetch::success(1)];
    assert!(merge(values).is_pending());

    // Pending removed: the failure wins
    let values = vec![failure("e1"), Fetch::success(1)];
    assert_eq!(merge(values), RemoteResult::failure("e1".to_string()));

    // Only successes left
    let values = vec![Fetch::success(1)];
    assert_eq!(merge(values), RemoteResult::success(vec![1]));
}

#[test]
fn test_merge_priorities_disagree_on_mixed_input() {
    common::init_test_tracing();

    let values = vec![Fetch::success(1), failure("error"), Fetch::initial(), Fetch::pending()];

    let pending_first = merge_with_config(values.clone(), &MergeConfig::pending_first());
    assert!(pending_first.is_initial());

    let failure_first = merge_with_config(values, &MergeConfig::failure_first());
    assert_eq!(failure_first, RemoteResult::failure("error".to_string()));
}

#[test]
fn test_dashboard_of_independent_fetches() {
    common::init_test_tracing();

    let user: RemoteResult<String, &str> = RemoteResult::success("ann");
    let unread: RemoteResult<String, u32> = RemoteResult::success(3);
    let theme: RemoteResult<String, bool> = RemoteResult::success(true);

    let summary = merge3(user, unread, theme).map(|(name, unread, dark)| {
        format!("{} ({} unread, dark={})", name, unread, dark)
    });
    assert_eq!(
        summary,
        RemoteResult::success("ann (3 unread, dark=true)".to_string())
    );
}

#[test]
fn test_collect_every_validation_error() {
    common::init_test_tracing();

    let fields: Vec<RemoteResult<String, &str>> = vec![
        RemoteResult::success("ann@example.com"),
        RemoteResult::failure("name is required".to_string()),
        RemoteResult::failure("age must be positive".to_string()),
    ];

    let merged = merge_in_many(fields);
    assert_eq!(
        merged.failure_ref().map(Vec::len),
        Some(2),
        "both errors should be reported"
    );

    let first_only = merge_in_one(vec![
        RemoteResult::<String, &str>::failure("name is required".to_string()),
        RemoteResult::failure("age must be positive".to_string()),
    ]);
    assert_eq!(
        first_only,
        RemoteResult::failure("name is required".to_string())
    );
}

#[test]
fn test_merged_result_feeds_back_into_combinators() {
    common::init_test_tracing();

    let total = merge(vec![Fetch::success(2), Fetch::success(3), Fetch::success(5)])
        .map(|values| values.into_iter().sum::<i32>())
        .filter_or(|sum| *sum > 0, |sum| format!("empty sum {}", sum))
        .unwrap_or(0);
    assert_eq!(total, 10);

    let fallback = merge(vec![Fetch::success(2), failure("offline")])
        .map(|values| values.len())
        .recover(0);
    assert_eq!(fallback, RemoteResult::success(0));
}
