//! Property tests for history aggregation.

mod common;

use chrono::Duration;
use common::*;
use modstat_commands::aggregator::{
    action_timestamps, author_and_public_hours, hour_bucket, log_hours,
};
use modstat_common::test_utils::mock_timestamp;
use modstat_common::{window_start, UserId};
use proptest::prelude::*;

proptest! {
    #[test]
    fn date_window_never_leaks(
        mut offsets in prop::collection::vec(-72i64..400, 0..60),
        days in 0u32..15,
    ) {
        let now = mock_timestamp(2024, 6, 15, 12, 0, 0);
        // Newest first: smallest age first.
        offsets.sort_unstable();
        let history = offsets
            .iter()
            .map(|hours| message(UserId(1), "!ban x", now - Duration::hours(*hours)))
            .collect();
        let platform = FakePlatform::new().with_history(MOD_LOG, history);

        let prefixes = vec!["!".to_string()];
        let cutoff = window_start(now, days).unwrap();
        let found = tokio_test::block_on(action_timestamps(
            &platform, MOD_LOG, cutoff, now, &prefixes, 10_000,
        ))
        .unwrap();

        prop_assert!(found.iter().all(|ts| *ts >= cutoff && *ts <= now));
        let expected = offsets
            .iter()
            .filter(|hours| **hours >= 0 && **hours <= i64::from(days) * 24)
            .count();
        prop_assert_eq!(found.len(), expected);
    }

    #[test]
    fn log_hours_preserve_delivery_order(hours in prop::collection::vec(0u32..24, 0..50)) {
        let history: Vec<_> = hours
            .iter()
            .map(|h| message(UserId(1), "!warn", mock_timestamp(2024, 1, 1, *h, 15, 0)))
            .collect();
        let expected: Vec<u8> = history.iter().map(|m| hour_bucket(&m.timestamp)).collect();
        let platform = FakePlatform::new().with_history(MOD_LOG, history);

        let found = tokio_test::block_on(log_hours(&platform, MOD_LOG, usize::MAX, "!")).unwrap();

        prop_assert_eq!(found, expected);
        prop_assert_eq!(platform.history_requests(), vec![MOD_LOG]);
    }
}

#[test]
fn author_and_public_limits_apply_to_one_replay() {
    let alice = UserId(7);
    let history: Vec<_> = (0..6)
        .map(|h| {
            let author = if h % 2 == 0 { alice } else { UserId(8) };
            message(author, "hi", mock_timestamp(2024, 1, 1, h, 0, 0))
        })
        .collect();
    let platform = FakePlatform::new().with_history(PUBLIC, history);

    // Author series sees the newest 3, baseline the newest 5.
    let (authored, public) = tokio_test::block_on(author_and_public_hours(
        &platform,
        &[PUBLIC],
        alice,
        3,
        5,
    ))
    .unwrap();
    assert_eq!(authored, vec![0, 2]);
    assert_eq!(public, vec![0, 1, 2, 3, 4]);

    // And the other way round.
    let (authored, public) = tokio_test::block_on(author_and_public_hours(
        &platform,
        &[PUBLIC],
        alice,
        6,
        2,
    ))
    .unwrap();
    assert_eq!(authored, vec![0, 2, 4]);
    assert_eq!(public, vec![0, 1]);

    assert_eq!(platform.history_requests(), vec![PUBLIC, PUBLIC]);
}
