//! Properties of the aggregator that hold for any forwarding history

use lnd_balance_report::analysis::{aggregate, classify, SumHtlc};
use lnd_balance_report::types::ForwardingEvent;
use lnd_balance_report::utils::time::{SECONDS_PER_DAY, SECONDS_PER_MONTH};

use crate::common::{forward, scid, NOW};

/// Deterministic spread of events over ~35 days and five channels
fn history() -> Vec<ForwardingEvent> {
    let channels = [
        0,
        scid(600_000, 1, 0),
        scid(650_000, 2, 1),
        scid(700_000, 3, 0),
        scid(750_000, 4, 2),
    ];
    (0..200u64)
        .map(|i| {
            let offset = ((i * 7_919) % (35 * SECONDS_PER_DAY as u64)) as i64;
            forward(
                NOW - offset,
                channels[(i % 5) as usize],
                channels[((i * 3 + 1) % 5) as usize],
                1_000 + i as i64,
                (i * 37) % 2_000,
            )
        })
        .collect()
}

#[test]
fn test_permutation_invariance() {
    let events = history();
    let expected = aggregate(&events, NOW);

    let mut reversed = events.clone();
    reversed.reverse();
    assert_eq!(aggregate(&reversed, NOW), expected);

    let mut by_amount = events.clone();
    by_amount.sort_by_key(|e| (e.fee_msat, e.amount_in));
    assert_eq!(aggregate(&by_amount, NOW), expected);
}

#[test]
fn test_split_histories_sum_to_whole() {
    let events = history();
    let whole = aggregate(&events, NOW);
    let (left, right) = events.split_at(77);
    let left = aggregate(left, NOW);
    let right = aggregate(right, NOW);

    let mut merged = SumHtlc::new();
    for part in [left, right] {
        for (id, summary) in part {
            let entry = merged.entry(id).or_default();
            entry.day.amount_in += summary.day.amount_in;
            entry.day.amount_out += summary.day.amount_out;
            entry.day.fee_msat += summary.day.fee_msat;
            entry.week.amount_in += summary.week.amount_in;
            entry.week.amount_out += summary.week.amount_out;
            entry.week.fee_msat += summary.week.fee_msat;
            entry.month.amount_in += summary.month.amount_in;
            entry.month.amount_out += summary.month.amount_out;
            entry.month.fee_msat += summary.month.fee_msat;
        }
    }
    assert_eq!(merged, whole);
}

#[test]
fn test_unattributed_events_leave_map_unchanged() {
    let mut events = history();
    let before = aggregate(&events, NOW);

    events.push(forward(NOW, 0, 0, 1_000_000, 999_999));
    events.push(forward(NOW - 10, 0, 0, 5, 5));
    assert_eq!(aggregate(&events, NOW), before);
    assert!(!before.contains_key(&0));
}

#[test]
fn test_window_totals_nest() {
    for summary in aggregate(&history(), NOW).values() {
        assert!(summary.day.amount_in <= summary.week.amount_in);
        assert!(summary.week.amount_in <= summary.month.amount_in);
        assert!(summary.day.amount_out <= summary.week.amount_out);
        assert!(summary.week.amount_out <= summary.month.amount_out);
        assert!(summary.day.fee_msat <= summary.week.fee_msat);
        assert!(summary.week.fee_msat <= summary.month.fee_msat);
    }
}

#[test]
fn test_classification_containment() {
    for event in history() {
        let set = classify(NOW, event.timestamp);
        assert!(!set.day || set.week);
        assert!(!set.week || set.month);
        assert_eq!(set.month, event.timestamp > NOW - SECONDS_PER_MONTH);
    }
}

#[test]
fn test_reference_instant_controls_windows() {
    let events = vec![forward(NOW, scid(1, 1, 1), 0, 100, 10)];
    let shifted = aggregate(&events, NOW + 2 * SECONDS_PER_DAY);
    let summary = shifted[&scid(1, 1, 1)];
    assert_eq!(summary.day.amount_in, 0);
    assert_eq!(summary.week.amount_in, 100);
}
