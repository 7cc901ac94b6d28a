//! Two channels, one forward routed from A to B at the reference instant

use lnd_balance_report::analysis::{
    aggregate, build_balance_report, build_channel_report, build_contract_report,
    OutputFormat, ReportFormatter,
};
use lnd_balance_report::types::{ChannelRecord, ForwardingEvent};
use rust_decimal_macros::dec;

use crate::common::{channel, forward, scid, NOW};

fn setup() -> (u64, u64, Vec<ChannelRecord>, Vec<ForwardingEvent>) {
    let a = scid(700_000, 12, 1);
    let b = scid(650_000, 3, 0);
    let channels = vec![
        channel(a, 1_000_000, 600_000, 400_000),
        channel(b, 500_000, 0, 500_000),
    ];
    let events = vec![forward(NOW, a, b, 10_000, 5_000)];
    (a, b, channels, events)
}

#[test]
fn test_window_totals_for_both_legs() {
    let (a, b, _, events) = setup();
    let sums = aggregate(&events, NOW);

    let summary_a = sums[&a];
    for totals in [summary_a.day, summary_a.week, summary_a.month] {
        assert_eq!(totals.amount_in, 10_000);
        assert_eq!(totals.amount_out, 0);
        assert_eq!(totals.fee_msat, 5_000);
    }

    let summary_b = sums[&b];
    for totals in [summary_b.day, summary_b.week, summary_b.month] {
        assert_eq!(totals.amount_in, 0);
        assert_eq!(totals.amount_out, 10_000);
        assert_eq!(totals.fee_msat, 5_000);
    }
}

#[test]
fn test_channel_metrics() {
    let (a, b, channels, events) = setup();
    let report = build_channel_report(&channels, &aggregate(&events, NOW));

    // A was funded later, so it sorts first
    assert_eq!(report.rows[0].channel_id, a);
    assert_eq!(report.rows[1].channel_id, b);

    let row_a = &report.rows[0];
    assert_eq!(row_a.metrics.ratio, 60.0);
    assert_eq!(row_a.metrics.efficiency, 0.0);
    assert_eq!(row_a.metrics.month_fee, dec!(5));

    let row_b = &report.rows[1];
    assert_eq!(row_b.metrics.ratio, 0.0);
    assert_eq!(row_b.metrics.efficiency, 0.0);
    assert_eq!(row_b.metrics.month_fee, dec!(5));

    // Each leg carries the full fee
    assert_eq!(report.total.month_fee, dec!(10));
    assert_eq!(report.total.day_amount_in, 10_000);
    assert_eq!(report.total.day_amount_out, 10_000);
    assert_eq!(report.total.balance.capacity, 1_500_000);
    assert_eq!(report.total.balance.ratio, 40.0);
}

#[test]
fn test_efficiency_gate_with_lifetime_volume() {
    let (a, b, mut channels, events) = setup();
    for c in channels.iter_mut() {
        c.total_received = 250_000;
        c.total_sent = 250_000;
    }
    let report = build_channel_report(&channels, &aggregate(&events, NOW));

    let row_a = report.rows.iter().find(|r| r.channel_id == a).unwrap();
    let row_b = report.rows.iter().find(|r| r.channel_id == b).unwrap();
    assert_eq!(row_a.metrics.efficiency, 50.0);
    // B has volume but no local balance
    assert_eq!(row_b.metrics.efficiency, 0.0);
}

#[test]
fn test_rendered_views() {
    let (a, _, channels, events) = setup();

    let channel_table = ReportFormatter::format_channels(
        &build_channel_report(&channels, &aggregate(&events, NOW)),
        &OutputFormat::Console,
    )
    .unwrap();
    let lines: Vec<&str> = channel_table.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[2].starts_with("    1 | 700000:0012:1 |  02deadbe |"));
    assert!(lines[2].contains("|   60% |    10000 0         |    10000 0         | 5.000 |"));
    assert!(lines[3].starts_with("    2 | 650000:0003:0 |"));
    assert!(lines[3].contains("|    0% |        0 10000     |        0 10000     | 5.000 |"));
    assert!(lines[5].contains("|10.000 |"));

    let balance_table =
        ReportFormatter::format_balance(&build_balance_report(&channels), &OutputFormat::Console)
            .unwrap();
    assert!(balance_table
        .lines()
        .nth(2)
        .unwrap()
        .starts_with("  1500000 |   600000 |   900000 |        0 |    40% |"));

    let contract_table = ReportFormatter::format_contracts(
        &build_contract_report(&events, a),
        &OutputFormat::Console,
    )
    .unwrap();
    assert_eq!(contract_table.lines().count(), 3);
    assert!(contract_table.contains("2023-11-14T22:13:20Z"));
    assert!(contract_table.contains("|  5000"));
}
