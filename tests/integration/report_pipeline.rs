//! Command-level pipelines against an in-memory node

use anyhow::Result;
use lnd_balance_report::analysis::{OutputFormat, ReportFormatter};
use lnd_balance_report::cli::commands::get::balance_report;
use lnd_balance_report::cli::commands::list::{channel_report, contract_report};
use lnd_balance_report::errors::{AppError, RpcError};
use lnd_balance_report::rpc::{ChannelFilter, ForwardingHistoryRequest};
use lnd_balance_report::utils::time::{SECONDS_PER_DAY, SECONDS_PER_MONTH};

use crate::common::{channel, forward, scid, MockNode, NOW};

#[tokio::test]
async fn test_channel_report_fetches_trailing_month() -> Result<()> {
    let a = scid(700_000, 1, 0);
    let node = MockNode::new(
        vec![channel(a, 1_000_000, 500_000, 500_000)],
        vec![
            forward(NOW - 60, a, 0, 2_000, 1_000),
            forward(NOW - 3 * SECONDS_PER_DAY, 0, a, 3_000, 2_000),
            // Outside the month even if the node returns it
            forward(NOW - 45 * SECONDS_PER_DAY, a, 0, 9_000, 9_000),
        ],
    );

    let report = channel_report(&node, &ChannelFilter::default(), NOW, 50_000).await?;

    let requests = node.history_requests.lock().unwrap().clone();
    assert_eq!(
        requests,
        vec![ForwardingHistoryRequest {
            start_time: NOW - SECONDS_PER_MONTH,
            end_time: NOW,
            index_offset: 0,
            max_events: 50_000,
        }]
    );

    let row = &report.rows[0];
    assert_eq!(row.forwarding.day.amount_in, 2_000);
    assert_eq!(row.forwarding.day.amount_out, 0);
    assert_eq!(row.forwarding.week.amount_out, 3_000);
    assert_eq!(row.forwarding.month.amount_in, 2_000);
    assert_eq!(row.forwarding.month.fee_msat, 3_000);
    Ok(())
}

#[tokio::test]
async fn test_channel_filter_is_passed_through() -> Result<()> {
    let node = MockNode::new(vec![], vec![]);
    let filter = ChannelFilter {
        inactive_only: true,
        peer: Some(vec![2; 33]),
        ..Default::default()
    };
    channel_report(&node, &filter, NOW, 10).await?;
    assert_eq!(node.channel_filters.lock().unwrap()[0], filter);
    Ok(())
}

#[tokio::test]
async fn test_contract_report_filters_and_sorts() -> Result<()> {
    let a = scid(700_000, 1, 0);
    let b = scid(710_000, 2, 0);
    let c = scid(720_000, 3, 0);
    let node = MockNode::new(
        vec![],
        vec![
            forward(NOW - 300, a, b, 100, 1),
            forward(NOW - 100, b, c, 100, 2),
            forward(NOW - 200, c, a, 100, 3),
        ],
    );
    let request = ForwardingHistoryRequest {
        start_time: NOW - SECONDS_PER_MONTH,
        end_time: 0,
        index_offset: 0,
        max_events: 100,
    };

    let report = contract_report(&node, &request, a).await?;
    let fees: Vec<u64> = report.rows.iter().map(|r| r.fee_msat).collect();
    assert_eq!(fees, vec![3, 1]);
    assert_eq!(report.rows[0].position, 1);
    assert_eq!(report.rows[1].position, 2);

    let all = contract_report(&node, &request, 0).await?;
    assert_eq!(all.rows.len(), 3);
    assert_eq!(all.rows[0].timestamp, NOW - 100);
    Ok(())
}

#[tokio::test]
async fn test_balance_report_json() -> Result<()> {
    let node = MockNode::new(
        vec![
            channel(scid(1, 0, 0), 1_000_000, 250_000, 750_000),
            channel(scid(2, 0, 0), 1_000_000, 750_000, 250_000),
        ],
        vec![],
    );
    let report = balance_report(&node, &ChannelFilter::default()).await?;
    assert_eq!(report.channel_count, 2);
    assert_eq!(report.total.ratio, 50.0);

    let json = ReportFormatter::format_balance(&report, &OutputFormat::Json)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value["total"]["local_balance"], 1_000_000);
    Ok(())
}

#[tokio::test]
async fn test_upstream_failure_is_surfaced_verbatim() {
    let node = MockNode::failing("connection refused");

    let err = channel_report(&node, &ChannelFilter::default(), NOW, 10)
        .await
        .unwrap_err();
    match &err {
        AppError::UpstreamFetch(RpcError::CallFailed { method, message }) => {
            assert_eq!(method, "ListChannels");
            assert_eq!(message, "connection refused");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "ListChannels failed: connection refused");

    let request = ForwardingHistoryRequest::default();
    assert!(matches!(
        contract_report(&node, &request, 0).await,
        Err(AppError::UpstreamFetch(_))
    ));
    assert!(matches!(
        balance_report(&node, &ChannelFilter::default()).await,
        Err(AppError::UpstreamFetch(_))
    ));
}
