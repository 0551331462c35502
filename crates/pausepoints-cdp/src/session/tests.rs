use std::time::Duration;

use tokio::sync::mpsc;

use crate::error::CdpError;
use crate::protocol::CdpResponse;

use super::debugger::ScriptTracker;

fn script_parsed(script_id: &str, url: &str) -> CdpResponse {
    serde_json::from_value(serde_json::json!({
        "method": "Debugger.scriptParsed",
        "sessionId": "sess1",
        "params": {"scriptId": script_id, "url": url}
    }))
    .unwrap()
}

fn other_event() -> CdpResponse {
    serde_json::from_value(serde_json::json!({
        "method": "Page.loadEventFired",
        "sessionId": "sess1",
        "params": {"timestamp": 1.0}
    }))
    .unwrap()
}

#[tokio::test]
async fn test_wait_resolves_on_matching_script() {
    let (tx, rx) = mpsc::unbounded_channel();
    let tracker = ScriptTracker::new(rx);

    tx.send(script_parsed("1", "https://example.com/vendor.js"))
        .unwrap();
    tx.send(script_parsed("2", "https://example.com/client.js"))
        .unwrap();

    let record = tracker
        .wait_for("/client.js", Duration::from_secs(1))
        .await
        .unwrap();
    assert_eq!(record.script_id, "2");
}

#[tokio::test]
async fn test_wait_deadline_yields_script_not_found() {
    let (tx, rx) = mpsc::unbounded_channel();
    let tracker = ScriptTracker::new(rx);

    tx.send(script_parsed("1", "https://example.com/vendor.js"))
        .unwrap();

    let err = tracker
        .wait_for("/client.js", Duration::from_millis(100))
        .await
        .unwrap_err();
    match err {
        CdpError::ScriptNotFound { pattern, .. } => assert_eq!(pattern, "/client.js"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_record_list_never_matches() {
    let (_tx, rx) = mpsc::unbounded_channel::<CdpResponse>();
    let tracker = ScriptTracker::new(rx);

    // Even the universally-contained empty pattern has nothing to match
    // against, so the wait must run out rather than resolve.
    let err = tracker.wait_for("", Duration::from_millis(100)).await;
    assert!(err.is_err());
}

#[tokio::test]
async fn test_wait_picks_up_scripts_parsed_mid_wait() {
    let (tx, rx) = mpsc::unbounded_channel();
    let tracker = ScriptTracker::new(rx);

    let send = async {
        tokio::time::sleep(Duration::from_millis(120)).await;
        tx.send(script_parsed("9", "https://example.com/late.js"))
            .unwrap();
    };
    let wait = tracker.wait_for("late.js", Duration::from_secs(2));

    let (_, record) = tokio::join!(send, wait);
    assert_eq!(record.unwrap().script_id, "9");
}

#[tokio::test]
async fn test_records_keep_arrival_order_and_skip_other_events() {
    let (tx, rx) = mpsc::unbounded_channel();
    let tracker = ScriptTracker::new(rx);

    tx.send(script_parsed("1", "a.js")).unwrap();
    tx.send(other_event()).unwrap();
    tx.send(script_parsed("2", "b.js")).unwrap();

    let records = tracker.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].script_id, "1");
    assert_eq!(records[1].script_id, "2");
}

#[tokio::test]
async fn test_first_match_wins() {
    let (tx, rx) = mpsc::unbounded_channel();
    let tracker = ScriptTracker::new(rx);

    tx.send(script_parsed("1", "https://cdn.example.com/app.js"))
        .unwrap();
    tx.send(script_parsed("2", "https://example.com/app.js"))
        .unwrap();

    let record = tracker
        .wait_for("app.js", Duration::from_secs(1))
        .await
        .unwrap();
    assert_eq!(record.script_id, "1");
}
