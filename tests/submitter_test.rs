// ==========================================
// SupplierSubmitter 集成测试
// ==========================================
// 测试目标: 验证逐行派发、结果归类与单行失败隔离
// ==========================================


use supplier_bulk_add::domain::{DispatchOutcome, SupplierRecord};
use supplier_bulk_add::logging;
use supplier_bulk_add::report::JsonlOutcomeSink;
use supplier_bulk_add::submitter::{
    EndpointResponse, SupplierSubmitter, SupplierSubmitterImpl, TransportError,
};
use test_helpers::{FailingSink, NullSink, ScriptedEndpoint};

const TEST_ENDPOINT: &str = "https://demo.vendhq.com/api/supplier";

fn record(name: &str, row_number: usize) -> SupplierRecord {
    let mut record = SupplierRecord::default();
    record.name = name.to_string();
    record.row_number = row_number;
    record
}

#[tokio::test]
async fn test_submit_all_success() {
    logging::init_test();

    let endpoint = ScriptedEndpoint::with_statuses(&[200, 200, 200]);
    let submitter =
        SupplierSubmitterImpl::new(NullSink, Box::new(endpoint), TEST_ENDPOINT.to_string());

    let records = vec![record("Alpha", 1), record("Bravo", 2), record("Charlie", 3)];
    let report = submitter.submit_all(records).await;

    println!("Report summary: {:?}", report.summary);

    assert_eq!(report.summary.total, 3);
    assert_eq!(report.summary.created, 3);
    assert_eq!(report.summary.failed, 0);
    assert_eq!(report.entries.len(), 3);
    for (i, entry) in report.entries.iter().enumerate() {
        assert_eq!(entry.row_number, i + 1, "明细应保持输入顺序");
        assert_eq!(entry.outcome, DispatchOutcome::Created);
        assert_eq!(entry.status_code, Some(200));
        assert_eq!(entry.response_body.as_deref(), Some("body-200"));
    }
}

#[tokio::test]
async fn test_auth_denied_single_attempt() {
    logging::init_test();

    let endpoint = ScriptedEndpoint::with_statuses(&[401]);
    let captured = endpoint.captured_handle();
    let submitter =
        SupplierSubmitterImpl::new(NullSink, Box::new(endpoint), TEST_ENDPOINT.to_string());

    let report = submitter.submit_all(vec![record("Acme", 1)]).await;

    assert_eq!(report.entries[0].outcome, DispatchOutcome::AuthDenied);
    assert_eq!(report.summary.failed, 1);
    // 401 不重试,恰好一次派发
    assert_eq!(captured.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_rate_limited_continues() {
    logging::init_test();

    let endpoint = ScriptedEndpoint::with_statuses(&[429, 200]);
    let captured = endpoint.captured_handle();
    let submitter =
        SupplierSubmitterImpl::new(NullSink, Box::new(endpoint), TEST_ENDPOINT.to_string());

    let records = vec![record("Alpha", 1), record("Bravo", 2)];
    let report = submitter.submit_all(records).await;

    assert_eq!(report.summary.rate_limited, 1);
    assert_eq!(report.summary.created, 1);
    assert_eq!(report.summary.failed, 0, "限流不计入硬失败");
    assert_eq!(report.entries[0].outcome, DispatchOutcome::RateLimited);
    // 限流后继续派发下一行
    assert_eq!(captured.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_status_preserved() {
    logging::init_test();

    let endpoint = ScriptedEndpoint::with_statuses(&[503]);
    let submitter =
        SupplierSubmitterImpl::new(NullSink, Box::new(endpoint), TEST_ENDPOINT.to_string());

    let report = submitter.submit_all(vec![record("Acme", 1)]).await;

    let entry = &report.entries[0];
    assert_eq!(entry.outcome, DispatchOutcome::UnknownStatus { code: 503 });
    assert_eq!(entry.status_code, Some(503));
    // 响应体原样保留,便于排查
    assert_eq!(entry.response_body.as_deref(), Some("body-503"));
}

#[tokio::test]
async fn test_transport_failure_isolated() {
    logging::init_test();

    let endpoint = ScriptedEndpoint::new(vec![
        Ok(EndpointResponse {
            status: 200,
            body: "ok".to_string(),
        }),
        Err(TransportError::Timeout("请求超时".to_string())),
        Ok(EndpointResponse {
            status: 200,
            body: "ok".to_string(),
        }),
    ]);
    let captured = endpoint.captured_handle();
    let submitter =
        SupplierSubmitterImpl::new(NullSink, Box::new(endpoint), TEST_ENDPOINT.to_string());

    let records = vec![record("Alpha", 1), record("Bravo", 2), record("Charlie", 3)];
    let report = submitter.submit_all(records).await;

    println!("Report summary: {:?}", report.summary);

    // 第 2 行传输失败,第 1/3 行不受影响
    assert_eq!(captured.lock().unwrap().len(), 3, "每一行都应被尝试派发");
    assert_eq!(report.entries[0].outcome, DispatchOutcome::Created);
    assert!(matches!(
        report.entries[1].outcome,
        DispatchOutcome::TransportFailed { .. }
    ));
    assert_eq!(report.entries[1].status_code, None);
    assert_eq!(report.entries[2].outcome, DispatchOutcome::Created);
    assert_eq!(report.summary.created, 2);
    assert_eq!(report.summary.failed, 1);
}

#[tokio::test]
async fn test_mobile_omitted_from_sent_payload() {
    logging::init_test();

    let endpoint = ScriptedEndpoint::with_statuses(&[200]);
    let captured = endpoint.captured_handle();
    let submitter =
        SupplierSubmitterImpl::new(NullSink, Box::new(endpoint), TEST_ENDPOINT.to_string());

    let mut supplier = record("Acme", 1);
    supplier.contact.phone = "09 555 0100".to_string();
    // mobile 留空

    submitter.submit_all(vec![supplier]).await;

    let payloads = captured.lock().unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&payloads[0]).unwrap();
    println!("Sent payload: {}", sent);

    assert_eq!(sent["contact"]["phone"], "09 555 0100");
    assert!(
        sent["contact"].get("mobile").is_none(),
        "空 mobile 应整体省略,不得发送空串"
    );
}

#[tokio::test]
async fn test_entries_written_to_jsonl() {
    logging::init_test();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.log");
    let sink = JsonlOutcomeSink::create(&path).unwrap();

    let endpoint = ScriptedEndpoint::with_statuses(&[200, 401]);
    let submitter =
        SupplierSubmitterImpl::new(sink, Box::new(endpoint), TEST_ENDPOINT.to_string());

    let report = submitter
        .submit_all(vec![record("Alpha", 1), record("Bravo", 2)])
        .await;
    assert_eq!(report.summary.failed, 1);

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(lines.len(), 4, "应为 RUN_STARTED + 2 条 ENTRY + RUN_FINISHED");
    assert_eq!(lines[0]["event"], "RUN_STARTED");
    assert_eq!(lines[0]["total_rows"], 2);
    assert_eq!(lines[1]["event"], "ENTRY");
    assert_eq!(lines[1]["entry"]["outcome"]["kind"], "CREATED");
    assert_eq!(lines[2]["entry"]["outcome"]["kind"], "AUTH_DENIED");
    assert_eq!(lines[3]["event"], "RUN_FINISHED");
    assert_eq!(lines[3]["summary"]["failed"], 1);
}

#[tokio::test]
async fn test_failing_sink_does_not_abort() {
    logging::init_test();

    let endpoint = ScriptedEndpoint::with_statuses(&[200, 200]);
    let submitter =
        SupplierSubmitterImpl::new(FailingSink, Box::new(endpoint), TEST_ENDPOINT.to_string());

    let report = submitter
        .submit_all(vec![record("Alpha", 1), record("Bravo", 2)])
        .await;

    // 落盘全程失败,提交照常完成
    assert_eq!(report.summary.total, 2);
    assert_eq!(report.summary.created, 2);
}
