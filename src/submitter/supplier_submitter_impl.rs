// ==========================================
// 供应商批量导入工具 - 批量提交器实现
// ==========================================
// 依据: Vend API 0.x - POST /api/supplier
// ==========================================
// 职责: 编排整批提交,从记录到批次报告
// 流程: 构造请求体 → 序列化 → 派发 → 归类 → 逐行落盘 → 汇总
// 红线: 任何单行结果都不得中断批次,submit_all 自身永不失败
// ==========================================

use crate::domain::{
    DispatchOutcome, SubmissionEntry, SubmissionReport, SubmissionSummary, SupplierRecord,
};
use crate::report::OutcomeSink;
use crate::submitter::payload::SupplierPayload;
use crate::submitter::supplier_submitter_trait::{
    EndpointResponse, SupplierEndpoint, SupplierSubmitter,
};
use chrono::Utc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// SupplierSubmitterImpl - 批量提交器实现
// ==========================================
pub struct SupplierSubmitterImpl<S>
where
    S: OutcomeSink,
{
    // 结果落盘
    sink: S,

    // 提交组件
    endpoint: Box<dyn SupplierEndpoint>,

    // 报告与日志中记录的目标端点
    endpoint_url: String,
}

impl<S> SupplierSubmitterImpl<S>
where
    S: OutcomeSink,
{
    /// 创建新的 SupplierSubmitter 实例
    ///
    /// # 参数
    /// - sink: 结果落盘器
    /// - endpoint: 创建接口端点
    /// - endpoint_url: 端点描述,写入报告与日志
    pub fn new(sink: S, endpoint: Box<dyn SupplierEndpoint>, endpoint_url: String) -> Self {
        Self {
            sink,
            endpoint,
            endpoint_url,
        }
    }
}

#[async_trait::async_trait]
impl<S> SupplierSubmitter for SupplierSubmitterImpl<S>
where
    S: OutcomeSink + Send + Sync,
{
    /// 按输入顺序逐行提交全部记录
    ///
    /// # 参数
    /// - records: 加载层产出的定序记录
    ///
    /// # 返回
    /// - SubmissionReport: 逐行明细与批次汇总
    #[instrument(skip(self, records), fields(batch_id))]
    async fn submit_all(&self, records: Vec<SupplierRecord>) -> SubmissionReport {
        let start_time = Instant::now();
        let started_at = Utc::now();
        let batch_id = Uuid::new_v4().to_string();
        let total = records.len();

        info!(
            batch_id = %batch_id,
            total_rows = total,
            endpoint = %self.endpoint_url,
            "开始批量提交供应商"
        );

        // === 步骤 1: 记录批次开始事件 ===
        debug!("步骤 1: 记录批次开始事件");
        if let Err(e) = self
            .sink
            .record_run_started(&batch_id, &self.endpoint_url, total)
        {
            warn!(error = %e, "批次开始事件写入失败,继续提交");
        }

        // === 步骤 2: 逐行串行提交 ===
        debug!("步骤 2: 逐行串行提交");
        let mut entries = Vec::with_capacity(total);
        let mut created = 0usize;
        let mut rate_limited = 0usize;
        let mut failed = 0usize;

        for record in &records {
            let entry = self.submit_one(record).await;

            if entry.outcome.is_created() {
                created += 1;
            } else if matches!(entry.outcome, DispatchOutcome::RateLimited) {
                rate_limited += 1;
            } else {
                failed += 1;
            }

            // 落盘失败只告警,不影响后续行
            if let Err(e) = self.sink.record_entry(&entry) {
                warn!(row_number = entry.row_number, error = %e, "行结果写入失败,继续提交");
            }
            entries.push(entry);
        }

        // === 步骤 3: 汇总批次报告 ===
        debug!("步骤 3: 汇总批次报告");
        let finished_at = Utc::now();
        let elapsed = start_time.elapsed();
        let report = SubmissionReport {
            batch_id: batch_id.clone(),
            endpoint: self.endpoint_url.clone(),
            summary: SubmissionSummary {
                total,
                created,
                rate_limited,
                failed,
            },
            entries,
            started_at,
            finished_at,
            elapsed_ms: elapsed.as_millis() as u64,
        };

        // === 步骤 4: 记录批次结束事件 ===
        debug!("步骤 4: 记录批次结束事件");
        if let Err(e) = self.sink.record_run_finished(&report) {
            warn!(error = %e, "批次结束事件写入失败");
        }

        info!(
            batch_id = %batch_id,
            total = total,
            created = created,
            rate_limited = rate_limited,
            failed = failed,
            elapsed_ms = elapsed.as_millis(),
            "批量提交完成"
        );

        report
    }
}

// 辅助方法
impl<S> SupplierSubmitterImpl<S>
where
    S: OutcomeSink,
{
    /// 提交单条记录,任何失败都折叠为该行的结果明细
    async fn submit_one(&self, record: &SupplierRecord) -> SubmissionEntry {
        let payload = SupplierPayload::from_record(record);

        // 序列化失败: 该行终止,不发请求
        let payload_bytes = match payload.to_pretty_json() {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(row_number = record.row_number, error = %e, "请求体序列化失败");
                return SubmissionEntry {
                    row_number: record.row_number,
                    supplier_name: record.name.clone(),
                    outcome: DispatchOutcome::SerializeFailed {
                        message: e.to_string(),
                    },
                    status_code: None,
                    payload_json: None,
                    response_body: None,
                    recorded_at: Utc::now(),
                };
            }
        };

        let payload_json = String::from_utf8_lossy(&payload_bytes).to_string();
        debug!(row_number = record.row_number, payload = %payload_json, "发送创建请求");

        match self.endpoint.create_supplier(&payload_bytes).await {
            Ok(response) => {
                let outcome = DispatchOutcome::from_status(response.status);
                self.log_outcome(record, &outcome, &response);
                SubmissionEntry {
                    row_number: record.row_number,
                    supplier_name: record.name.clone(),
                    outcome,
                    status_code: Some(response.status),
                    payload_json: Some(payload_json),
                    response_body: Some(response.body),
                    recorded_at: Utc::now(),
                }
            }
            Err(e) => {
                warn!(row_number = record.row_number, error = %e, "请求发送失败,继续下一行");
                SubmissionEntry {
                    row_number: record.row_number,
                    supplier_name: record.name.clone(),
                    outcome: DispatchOutcome::TransportFailed {
                        message: e.to_string(),
                    },
                    status_code: None,
                    payload_json: Some(payload_json),
                    response_body: None,
                    recorded_at: Utc::now(),
                }
            }
        }
    }

    /// 按归类结果输出运行日志
    fn log_outcome(
        &self,
        record: &SupplierRecord,
        outcome: &DispatchOutcome,
        response: &EndpointResponse,
    ) {
        match outcome {
            DispatchOutcome::Created => {
                info!(row_number = record.row_number, name = %record.name, "供应商创建成功");
            }
            DispatchOutcome::AuthDenied => {
                warn!(
                    row_number = record.row_number,
                    body = %response.body,
                    "令牌无效,访问被拒绝"
                );
            }
            DispatchOutcome::EndpointNotFound => {
                warn!(
                    row_number = record.row_number,
                    body = %response.body,
                    "端点未找到,请检查店铺域名前缀"
                );
            }
            DispatchOutcome::RateLimited => {
                warn!(row_number = record.row_number, "触发限流,继续处理下一行");
            }
            DispatchOutcome::UnknownStatus { code } => {
                warn!(
                    row_number = record.row_number,
                    status = *code,
                    body = %response.body,
                    "收到未知状态码"
                );
            }
            // 传输与序列化失败在各自分支已记录
            _ => {}
        }
    }
}
