// ==========================================
// 供应商批量导入工具 - 结果落盘 Trait 定义
// ==========================================
// 职责: 定义批次结果的持久化接口
// ==========================================

use crate::domain::{SubmissionEntry, SubmissionReport};

// ==========================================
// OutcomeSink - 结果落盘器
// ==========================================
// 用途: 持久化批次开始/逐行结果/批次结束三类事件
// 实现者: JsonlOutcomeSink
// 红线: 落盘失败不得中断提交,调用方告警后继续
// ==========================================
pub trait OutcomeSink: Send + Sync {
    /// 记录批次开始事件
    ///
    /// # 参数
    /// - batch_id: 批次 ID
    /// - endpoint: 目标端点
    /// - total_rows: 待提交行数
    fn record_run_started(
        &self,
        batch_id: &str,
        endpoint: &str,
        total_rows: usize,
    ) -> anyhow::Result<()>;

    /// 记录单行提交结果
    fn record_entry(&self, entry: &SubmissionEntry) -> anyhow::Result<()>;

    /// 记录批次结束事件(只含汇总,不重复逐行明细)
    fn record_run_finished(&self, report: &SubmissionReport) -> anyhow::Result<()>;
}
