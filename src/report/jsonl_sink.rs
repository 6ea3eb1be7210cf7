// ==========================================
// 供应商批量导入工具 - JSONL 结果文件实现
// ==========================================
// 职责: 将批次事件逐行追加到 JSONL 结果文件
// 格式: 每行一个 JSON 对象,event 字段区分事件类型
// ==========================================

use crate::domain::{SubmissionEntry, SubmissionReport};
use crate::report::outcome_sink_trait::OutcomeSink;
use anyhow::{anyhow, Context};
use chrono::Utc;
use serde_json::json;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// 默认结果文件名(写入当前工作目录)
pub const DEFAULT_REPORT_FILE: &str = "vend_supplier_bulk_add.log";

// ==========================================
// JsonlOutcomeSink - JSONL 结果文件
// ==========================================
// 每个事件写完立即 flush,批次中断时已完成的行不丢失
pub struct JsonlOutcomeSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonlOutcomeSink {
    /// 打开(或创建)结果文件,追加写入
    ///
    /// # 说明
    /// - 创建失败属致命错误,由调用方决定终止
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("结果文件创建失败: {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    /// 结果文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&self, value: serde_json::Value) -> anyhow::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| anyhow!("结果文件锁不可用: {}", self.path.display()))?;
        writeln!(file, "{}", value)
            .with_context(|| format!("结果文件写入失败: {}", self.path.display()))?;
        file.flush()
            .with_context(|| format!("结果文件刷新失败: {}", self.path.display()))?;
        Ok(())
    }
}

impl OutcomeSink for JsonlOutcomeSink {
    fn record_run_started(
        &self,
        batch_id: &str,
        endpoint: &str,
        total_rows: usize,
    ) -> anyhow::Result<()> {
        self.write_line(json!({
            "event": "RUN_STARTED",
            "batch_id": batch_id,
            "endpoint": endpoint,
            "total_rows": total_rows,
            "at": Utc::now(),
        }))
    }

    fn record_entry(&self, entry: &SubmissionEntry) -> anyhow::Result<()> {
        self.write_line(json!({
            "event": "ENTRY",
            "entry": entry,
        }))
    }

    fn record_run_finished(&self, report: &SubmissionReport) -> anyhow::Result<()> {
        // 逐行明细已随 ENTRY 事件写出,结束事件只带汇总
        self.write_line(json!({
            "event": "RUN_FINISHED",
            "batch_id": report.batch_id,
            "summary": report.summary,
            "elapsed_ms": report.elapsed_ms,
            "at": report.finished_at,
        }))
    }
}
