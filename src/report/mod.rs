// ==========================================
// 供应商批量导入工具 - 结果层
// ==========================================
// 职责: 批次结果的持久化,逐行 JSONL 追加
// ==========================================

// 模块声明
pub mod jsonl_sink;
pub mod outcome_sink_trait;

// 重导出核心类型
pub use jsonl_sink::{JsonlOutcomeSink, DEFAULT_REPORT_FILE};

// 重导出 Trait 接口
pub use outcome_sink_trait::OutcomeSink;
