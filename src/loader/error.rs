// ==========================================
// 供应商批量导入工具 - 加载模块错误类型
// ==========================================
// 依据: Rust 错误处理最佳实践
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 加载模块错误类型
///
/// 任一变体都属于致命错误: 加载失败即中止整次导入,不会发出任何网络请求
#[derive(Error, Debug)]
pub enum LoadError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    Io(String),

    #[error("CSV 解析失败: {0}")]
    Csv(String),

    #[error("文件为空: 缺少表头行")]
    EmptyFile,

    // ===== 模板校验错误 =====
    #[error("表头不匹配 (列 {column}): 期望 {expected}，实际 {got}")]
    SchemaMismatch {
        column: usize, // 1 起始的列序号
        expected: String,
        got: String,
    },

    #[error("行字段不足 (行 {row_number}): 期望 {expected} 列，实际 {got} 列")]
    RowTooShort {
        row_number: usize,
        expected: usize,
        got: usize,
    },

    #[error("行字段过多 (行 {row_number}): 期望 {expected} 列，实际 {got} 列")]
    RowTooLong {
        row_number: usize,
        expected: usize,
        got: usize,
    },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Csv(err.to_string())
    }
}

/// Result 类型别名
pub type LoadResult<T> = Result<T, LoadError>;
