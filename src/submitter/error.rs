// ==========================================
// 供应商批量导入工具 - 提交层错误
// ==========================================
// 职责: 统一提交层的传输错误类型
// 红线: 传输错误只判定当前行,不中断整批提交
// ==========================================

use thiserror::Error;

// ==========================================
// 传输错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum TransportError {
    // ===== 客户端构建 =====
    #[error("HTTP 客户端构建失败: {0}")]
    Build(String),

    // ===== 请求发送 =====
    #[error("请求超时: {0}")]
    Timeout(String),

    #[error("连接失败: {0}")]
    Connect(String),

    #[error("网络错误: {0}")]
    Other(String),
}

// 实现 From<reqwest::Error>,按错误性质分类
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

/// 提交层 Result 类型别名
pub type TransportResult<T> = Result<T, TransportError>;
