// ==========================================
// 供应商批量导入工具 - 供应商领域模型
// ==========================================
// 依据: Vend API 0.x - POST /api/supplier 资源结构
// 依据: 供应商 CSV 模板（25 列，定序）
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// SupplierRecord - 供应商导入记录
// ==========================================
// 红线: 字段值一律按原样保留,不做 TRIM/大小写/格式校验
// 用途: 加载层构造,提交层只读消费
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplierRecord {
    pub name: String,          // 供应商名称（允许为空串）
    pub description: String,   // 供应商描述
    pub contact: ContactRecord, // 联系信息（始终存在）

    // 元信息
    pub row_number: usize, // 数据行号（表头后第 1 行为 1，用于结果归属）
}

// ==========================================
// ContactRecord - 供应商联系信息
// ==========================================
// 23 个可选字符串字段,空串表示未提供
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRecord {
    // ===== 身份 =====
    pub first_name: String,   // 名
    pub last_name: String,    // 姓
    pub company_name: String, // 公司名称

    // ===== 联系渠道 =====
    pub phone: String,   // 电话
    pub mobile: String,  // 手机
    pub fax: String,     // 传真
    pub email: String,   // 邮箱
    pub twitter: String, // Twitter
    pub website: String, // 网站

    // ===== 实际地址 =====
    pub physical_address1: String,   // 地址行 1
    pub physical_address2: String,   // 地址行 2
    pub physical_suburb: String,     // 区
    pub physical_city: String,       // 城市
    pub physical_postcode: String,   // 邮编
    pub physical_state: String,      // 州/省
    pub physical_country_id: String, // 国家 ID

    // ===== 邮寄地址 =====
    pub postal_address1: String,   // 地址行 1
    pub postal_address2: String,   // 地址行 2
    pub postal_suburb: String,     // 区
    pub postal_city: String,       // 城市
    pub postal_postcode: String,   // 邮编
    pub postal_state: String,      // 州/省
    pub postal_country_id: String, // 国家 ID
}

// ==========================================
// DispatchOutcome - 单行派发结果
// ==========================================
// 红线: 封闭集合,每个状态码分支独立判定,不跨分支复用错误
// 序列化格式: SCREAMING_SNAKE_CASE (与运行日志一致)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DispatchOutcome {
    Created,                            // 200 - 创建成功
    AuthDenied,                         // 401 - 令牌无效或缺失
    EndpointNotFound,                   // 404 - 店铺域名前缀有误
    RateLimited,                        // 429 - 触发限流（软结果,不中断批次）
    UnknownStatus { code: u16 },        // 其他状态码
    TransportFailed { message: String }, // 请求未到达远端（超时/连接失败等）
    SerializeFailed { message: String }, // 请求体序列化失败
}

impl DispatchOutcome {
    /// 按远端状态码归类派发结果
    ///
    /// # 说明
    /// - 仅覆盖状态码分支；传输层失败由调用方直接构造 TransportFailed
    pub fn from_status(code: u16) -> Self {
        match code {
            200 => DispatchOutcome::Created,
            401 => DispatchOutcome::AuthDenied,
            404 => DispatchOutcome::EndpointNotFound,
            429 => DispatchOutcome::RateLimited,
            other => DispatchOutcome::UnknownStatus { code: other },
        }
    }

    /// 是否创建成功
    pub fn is_created(&self) -> bool {
        matches!(self, DispatchOutcome::Created)
    }

    /// 是否硬失败（限流不计入,属于未确认的软结果）
    pub fn is_hard_failure(&self) -> bool {
        !matches!(self, DispatchOutcome::Created | DispatchOutcome::RateLimited)
    }
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchOutcome::Created => write!(f, "CREATED"),
            DispatchOutcome::AuthDenied => write!(f, "AUTH_DENIED"),
            DispatchOutcome::EndpointNotFound => write!(f, "ENDPOINT_NOT_FOUND"),
            DispatchOutcome::RateLimited => write!(f, "RATE_LIMITED"),
            DispatchOutcome::UnknownStatus { code } => write!(f, "UNKNOWN_STATUS({})", code),
            DispatchOutcome::TransportFailed { .. } => write!(f, "TRANSPORT_FAILED"),
            DispatchOutcome::SerializeFailed { .. } => write!(f, "SERIALIZE_FAILED"),
        }
    }
}

// ==========================================
// SubmissionEntry - 单行提交结果明细
// ==========================================
// 用途: 逐行写入结果日志,并汇入批次报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionEntry {
    pub row_number: usize,             // 数据行号
    pub supplier_name: String,         // 该行供应商名称（原样,可为空串）
    pub outcome: DispatchOutcome,      // 归类结果
    pub status_code: Option<u16>,      // 远端状态码（传输失败时为 None）
    pub payload_json: Option<String>,  // 实际发送的请求体（序列化失败时为 None）
    pub response_body: Option<String>, // 远端响应体（无论状态码一律保留）
    pub recorded_at: DateTime<Utc>,    // 记录时间
}

// ==========================================
// SubmissionSummary - 批次汇总统计
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionSummary {
    pub total: usize,        // 总行数
    pub created: usize,      // 创建成功
    pub rate_limited: usize, // 限流未确认
    pub failed: usize,       // 硬失败
}

// ==========================================
// SubmissionReport - 批次提交报告
// ==========================================
// 用途: submit_all 返回值,也是本工具唯一的持久产物来源
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReport {
    pub batch_id: String,              // 批次 ID（UUID）
    pub endpoint: String,              // 目标端点
    pub summary: SubmissionSummary,    // 汇总统计
    pub entries: Vec<SubmissionEntry>, // 逐行明细（保持输入顺序）
    pub started_at: DateTime<Utc>,     // 批次开始时间
    pub finished_at: DateTime<Utc>,    // 批次结束时间
    pub elapsed_ms: u64,               // 批次耗时（毫秒）
}
