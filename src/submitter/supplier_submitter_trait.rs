// ==========================================
// 供应商批量导入工具 - 提交层 Trait 定义
// ==========================================
// 职责: 定义提交层的抽象接口,隔离 HTTP 细节与批次编排
// ==========================================

use crate::domain::{SubmissionReport, SupplierRecord};
use crate::submitter::error::TransportResult;
use async_trait::async_trait;

// ==========================================
// EndpointResponse - 端点原始响应
// ==========================================
// 状态码与响应体原样保留,归类在上层完成
#[derive(Debug, Clone)]
pub struct EndpointResponse {
    pub status: u16,  // HTTP 状态码
    pub body: String, // 响应体原文
}

// ==========================================
// SupplierEndpoint - 供应商创建端点
// ==========================================
// 用途: 将序列化后的请求体发送到远端创建接口
// 实现者: HttpSupplierEndpoint
// ==========================================
#[async_trait]
pub trait SupplierEndpoint: Send + Sync {
    /// 发送一次创建供应商请求
    ///
    /// # 参数
    /// - payload: JSON 请求体字节
    ///
    /// # 返回
    /// - Ok(EndpointResponse): 远端有响应(任意状态码)
    /// - Err(TransportError): 请求未到达远端或响应未收到
    async fn create_supplier(&self, payload: &[u8]) -> TransportResult<EndpointResponse>;
}

// ==========================================
// SupplierSubmitter - 批量提交器
// ==========================================
// 用途: 逐行串行提交全部记录,汇总批次报告
// 实现者: SupplierSubmitterImpl
// 红线: 单行失败只记录该行结果,批次继续,方法本身不失败
// ==========================================
#[async_trait]
pub trait SupplierSubmitter: Send + Sync {
    /// 按输入顺序提交全部供应商记录
    ///
    /// # 参数
    /// - records: 加载层产出的定序记录
    ///
    /// # 返回
    /// - SubmissionReport: 每行一条明细,外加批次汇总
    async fn submit_all(&self, records: Vec<SupplierRecord>) -> SubmissionReport;
}
