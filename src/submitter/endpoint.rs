// ==========================================
// 供应商批量导入工具 - HTTP 端点实现
// ==========================================
// 依据: Vend API 0.x - POST /api/supplier
// 职责: 构造带超时与鉴权的 HTTP 客户端,发送创建请求
// ==========================================

use crate::submitter::error::{TransportError, TransportResult};
use crate::submitter::supplier_submitter_trait::{EndpointResponse, SupplierEndpoint};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// 请求 User-Agent 标识
pub const USER_AGENT: &str = "Support-tool: supplier-bulk-add - one of JOEYM8's tools.";

/// 单次请求超时(秒)
const REQUEST_TIMEOUT_SECS: u64 = 30;

// ==========================================
// HttpSupplierEndpoint - 创建接口端点
// ==========================================
pub struct HttpSupplierEndpoint {
    client: Client,
    create_url: String,
    auth_token: String,
}

impl HttpSupplierEndpoint {
    /// 创建端点实例
    ///
    /// # 参数
    /// - endpoint_base: API 基础地址,如 https://store.vendhq.com/api
    /// - auth_token: Bearer 令牌
    pub fn new(endpoint_base: &str, auth_token: &str) -> TransportResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        Ok(Self {
            client,
            create_url: format!("{}/supplier", endpoint_base.trim_end_matches('/')),
            auth_token: auth_token.to_string(),
        })
    }

    /// 创建接口完整 URL
    pub fn create_url(&self) -> &str {
        &self.create_url
    }
}

#[async_trait]
impl SupplierEndpoint for HttpSupplierEndpoint {
    async fn create_supplier(&self, payload: &[u8]) -> TransportResult<EndpointResponse> {
        let response = self
            .client
            .post(&self.create_url)
            .header("Content-Type", "application/json")
            .header("User-Agent", USER_AGENT)
            .bearer_auth(&self.auth_token)
            .body(payload.to_vec())
            .send()
            .await?;

        let status = response.status().as_u16();
        // 响应体一律读取并保留,便于排查远端拒绝原因
        let body = response.text().await.unwrap_or_default();

        Ok(EndpointResponse { status, body })
    }
}
