// ==========================================
// 供应商批量导入工具 - 运行配置
// ==========================================
// 职责: 校验命令行参数,推导目标端点基础地址
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

/// 店铺域名固定后缀,传入完整域名时自动剥离
const DOMAIN_SUFFIX: &str = ".vendhq.com";

// ==========================================
// 配置错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("鉴权令牌不能为空")]
    MissingToken,

    #[error("店铺域名前缀不能为空")]
    MissingDomainPrefix,
}

// ==========================================
// RunOptions - 单次运行配置
// ==========================================
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub file_path: PathBuf,      // 供应商 CSV 文件路径
    pub auth_token: String,      // Bearer 令牌
    pub domain_prefix: String,   // 店铺域名前缀(已剥离固定后缀)
    pub api_base: Option<String>, // 覆写 API 基础地址(测试或私有部署用)
    pub report_path: PathBuf,    // 结果文件路径
}

impl RunOptions {
    /// 构造并校验运行配置
    ///
    /// # 参数
    /// - file_path: CSV 文件路径
    /// - auth_token: Bearer 令牌
    /// - domain_prefix: 店铺域名前缀,允许误传完整域名
    /// - api_base: 可选的 API 基础地址覆写
    /// - report_path: 结果文件路径
    pub fn new(
        file_path: PathBuf,
        auth_token: String,
        domain_prefix: String,
        api_base: Option<String>,
        report_path: PathBuf,
    ) -> Result<Self, ConfigError> {
        if auth_token.is_empty() {
            return Err(ConfigError::MissingToken);
        }

        let domain_prefix = normalize_domain_prefix(&domain_prefix);
        if domain_prefix.is_empty() && api_base.is_none() {
            return Err(ConfigError::MissingDomainPrefix);
        }

        Ok(Self {
            file_path,
            auth_token,
            domain_prefix,
            api_base,
            report_path,
        })
    }

    /// 目标 API 基础地址
    ///
    /// # 说明
    /// - 显式覆写优先,否则按域名前缀拼 https://{prefix}.vendhq.com/api
    pub fn endpoint_base(&self) -> String {
        match &self.api_base {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{}{}/api", self.domain_prefix, DOMAIN_SUFFIX),
        }
    }

    /// 日志中展示用的令牌,只保留前 4 位
    pub fn redacted_token(&self) -> String {
        if self.auth_token.chars().count() > 8 {
            let prefix: String = self.auth_token.chars().take(4).collect();
            format!("{}****", prefix)
        } else {
            "****".to_string()
        }
    }
}

/// 剥离误传的完整域名后缀
fn normalize_domain_prefix(raw: &str) -> String {
    raw.strip_suffix(DOMAIN_SUFFIX).unwrap_or(raw).to_string()
}
