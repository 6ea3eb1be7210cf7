// ==========================================
// 供应商批量导入工具 - 命令行主入口
// ==========================================
// 依据: Vend API 0.x - POST /api/supplier
// 技术栈: Rust + reqwest + csv
// 系统定位: 支持工具 (CSV 批量创建供应商)
// ==========================================

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use supplier_bulk_add::config::RunOptions;
use supplier_bulk_add::loader::{CsvSupplierLoader, SupplierLoader};
use supplier_bulk_add::logging;
use supplier_bulk_add::report::{JsonlOutcomeSink, DEFAULT_REPORT_FILE};
use supplier_bulk_add::submitter::{
    HttpSupplierEndpoint, SupplierSubmitter, SupplierSubmitterImpl,
};

#[derive(Parser)]
#[command(name = "supplier-bulk-add", about = "CSV 批量创建供应商")]
struct Cli {
    /// 店铺鉴权令牌 (Bearer)
    #[arg(short = 't', long = "token")]
    token: String,

    /// 店铺域名前缀,如 mystore;误传 mystore.vendhq.com 也接受
    #[arg(short = 'd', long = "domain-prefix", default_value = "")]
    domain_prefix: String,

    /// 供应商 CSV 文件路径
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: PathBuf,

    /// 覆写 API 基础地址(私有部署或联调用)
    #[arg(long = "api-base", value_name = "URL")]
    api_base: Option<String>,

    /// 结果文件路径(JSONL,追加写入)
    #[arg(long = "report-file", value_name = "PATH", default_value = DEFAULT_REPORT_FILE)]
    report_file: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!(
        "{} v{}",
        supplier_bulk_add::APP_NAME,
        supplier_bulk_add::VERSION
    );
    tracing::info!("==================================================");

    // 校验运行配置
    let options = RunOptions::new(
        cli.file,
        cli.token,
        cli.domain_prefix,
        cli.api_base,
        cli.report_file,
    )?;

    let endpoint_base = options.endpoint_base();
    tracing::info!(
        file = %options.file_path.display(),
        endpoint = %endpoint_base,
        token = %options.redacted_token(),
        report = %options.report_path.display(),
        "运行参数"
    );

    // 结果文件必须可写,否则直接终止
    let sink = JsonlOutcomeSink::create(&options.report_path)?;

    // 加载 CSV,任何加载错误都在派发前终止,一行都不会提交
    let loader = CsvSupplierLoader;
    let records = loader
        .load(&options.file_path)
        .context("供应商文件加载失败")?;
    tracing::info!(total_rows = records.len(), "供应商文件加载完成");

    // 构造端点与提交器
    let endpoint = HttpSupplierEndpoint::new(&endpoint_base, &options.auth_token)?;
    let endpoint_url = endpoint.create_url().to_string();
    let submitter = SupplierSubmitterImpl::new(sink, Box::new(endpoint), endpoint_url);

    // 逐行串行提交
    let report = submitter.submit_all(records).await;

    // 控制台汇总
    println!("==================================================");
    println!("批次: {}", report.batch_id);
    println!("总行数: {}", report.summary.total);
    println!("创建成功: {}", report.summary.created);
    println!("限流未确认: {}", report.summary.rate_limited);
    println!("失败: {}", report.summary.failed);
    println!("耗时: {} ms", report.elapsed_ms);
    println!("结果文件: {}", options.report_path.display());
    println!("==================================================");

    // 存在硬失败时以非零码退出,限流不计入
    if report.summary.failed > 0 {
        tracing::error!(failed = report.summary.failed, "批次存在失败行");
        std::process::exit(1);
    }

    Ok(())
}
