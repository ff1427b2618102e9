use crate::config::Config;
use crate::scanner::{BanditScanner, ScanStatus, Scanner};
use std::path::Path;

/// 处理扫描命令
///
/// 每次调用只执行一次扫描，返回值是本进程最终的退出码。
pub async fn handle_scan(config: &Config) -> i32 {
    let scan = &config.scan;
    let scanner = BanditScanner::new(scan.clone());

    println!("🔍 开始安全扫描...");
    println!("📁 扫描路径: {}", scan.path);
    println!("📄 扫描器配置: {}", scan.config_file);

    if !Path::new(shellexpand::tilde(&scan.config_file).as_ref()).exists() {
        // 配置缺失由扫描器自己报错，这里只提前提醒一句
        println!("⚠️ 未找到扫描器配置文件: {}", scan.config_file);
        tracing::warn!("Scanner config file not found: {}", scan.config_file);
    }

    let status = scanner.scan().await;

    match &status {
        ScanStatus::Clean => {
            println!("✅ 扫描完成，未发现问题");
        }
        ScanStatus::Findings => {
            println!("⚠️ 扫描器报告了安全问题，请尽快排查");
            tracing::warn!("Scanner reported findings (exit code 1)");
        }
        ScanStatus::ToolError(code) => {
            println!("❌ 扫描器执行出错 (退出码: {code})");
            tracing::error!("Scanner tool error, exit code {}", code);
        }
        ScanStatus::SpawnFailed(reason) => {
            println!("❌ 无法启动扫描器 '{}': {}", scan.tool, reason);
            tracing::error!("Scanner could not be launched: {}", reason);
        }
    }

    if !scan.strict && status != ScanStatus::Clean {
        // TODO(triage): 排查期内扫描结果暂不阻断构建，问题清零后把 strict 置为 true
        println!("🚧 宽松模式：忽略扫描器退出码，构建继续");
        tracing::warn!("Relaxed mode: suppressing scanner exit status");
    }

    status.exit_code(scan.strict)
}
