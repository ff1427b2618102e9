use crate::config::Config;
use crate::scanner::{BanditScanner, Scanner};

/// 检查扫描工具状态
pub async fn handle_check(config: &Config) -> i32 {
    let scanner = BanditScanner::new(config.scan.clone());

    println!("🔍 检查扫描工具状态...");
    match scanner.version().await {
        Ok(version) => {
            println!("✅ {}: 已安装 (版本: {})", scanner.name(), version);
            0
        }
        Err(e) => {
            println!("❌ {}: 未安装或不可用", scanner.name());
            tracing::error!("Scanner probe failed: {}", e);
            // 宽松模式下工具缺失同样不阻断
            if config.scan.strict {
                127
            } else {
                0
            }
        }
    }
}
