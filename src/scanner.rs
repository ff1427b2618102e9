use crate::config::ScanConfig;
use anyhow::{anyhow, Result};
use std::process::Command;

/// 单次扫描的结束状态
///
/// 子进程的退出状态只读取一次，归类后交给退出策略处理。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanStatus {
    /// 扫描通过，未发现问题
    Clean,
    /// 扫描器报告发现安全问题
    Findings,
    /// 扫描器自身错误（用法错误、配置缺失等）
    ToolError(i32),
    /// 无法启动扫描器进程
    SpawnFailed(String),
}

impl ScanStatus {
    /// 根据子进程退出码归类
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => ScanStatus::Clean,
            Some(1) => ScanStatus::Findings,
            Some(code) => ScanStatus::ToolError(code),
            // 被信号终止时没有退出码
            None => ScanStatus::ToolError(128),
        }
    }

    /// 映射为本进程的退出码
    ///
    /// 宽松模式下一律返回 0，扫描器的结果只记录不阻断。
    pub fn exit_code(&self, strict: bool) -> i32 {
        if !strict {
            return 0;
        }
        match self {
            ScanStatus::Clean => 0,
            ScanStatus::Findings => 1,
            ScanStatus::ToolError(code) => *code,
            // 与 shell 对 command-not-found 的约定保持一致
            ScanStatus::SpawnFailed(_) => 127,
        }
    }
}

/// 扫描工具特征
#[async_trait::async_trait]
pub trait Scanner: Send + Sync {
    /// 工具名称
    fn name(&self) -> &str;

    /// 构建扫描命令
    fn build_command(&self) -> Vec<String>;

    /// 获取工具版本
    async fn version(&self) -> Result<String>;

    /// 检查工具是否可用
    async fn is_available(&self) -> bool {
        self.version().await.is_ok()
    }

    /// 运行一次扫描
    async fn scan(&self) -> ScanStatus;
}

/// Bandit 扫描器
pub struct BanditScanner {
    config: ScanConfig,
}

impl BanditScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl Scanner for BanditScanner {
    fn name(&self) -> &str {
        &self.config.tool
    }

    fn build_command(&self) -> Vec<String> {
        vec![
            self.config.tool.clone(),
            "-r".to_string(),
            shellexpand::tilde(&self.config.path).to_string(),
            "-c".to_string(),
            shellexpand::tilde(&self.config.config_file).to_string(),
        ]
    }

    async fn version(&self) -> Result<String> {
        let output = Command::new(&self.config.tool)
            .arg("--version")
            .output()
            .map_err(|e| anyhow!("Failed to run {} --version: {e}", self.config.tool))?;

        if !output.status.success() {
            return Err(anyhow!(
                "{} --version failed: {}",
                self.config.tool,
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();

        Ok(version)
    }

    async fn scan(&self) -> ScanStatus {
        let args = self.build_command();
        tracing::info!("Running scanner: {}", args.join(" "));

        // 不捕获输出，扫描器的诊断信息原样透传给调用环境
        let status = Command::new(&args[0]).args(&args[1..]).status();

        match status {
            Ok(status) => ScanStatus::from_code(status.code()),
            Err(e) => {
                tracing::error!("Failed to launch scanner '{}': {}", args[0], e);
                ScanStatus::SpawnFailed(e.to_string())
            }
        }
    }
}
