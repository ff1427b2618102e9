use clap::Parser;
use std::path::PathBuf;

/// Scangate - 简化的参数解析
#[derive(Parser, Debug)]
#[command(name = "scangate")]
#[command(about = "安全扫描守门器 - 统一调用Bandit扫描，排查期内不阻断构建")]
pub struct Args {
    /// 子命令（省略时直接执行扫描）
    #[command(subcommand)]
    pub command: Option<Command>,

    /// 扫描路径（默认当前目录）
    #[arg(short, long, global = true)]
    pub path: Option<PathBuf>,

    /// 扫描器配置文件路径
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 严格模式（透传扫描器退出码，发现问题时阻断构建）
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub enum Command {
    /// 执行安全扫描（与省略子命令等价）
    Scan,
    /// 检查扫描工具是否可用
    Check,
}

impl Args {
    /// 解析命令行参数
    pub fn parse() -> Self {
        <Self as clap::Parser>::parse()
    }
}
