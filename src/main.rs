use scangate::args::{Args, Command};
use scangate::config::Config;
use scangate::handlers::check::handle_check;
use scangate::handlers::scan::handle_scan;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let exit_code = run(args).await;
    std::process::exit(exit_code);
}

async fn run(args: Args) -> i32 {
    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            // 配置损坏时退回默认配置继续执行，不让守门器自身阻断构建
            println!("⚠️ 配置加载失败，使用默认配置: {e}");
            tracing::error!("Failed to load configuration: {}", e);
            Config::default()
        }
    };

    // 命令行参数优先于配置文件和环境变量
    if let Some(path) = args.path {
        config.scan.path = path.display().to_string();
    }
    if let Some(config_file) = args.config {
        config.scan.config_file = config_file.display().to_string();
    }
    if args.strict {
        config.scan.strict = true;
    }

    match args.command {
        Some(Command::Check) => handle_check(&config).await,
        Some(Command::Scan) | None => handle_scan(&config).await,
    }
}
