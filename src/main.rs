use anyhow::Result;
use exam_admin::app::{App, Command};
use exam_admin::{logger, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logger::init(&config.log_filter);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    // 初始化并运行应用
    App::initialize(config).await?.run(command).await?;

    Ok(())
}
