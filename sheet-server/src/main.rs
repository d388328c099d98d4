use anyhow::Context;
use sheet_server::{Config, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 环境变量 (.env) 和配置
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. 日志
    setup_environment(&config);
    tracing::info!(environment = %config.environment, "Sheet server starting...");

    // 3. 工作簿会话
    let state = ServerState::initialize(&config)
        .await
        .context("failed to open workbook")?;

    // 4. HTTP 服务器
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
