use payroll_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env 和配置
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. 初始化日志
    init_logger(&config.log_level);
    tracing::info!("Payroll server starting (env: {})...", config.environment);

    // 3. 初始化服务器状态 (打开数据库、应用迁移、装配服务)
    let state = ServerState::initialize(&config).await?;

    // 4. 启动 HTTP 服务器
    Server::with_state(config, state).run().await
}
