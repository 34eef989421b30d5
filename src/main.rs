#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hardhat_rpc::cli::run_cli().await
}
