use flexi_logger::Logger;
use todo_core::TodoStore;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let db_path = std::env::var("TODO_DB").unwrap_or_else(|_| "todos.db".to_string());
    let store = TodoStore::open(&db_path)?;

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    log::info!("listening on {addr}");
    todo_server::run(listener, store).await?;
    Ok(())
}
