use voice_agent_tools::prelude::*;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let mut config = Config::default();
    config.apply_env();
    let retriever = HttpRetriever::from_config(&config.retrieval);

    if retriever.health_check().await {
        println!("retrieval backend at {} is healthy", retriever.base_url());
    } else {
        eprintln!("retrieval backend at {} is unreachable", retriever.base_url());
        std::process::exit(1);
    }
}
