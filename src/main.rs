#[tokio::main]
async fn main() {
    if let Err(e) = review_relay::start_server().await {
        tracing::error!("Review relay stopped: {}", e);
        std::process::exit(1);
    }
}
