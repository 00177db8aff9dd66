#[tokio::main]
async fn main() {
    if let Err(e) = usercore::run().await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}
