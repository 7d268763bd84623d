#[tokio::main]
async fn main() {
    matching_backend::run().await;
}
