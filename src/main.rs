#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    traceability_backend::run().await;
}
