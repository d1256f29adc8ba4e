use periplo::engine::Engine;
use periplo::server::serve;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let engine = Engine::new();

    serve(engine).await;
}
