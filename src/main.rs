use chat_service::config::ChatConfig;
use chat_service::handlers::handle;
use chat_service::models::{ApiGatewayResponse, InvocationEvent};
use chat_service::observability::init_tracing;
use chat_service::services::providers::HttpTextGenerator;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = ChatConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        Error::from(e)
    })?;
    init_tracing(&config.log_level);

    let generator = HttpTextGenerator::new(&config.generation.base_url);
    tracing::info!(
        base_url = %generator.base_url(),
        version = env!("CARGO_PKG_VERSION"),
        "Initialized generation client"
    );

    let generator = &generator;
    run(service_fn(move |event: LambdaEvent<InvocationEvent>| {
        async move { Ok::<ApiGatewayResponse, Error>(handle(event, generator).await) }
    }))
    .await
}
