use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use shortener_rs::{handle_trigger, TriggerResponse};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_ansi(false)
        .without_time()
        .init();

    run(service_fn(|event: LambdaEvent<serde_json::Value>| async move {
        Ok::<TriggerResponse, Error>(handle_trigger(&event.payload))
    }))
    .await
}
