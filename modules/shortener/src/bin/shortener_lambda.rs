use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use shortener_rs::{handle_publish, BusType, EventPublisher, PublishRequest};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_ansi(false)
        .without_time()
        .init();

    let bus_type = BusType::from_env()?;

    // Built once per execution environment and shared by warm invocations
    let publisher = Arc::new(EventPublisher::for_bus_type(bus_type).await?);

    run(service_fn(move |event: LambdaEvent<PublishRequest>| {
        let publisher = publisher.clone();
        async move {
            let message = handle_publish(&publisher, event.payload).await?;
            Ok::<String, Error>(message)
        }
    }))
    .await
}
