mod config;
mod error;
mod handler;

use std::sync::Arc;

use config::Config;
use handler::SignupHandler;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use model::signup::SignupEvent;
use repository::contact::ContactRepository;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::INFO)
        // this needs to be set to remove duplicated information in the log.
        .with_current_span(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .with_target(false)
        .init();

    let config = Config::from_env()?;
    let shared_config = aws_config::load_from_env().await;

    let api_key = sendgrid::resolve_api_key(&shared_config, config.api_key).await?;
    let mailer = match config.sendgrid_api_url {
        Some(base_url) => sendgrid::Client::with_base_url(api_key, base_url),
        None => sendgrid::Client::new(api_key),
    };

    let repository = match config.dynamodb_region {
        Some(region) => ContactRepository::new_in_region(&shared_config, region, config.table_name),
        None => ContactRepository::new(&shared_config, config.table_name),
    };
    tracing::info!("Contacts are written to table {}", repository.table_name());

    let handler_ref = &SignupHandler::new(
        Arc::new(mailer),
        repository,
        config.from_address,
        config.template_id,
    );

    run(service_fn(move |event: LambdaEvent<SignupEvent>| async move {
        handler_ref.handle(event.payload).await.map_err(Error::from)
    }))
    .await?;
    Ok(())
}
