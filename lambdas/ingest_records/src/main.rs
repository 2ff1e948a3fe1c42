use lambda_runtime::{run, service_fn, tracing, Error};
mod event_handler;
use event_handler::{function_handler, HandlerDeps};
use shared::adapters::DynamoDbRecordStore;

mod config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);
    let config = config::Config::load()?;

    let record_store = DynamoDbRecordStore::new(config.table_name, dynamodb_client);
    let handler_deps = HandlerDeps {
        record_store,
        failure_policy: config.failure_policy,
    };

    run(service_fn(|event| function_handler(&handler_deps, event))).await
}
