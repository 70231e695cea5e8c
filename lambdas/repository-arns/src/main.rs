mod error;

use error::RepositoryArnsError;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use model::arn::{repository_arns, RepositoryPrefix};
use response::{ok, server_error};
use serde_json::{json, Value};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    lambda_runtime::run(service_fn(func)).await?;
    Ok(())
}

async fn func(event: LambdaEvent<Value>) -> Result<Value, Error> {
    Ok(match build_arns(&event.payload) {
        Ok(arns) => ok(json!({ "repository_arns": arns })),
        Err(err) => {
            tracing::error!("failed to build repository ARNs: {}", err);
            server_error(json!({}))
        }
    })
}

fn build_arns(payload: &Value) -> Result<Vec<String>, Error> {
    let region = env::var("AWS_REGION")?;
    let account_id = env::var("AWS_ACCOUNT_ID")?;

    let filters = payload
        .get("filters")
        .and_then(Value::as_array)
        .ok_or(RepositoryArnsError::MissingFilters)?
        .iter()
        .map(|filter| filter.as_str().ok_or(RepositoryArnsError::MalformedFilter))
        .collect::<Result<Vec<&str>, _>>()?;

    let prefix = RepositoryPrefix::new(&region, &account_id);

    Ok(repository_arns(&prefix, &filters))
}
