pub mod help;
pub mod list;
pub mod search;

use chrono::NaiveDate;
use tracing::debug;
use crate::api::privacy::PrivacyClient;
use crate::config::{Config, ConfigError};
use crate::models::{Invocation, Query};
use crate::services::query_service;
use crate::AppError;

/// Classify the query and run the matching command.
///
/// Help and unrecognised input are printed and return `Ok`. `load_config`
/// is only called once the query has been classified, so neither the
/// environment nor the API is touched for bad input.
pub async fn run<F>(
    query: Option<&str>,
    modifier: Option<&str>,
    today: NaiveDate,
    load_config: F,
) -> Result<(), AppError>
where
    F: FnOnce() -> Result<Config, ConfigError>,
{
    let request = match query_service::parse_args(query, modifier, today) {
        Ok(Invocation::Help) => {
            println!("{}", help::usage());
            return Ok(());
        }
        Ok(Invocation::Run(request)) => request,
        Err(e) => {
            debug!("Rejected query {:?}: {:?}", query, e);
            println!("{}", e);
            return Ok(());
        }
    };

    let client = PrivacyClient::new(load_config()?);

    match request.query {
        Query::ListRecent(count) => list::execute(&client, count).await?,
        _ => search::execute(&client, &request).await?,
    }

    Ok(())
}
