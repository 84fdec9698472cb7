use tracing::info;
use crate::api::privacy::{ApiError, PrivacyClient};
use crate::models::{Detail, SearchRequest};
use crate::services::search_service;

/// Fetch the batch and print every transaction matching the request
pub async fn execute(client: &PrivacyClient, request: &SearchRequest) -> Result<(), ApiError> {
    let batch = client.fetch_transactions().await?;
    let matches = search_service::search(&batch, &request.query);
    info!("{} of {} transactions match {:?}", matches.len(), batch.len(), request.query);

    for tx in matches {
        println!("{}", search_service::summary_line(tx));
        if request.detail == Detail::More {
            for line in search_service::detail_lines(tx) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
