use crate::api::privacy::{ApiError, PrivacyClient};
use crate::services::list_service;

/// Print the `count` most recent transactions as a table
pub async fn execute(client: &PrivacyClient, count: usize) -> Result<(), ApiError> {
    let batch = client.fetch_transactions().await?;
    let recent = list_service::recent(&batch, count);
    println!("{}", list_service::render_table(recent));
    Ok(())
}
