use crate::api::privacy::Transaction;
use crate::services::search_service::format_cents;
use crate::utils::{Align, Table};

/// The `count` most recent transactions; never more than the batch holds
pub fn recent(batch: &[Transaction], count: usize) -> &[Transaction] {
    &batch[..count.min(batch.len())]
}

/// Vendor / Amount / Date table for the list command
pub fn render_table(transactions: &[Transaction]) -> String {
    let mut table = Table::new(&["Vendor", "Amount", "Date"]).align(1, Align::Right);

    for tx in transactions {
        table.add_row(vec![
            tx.merchant.descriptor.clone(),
            format_cents(tx.amount),
            tx.created_day().to_string(),
        ]);
    }

    table.render()
}
