use crate::api::privacy::Transaction;
use crate::models::Query;

/// Select the transactions matching a search query, keeping batch order.
/// `ListRecent` is not a search and selects nothing here.
pub fn search<'a>(batch: &'a [Transaction], query: &Query) -> Vec<&'a Transaction> {
    batch.iter().filter(|tx| matches(tx, query)).collect()
}

fn matches(tx: &Transaction, query: &Query) -> bool {
    match query {
        Query::ExactAmount(cents) => tx.amount == *cents,
        Query::ExactDate(date) => tx.created_date() == Some(*date),
        Query::Merchant(fragment) => tx
            .merchant
            .descriptor
            .to_lowercase()
            .contains(&fragment.to_lowercase()),
        Query::ListRecent(_) => false,
    }
}

/// Render cents as dollars without going through floating point.
/// Refunds keep the sign after the dollar sign: `$-5.00`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("${}{}.{:02}", sign, abs / 100, abs % 100)
}

/// "March 15, 2024" style date, or the raw timestamp if it can't be parsed
fn long_date(tx: &Transaction) -> String {
    tx.created_at()
        .map(|at| at.format("%B %d, %Y").to_string())
        .unwrap_or_else(|| tx.created.clone())
}

/// One-line summary printed for every match
pub fn summary_line(tx: &Transaction) -> String {
    format!(
        "{} was paid {} on {}",
        tx.merchant.descriptor,
        format_cents(tx.amount),
        long_date(tx)
    )
}

/// Extra lines printed with the `more` modifier, ending in a blank line
pub fn detail_lines(tx: &Transaction) -> Vec<String> {
    vec![
        format!("This transaction is {} and {}", tx.result, tx.status),
        format!("The card used is named: {}", tx.card_memo()),
        format!(
            "{} is located in {}, {}",
            tx.merchant.descriptor, tx.merchant.city, tx.merchant.state
        ),
        String::new(),
    ]
}
