//! Query intent models

use chrono::NaiveDate;

/// What the user asked for, decided once from the first argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Signed amount in cents, matched exactly
    ExactAmount(i64),
    /// Calendar date matched against the date portion of `created`
    ExactDate(NaiveDate),
    /// Lowercased merchant fragment
    Merchant(String),
    /// Show the N most recent transactions as a table
    ListRecent(usize),
}

/// How much to print per matching transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Detail {
    #[default]
    Brief,
    More,
}

/// A classified query plus its output modifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: Query,
    pub detail: Detail,
}

/// Result of interpreting the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No argument given; print usage
    Help,
    Run(SearchRequest),
}
