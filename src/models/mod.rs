//! Data models shared by commands and services

pub mod query;

pub use query::{Detail, Invocation, Query, SearchRequest};
