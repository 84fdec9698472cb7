pub mod query_service;
pub mod search_service;
pub mod list_service;
