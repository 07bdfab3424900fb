//! Paths of the transactions REST API, relative to the API base URL.

use crate::page::PageQuery;

pub const TRANSACTIONS: &str = "/api/transactions";
pub const SEARCH: &str = "/api/transactions/search";
pub const COUNT: &str = "/api/transactions/count";

/// Path for one page of transactions. A search query switches to the search endpoint.
pub fn list(query: &PageQuery) -> String {
    match query.search.as_deref() {
        Some(search) => format!(
            "{}?query={}&page={}&size={}",
            SEARCH,
            urlencoding::encode(search),
            query.page,
            query.size
        ),
        None => format!("{}?page={}&size={}", TRANSACTIONS, query.page, query.size),
    }
}

/// Path of a single transaction.
pub fn transaction(id: &str) -> String {
    format!("{}/{}", TRANSACTIONS, urlencoding::encode(id))
}
