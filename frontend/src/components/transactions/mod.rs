pub mod pagination_bar;
pub mod search_bar;
pub mod transaction_table;

pub use pagination_bar::PaginationBar;
pub use search_bar::SearchBar;
pub use transaction_table::TransactionTable;
