pub mod use_transaction_list;
