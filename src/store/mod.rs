mod dto;
mod manager;
mod parser;
mod types;

pub use dto::TransactionRow;
pub use manager::{InitOutcome, StoreManager};
pub use parser::{read_transactions, write_header, write_transaction};
pub use types::{StoreAmount, StoreDate};

pub mod prelude {
    pub use super::{InitOutcome, StoreManager};
}
