mod budget;
mod category;
mod profile;
mod transaction;

pub use budget::{BudgetCategory, BudgetStatus};
pub use category::Category;
pub use profile::Profile;
pub use transaction::{Transaction, TransactionKind};

#[cfg(test)]
mod tests;
