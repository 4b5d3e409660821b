use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::Transaction;

/// Savings goal the progress gauge measures against.
pub(crate) const SAVINGS_GOAL: Decimal = Decimal::from_parts(15_000, 0, 0, false, 0);

/// Headline numbers for the dashboard, derived from the full
/// transaction list and a month key (`YYYY-MM`).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Summary {
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    /// How many transactions feed each monthly figure.
    pub monthly_income_count: usize,
    pub monthly_expense_count: usize,
    pub total_balance: Decimal,
    pub current_savings: Decimal,
    pub savings_progress: f64,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            monthly_income: Decimal::ZERO,
            monthly_expenses: Decimal::ZERO,
            monthly_income_count: 0,
            monthly_expense_count: 0,
            total_balance: Decimal::ZERO,
            current_savings: Decimal::ZERO,
            savings_progress: 0.0,
        }
    }
}

/// Compute the summary in one pass. Monthly figures only count
/// transactions dated within `month`; the balance spans everything.
pub(crate) fn compute(transactions: &[Transaction], month: &str) -> Summary {
    let mut monthly_income = Decimal::ZERO;
    let mut monthly_expenses = Decimal::ZERO;
    let mut monthly_income_count = 0;
    let mut monthly_expense_count = 0;
    let mut total_balance = Decimal::ZERO;

    for txn in transactions {
        total_balance += txn.signed_amount();
        if txn.in_month(month) {
            if txn.is_income() {
                monthly_income += txn.amount;
                monthly_income_count += 1;
            } else {
                monthly_expenses += txn.amount;
                monthly_expense_count += 1;
            }
        }
    }

    let current_savings = total_balance.max(Decimal::ZERO);
    let savings_progress = (current_savings / SAVINGS_GOAL * Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0);

    Summary {
        monthly_income,
        monthly_expenses,
        monthly_income_count,
        monthly_expense_count,
        total_balance,
        current_savings,
        savings_progress,
    }
}

#[cfg(test)]
mod tests;
