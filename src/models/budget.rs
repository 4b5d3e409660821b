use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Good,
    Warning,
    Over,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Over => "over",
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A session-local spending-limit tracker. Not persisted and not
/// reconciled with the transaction list: `spent_amount` is tracked
/// independently and may exceed `limit_amount`.
#[derive(Debug, Clone)]
pub struct BudgetCategory {
    pub id: u64,
    pub name: String,
    pub limit_amount: Decimal,
    pub spent_amount: Decimal,
    /// Palette name resolved by the theme, e.g. "blue".
    pub color: String,
}

impl BudgetCategory {
    pub fn new(id: u64, name: String, limit_amount: Decimal) -> Self {
        Self {
            id,
            name,
            limit_amount,
            spent_amount: Decimal::ZERO,
            color: "indigo".into(),
        }
    }

    /// Percent of the limit spent, uncapped. A non-positive limit reads
    /// as 0% rather than dividing by zero.
    pub fn percentage(&self) -> f64 {
        if self.limit_amount <= Decimal::ZERO {
            return 0.0;
        }
        (self.spent_amount / self.limit_amount * Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0)
    }

    /// Percent capped at 100, for progress bars.
    pub fn display_percentage(&self) -> f64 {
        self.percentage().min(100.0)
    }

    pub fn status(&self) -> BudgetStatus {
        let pct = self.percentage();
        if pct >= 100.0 {
            BudgetStatus::Over
        } else if pct >= 80.0 {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Good
        }
    }

    /// Limit minus spent. Negative when over budget.
    pub fn remaining(&self) -> Decimal {
        self.limit_amount - self.spent_amount
    }

    /// Sum of limits and spent amounts across a budget list, for the
    /// overall monthly summary.
    pub fn totals(budgets: &[BudgetCategory]) -> (Decimal, Decimal) {
        budgets.iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(limit, spent), b| (limit + b.limit_amount, spent + b.spent_amount),
        )
    }

    /// The fixed sample budgets each session starts with. Spent amounts
    /// are sample data, deliberately not derived from transactions.
    pub fn sample_set() -> Vec<BudgetCategory> {
        let seed = [
            ("Food & Dining", 600, 420, "blue"),
            ("Transportation", 300, 180, "green"),
            ("Entertainment", 200, 195, "purple"),
            ("Shopping", 400, 280, "pink"),
            ("Bills & Utilities", 500, 340, "orange"),
        ];
        seed.iter()
            .enumerate()
            .map(|(i, (name, limit, spent, color))| BudgetCategory {
                id: i as u64 + 1,
                name: (*name).into(),
                limit_amount: Decimal::new(*limit, 0),
                spent_amount: Decimal::new(*spent, 0),
                color: (*color).into(),
            })
            .collect()
    }
}
