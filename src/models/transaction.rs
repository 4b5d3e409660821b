use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single recorded income or expense event. `amount` is always a
/// non-negative magnitude; the sign is derived from `kind`.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: Option<i64>,
    pub user_id: i64,
    pub description: String,
    pub amount: Decimal,
    pub category_id: Option<i64>,
    pub kind: TransactionKind,
    /// Format: "YYYY-MM-DD"
    pub date: String,
    pub created_at: String,
    /// Joined category display fields, present when `category_id` resolves.
    pub category_name: Option<String>,
    pub category_color: Option<String>,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The amount with its sign applied: positive for income, negative
    /// for expense.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Whether this transaction falls in the given "YYYY-MM" month.
    pub fn in_month(&self, month: &str) -> bool {
        self.date.starts_with(month)
    }
}
