use chrono::Local;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{BudgetCategory, Category, Transaction, TransactionKind};

pub(crate) const REQUIRED_FIELDS_MSG: &str = "Please fill in all required fields.";
pub(crate) const INVALID_AMOUNT_MSG: &str = "Please enter a valid amount.";
pub(crate) const INVALID_DATE_MSG: &str = "Please enter a valid date (YYYY-MM-DD).";

/// Client-side rejection of a form submission. The store is never
/// called when validation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ValidationError(pub(crate) &'static str);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TxnField {
    Description,
    Amount,
    Kind,
    Category,
    Date,
}

impl TxnField {
    pub(crate) fn all() -> &'static [TxnField] {
        &[
            Self::Description,
            Self::Amount,
            Self::Kind,
            Self::Category,
            Self::Date,
        ]
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Amount => "Amount",
            Self::Kind => "Type",
            Self::Category => "Category",
            Self::Date => "Date",
        }
    }

    pub(crate) fn is_text(self) -> bool {
        matches!(self, Self::Description | Self::Amount | Self::Date)
    }
}

/// Modal form for adding a transaction. Text fields take typed input;
/// the type and category fields cycle with +/- or h/l.
pub(crate) struct TransactionForm {
    pub(crate) description: String,
    pub(crate) amount: String,
    pub(crate) kind: TransactionKind,
    pub(crate) category: Option<usize>,
    pub(crate) date: String,
    pub(crate) field: TxnField,
}

impl TransactionForm {
    pub(crate) fn new() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            kind: TransactionKind::Expense,
            category: None,
            date: Local::now().format("%Y-%m-%d").to_string(),
            field: TxnField::Description,
        }
    }

    pub(crate) fn next_field(&mut self) {
        let fields = TxnField::all();
        let idx = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[(idx + 1) % fields.len()];
    }

    pub(crate) fn prev_field(&mut self) {
        let fields = TxnField::all();
        let idx = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[if idx == 0 { fields.len() - 1 } else { idx - 1 }];
    }

    pub(crate) fn push_char(&mut self, c: char) {
        match self.field {
            TxnField::Description => self.description.push(c),
            TxnField::Amount => self.amount.push(c),
            TxnField::Date => self.date.push(c),
            _ => {}
        }
    }

    pub(crate) fn backspace(&mut self) {
        match self.field {
            TxnField::Description => {
                self.description.pop();
            }
            TxnField::Amount => {
                self.amount.pop();
            }
            TxnField::Date => {
                self.date.pop();
            }
            _ => {}
        }
    }

    pub(crate) fn toggle_kind(&mut self) {
        self.kind = match self.kind {
            TransactionKind::Income => TransactionKind::Expense,
            TransactionKind::Expense => TransactionKind::Income,
        };
    }

    /// Cycle the category selection, with `None` (uncategorized) as one
    /// of the stops.
    pub(crate) fn cycle_category(&mut self, delta: i32, category_count: usize) {
        if category_count == 0 {
            return;
        }
        self.category = match (self.category, delta > 0) {
            (None, true) => Some(0),
            (None, false) => Some(category_count - 1),
            (Some(i), true) => {
                if i + 1 < category_count {
                    Some(i + 1)
                } else {
                    None
                }
            }
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };
    }

    /// Validate and build the transaction. Amounts are stored as
    /// magnitudes; the type carries the sign.
    pub(crate) fn build(
        &self,
        user_id: i64,
        categories: &[Category],
    ) -> Result<Transaction, ValidationError> {
        if self.description.trim().is_empty() || self.amount.trim().is_empty() {
            return Err(ValidationError(REQUIRED_FIELDS_MSG));
        }
        let amount = Decimal::from_str(self.amount.trim())
            .map(|d| d.abs())
            .map_err(|_| ValidationError(INVALID_AMOUNT_MSG))?;
        if chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            return Err(ValidationError(INVALID_DATE_MSG));
        }

        let category = self.category.and_then(|i| categories.get(i));

        Ok(Transaction {
            id: None,
            user_id,
            description: self.description.trim().to_string(),
            amount,
            category_id: category.and_then(|c| c.id),
            kind: self.kind,
            date: self.date.clone(),
            created_at: chrono::Utc::now().to_rfc3339(),
            category_name: category.map(|c| c.name.clone()),
            category_color: category.map(|c| c.color.clone()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BudgetField {
    Name,
    Limit,
}

/// Modal form for adding a budget category. Budgets live only for the
/// session, so there is no store call behind this one.
pub(crate) struct BudgetForm {
    pub(crate) name: String,
    pub(crate) limit: String,
    pub(crate) field: BudgetField,
}

impl BudgetForm {
    pub(crate) fn new() -> Self {
        Self {
            name: String::new(),
            limit: String::new(),
            field: BudgetField::Name,
        }
    }

    pub(crate) fn next_field(&mut self) {
        self.field = match self.field {
            BudgetField::Name => BudgetField::Limit,
            BudgetField::Limit => BudgetField::Name,
        };
    }

    pub(crate) fn push_char(&mut self, c: char) {
        match self.field {
            BudgetField::Name => self.name.push(c),
            BudgetField::Limit => self.limit.push(c),
        }
    }

    pub(crate) fn backspace(&mut self) {
        match self.field {
            BudgetField::Name => {
                self.name.pop();
            }
            BudgetField::Limit => {
                self.limit.pop();
            }
        }
    }

    pub(crate) fn build(&self, next_id: u64) -> Result<BudgetCategory, ValidationError> {
        if self.name.trim().is_empty() || self.limit.trim().is_empty() {
            return Err(ValidationError(REQUIRED_FIELDS_MSG));
        }
        let limit = Decimal::from_str(self.limit.trim())
            .map_err(|_| ValidationError(INVALID_AMOUNT_MSG))?;
        if limit <= Decimal::ZERO {
            return Err(ValidationError(INVALID_AMOUNT_MSG));
        }
        Ok(BudgetCategory::new(next_id, self.name.trim().to_string(), limit))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use rust_decimal_macros::dec;

    fn cats() -> Vec<Category> {
        vec![Category::new(1, "Food & Dining".into()), {
            let mut c = Category::new(1, "Shopping".into());
            c.id = Some(7);
            c
        }]
    }

    #[test]
    fn empty_description_rejected() {
        let mut form = TransactionForm::new();
        form.amount = "10".into();
        assert_eq!(
            form.build(1, &cats()).unwrap_err(),
            ValidationError(REQUIRED_FIELDS_MSG)
        );
    }

    #[test]
    fn empty_amount_rejected() {
        let mut form = TransactionForm::new();
        form.description = "Coffee".into();
        assert_eq!(
            form.build(1, &cats()).unwrap_err(),
            ValidationError(REQUIRED_FIELDS_MSG)
        );
    }

    #[test]
    fn garbage_amount_rejected() {
        let mut form = TransactionForm::new();
        form.description = "Coffee".into();
        form.amount = "abc".into();
        assert_eq!(
            form.build(1, &cats()).unwrap_err(),
            ValidationError(INVALID_AMOUNT_MSG)
        );
    }

    #[test]
    fn bad_date_rejected() {
        let mut form = TransactionForm::new();
        form.description = "Coffee".into();
        form.amount = "4.50".into();
        form.date = "2025-13-99".into();
        assert_eq!(
            form.build(1, &cats()).unwrap_err(),
            ValidationError(INVALID_DATE_MSG)
        );
    }

    #[test]
    fn negative_amount_stored_as_magnitude() {
        let mut form = TransactionForm::new();
        form.description = "Refund typo".into();
        form.amount = "-25".into();
        let txn = form.build(1, &cats()).unwrap();
        assert_eq!(txn.amount, dec!(25));
        assert!(txn.is_expense());
    }

    #[test]
    fn selected_category_carried_into_transaction() {
        let mut form = TransactionForm::new();
        form.description = "Socks".into();
        form.amount = "12".into();
        form.category = Some(1);
        let txn = form.build(1, &cats()).unwrap();
        assert_eq!(txn.category_id, Some(7));
        assert_eq!(txn.category_name.as_deref(), Some("Shopping"));
    }

    #[test]
    fn category_cycle_includes_none_stop() {
        let mut form = TransactionForm::new();
        assert_eq!(form.category, None);
        form.cycle_category(1, 2);
        assert_eq!(form.category, Some(0));
        form.cycle_category(1, 2);
        assert_eq!(form.category, Some(1));
        form.cycle_category(1, 2);
        assert_eq!(form.category, None);
        form.cycle_category(-1, 2);
        assert_eq!(form.category, Some(1));
    }

    #[test]
    fn field_navigation_wraps() {
        let mut form = TransactionForm::new();
        assert_eq!(form.field, TxnField::Description);
        form.prev_field();
        assert_eq!(form.field, TxnField::Date);
        form.next_field();
        assert_eq!(form.field, TxnField::Description);
    }

    #[test]
    fn budget_form_builds_with_zero_spent() {
        let mut form = BudgetForm::new();
        form.name = "Hobbies".into();
        form.limit = "150".into();
        let budget = form.build(6).unwrap();
        assert_eq!(budget.id, 6);
        assert_eq!(budget.limit_amount, dec!(150));
        assert_eq!(budget.spent_amount, Decimal::ZERO);
    }

    #[test]
    fn budget_form_rejects_non_positive_limit() {
        let mut form = BudgetForm::new();
        form.name = "Hobbies".into();
        form.limit = "0".into();
        assert_eq!(form.build(1).unwrap_err(), ValidationError(INVALID_AMOUNT_MSG));
        form.limit = "-50".into();
        assert_eq!(form.build(1).unwrap_err(), ValidationError(INVALID_AMOUNT_MSG));
    }

    #[test]
    fn budget_form_requires_both_fields() {
        let mut form = BudgetForm::new();
        form.name = "Hobbies".into();
        assert_eq!(form.build(1).unwrap_err(), ValidationError(REQUIRED_FIELDS_MSG));
    }
}
