#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── Transaction ───────────────────────────────────────────────

fn make_txn(kind: TransactionKind, amount: Decimal) -> Transaction {
    Transaction {
        id: None,
        user_id: 1,
        description: "Test".into(),
        amount,
        category_id: None,
        kind,
        date: "2024-01-15".into(),
        created_at: String::new(),
        category_name: None,
        category_color: None,
    }
}

#[test]
fn test_income_sign() {
    let txn = make_txn(TransactionKind::Income, dec!(100.00));
    assert!(txn.is_income());
    assert!(!txn.is_expense());
    assert_eq!(txn.signed_amount(), dec!(100.00));
}

#[test]
fn test_expense_sign() {
    let txn = make_txn(TransactionKind::Expense, dec!(50.00));
    assert!(txn.is_expense());
    assert_eq!(txn.signed_amount(), dec!(-50.00));
}

#[test]
fn test_amount_stays_a_magnitude() {
    // The stored amount is never negative; only signed_amount carries sign
    let txn = make_txn(TransactionKind::Expense, dec!(4.50));
    assert_eq!(txn.amount, dec!(4.50));
    assert_eq!(txn.signed_amount(), dec!(-4.50));
}

#[test]
fn test_in_month() {
    let txn = make_txn(TransactionKind::Income, dec!(1));
    assert!(txn.in_month("2024-01"));
    assert!(!txn.in_month("2024-02"));
    assert!(!txn.in_month("2023-01"));
}

// ── TransactionKind ───────────────────────────────────────────

#[test]
fn test_kind_parse() {
    assert_eq!(TransactionKind::parse("income"), Some(TransactionKind::Income));
    assert_eq!(TransactionKind::parse("INCOME"), Some(TransactionKind::Income));
    assert_eq!(TransactionKind::parse("expense"), Some(TransactionKind::Expense));
    assert_eq!(TransactionKind::parse("transfer"), None);
    assert_eq!(TransactionKind::parse(""), None);
}

#[test]
fn test_kind_roundtrip() {
    for kind in [TransactionKind::Income, TransactionKind::Expense] {
        assert_eq!(TransactionKind::parse(kind.as_str()), Some(kind));
    }
}

#[test]
fn test_kind_display() {
    assert_eq!(format!("{}", TransactionKind::Income), "Income");
    assert_eq!(format!("{}", TransactionKind::Expense), "Expense");
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_new() {
    let cat = Category::new(7, "Food".into());
    assert!(cat.id.is_none());
    assert_eq!(cat.user_id, 7);
    assert_eq!(cat.name, "Food");
    assert!(cat.color.is_empty());
    assert!(cat.icon.is_empty());
}

#[test]
fn test_category_find_by_name_case_insensitive() {
    let mut cat = Category::new(1, "Groceries".into());
    cat.id = Some(3);
    let cats = vec![cat];
    assert!(Category::find_by_name(&cats, "groceries").is_some());
    assert!(Category::find_by_name(&cats, "GROCERIES").is_some());
    assert!(Category::find_by_name(&cats, "rent").is_none());
}

// ── Profile ───────────────────────────────────────────────────

#[test]
fn test_profile_display_name() {
    let p = Profile::new("Ada".into(), "ada@example.com".into());
    assert_eq!(p.display_name(), "Ada");

    let p = Profile::new(String::new(), "ada@example.com".into());
    assert_eq!(p.display_name(), "ada@example.com");

    let p = Profile::new(String::new(), String::new());
    assert_eq!(p.display_name(), "User");
    assert!(!p.created_at.is_empty());
}

// ── BudgetCategory ────────────────────────────────────────────

fn make_budget(limit: Decimal, spent: Decimal) -> BudgetCategory {
    let mut b = BudgetCategory::new(1, "Test".into(), limit);
    b.spent_amount = spent;
    b
}

#[test]
fn test_budget_new_starts_unspent() {
    let b = BudgetCategory::new(9, "Groceries".into(), dec!(250));
    assert_eq!(b.spent_amount, Decimal::ZERO);
    assert_eq!(b.limit_amount, dec!(250));
    assert_eq!(b.percentage(), 0.0);
    assert_eq!(b.status(), BudgetStatus::Good);
}

#[test]
fn test_budget_status_over_iff_spent_at_least_limit() {
    assert_eq!(make_budget(dec!(100), dec!(100)).status(), BudgetStatus::Over);
    assert_eq!(make_budget(dec!(100), dec!(150)).status(), BudgetStatus::Over);
    assert_eq!(make_budget(dec!(100), dec!(99.99)).status(), BudgetStatus::Warning);
}

#[test]
fn test_budget_status_warning_band() {
    assert_eq!(make_budget(dec!(100), dec!(80)).status(), BudgetStatus::Warning);
    assert_eq!(make_budget(dec!(100), dec!(79.99)).status(), BudgetStatus::Good);
    assert_eq!(make_budget(dec!(200), dec!(160)).status(), BudgetStatus::Warning);
}

#[test]
fn test_budget_display_percentage_caps_at_100() {
    let b = make_budget(dec!(100), dec!(250));
    assert!(b.percentage() > 100.0);
    assert_eq!(b.display_percentage(), 100.0);
}

#[test]
fn test_budget_remaining_goes_negative() {
    assert_eq!(make_budget(dec!(100), dec!(40)).remaining(), dec!(60));
    assert_eq!(make_budget(dec!(100), dec!(130)).remaining(), dec!(-30));
}

#[test]
fn test_budget_zero_limit_reads_as_zero_percent() {
    let b = make_budget(Decimal::ZERO, dec!(50));
    assert_eq!(b.percentage(), 0.0);
    assert_eq!(b.status(), BudgetStatus::Good);
}

#[test]
fn test_budget_totals_sum_limits_and_spent() {
    let budgets = vec![make_budget(dec!(600), dec!(420)), make_budget(dec!(300), dec!(180))];
    let (limit, spent) = BudgetCategory::totals(&budgets);
    assert_eq!(limit, dec!(900));
    assert_eq!(spent, dec!(600));

    assert_eq!(BudgetCategory::totals(&[]), (Decimal::ZERO, Decimal::ZERO));
}

#[test]
fn test_budget_sample_set() {
    let budgets = BudgetCategory::sample_set();
    assert_eq!(budgets.len(), 5);
    assert!(budgets.iter().any(|b| b.name == "Food & Dining"));
    // Entertainment is deliberately seeded inside the warning band
    let ent = budgets.iter().find(|b| b.name == "Entertainment").unwrap();
    assert_eq!(ent.status(), BudgetStatus::Warning);
    // IDs are unique so list operations can address rows
    let mut ids: Vec<u64> = budgets.iter().map(|b| b.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), budgets.len());
}
