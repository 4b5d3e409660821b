#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::TransactionKind;
use rust_decimal_macros::dec;

fn txn(desc: &str, amount: Decimal, kind: TransactionKind, date: &str) -> Transaction {
    Transaction {
        id: None,
        user_id: 1,
        description: desc.into(),
        amount,
        category_id: None,
        kind,
        date: date.into(),
        created_at: String::new(),
        category_name: None,
        category_color: None,
    }
}

#[test]
fn empty_list_is_all_zero() {
    let summary = compute(&[], "2025-06");
    assert_eq!(summary, Summary::default());
}

#[test]
fn monthly_figures_only_count_the_month() {
    let txns = vec![
        txn("salary", dec!(3000), TransactionKind::Income, "2025-06-01"),
        txn("rent", dec!(1200), TransactionKind::Expense, "2025-06-03"),
        txn("old salary", dec!(3000), TransactionKind::Income, "2025-05-01"),
        txn("old rent", dec!(1200), TransactionKind::Expense, "2025-05-03"),
    ];
    let summary = compute(&txns, "2025-06");
    assert_eq!(summary.monthly_income, dec!(3000));
    assert_eq!(summary.monthly_expenses, dec!(1200));
}

#[test]
fn card_counts_only_cover_the_month() {
    let txns = vec![
        txn("salary", dec!(3000), TransactionKind::Income, "2025-06-01"),
        txn("rent", dec!(1200), TransactionKind::Expense, "2025-06-03"),
        txn("coffee", dec!(4), TransactionKind::Expense, "2025-06-10"),
        txn("old salary", dec!(3000), TransactionKind::Income, "2025-05-01"),
        txn("old rent", dec!(1200), TransactionKind::Expense, "2025-05-03"),
    ];
    let summary = compute(&txns, "2025-06");
    assert_eq!(summary.monthly_income_count, 1);
    assert_eq!(summary.monthly_expense_count, 2);
}

#[test]
fn balance_spans_all_months() {
    let txns = vec![
        txn("salary", dec!(3000), TransactionKind::Income, "2025-06-01"),
        txn("old rent", dec!(1200), TransactionKind::Expense, "2025-05-03"),
    ];
    let summary = compute(&txns, "2025-06");
    assert_eq!(summary.total_balance, dec!(1800));
}

#[test]
fn savings_floor_at_zero_when_balance_negative() {
    let txns = vec![
        txn("splurge", dec!(500), TransactionKind::Expense, "2025-06-01"),
        txn("tip", dec!(100), TransactionKind::Income, "2025-06-02"),
    ];
    let summary = compute(&txns, "2025-06");
    assert_eq!(summary.total_balance, dec!(-400));
    assert_eq!(summary.current_savings, Decimal::ZERO);
    assert_eq!(summary.savings_progress, 0.0);
}

#[test]
fn savings_progress_against_goal() {
    let txns = vec![txn("salary", dec!(7500), TransactionKind::Income, "2025-06-01")];
    let summary = compute(&txns, "2025-06");
    assert_eq!(summary.current_savings, dec!(7500));
    assert!((summary.savings_progress - 50.0).abs() < f64::EPSILON);
}

#[test]
fn savings_progress_can_exceed_one_hundred() {
    let txns = vec![txn("windfall", dec!(30000), TransactionKind::Income, "2025-06-01")];
    let summary = compute(&txns, "2025-06");
    assert!((summary.savings_progress - 200.0).abs() < f64::EPSILON);
}

#[test]
fn month_with_no_activity_has_zero_monthly_figures() {
    let txns = vec![txn("salary", dec!(3000), TransactionKind::Income, "2025-05-01")];
    let summary = compute(&txns, "2025-06");
    assert_eq!(summary.monthly_income, Decimal::ZERO);
    assert_eq!(summary.monthly_expenses, Decimal::ZERO);
    assert_eq!(summary.total_balance, dec!(3000));
}
