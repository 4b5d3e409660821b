#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

fn test_store() -> Store {
    Store::open_in_memory().unwrap()
}

fn test_user(store: &Store) -> i64 {
    store
        .insert_profile(&Profile::new("Test".into(), "test@example.com".into()))
        .unwrap()
}

fn txn(user_id: i64, desc: &str, amount: Decimal, kind: TransactionKind, date: &str) -> Transaction {
    Transaction {
        id: None,
        user_id,
        description: desc.into(),
        amount,
        category_id: None,
        kind,
        date: date.into(),
        created_at: String::from("2025-06-01T00:00:00Z"),
        category_name: None,
        category_color: None,
    }
}

#[test]
fn insert_and_fetch_transaction() {
    let store = test_store();
    let user = test_user(&store);
    let id = store
        .insert_transaction(&txn(
            user,
            "Coffee",
            dec!(4.50),
            TransactionKind::Expense,
            "2025-06-15",
        ))
        .unwrap();
    assert!(id > 0);

    let txns = store.get_transactions(user, None).unwrap();
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].description, "Coffee");
    assert_eq!(txns[0].amount, dec!(4.50));
    assert!(txns[0].is_expense());
}

#[test]
fn transactions_ordered_newest_first() {
    let store = test_store();
    let user = test_user(&store);
    store
        .insert_transaction(&txn(user, "old", dec!(1), TransactionKind::Expense, "2025-05-01"))
        .unwrap();
    store
        .insert_transaction(&txn(user, "new", dec!(1), TransactionKind::Expense, "2025-06-20"))
        .unwrap();
    store
        .insert_transaction(&txn(user, "mid", dec!(1), TransactionKind::Expense, "2025-06-01"))
        .unwrap();

    let txns = store.get_transactions(user, None).unwrap();
    let order: Vec<&str> = txns.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(order, vec!["new", "mid", "old"]);
}

#[test]
fn same_date_breaks_tie_on_created_at() {
    let store = test_store();
    let user = test_user(&store);
    let mut first = txn(user, "first", dec!(1), TransactionKind::Expense, "2025-06-15");
    first.created_at = "2025-06-15T08:00:00Z".into();
    let mut second = txn(user, "second", dec!(1), TransactionKind::Expense, "2025-06-15");
    second.created_at = "2025-06-15T12:00:00Z".into();
    store.insert_transaction(&first).unwrap();
    store.insert_transaction(&second).unwrap();

    let txns = store.get_transactions(user, None).unwrap();
    assert_eq!(txns[0].description, "second");
    assert_eq!(txns[1].description, "first");
}

#[test]
fn transactions_scoped_to_user() {
    let store = test_store();
    let alice = test_user(&store);
    let bob = store
        .insert_profile(&Profile::new("Bob".into(), "bob@example.com".into()))
        .unwrap();

    store
        .insert_transaction(&txn(alice, "hers", dec!(10), TransactionKind::Expense, "2025-06-01"))
        .unwrap();
    store
        .insert_transaction(&txn(bob, "his", dec!(20), TransactionKind::Expense, "2025-06-01"))
        .unwrap();

    let alice_txns = store.get_transactions(alice, None).unwrap();
    assert_eq!(alice_txns.len(), 1);
    assert_eq!(alice_txns[0].description, "hers");
    assert_eq!(store.get_transaction_count(bob).unwrap(), 1);
}

#[test]
fn search_filters_by_description() {
    let store = test_store();
    let user = test_user(&store);
    store
        .insert_transaction(&txn(user, "Grocery run", dec!(50), TransactionKind::Expense, "2025-06-01"))
        .unwrap();
    store
        .insert_transaction(&txn(user, "Gas station", dec!(30), TransactionKind::Expense, "2025-06-02"))
        .unwrap();

    let hits = store.get_transactions(user, Some("grocery")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].description, "Grocery run");

    let none = store.get_transactions(user, Some("restaurant")).unwrap();
    assert!(none.is_empty());
}

#[test]
fn delete_removes_exactly_one() {
    let store = test_store();
    let user = test_user(&store);
    let keep = store
        .insert_transaction(&txn(user, "keep", dec!(1), TransactionKind::Expense, "2025-06-01"))
        .unwrap();
    let gone = store
        .insert_transaction(&txn(user, "gone", dec!(2), TransactionKind::Expense, "2025-06-02"))
        .unwrap();

    store.delete_transaction(gone).unwrap();

    let txns = store.get_transactions(user, None).unwrap();
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].id, Some(keep));
}

#[test]
fn transaction_joins_category_name_and_color() {
    let store = test_store();
    let user = test_user(&store);
    let cat_id = store
        .insert_category(&Category {
            id: None,
            user_id: user,
            name: "Food & Dining".into(),
            color: "#3b82f6".into(),
            icon: "utensils".into(),
        })
        .unwrap();

    let mut t = txn(user, "Lunch", dec!(12), TransactionKind::Expense, "2025-06-10");
    t.category_id = Some(cat_id);
    store.insert_transaction(&t).unwrap();

    let txns = store.get_transactions(user, None).unwrap();
    assert_eq!(txns[0].category_name.as_deref(), Some("Food & Dining"));
    assert_eq!(txns[0].category_color.as_deref(), Some("#3b82f6"));
}

#[test]
fn uncategorized_transaction_has_no_category_fields() {
    let store = test_store();
    let user = test_user(&store);
    store
        .insert_transaction(&txn(user, "Misc", dec!(5), TransactionKind::Expense, "2025-06-10"))
        .unwrap();

    let txns = store.get_transactions(user, None).unwrap();
    assert!(txns[0].category_name.is_none());
    assert!(txns[0].category_color.is_none());
}

#[test]
fn seed_default_categories_once() {
    let mut store = test_store();
    let user = test_user(&store);
    store.seed_default_categories(user).unwrap();
    let first = store.get_categories(user).unwrap();
    assert!(!first.is_empty());

    store.seed_default_categories(user).unwrap();
    let second = store.get_categories(user).unwrap();
    assert_eq!(first.len(), second.len());
}

#[test]
fn categories_ordered_by_name() {
    let store = test_store();
    let user = test_user(&store);
    for name in ["Zebra", "Apple", "Mango"] {
        store.insert_category(&Category::new(user, name.into())).unwrap();
    }
    let cats = store.get_categories(user).unwrap();
    let names: Vec<&str> = cats.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Apple", "Mango", "Zebra"]);
}

#[test]
fn active_profile_round_trip() {
    let store = test_store();
    let alice = test_user(&store);
    let bob = store
        .insert_profile(&Profile::new("Bob".into(), "bob@example.com".into()))
        .unwrap();

    assert!(store.get_active_profile().unwrap().is_none());

    store.set_active_profile(alice).unwrap();
    assert_eq!(store.get_active_profile().unwrap().unwrap().id, Some(alice));

    // activating another profile deactivates the first
    store.set_active_profile(bob).unwrap();
    assert_eq!(store.get_active_profile().unwrap().unwrap().id, Some(bob));

    store.clear_active_profile().unwrap();
    assert!(store.get_active_profile().unwrap().is_none());
}

#[test]
fn export_writes_signed_amounts() {
    let store = test_store();
    let user = test_user(&store);
    store
        .insert_transaction(&txn(user, "Salary", dec!(3000), TransactionKind::Income, "2025-06-01"))
        .unwrap();
    store
        .insert_transaction(&txn(user, "Rent", dec!(1200), TransactionKind::Expense, "2025-06-02"))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let count = store
        .export_to_csv(path.to_str().unwrap(), user, None)
        .unwrap();
    assert_eq!(count, 2);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Salary"));
    assert!(contents.contains("-1200"));
    assert!(contents.contains("3000"));
}

#[test]
fn export_respects_month_filter() {
    let store = test_store();
    let user = test_user(&store);
    store
        .insert_transaction(&txn(user, "June", dec!(10), TransactionKind::Expense, "2025-06-15"))
        .unwrap();
    store
        .insert_transaction(&txn(user, "May", dec!(10), TransactionKind::Expense, "2025-05-15"))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("june.csv");
    let count = store
        .export_to_csv(path.to_str().unwrap(), user, Some("2025-06"))
        .unwrap();
    assert_eq!(count, 1);
}
