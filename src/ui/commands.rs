use std::collections::HashMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use std::str::FromStr;

use super::app::{App, InputMode, PendingAction, Screen};
use crate::models::{BudgetCategory, Category};
use crate::store::Store;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Store) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit FinDash", cmd_quit, r);
    register_command!("quit", "Quit FinDash", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("b", "Go to Budgets", cmd_budgets, r);
    register_command!("budgets", "Go to Budgets", cmd_budgets, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("month", "Set month (e.g. :month 2025-06)", cmd_month, r);
    register_command!("m", "Set month (e.g. :m 2025-06)", cmd_month, r);
    register_command!("next-month", "Go to next month", cmd_next_month, r);
    register_command!("prev-month", "Go to previous month", cmd_prev_month, r);
    register_command!(
        "search",
        "Search transactions (e.g. :search coffee)",
        cmd_search,
        r
    );
    register_command!("s", "Search transactions (e.g. :s coffee)", cmd_search, r);
    register_command!("add", "Add a transaction (opens form)", cmd_add, r);
    register_command!("a", "Add a transaction (opens form)", cmd_add, r);
    register_command!(
        "budget",
        "Add budget category (e.g. :budget Groceries 400, or no args for form)",
        cmd_budget,
        r
    );
    register_command!(
        "category",
        "Create category (e.g. :category Subscriptions)",
        cmd_category,
        r
    );
    register_command!(
        "delete-txn",
        "Delete selected transaction",
        cmd_delete_txn,
        r
    );
    register_command!(
        "export",
        "Export transactions to CSV (e.g. :export ~/finances.csv)",
        cmd_export,
        r
    );
    register_command!(
        "sign-out",
        "Sign out (forget active profile on exit)",
        cmd_sign_out,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        // Try fuzzy match
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh_dashboard(store);
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    app.refresh_transactions(store);
    app.refresh_categories(store);
    Ok(())
}

fn cmd_budgets(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Budgets;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_month(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        // No args → back to the current calendar month
        app.current_month = chrono::Local::now().format("%Y-%m").to_string();
        app.refresh_dashboard(store);
        app.set_status(format!("Month: {}", app.current_month));
        return Ok(());
    }

    // Accept formats like "2025-06", "2025-6", "06", "6"
    let month = if args.len() <= 2 {
        let year = app.current_month[..4].to_string();
        format!("{year}-{args:0>2}")
    } else {
        args.to_string()
    };

    // Validate by parsing as an actual date, then normalize the format
    if let Ok(date) = chrono::NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d") {
        let m = date.format("%Y-%m").to_string();
        app.set_status(format!("Switched to month: {m}"));
        app.current_month = m;
        app.refresh_dashboard(store);
    } else {
        app.set_status("Invalid month format. Use YYYY-MM (e.g. 2025-06)");
    }

    Ok(())
}

fn cmd_next_month(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    advance_month(app, store, 1)
}

fn cmd_prev_month(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    advance_month(app, store, -1)
}

fn cmd_search(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.search_input = args.to_string();
    app.screen = Screen::Transactions;
    app.transaction_index = 0;
    app.transaction_scroll = 0;
    app.refresh_transactions(store);

    if args.is_empty() {
        app.set_status("Search cleared");
    } else {
        app.set_status(format!("Searching: {args}"));
    }

    Ok(())
}

fn cmd_add(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.open_transaction_form(store);
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.open_budget_form();
        return Ok(());
    }

    // Last token is the limit, everything before is the name
    let parts: Vec<&str> = args.rsplitn(2, ' ').collect();
    if parts.len() < 2 {
        app.set_status("Usage: :budget <name> <limit>. Example: :budget Groceries 400");
        return Ok(());
    }

    let limit_str = parts[0];
    let name = parts[1];

    let limit = match Decimal::from_str(limit_str) {
        Ok(a) => a,
        Err(_) => {
            app.set_status(format!("Invalid limit: {limit_str}"));
            return Ok(());
        }
    };

    let next_id = app.budgets.iter().map(|b| b.id).max().unwrap_or(0) + 1;
    app.budgets
        .push(BudgetCategory::new(next_id, name.to_string(), limit));
    app.screen = Screen::Budgets;
    app.set_status(format!("Budget added: {name} = ${limit}"));
    Ok(())
}

fn cmd_category(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :category <name>. Creates a new category");
        return Ok(());
    }

    if Category::find_by_name(&app.categories, args).is_some() {
        app.set_status(format!("Category '{args}' already exists"));
        return Ok(());
    }

    let cat = Category::new(app.user_id, args.to_string());
    match store.insert_category(&cat) {
        Ok(_) => {
            app.refresh_categories(store);
            app.set_status(format!("Created category: {args}"));
        }
        Err(e) => app.notify(super::notice::Notice::error("Error", e.to_string())),
    }
    Ok(())
}

fn cmd_delete_txn(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    if app.screen != Screen::Transactions || app.transactions.is_empty() {
        app.set_status("Navigate to Transactions and select one first");
        return Ok(());
    }

    app.request_delete_transaction();
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/findash-export-{}.csv", app.current_month)
    } else {
        crate::run::shellexpand(args)
    };

    match store.export_to_csv(&path, app.user_id, None) {
        Ok(0) => app.set_status("No transactions to export"),
        Ok(count) => app.set_status(format!("Exported {count} transactions to {path}")),
        Err(e) => app.notify(super::notice::Notice::error("Error", e.to_string())),
    }
    Ok(())
}

fn cmd_sign_out(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.confirm_message = format!("Sign out {}?", app.profile_name);
    app.pending_action = Some(PendingAction::SignOut);
    app.input_mode = InputMode::Confirm;
    Ok(())
}

fn advance_month(app: &mut App, store: &mut Store, delta: i32) -> anyhow::Result<()> {
    let base = app.current_month.clone();
    if let Ok(date) = chrono::NaiveDate::parse_from_str(&format!("{base}-01"), "%Y-%m-%d") {
        let new_date = if delta > 0 {
            date.checked_add_months(chrono::Months::new(1))
        } else {
            date.checked_sub_months(chrono::Months::new(1))
        };

        if let Some(d) = new_date {
            let m = d.format("%Y-%m").to_string();
            app.set_status(format!("Month: {m}"));
            app.current_month = m;
            app.refresh_dashboard(store);
        }
    }

    Ok(())
}
