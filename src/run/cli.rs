use anyhow::Result;

use crate::metrics;
use crate::session::Session;
use crate::store::Store;

pub(crate) fn as_cli(args: &[String], store: &mut Store, session: &Session) -> Result<()> {
    match args[1].as_str() {
        "export" => cli_export(&args[2..], store, session),
        "summary" | "s" => cli_summary(&args[2..], store, session),
        "whoami" => {
            println!("{}", session.profile.display_name());
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("findash {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("FinDash — a personal finance dashboard for the terminal");
    println!();
    println!("Usage: findash [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  export [path]                 Export transactions to CSV");
    println!("    --month <YYYY-MM>           Limit export to one month (default: all)");
    println!("  summary [YYYY-MM]             Print monthly financial summary");
    println!("  whoami                        Show the active profile");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_export(args: &[String], store: &mut Store, session: &Session) -> Result<()> {
    let month = args
        .windows(2)
        .find(|w| w[0] == "--month")
        .map(|w| w[1].clone());

    // Output path is the first non-flag argument
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| shellexpand(a))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            let suffix = month.as_deref().unwrap_or("all");
            format!("{home}/findash-export-{suffix}.csv")
        });

    let count = store.export_to_csv(&output_path, session.user_id(), month.as_deref())?;
    if count == 0 {
        println!("No transactions to export");
    } else {
        println!("Exported {count} transactions to {output_path}");
    }
    Ok(())
}

fn cli_summary(args: &[String], store: &mut Store, session: &Session) -> Result<()> {
    let month = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .cloned()
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m").to_string());

    let txns = store.get_transactions(session.user_id(), None)?;
    let summary = metrics::compute(&txns, &month);

    println!("FinDash — {month} ({})", session.profile.display_name());
    println!("{}", "─".repeat(40));
    println!("  Income:     ${:.2}", summary.monthly_income);
    println!("  Expenses:   ${:.2}", summary.monthly_expenses);
    println!(
        "  Net:        ${:.2}",
        summary.monthly_income - summary.monthly_expenses
    );
    println!("  Balance:    ${:.2}", summary.total_balance);
    println!("  Savings:    ${:.2}", summary.current_savings);
    println!("  Goal:       {:.1}%", summary.savings_progress);
    println!("  Total Txns: {}", txns.len());

    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
