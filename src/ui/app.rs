use chrono::Local;

use crate::metrics::{self, Summary};
use crate::models::*;
use crate::session::Session;
use crate::store::Store;

use super::forms::{BudgetForm, TransactionForm};
use super::notice::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
    Budgets,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Transactions, Self::Budgets]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Budgets => write!(f, "Budgets"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Form,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Form => write!(f, "FORM"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteTransaction { id: i64, description: String },
    SignOut,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) notice: Option<Notice>,
    pub(crate) show_help: bool,
    pub(crate) current_month: String,

    pub(crate) user_id: i64,
    pub(crate) profile_name: String,

    // Dashboard
    pub(crate) summary: Summary,

    // Transactions
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,
    pub(crate) transaction_count: i64,

    pub(crate) categories: Vec<Category>,

    // Budgets (session-local, not persisted)
    pub(crate) budgets: Vec<BudgetCategory>,
    pub(crate) budget_index: usize,
    pub(crate) budget_scroll: usize,

    // Modal forms
    pub(crate) transaction_form: Option<TransactionForm>,
    pub(crate) budget_form: Option<BudgetForm>,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(session: &Session) -> Self {
        let current_month = Local::now().format("%Y-%m").to_string();

        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            notice: None,
            show_help: false,
            current_month,

            user_id: session.user_id(),
            profile_name: session.profile.display_name().to_string(),

            summary: Summary::default(),

            transactions: Vec::new(),
            transaction_index: 0,
            transaction_scroll: 0,
            transaction_count: 0,

            categories: Vec::new(),

            budgets: BudgetCategory::sample_set(),
            budget_index: 0,
            budget_scroll: 0,

            transaction_form: None,
            budget_form: None,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    // ── Refresh (single attempt, errors become notices) ───────

    /// Recompute headline numbers from the full transaction list,
    /// ignoring any active search filter.
    pub(crate) fn refresh_dashboard(&mut self, store: &Store) {
        match store.get_transactions(self.user_id, None) {
            Ok(txns) => self.summary = metrics::compute(&txns, &self.current_month),
            Err(_) => self.notify(Notice::error("Error", "Failed to fetch transactions")),
        }
        self.refresh_transactions(store);
    }

    pub(crate) fn refresh_transactions(&mut self, store: &Store) {
        let search = if self.search_input.is_empty() {
            None
        } else {
            Some(self.search_input.as_str())
        };
        match store.get_transactions(self.user_id, search) {
            Ok(txns) => {
                self.transactions = txns;
                if self.transaction_index >= self.transactions.len()
                    && !self.transactions.is_empty()
                {
                    self.transaction_index = self.transactions.len() - 1;
                }
            }
            Err(_) => self.notify(Notice::error("Error", "Failed to fetch transactions")),
        }
        if let Ok(count) = store.get_transaction_count(self.user_id) {
            self.transaction_count = count;
        }
    }

    pub(crate) fn refresh_categories(&mut self, store: &Store) {
        match store.get_categories(self.user_id) {
            Ok(cats) => self.categories = cats,
            Err(_) => self.notify(Notice::error("Error", "Failed to fetch categories")),
        }
    }

    pub(crate) fn refresh_all(&mut self, store: &Store) {
        self.refresh_dashboard(store);
        self.refresh_categories(store);
    }

    // ── Forms ─────────────────────────────────────────────────

    pub(crate) fn open_transaction_form(&mut self, store: &Store) {
        self.refresh_categories(store);
        self.transaction_form = Some(TransactionForm::new());
        self.input_mode = InputMode::Form;
    }

    pub(crate) fn open_budget_form(&mut self) {
        self.budget_form = Some(BudgetForm::new());
        self.input_mode = InputMode::Form;
    }

    pub(crate) fn close_forms(&mut self) {
        self.transaction_form = None;
        self.budget_form = None;
        self.input_mode = InputMode::Normal;
    }

    /// Validate, insert, then refetch. On a store failure the form
    /// stays open so nothing typed is lost.
    pub(crate) fn submit_transaction_form(&mut self, store: &Store) {
        let built = match &self.transaction_form {
            Some(form) => form.build(self.user_id, &self.categories),
            None => return,
        };
        match built {
            Err(e) => self.notify(Notice::error("Error", e.0)),
            Ok(txn) => match store.insert_transaction(&txn) {
                Ok(_) => {
                    self.close_forms();
                    self.refresh_dashboard(store);
                    self.notify(Notice::info("Success", "Transaction added successfully"));
                }
                Err(e) => self.notify(Notice::error("Error", e.to_string())),
            },
        }
    }

    pub(crate) fn submit_budget_form(&mut self) {
        let built = match &self.budget_form {
            Some(form) => {
                let next_id = self.budgets.iter().map(|b| b.id).max().unwrap_or(0) + 1;
                form.build(next_id)
            }
            None => return,
        };
        match built {
            Err(e) => self.notify(Notice::error("Error", e.0)),
            Ok(budget) => {
                self.budgets.push(budget);
                self.close_forms();
                self.screen = Screen::Budgets;
                self.notify(Notice::info("Success", "Budget category added"));
            }
        }
    }

    // ── Deletion ──────────────────────────────────────────────

    pub(crate) fn request_delete_transaction(&mut self) {
        if let Some(txn) = self.transactions.get(self.transaction_index) {
            if let Some(id) = txn.id {
                let description = txn.description.clone();
                self.confirm_message = format!("Delete '{description}'?");
                self.pending_action = Some(PendingAction::DeleteTransaction { id, description });
                self.input_mode = InputMode::Confirm;
            }
        }
    }

    pub(crate) fn delete_transaction(&mut self, store: &Store, id: i64) {
        match store.delete_transaction(id) {
            Ok(()) => {
                self.refresh_dashboard(store);
                if self.transaction_index >= self.transactions.len() {
                    self.transaction_index = self.transactions.len().saturating_sub(1);
                }
                self.notify(Notice::info("Success", "Transaction deleted successfully"));
            }
            Err(e) => self.notify(Notice::error("Error", e.to_string())),
        }
    }

    // ── Notices ───────────────────────────────────────────────

    pub(crate) fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.notice = Some(Notice::info("", msg));
    }

    pub(crate) fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub(crate) fn transaction_page(&self) -> usize {
        self.visible_rows.max(1)
    }

    pub(crate) fn budget_page(&self) -> usize {
        self.visible_rows.max(1)
    }
}
