mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::*;

/// User-scoped data access. Owns persistence and querying for
/// transactions, categories, and profiles; callers never see SQL.
pub(crate) struct Store {
    conn: Connection,
}

impl Store {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open data store: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .context("Failed to set store pragmas")?;
        let mut store = Self { conn };
        store.migrate().context("Store migration failed")?;
        Ok(store)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let mut store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Profiles ──────────────────────────────────────────────

    pub(crate) fn insert_profile(&self, profile: &Profile) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO profiles (name, email, is_active, created_at) VALUES (?1, ?2, 0, ?3)",
            params![profile.name, profile.email, profile.created_at],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub(crate) fn get_profiles(&self) -> Result<Vec<Profile>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, email, created_at FROM profiles ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Profile {
                id: Some(row.get(0)?),
                name: row.get(1)?,
                email: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn get_active_profile(&self) -> Result<Option<Profile>> {
        let result = self.conn.query_row(
            "SELECT id, name, email, created_at FROM profiles WHERE is_active = 1 LIMIT 1",
            [],
            |row| {
                Ok(Profile {
                    id: Some(row.get(0)?),
                    name: row.get(1)?,
                    email: row.get(2)?,
                    created_at: row.get(3)?,
                })
            },
        );
        match result {
            Ok(p) => Ok(Some(p)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub(crate) fn set_active_profile(&self, id: i64) -> Result<()> {
        self.conn.execute("UPDATE profiles SET is_active = 0", [])?;
        self.conn.execute(
            "UPDATE profiles SET is_active = 1 WHERE id = ?1",
            params![id],
        )?;
        Ok(())
    }

    pub(crate) fn clear_active_profile(&self) -> Result<()> {
        self.conn.execute("UPDATE profiles SET is_active = 0", [])?;
        Ok(())
    }

    // ── Categories ────────────────────────────────────────────

    pub(crate) fn seed_default_categories(&mut self, user_id: i64) -> Result<()> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM categories WHERE user_id = ?1",
            params![user_id],
            |row| row.get(0),
        )?;
        if count > 0 {
            return Ok(());
        }

        let defaults = [
            // income
            ("Salary", "#22c55e", "banknote"),
            ("Freelance", "#4ade80", "laptop"),
            ("Investment", "#10b981", "trending-up"),
            ("Business", "#34d399", "briefcase"),
            ("Other Income", "#86efac", "coins"),
            // expense
            ("Food & Dining", "#3b82f6", "utensils"),
            ("Transportation", "#14b8a6", "car"),
            ("Shopping", "#ec4899", "shopping-bag"),
            ("Entertainment", "#a855f7", "clapperboard"),
            ("Bills & Utilities", "#f97316", "receipt"),
            ("Healthcare", "#ef4444", "heart-pulse"),
            ("Education", "#eab308", "graduation-cap"),
            ("Other Expense", "#6b7280", "tag"),
        ];

        let tx = self.conn.transaction()?;
        for (name, color, icon) in &defaults {
            tx.execute(
                "INSERT OR IGNORE INTO categories (user_id, name, color, icon) VALUES (?1, ?2, ?3, ?4)",
                params![user_id, name, color, icon],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    pub(crate) fn get_categories(&self, user_id: i64) -> Result<Vec<Category>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, name, color, icon FROM categories WHERE user_id = ?1 ORDER BY name",
        )?;
        let rows = stmt.query_map(params![user_id], |row| {
            Ok(Category {
                id: Some(row.get(0)?),
                user_id: row.get(1)?,
                name: row.get(2)?,
                color: row.get(3)?,
                icon: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn insert_category(&self, cat: &Category) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO categories (user_id, name, color, icon) VALUES (?1, ?2, ?3, ?4)",
            params![cat.user_id, cat.name, cat.color, cat.icon],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    // ── Transactions ──────────────────────────────────────────

    /// All transactions for the user, newest first, each joined with its
    /// category's display name and color when one is set.
    pub(crate) fn get_transactions(
        &self,
        user_id: i64,
        search: Option<&str>,
    ) -> Result<Vec<Transaction>> {
        let mut sql = String::from(
            "SELECT t.id, t.user_id, t.description, t.amount, t.category_id,
                    t.transaction_type, t.transaction_date, t.created_at,
                    c.name, c.color
             FROM transactions t
             LEFT JOIN categories c ON t.category_id = c.id
             WHERE t.user_id = ?1",
        );
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = vec![Box::new(user_id)];

        if let Some(s) = search {
            sql.push_str(&format!(
                " AND t.description LIKE ?{}",
                param_values.len() + 1
            ));
            param_values.push(Box::new(format!("%{s}%")));
        }

        sql.push_str(" ORDER BY t.transaction_date DESC, t.created_at DESC, t.id DESC");

        let params_ref: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_ref.as_slice(), |row| {
            let amount_str: String = row.get(3)?;
            let kind_str: String = row.get(5)?;
            Ok(Transaction {
                id: Some(row.get(0)?),
                user_id: row.get(1)?,
                description: row.get(2)?,
                amount: Decimal::from_str(&amount_str).unwrap_or_default(),
                category_id: row.get(4)?,
                kind: TransactionKind::parse(&kind_str).unwrap_or(TransactionKind::Expense),
                date: row.get(6)?,
                created_at: row.get(7)?,
                category_name: row.get(8)?,
                category_color: row.get(9)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn insert_transaction(&self, txn: &Transaction) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO transactions (user_id, description, amount, category_id, transaction_type, transaction_date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                txn.user_id,
                txn.description,
                txn.amount.to_string(),
                txn.category_id,
                txn.kind.as_str(),
                txn.date,
                txn.created_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub(crate) fn delete_transaction(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM transactions WHERE id = ?1", params![id])?;
        Ok(())
    }

    pub(crate) fn get_transaction_count(&self, user_id: i64) -> Result<i64> {
        Ok(self.conn.query_row(
            "SELECT COUNT(*) FROM transactions WHERE user_id = ?1",
            params![user_id],
            |row| row.get(0),
        )?)
    }

    // ── Export ────────────────────────────────────────────────

    /// Write the user's transactions (optionally one month's worth) to a
    /// CSV file. Returns how many rows were written.
    pub(crate) fn export_to_csv(
        &self,
        path: &str,
        user_id: i64,
        month: Option<&str>,
    ) -> Result<usize> {
        let txns = self.get_transactions(user_id, None)?;
        let txns: Vec<&Transaction> = txns
            .iter()
            .filter(|t| month.map_or(true, |m| t.in_month(m)))
            .collect();
        if txns.is_empty() {
            return Ok(0);
        }

        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create export file: {path}"))?;
        wtr.write_record(["date", "description", "category", "type", "amount"])?;
        for txn in &txns {
            wtr.write_record([
                txn.date.as_str(),
                txn.description.as_str(),
                txn.category_name.as_deref().unwrap_or(""),
                txn.kind.as_str(),
                &txn.signed_amount().to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(txns.len())
    }
}

#[cfg(test)]
mod tests;
