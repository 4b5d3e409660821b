use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{BudgetCategory, BudgetStatus};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.budgets.is_empty() {
        render_empty(f, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    render_totals(f, chunks[0], app);
    render_list(f, chunks[1], app);
}

fn render_totals(f: &mut Frame, area: Rect, app: &App) {
    let (total_limit, total_spent) = BudgetCategory::totals(&app.budgets);
    let remaining = total_limit - total_spent;

    let pct = if total_limit > Decimal::ZERO {
        (total_spent / total_limit * Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0)
    } else {
        0.0
    };
    let color = if pct >= 100.0 {
        theme::RED
    } else if pct >= 80.0 {
        theme::YELLOW
    } else {
        theme::ACCENT
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Total ", theme::dim_style()),
            Span::styled(
                format_amount(total_limit),
                theme::normal_style().add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Spent ", theme::dim_style()),
            Span::styled(format_amount(total_spent), Style::default().fg(color)),
            Span::styled("   Remaining ", theme::dim_style()),
            Span::styled(
                format_amount(remaining),
                if remaining < Decimal::ZERO {
                    theme::expense_style()
                } else {
                    theme::income_style()
                },
            ),
        ]),
        Line::from(vec![
            Span::styled(progress_bar(pct / 100.0, 30), Style::default().fg(color)),
            Span::styled(
                format!(" {pct:.0}%"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Monthly Budget ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_list(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .budgets
        .iter()
        .enumerate()
        .skip(app.budget_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, budget)| {
            let color = match budget.status() {
                BudgetStatus::Over => theme::RED,
                BudgetStatus::Warning => theme::YELLOW,
                BudgetStatus::Good => theme::budget_color(&budget.color),
            };

            let style = if i == app.budget_index {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let bar = progress_bar(budget.display_percentage() / 100.0, 20);
            let display_name = truncate(&budget.name, 17);

            let remaining = budget.remaining();
            let remaining_label = if remaining < Decimal::ZERO {
                format!(" {} over", format_amount(remaining.abs()))
            } else {
                format!(" {} left", format_amount(remaining))
            };
            let status_tag = match budget.status() {
                BudgetStatus::Good => String::new(),
                s => format!(" [{}]", s.as_str()),
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{display_name:<18}"), style),
                Span::styled(
                    format!(
                        "{}/{} ",
                        format_amount(budget.spent_amount),
                        format_amount(budget.limit_amount)
                    ),
                    Style::default().fg(color),
                ),
                Span::styled(bar, Style::default().fg(color)),
                Span::styled(
                    format!(" {:.0}%", budget.percentage()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(remaining_label, theme::dim_style()),
                Span::styled(status_tag, Style::default().fg(color)),
            ]))
        })
        .collect();

    let over_count = app
        .budgets
        .iter()
        .filter(|b| b.status() == BudgetStatus::Over)
        .count();
    let title = if over_count > 0 {
        format!(" Budgets ({} over limit) ", over_count)
    } else {
        " Budgets ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(list, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("No budget categories", theme::dim_style())),
        Line::from(""),
        Line::from(Span::styled(
            "Use :budget <name> <limit> to add one",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Budgets ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(msg, area);
}

fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * width as f64) as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
