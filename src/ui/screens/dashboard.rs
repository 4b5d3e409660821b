use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::metrics::SAVINGS_GOAL;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, parse_hex_color, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Length(3), // Savings gauge
            Constraint::Min(6),    // Recent transactions
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_savings_gauge(f, chunks[1], app);
    render_recent_transactions(f, chunks[2], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let s = &app.summary;

    render_card(
        f,
        cards[0],
        "Monthly Income",
        s.monthly_income,
        theme::GREEN,
        Some(format!("{} txns", s.monthly_income_count)),
    );
    render_card(
        f,
        cards[1],
        "Monthly Expenses",
        s.monthly_expenses,
        theme::RED,
        Some(format!("{} txns", s.monthly_expense_count)),
    );
    render_card(
        f,
        cards[2],
        "Total Balance",
        s.total_balance,
        if s.total_balance >= Decimal::ZERO {
            theme::GREEN
        } else {
            theme::RED
        },
        None,
    );
    render_card(
        f,
        cards[3],
        "Savings",
        s.current_savings,
        theme::ACCENT,
        Some(format!("{:.0}% of goal", s.savings_progress)),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    amount: Decimal,
    color: ratatui::style::Color,
    subtitle: Option<String>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let sub_text = subtitle.unwrap_or_default();

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(sub_text, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_savings_gauge(f: &mut Frame, area: Rect, app: &App) {
    // The raw progress can exceed 100%; the gauge clamps for display only
    let ratio = (app.summary.savings_progress / 100.0).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(Span::styled(
                    format!(" Savings Goal ({}) ", format_amount(SAVINGS_GOAL)),
                    Style::default()
                        .fg(theme::TEXT_DIM)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .gauge_style(Style::default().fg(theme::ACCENT).bg(theme::SURFACE))
        .ratio(ratio)
        .label(Span::styled(
            format!("{:.1}%", app.summary.savings_progress),
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        ));

    f.render_widget(gauge, area);
}

fn render_recent_transactions(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Recent Transactions ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    if app.transactions.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No transactions yet. Add one with :add",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let take = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = app
        .transactions
        .iter()
        .take(take)
        .map(|txn| {
            let amount_style = if txn.is_income() {
                theme::income_style()
            } else {
                theme::expense_style()
            };
            let sign = if txn.is_income() { "+" } else { "-" };
            let cat_color = txn
                .category_color
                .as_deref()
                .and_then(parse_hex_color)
                .unwrap_or(theme::TEXT_DIM);
            let cat_name = txn.category_name.as_deref().unwrap_or("—");

            Line::from(vec![
                Span::styled(format!(" {} ", txn.date), theme::dim_style()),
                Span::styled(
                    format!("{:<32}", truncate(&txn.description, 30)),
                    theme::normal_style(),
                ),
                Span::styled(format!("{:<18}", truncate(cat_name, 16)), Style::default().fg(cat_color)),
                Span::styled(
                    format!("{sign}{}", format_amount(txn.amount)),
                    amount_style,
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
