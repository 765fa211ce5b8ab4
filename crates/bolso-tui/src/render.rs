//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never
//! mutate state or return effects.

use bolso_core::money::format_brl;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::state::{
    AppState, DashboardField, DashboardScreen, LoginField, LoginScreen, RegisterField,
    RegisterScreen, Screen,
};

const ACCENT: Color = Color::Indexed(99);
const INCOME_COLOR: Color = Color::Green;
const EXPENSE_COLOR: Color = Color::Red;

/// Renders the entire TUI to the frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    // The gate holds rendering until the persisted flag has been read.
    if !state.ready {
        return;
    }

    match &state.screen {
        Screen::Login(screen) => render_login(screen, frame),
        Screen::Register(screen) => render_register(screen, frame),
        Screen::Dashboard(screen) => render_dashboard(screen, frame),
    }
}

fn render_login(screen: &LoginScreen, frame: &mut Frame) {
    let area = centered_box(frame.area(), 48, 13);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(1), // error
            Constraint::Length(2), // hints
        ])
        .split(area);

    frame.render_widget(title_line("Entrar no SmartBudget"), rows[0]);
    render_field(
        frame,
        rows[1],
        "E-mail",
        &screen.email,
        screen.focus == LoginField::Email,
    );
    render_field(
        frame,
        rows[2],
        "Senha",
        &mask(&screen.password),
        screen.focus == LoginField::Password,
    );
    render_feedback(frame, rows[3], screen.in_flight, screen.error.as_deref());
    frame.render_widget(
        hint_line("Enter entrar • Tab campo • Ctrl+T criar conta • Esc sair"),
        rows[4],
    );
}

fn render_register(screen: &RegisterScreen, frame: &mut Frame) {
    let area = centered_box(frame.area(), 48, 16);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(3), // name
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(1), // error
            Constraint::Length(2), // hints
        ])
        .split(area);

    frame.render_widget(title_line("Criar conta"), rows[0]);
    render_field(
        frame,
        rows[1],
        "Nome",
        &screen.name,
        screen.focus == RegisterField::Name,
    );
    render_field(
        frame,
        rows[2],
        "E-mail",
        &screen.email,
        screen.focus == RegisterField::Email,
    );
    render_field(
        frame,
        rows[3],
        "Senha",
        &mask(&screen.password),
        screen.focus == RegisterField::Password,
    );
    render_feedback(frame, rows[4], screen.in_flight, screen.error.as_deref());
    frame.render_widget(
        hint_line("Enter cadastrar • Tab campo • Ctrl+T já tenho conta • Esc sair"),
        rows[5],
    );
}

fn render_dashboard(screen: &DashboardScreen, frame: &mut Frame) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + status
            Constraint::Length(3), // period filter
            Constraint::Length(4), // summary cards
            Constraint::Length(4), // top category + insight
            Constraint::Length(3), // new transaction form
            Constraint::Min(1),    // transactions
            Constraint::Length(1), // hints
        ])
        .split(area);

    let header = vec![
        Line::from(Span::styled(
            "SmartBudget",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            screen.status.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(header), rows[0]);

    render_field(
        frame,
        rows[1],
        "Período (YYYY-MM)",
        &screen.period_input,
        screen.focus == DashboardField::Period,
    );

    render_summary_cards(screen, frame, rows[2]);
    render_insight(screen, frame, rows[3]);
    render_transaction_form(screen, frame, rows[4]);
    render_transactions(screen, frame, rows[5]);

    frame.render_widget(
        hint_line(
            "Enter salvar/filtrar • Tab campo • Espaço tipo • Ctrl+R atualizar • Ctrl+L sair",
        ),
        rows[6],
    );
}

fn render_summary_cards(screen: &DashboardScreen, frame: &mut Frame, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let summary = screen.data.as_ref().map(|data| &data.summary);
    let value = |field: Option<&String>| format_brl(field.map_or("0", String::as_str));

    render_card(
        frame,
        cards[0],
        "Saldo",
        &value(summary.map(|s| &s.balance)),
        ACCENT,
    );
    render_card(
        frame,
        cards[1],
        "Receita",
        &value(summary.map(|s| &s.income)),
        INCOME_COLOR,
    );
    render_card(
        frame,
        cards[2],
        "Gastos",
        &value(summary.map(|s| &s.expense)),
        EXPENSE_COLOR,
    );
}

fn render_insight(screen: &DashboardScreen, frame: &mut Frame, area: Rect) {
    let period = screen
        .data
        .as_ref()
        .map_or("-", |data| data.period.as_str());
    let top_category = screen
        .data
        .as_ref()
        .and_then(|data| data.top_category.as_deref())
        .unwrap_or("-");
    let insight = screen
        .data
        .as_ref()
        .and_then(|data| data.insight.as_deref())
        .unwrap_or("-");

    let lines = vec![
        Line::from(format!("Período: {period}  •  Top categoria: {top_category}")),
        Line::from(Span::styled(
            insight.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Resumo")),
        area,
    );
}

fn render_transaction_form(screen: &DashboardScreen, frame: &mut Frame, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
        ])
        .split(area);

    render_field(
        frame,
        cells[0],
        "Valor",
        &screen.form.amount,
        screen.focus == DashboardField::Amount,
    );
    render_field(
        frame,
        cells[1],
        "Descrição",
        &screen.form.description,
        screen.focus == DashboardField::Description,
    );
    render_field(
        frame,
        cells[2],
        "Data",
        &screen.form.date,
        screen.focus == DashboardField::Date,
    );
    render_field(
        frame,
        cells[3],
        "Tipo",
        screen.form.kind.label(),
        screen.focus == DashboardField::Kind,
    );
}

fn render_transactions(screen: &DashboardScreen, frame: &mut Frame, area: Rect) {
    let transactions = screen
        .data
        .as_ref()
        .map(|data| data.transactions.as_slice())
        .unwrap_or_default();

    let title = match transactions.len() {
        1 => "Transações (1 transação)".to_string(),
        n => format!("Transações ({n} transações)"),
    };

    let lines: Vec<Line> = if transactions.is_empty() {
        vec![Line::from(Span::styled(
            "Nenhuma transação cadastrada ainda.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        transactions
            .iter()
            .map(|txn| {
                let color = match txn.kind.sign() {
                    '+' => INCOME_COLOR,
                    _ => EXPENSE_COLOR,
                };
                Line::from(vec![
                    Span::styled(
                        format!("{} {:>12}", txn.kind.sign(), format_brl(&txn.amount)),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  {}  {}", txn.date, txn.description)),
                    Span::styled(
                        format!("  • {}", txn.category),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn render_card(frame: &mut Frame, area: Rect, label: &str, value: &str, color: Color) {
    let line = Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(label.to_string())),
        area,
    );
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let cursor = if focused { "▏" } else { "" };

    frame.render_widget(
        Paragraph::new(format!("{value}{cursor}")).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(label.to_string()),
        ),
        area,
    );
}

fn render_feedback(frame: &mut Frame, area: Rect, in_flight: bool, error: Option<&str>) {
    let line = if in_flight {
        Line::from(Span::styled("...", Style::default().fg(Color::DarkGray)))
    } else if let Some(message) = error {
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(EXPENSE_COLOR),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn hint_line(text: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    )))
}

fn title_line(text: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
}

/// Centers a fixed-size box inside the available area, clamped to fit.
fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn mask(value: &str) -> String {
    "*".repeat(value.chars().count())
}
