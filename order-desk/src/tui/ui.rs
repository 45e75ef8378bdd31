//! Rendering
//!
//! Stateless: every frame re-derives rows and tallies from the dashboard.

use ratatui::{prelude::*, widgets::*};
use shared::models::Order;
use shared::order::{PlatformColor, Severity, StatusFilter};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use super::app::{App, InputMode, strip_entries};
use crate::orders::money::format_currency;
use crate::orders::{EditField, EditorMode, OrderEditor};
use crate::utils::time::format_datetime;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Secondary => Color::Gray,
        Severity::Warning => Color::Yellow,
        Severity::Processing => Color::Cyan,
        Severity::Success => Color::Green,
        Severity::Destructive => Color::Red,
    }
}

fn platform_color(color: PlatformColor) -> Color {
    match color {
        PlatformColor::Purple => Color::Magenta,
        PlatformColor::Orange => Color::LightRed,
        PlatformColor::Blue => Color::Blue,
        PlatformColor::Green => Color::Green,
        PlatformColor::Gray => Color::Gray,
    }
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Status strip
            Constraint::Length(4), // Filter bar
            Constraint::Min(6),    // Table + detail
            Constraint::Length(8), // Toasts + logs
            Constraint::Length(3), // Input
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_status_strip(f, app, chunks[1]);
    render_filter_bar(f, app, chunks[2]);

    match &app.dashboard.state().editor {
        Some(editor) => {
            let main = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(chunks[3]);
            render_table(f, app, main[0]);
            render_detail(f, app, editor, main[1]);
        }
        None => render_table(f, app, chunks[3]),
    }

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[4]);
    render_toasts(f, app, bottom[0]);
    render_logs(f, app, bottom[1]);

    render_input(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let total = app.dashboard.orders().len();
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " 訂單管理 ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" | 共 {total} 筆 | ")),
        Span::styled(
            "[i]手動匯入 [b]批次修改 [:]指令 [q]離開",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(bordered(""));
    f.render_widget(title, area);
}

fn render_status_strip(f: &mut Frame, app: &App, area: Rect) {
    let dashboard = &app.dashboard;
    let counts: Vec<_> = dashboard
        .counts()
        .into_iter()
        .chain(dashboard.special_counts())
        .collect();
    let active = dashboard.state().active_status;

    let mut spans = Vec::new();
    for (idx, entry) in strip_entries().into_iter().enumerate() {
        let (label, count, color) = match entry {
            StatusFilter::All => ("全部".to_string(), dashboard.orders().len(), Color::White),
            StatusFilter::Tag(tag) => {
                let count = counts
                    .iter()
                    .find(|c| c.status == tag)
                    .map(|c| c.count)
                    .unwrap_or_default();
                (tag.label().to_string(), count, severity_color(tag.severity()))
            }
        };
        let mut style = Style::default().fg(color);
        if entry == active {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        if idx == app.status_cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!(" {label} {count} "), style));
        spans.push(Span::raw(" "));
    }

    let strip = Paragraph::new(Line::from(spans))
        .block(bordered(" 狀態 "))
        .wrap(Wrap { trim: true });
    f.render_widget(strip, area);
}

fn render_filter_bar(f: &mut Frame, app: &App, area: Rect) {
    let state = app.dashboard.state();
    let filters = &state.filters;

    let platform = filters.platform.map(|p| p.label()).unwrap_or("全部平台");
    let status = filters.status.map(|s| s.label()).unwrap_or("全部");
    let date = filters
        .date_range
        .map(|r| {
            let fmt = |d: Option<chrono::NaiveDate>| {
                d.map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "…".to_string())
            };
            format!("{} ~ {}", fmt(r.start), fmt(r.end))
        })
        .unwrap_or_else(|| "不限".to_string());
    let amount = filters
        .amount_range
        .map(|r| {
            let fmt = |v: Option<f64>| v.map(format_currency).unwrap_or_else(|| "…".to_string());
            format!("{} ~ {}", fmt(r.min), fmt(r.max))
        })
        .unwrap_or_else(|| "不限".to_string());
    let sort = match (state.sort.field(), state.sort.direction()) {
        (Some(field), Some(direction)) => format!("{}{}", field.label(), direction.arrow()),
        _ => "預設".to_string(),
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(format!(
            " 搜尋: {}  平台[p]: {platform}  狀態: {status}  日期: {date}  金額: {amount}  排序[s/r]: {sort}",
            filters.query().unwrap_or("-")
        )),
    ])];

    if state.selection.is_empty() {
        lines.push(Line::from(Span::styled(
            " [space]勾選 [a]全選 [v]檢視 [e]編輯",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        let mut spans = vec![Span::styled(
            format!(" 已選擇 {} 筆訂單 ", state.selection.len()),
            Style::default().fg(Color::Black).bg(Color::Gray),
        )];
        for (key, kind) in app.batch_hints() {
            let color = if kind.is_destructive() {
                Color::Red
            } else {
                Color::Cyan
            };
            spans.push(Span::styled(
                format!("  [{key}]{}", kind.label()),
                Style::default().fg(color),
            ));
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines).block(bordered(" 篩選 ")), area);
}

fn order_row<'a>(order: &'a Order, checked: bool) -> Row<'a> {
    let platform = order.platform;
    let status_style = Style::default().fg(severity_color(order.status.severity()));
    let mut flags = String::new();
    if order.is_abnormal {
        flags.push('!');
    }
    if order.is_on_hold {
        flags.push('⏸');
    }

    Row::new(vec![
        Cell::from(if checked { "[x]" } else { "[ ]" }),
        Cell::from(format!("{}{}", order.order_number, flags)),
        Cell::from(Span::styled(
            format!("{} {}", platform.icon().glyph(), platform.label()),
            Style::default().fg(platform_color(platform.color())),
        )),
        Cell::from(format_datetime(&order.create_date)),
        Cell::from(Span::styled(order.status.label(), status_style)),
        Cell::from(order.customer_name.as_str()),
        Cell::from(order.quantity.to_string()),
        Cell::from(format_currency(order.total_amount)),
        Cell::from(order.tracking_number.as_deref().unwrap_or("-")),
    ])
}

fn render_table(f: &mut Frame, app: &App, area: Rect) {
    let state = app.dashboard.state();
    let rows: Vec<Row> = app
        .dashboard
        .visible()
        .into_iter()
        .map(|order| order_row(order, state.selection.contains(&order.id)))
        .collect();
    let row_count = rows.len();

    let header_check = if app.dashboard.is_all_selected() {
        "[x]"
    } else {
        "[ ]"
    };
    let header = Row::new(vec![
        header_check,
        "訂單編號",
        "平台",
        "建立時間",
        "狀態",
        "客戶",
        "數量",
        "金額",
        "物流單號",
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let widths = [
        Constraint::Length(3),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(16),
        Constraint::Length(14),
        Constraint::Length(8),
        Constraint::Length(4),
        Constraint::Length(10),
        Constraint::Min(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(bordered(" 訂單 "))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut table_state = TableState::default();
    if row_count > 0 {
        table_state.select(Some(app.row_cursor));
    }
    f.render_stateful_widget(table, area, &mut table_state);

    if row_count == 0 {
        let inner = area.inner(Margin::new(2, 2));
        f.render_widget(
            Paragraph::new("沒有符合條件的訂單").style(Style::default().fg(Color::DarkGray)),
            inner,
        );
    }
}

fn render_detail(f: &mut Frame, app: &App, editor: &OrderEditor, area: Rect) {
    let order = editor.displayed();
    let editing = editor.mode() == EditorMode::Edit;
    let title = if editing {
        format!(" 編輯訂單 {} ", order.order_number)
    } else {
        format!(" 訂單 {} ", order.order_number)
    };

    let mut lines = vec![
        Line::from(format!(
            "平台: {} {}   狀態: {}",
            order.platform.icon().glyph(),
            order.platform.label(),
            order.status.label()
        )),
        Line::from(format!("建立時間: {}", format_datetime(&order.create_date))),
        Line::from(""),
    ];

    for field in EditField::ALL {
        let focused = editing && field == app.field_cursor;
        let style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let marker = if focused { "▶ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{}: ", field.label()), style),
            Span::raw(field.value(order).to_string()),
        ]));
    }

    lines.push(Line::from(""));
    for item in &order.items {
        lines.push(Line::from(format!(
            "  {} {} × {} @ {}",
            item.product_code,
            item.product_name,
            item.quantity,
            format_currency(item.price)
        )));
    }
    lines.push(Line::from(format!(
        "合計: {}  (共 {} 件)",
        format_currency(order.total_amount),
        order.quantity
    )));

    lines.push(Line::from(""));
    let hint = if editing {
        "[Tab]下一欄 [Enter]修改 [Ctrl-S]儲存 [Esc]取消"
    } else {
        "[e]編輯 [Esc]關閉"
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));

    let border = if editor.is_dirty() {
        Color::Yellow
    } else {
        Color::Cyan
    };
    let detail = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(detail, area);
}

fn render_toasts(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .toasts
        .iter()
        .map(|toast| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    toast.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::raw(toast.description.as_str())),
            ])
        })
        .collect();
    f.render_widget(List::new(items).block(bordered(" 通知 ")), area);
}

fn render_logs(f: &mut Frame, app: &App, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::DIM),
                )
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, style) = match app.input_mode {
        InputMode::Normal => (
            " [/]搜尋 [:]指令 ".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        InputMode::Search => (" 搜尋 ".to_string(), Style::default().fg(Color::Yellow)),
        InputMode::Command => (" 指令 ".to_string(), Style::default().fg(Color::Yellow)),
        InputMode::Field(field) => (
            format!(" {} ", field.label()),
            Style::default().fg(Color::Yellow),
        ),
    };

    let width = area.width.max(3) - 3;
    let scroll = app.input.visual_scroll(width as usize);
    let input = Paragraph::new(app.input.value())
        .style(style)
        .scroll((0, scroll as u16))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(input, area);

    if app.input_mode != InputMode::Normal {
        f.set_cursor_position((
            area.x + ((app.input.visual_cursor()).max(scroll) - scroll) as u16 + 1,
            area.y + 1,
        ));
    }
}
