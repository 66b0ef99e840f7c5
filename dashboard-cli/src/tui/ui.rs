use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, List, ListItem, Paragraph, Row, Table},
};
use weather_dashboard_core::render::{AlertEntry, CurrentPanel, DashboardView, ForecastRow};

const MISSING: &str = "--";
const HINTS: &str = " Enter search · Ctrl+L / F2 use my location · Ctrl+U clear · Esc quit";

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {title} "), Style::default().fg(Color::Yellow)))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(BorderType::Rounded)
}

fn value_style() -> Style {
    Style::default().fg(Color::Green)
}

pub fn draw(frame: &mut Frame, view: &DashboardView) {
    let error_height = if view.error.is_some() { 3 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(error_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_title(frame, rows[0]);
    draw_search(frame, view, rows[1]);
    if let Some(error) = &view.error {
        let error_widget = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(error_widget, rows[2]);
    }
    draw_body(frame, view, rows[3]);
    let hints = Paragraph::new(HINTS).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, rows[4]);
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Weather Dashboard",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from("Get current weather and 3-day forecast"),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_search(frame: &mut Frame, view: &DashboardView, area: Rect) {
    let search = &view.search;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(16), Constraint::Length(14)])
        .split(area);

    let controls = if search.enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let field = if search.text.is_empty() {
        Span::styled("Enter city name...", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(search.text.as_str())
    };
    let input = Paragraph::new(Line::from(vec![Span::raw(" "), field])).block(panel("City"));
    frame.render_widget(input, cols[0]);

    let button_block =
        Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(controls);

    let button =
        Paragraph::new(Span::styled(search.button_label, controls.add_modifier(Modifier::BOLD)))
            .alignment(Alignment::Center)
            .block(button_block.clone());
    frame.render_widget(button, cols[1]);

    let locate = Paragraph::new(Span::styled("Locate", controls))
        .alignment(Alignment::Center)
        .block(button_block);
    frame.render_widget(locate, cols[2]);

    if search.enabled {
        let typed = u16::try_from(search.text.chars().count()).unwrap_or(u16::MAX);
        let x = cols[0].x.saturating_add(2).saturating_add(typed);
        frame.set_cursor_position((x.min(cols[0].right().saturating_sub(2)), cols[0].y + 1));
    }
}

fn draw_body(frame: &mut Frame, view: &DashboardView, area: Rect) {
    let Some(current) = &view.current else {
        return;
    };

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let alert_height = if view.alerts.is_empty() { 0 } else { 2 + 3 * view.alerts.len() as u16 };
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(12), Constraint::Length(alert_height)])
        .split(cols[0]);

    frame.render_widget(current_conditions(current), left[0]);
    if !view.alerts.is_empty() {
        let items: Vec<ListItem> = view.alerts.iter().map(alert_item).collect();
        frame.render_widget(List::new(items).block(panel("Alerts")), left[1]);
    }

    let forecast = if view.forecast.is_empty() {
        List::new(vec![ListItem::new(format!("\n  {MISSING}"))])
    } else {
        List::new(view.forecast.iter().map(forecast_item).collect::<Vec<_>>())
    };
    frame.render_widget(forecast.block(panel("3-Day Forecast")), cols[1]);
}

fn current_conditions(current: &CurrentPanel) -> Table<'_> {
    let mut rows = vec![
        Row::new(vec![
            Cell::from(Span::styled(
                current.place.as_str(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Cell::from(""),
        ]),
        Row::new(vec![Cell::from(current.date.as_str()), Cell::from("")]),
        Row::new(vec![Cell::from(""), Cell::from("")]),
        Row::new(vec![
            Cell::from("Temperature"),
            Cell::from(Span::styled(
                current.temperature.as_str(),
                value_style().add_modifier(Modifier::BOLD),
            )),
        ]),
        Row::new(vec![
            Cell::from(""),
            Cell::from(current.feels_like.as_str()).style(value_style()),
        ]),
        Row::new(vec![
            Cell::from("Conditions"),
            Cell::from(current.condition.as_str()).style(value_style()),
        ]),
        Row::new(vec![
            Cell::from("Icon"),
            Cell::from(current.icon_url.as_str()).style(Style::default().fg(Color::DarkGray)),
        ]),
    ];

    for tile in &current.tiles {
        rows.push(Row::new(vec![
            Cell::from(tile.label),
            Cell::from(tile.value.as_str()).style(value_style()),
        ]));
    }

    Table::new(rows, [Constraint::Length(13), Constraint::Min(10)])
        .block(panel("Current Conditions"))
}

fn forecast_item(row: &ForecastRow) -> ListItem<'_> {
    ListItem::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!("{:<10}", row.label),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:<12}", row.temperature),
                value_style().add_modifier(Modifier::BOLD),
            ),
            Span::styled(row.rain.as_str(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(vec![
            Span::raw(format!(" {:<10}", "")),
            Span::styled(row.condition.as_str(), value_style()),
        ]),
        Line::from(vec![
            Span::raw(format!(" {:<10}", "")),
            Span::raw(format!(
                "↑ {}  ↓ {}  {} humidity  {} wind",
                row.sunrise, row.sunset, row.humidity, row.wind
            )),
        ]),
    ])
}

fn alert_item(alert: &AlertEntry) -> ListItem<'_> {
    let severity = if alert.severity.is_empty() { MISSING } else { alert.severity.as_str() };
    ListItem::new(vec![
        Line::from(vec![
            Span::raw(" "),
            Span::styled(format!("[{severity}] "), Style::default().fg(Color::Red)),
            Span::styled(alert.title.as_str(), value_style()),
        ]),
        Line::from(format!("   {}", alert.window)),
        Line::from(""),
    ])
}
