use chrono::Utc;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::fetcher::FrontPage;
use crate::render;
use crate::tui::app::{TuiApp, View};

pub fn render(frame: &mut Frame, app: &TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Content
            Constraint::Length(1), // Pagination
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    match &app.view {
        View::Loading => render_notice(
            frame,
            "Loading stories...",
            Style::default().fg(Color::DarkGray),
            chunks[1],
        ),
        View::Error(message) => render_notice(
            frame,
            message.as_str(),
            Style::default().fg(Color::Red),
            chunks[1],
        ),
        View::Front(front) => {
            render_stories(frame, app, front, chunks[1]);
            render_pagination(frame, front, chunks[2]);
        }
    }

    render_status_bar(frame, app, chunks[3]);
}

fn render_header(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let header = format!(" Hacker News  {}", app.page.fragment());
    let paragraph = Paragraph::new(header).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_notice(frame: &mut Frame, text: &str, style: Style, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_stories(frame: &mut Frame, app: &TuiApp, front: &FrontPage, area: Rect) {
    let now = Utc::now();

    let items: Vec<ListItem> = front
        .stories
        .iter()
        .map(|entry| {
            let title = Line::from(Span::styled(
                render::title_line(entry.rank, &entry.story),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            let meta = Line::from(Span::styled(
                format!("    {}", render::meta_line(&entry.story, now)),
                Style::default().fg(Color::DarkGray),
            ));
            ListItem::new(Text::from(vec![title, meta]))
        })
        .collect();

    let title = format!(" Top Stories ({}) ", front.stories.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(if front.stories.is_empty() {
        None
    } else {
        Some(app.selected)
    });
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_pagination(frame: &mut Frame, front: &FrontPage, area: Rect) {
    let paragraph = Paragraph::new(format!(" {}", render::pagination_line(front.page)))
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let status = if let Some(ref message) = app.status_message {
        message.clone()
    } else {
        "j/k:Select  n:More  p:Previous  r:Refresh  o:Open  c:Comments  u:Profile  q:Quit"
            .to_string()
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(Color::White).bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
