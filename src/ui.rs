use ratatui::{prelude::*, widgets::*};

use crate::models::User;

/// Renders one row of the users list: name over address
pub fn user_list_item(user: &User, is_selected: bool) -> ListItem<'static> {
    let name_style = if is_selected {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };

    ListItem::new(vec![
        Line::from(Span::styled(user.name.clone(), name_style)),
        Line::from(Span::styled(
            format!("  {}", user.address_line()),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

/// A labelled detail line
fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(Color::Cyan)),
        Span::raw(value),
    ])
}

/// All lines of the user detail view
pub fn detail_lines(user: &User) -> Vec<Line<'static>> {
    vec![
        field("Name", user.name.clone()),
        field("Username", user.username.clone()),
        field("Address", user.address_line()),
        field("Email", user.email.clone()),
        field("Phone", user.phone.clone()),
        field("Website", user.website.clone()),
        Line::raw(""),
        Line::from(Span::styled(
            "Company",
            Style::default().fg(Color::Magenta).bold(),
        )),
        field("Name", user.company.name.clone()),
        field("Catch phrase", user.company.catch_phrase.clone()),
        field("Business", user.company.bs.clone()),
    ]
}

/// Spinner frame for the progress indicator
pub fn spinner_frame(tick: usize) -> &'static str {
    const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
    FRAMES[tick % FRAMES.len()]
}

/// Rectangle centered in `r`, sized in percent
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
