//! Centered login form: two fields, inline error line, key hints.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{LoginField, LoginForm};

pub fn draw_login(f: &mut ratatui::Frame<'_>, area: Rect, form: &LoginForm) {
    let width = area.width.min(46);
    let height = area.height.min(12);
    let boxed = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let outer = Block::default()
        .borders(Borders::ALL)
        .title("monitop — sign in");
    f.render_widget(outer, boxed);

    let inner = Rect {
        x: boxed.x + 2,
        y: boxed.y + 1,
        width: boxed.width.saturating_sub(4),
        height: boxed.height.saturating_sub(2),
    };
    if inner.height < 8 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // username
            Constraint::Length(3), // password
            Constraint::Length(1), // error
            Constraint::Length(1), // hints
        ])
        .split(inner);

    let field_style = |focused: bool| {
        if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        }
    };

    let user_focused = form.focus == LoginField::Username;
    f.render_widget(
        Paragraph::new(form.username.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Username")
                .border_style(field_style(user_focused)),
        ),
        rows[0],
    );

    let masked: String = "•".repeat(form.password.chars().count());
    f.render_widget(
        Paragraph::new(masked.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Password")
                .border_style(field_style(!user_focused)),
        ),
        rows[1],
    );

    if let Some(err) = &form.error {
        f.render_widget(
            Paragraph::new(err.as_str())
                .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            rows[2],
        );
    }

    f.render_widget(
        Paragraph::new("Enter sign in · Tab switch field · Esc quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        rows[3],
    );

    // Put the cursor at the end of the focused field.
    let (row, text_len) = if user_focused {
        (rows[0], form.username.chars().count())
    } else {
        (rows[1], masked.chars().count())
    };
    let max_x = row.x + row.width.saturating_sub(2);
    f.set_cursor_position(((row.x + 1 + text_len as u16).min(max_x), row.y + 1));
}
