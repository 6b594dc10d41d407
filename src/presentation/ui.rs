use crate::application::{App, AppMode, Field, NoticeKind};
use crate::domain::Language;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Width of the focus marker drawn before every form row.
const MARKER_WIDTH: u16 = 2;

pub fn render_ui(f: &mut Frame, app: &App) {
    let form_height = app.focus_order().len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(form_height),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_form(f, app, chunks[1]);
    render_preview(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);

    match &app.mode {
        AppMode::Help => render_help_popup(f, app.help_scroll),
        AppMode::Notice(notice) => render_notice(f, notice.kind, &notice.message, app.labels().press_any_key),
        _ => {}
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let language_style = |language: Language| {
        if app.form.language == language {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    let header = Line::from(vec![
        Span::styled(app.labels().title, Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled("EN", language_style(Language::En)),
        Span::raw(" | "),
        Span::styled("PT", language_style(Language::Pt)),
    ]);
    f.render_widget(Paragraph::new(header), area);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let order = app.focus_order();
    let lines: Vec<Line> = order.iter().map(|field| field_line(app, *field)).collect();

    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(app.labels().form_title));
    f.render_widget(form, area);

    if app.mode == AppMode::Editing {
        if let Some(row) = order.iter().position(|field| *field == app.focus) {
            let x = area.x + 1 + MARKER_WIDTH + app.cursor_position as u16;
            let y = area.y + 1 + row as u16;
            f.set_cursor_position((x.min(area.right().saturating_sub(2)), y));
        }
    }
}

fn field_line<'a>(app: &'a App, field: Field) -> Line<'a> {
    let labels = app.labels();
    let focused = app.focus == field;
    let marker = if focused { "> " } else { "  " };
    let marker_style = Style::default().fg(Color::Yellow);

    if app.mode == AppMode::Editing && focused {
        return Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(app.input.as_str(), Style::default().fg(Color::Green)),
        ]);
    }

    let mut spans = vec![Span::styled(marker, marker_style)];
    let value_style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let placeholder_style = Style::default().fg(Color::DarkGray);

    let mut push_value = |value: &'a str, placeholder: &'a str| {
        if value.is_empty() {
            spans.push(Span::styled(placeholder, placeholder_style));
        } else {
            spans.push(Span::styled(value, value_style));
        }
    };

    match field {
        Field::Name => push_value(&app.form.name, labels.your_name),
        Field::Company => push_value(&app.form.company, labels.company_name),
        Field::Skills => push_value(app.form.active_skills(), labels.your_skills),
        Field::Interest => push_value(app.form.active_interest(), labels.interest_placeholder),
        Field::IncludeInterest => {
            let checkbox = if app.form.include_interest { "[x] " } else { "[ ] " };
            spans.push(Span::styled(checkbox, value_style));
            spans.push(Span::styled(labels.add_interest, value_style));
        }
        Field::Link(index) => {
            if let Some(link) = app.form.links.get(index) {
                push_value(&link.value, &link.placeholder);
                let hint_style = Style::default().fg(Color::Blue);
                if link.is_locked() {
                    spans.push(Span::styled(format!("  {}", labels.locked_tag), hint_style));
                    if focused {
                        spans.push(Span::styled(format!("  {}", labels.locked_link_hint), hint_style));
                    }
                } else if focused {
                    spans.push(Span::styled(format!("  {}", labels.unlocked_link_hint), hint_style));
                }
            }
        }
    }

    Line::from(spans)
}

fn render_preview(f: &mut Frame, app: &App, area: Rect) {
    let style = if app.form.letter.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let preview = Paragraph::new(app.preview_text())
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(app.labels().preview));
    f.render_widget(preview, area);
}

fn status_text(app: &App) -> String {
    let labels = app.labels();
    match app.mode {
        AppMode::Editing => labels.editing_hint.to_string(),
        AppMode::Help => labels.help_hint.to_string(),
        AppMode::Notice(_) => labels.notice_hint.to_string(),
        AppMode::Normal => match &app.status_message {
            Some(status) => status.clone(),
            None => format!(
                "g: {} | Ctrl+E: {} | a: {} | t: EN/PT | {}",
                labels.generate_button, labels.export_button, labels.add_link, labels.normal_hint
            ),
        },
    }
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status = Paragraph::new(status_text(app))
        .block(Block::default().borders(Borders::ALL).title(app.labels().status_title))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Editing => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(Color::Cyan),
            AppMode::Notice(_) => Style::default().fg(Color::Yellow),
        });
    f.render_widget(status, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_notice(f: &mut Frame, kind: NoticeKind, message: &str, dismiss_hint: &str) {
    let width = message.chars().count() as u16 + 8;
    let popup_area = centered_rect(width.max(30), 5, f.area());
    let color = match kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Failure => Color::Red,
    };

    f.render_widget(Clear, popup_area);
    let notice = Paragraph::new(vec![
        Line::from(Span::styled(message, Style::default().fg(color).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(dismiss_hint, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(ratatui::layout::Alignment::Center)
    .block(Block::default().borders(Borders::ALL).style(Style::default().fg(color)));
    f.render_widget(notice, popup_area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("jobhelper Help (Line {}/{})", start_line + 1, help_lines.len()))
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

/// Index of the last help line, the furthest `help_scroll` can go.
pub fn help_max_scroll() -> usize {
    HELP_TEXT.lines().count().saturating_sub(1)
}

const HELP_TEXT: &str = r#"JOB APPLICATION HELPER

=== FORM ===
↑↓ / j k        Move between fields (Tab / Shift+Tab also work)
Enter / F2      Edit the selected field
Space / Enter   Toggle "add interest" when the checkbox is selected
i               Toggle "add interest" from anywhere
                Skills and interest are stored per language

=== EDITING ===
Enter           Save the field
Esc             Discard changes
←→ Home End     Move the cursor
Backspace/Del   Delete characters

=== LINKS ===
a               Add a custom link
L               Lock the selected link (it can then be copied)
c               Copy a locked link to the clipboard
u               Unlock the selected link for editing
                Locked links cannot be edited

=== LANGUAGE ===
t               Switch between English and Portuguese
                Empty skills/interest fields are filled from the
                other language when you switch; text you typed is
                never overwritten

=== LETTER ===
g               Generate the letter into the preview
                The preview only changes when you generate again
Ctrl+E          Export the last generated letter as
                "<name> - cover letter.pdf" in the output directory
                (single page; very long letters run off the page)

=== OTHER ===
F1 or ?         Show this help (scroll with ↑↓, PgUp/PgDn, Home)
q               Quit"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Notice;

    #[test]
    fn test_status_text_follows_language() {
        let mut app = App::default();
        app.set_language(Language::Pt);

        app.mode = AppMode::Editing;
        assert_eq!(status_text(&app), "Enter: guardar | Esc: cancelar");

        app.mode = AppMode::Help;
        assert_eq!(status_text(&app), Language::Pt.labels().help_hint);

        app.mode = AppMode::Notice(Notice {
            kind: NoticeKind::Success,
            message: "Link copiado!".to_string(),
        });
        assert_eq!(status_text(&app), "Prima qualquer tecla para continuar");

        app.mode = AppMode::Normal;
        let idle = status_text(&app);
        assert!(idle.starts_with("g: Gerar Carta de Apresentação"));
        assert!(idle.ends_with("F1/?: ajuda | q: sair"));
    }

    #[test]
    fn test_status_message_wins_in_normal_mode() {
        let mut app = App::default();
        app.status_message = Some("Saved to ./Ana - cover letter.pdf".to_string());
        assert_eq!(status_text(&app), "Saved to ./Ana - cover letter.pdf");
    }

    #[test]
    fn test_help_max_scroll_is_last_line() {
        assert_eq!(help_max_scroll() + 1, HELP_TEXT.lines().count());
    }
}
