use super::ui::help_max_scroll;
use crate::application::{App, AppMode, Field};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Editing => Self::handle_editing_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
            AppMode::Notice(_) => app.dismiss_notice(),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('e') = key {
                app.export_pdf();
            }
            return;
        }

        app.status_message = None;

        match key {
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => app.focus_previous(),
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => app.focus_next(),
            KeyCode::Enter | KeyCode::F(2) => {
                if app.focus == Field::IncludeInterest {
                    app.toggle_include_interest();
                } else {
                    app.start_editing();
                }
            }
            KeyCode::Char(' ') => {
                if app.focus == Field::IncludeInterest {
                    app.toggle_include_interest();
                }
            }
            KeyCode::Char('i') => app.toggle_include_interest(),
            KeyCode::Char('t') => app.toggle_language(),
            KeyCode::Char('a') => {
                let index = app.add_link();
                app.focus = Field::Link(index);
            }
            KeyCode::Char('L') => {
                if let Some(index) = app.focused_link() {
                    app.lock_link(index);
                }
            }
            KeyCode::Char('u') => {
                if let Some(index) = app.focused_link() {
                    app.unlock_link(index);
                }
            }
            KeyCode::Char('c') => {
                if let Some(index) = app.focused_link() {
                    app.copy_link(index);
                }
            }
            KeyCode::Char('g') => app.generate_letter(),
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_editing_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.finish_editing(),
            KeyCode::Esc => app.cancel_editing(),
            KeyCode::Backspace => app.delete_before_cursor(),
            KeyCode::Delete => app.delete_at_cursor(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            KeyCode::Home => app.move_cursor_home(),
            KeyCode::End => app.move_cursor_end(),
            KeyCode::Char(c) => app.insert_char(c),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll = (app.help_scroll + 1).min(help_max_scroll());
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll = (app.help_scroll + 5).min(help_max_scroll());
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}
