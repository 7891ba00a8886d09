use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::App;

/// Handle quit, menu and page scroll keys, returning whether the key was consumed
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
        }
        KeyCode::Esc if app.menu_open => app.close_menu(),
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char('d') if ctrl => app.page_scroll.page_down(),
        KeyCode::Char('u') if ctrl => app.page_scroll.page_up(),
        KeyCode::Down | KeyCode::Char('j') => app.page_scroll.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => app.page_scroll.scroll_up(1),
        KeyCode::PageDown => app.page_scroll.page_down(),
        KeyCode::PageUp => app.page_scroll.page_up(),
        KeyCode::Home | KeyCode::Char('g') => app.page_scroll.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.page_scroll.jump_to_bottom(),
        _ => return false,
    }

    true
}
