//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{AppController, AppEvent};

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.dispatch(AppEvent::Quit).await;
            return Ok(());
        }

        // Other chords are not text; keep them out of the inputs.
        let chord = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        let ui_state = self.model.get_ui_state().await;

        // Login surface captures all input while visible
        if ui_state.login_visible {
            match key.code {
                KeyCode::Enter => {
                    if !ui_state.login.submitting {
                        let (username, password) = self.model.login_credentials().await;
                        self.dispatch(AppEvent::LoginSubmitted { username, password }).await;
                    }
                }
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    self.model.toggle_login_field().await;
                }
                KeyCode::Backspace => {
                    self.model.login_backspace().await;
                }
                KeyCode::Char(c) if !chord => {
                    self.model.login_append(c).await;
                }
                _ => {}
            }
            return Ok(());
        }

        if !ui_state.search_enabled {
            return Ok(());
        }

        match key.code {
            KeyCode::Char(c) if !chord => {
                let mut query = ui_state.query.clone();
                query.push(c);
                self.dispatch(AppEvent::QueryChanged(query)).await;
            }
            KeyCode::Backspace => {
                let mut query = ui_state.query.clone();
                if query.pop().is_some() {
                    self.dispatch(AppEvent::QueryChanged(query)).await;
                }
            }
            KeyCode::Esc => {
                if !ui_state.query.is_empty() {
                    self.dispatch(AppEvent::QueryChanged(String::new())).await;
                }
            }
            KeyCode::Tab | KeyCode::Right => {
                self.dispatch(AppEvent::MediaTypeChanged(ui_state.media_type.next())).await;
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.dispatch(AppEvent::MediaTypeChanged(ui_state.media_type.prev())).await;
            }
            KeyCode::Up => {
                self.model.move_selection_up().await;
            }
            KeyCode::Down => {
                self.model.move_selection_down().await;
            }
            KeyCode::Enter => {
                if let Some(card) = ui_state.selected_card() {
                    if ui_state.submit_control(card).enabled {
                        self.dispatch(AppEvent::SubmitClicked(card)).await;
                    }
                }
            }
            _ => {}
        }

        Ok(())
    }
}
