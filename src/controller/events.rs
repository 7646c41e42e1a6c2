//! Typed UI events and their dispatch

use crate::model::{CardKey, MediaType};

use super::AppController;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    LoginSubmitted { username: String, password: String },
    QueryChanged(String),
    MediaTypeChanged(MediaType),
    SubmitClicked(CardKey),
    Quit,
}

impl AppController {
    /// Route an event to its handler.
    ///
    /// Handlers that wait on the network run as their own tasks so input
    /// keeps flowing while they are in flight.
    pub async fn dispatch(&self, event: AppEvent) {
        match event {
            AppEvent::LoginSubmitted { username, password } => {
                let controller = self.clone();
                tokio::spawn(async move {
                    let _ = controller.login(&username, &password).await;
                });
            }
            AppEvent::QueryChanged(text) => {
                self.on_query_change(text).await;
            }
            AppEvent::MediaTypeChanged(media_type) => {
                // The only write of the filter; the next key must see it.
                self.model.set_media_type(media_type).await;
                let controller = self.clone();
                tokio::spawn(async move { controller.refresh_search().await });
            }
            AppEvent::SubmitClicked(key) => {
                let controller = self.clone();
                tokio::spawn(async move {
                    controller.submit_card(key).await;
                });
            }
            AppEvent::Quit => {
                self.model.set_should_quit(true).await;
            }
        }
    }
}
