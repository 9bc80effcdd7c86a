// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, PREVIEW_MAX_HEIGHT};
use crate::media_queue::NavigationDirection;
use crate::routing;
use crate::ui::destination_grid;
use crate::ui::preview_pane::PreviewState;
use crate::ui::toolbar;
use iced::Task;

/// Dispatches a top-level message to its handler.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Toolbar(message) => handle_toolbar_message(app, message),
        Message::Destinations(message) => handle_destination_message(app, message),
    }
}

/// Handles toolbar actions: loading media, managing destinations, navigation.
fn handle_toolbar_message(app: &mut App, message: toolbar::Message) -> Task<Message> {
    match message {
        toolbar::Message::LoadMedia => {
            if let Some(directory) = app.picker.pick_directory("Select Folder") {
                app.queue.load(&directory);
                app.status = None;
                refresh_preview(app);
            }
        }
        toolbar::Message::AddDestinations => {
            if let Some(directory) = app.picker.pick_directory("Select Folder") {
                app.registry.register(&directory);
            }
        }
        toolbar::Message::ClearDestinations => {
            app.registry.clear();
        }
        toolbar::Message::NextMedia => {
            if app.queue.advance(NavigationDirection::Next) {
                app.status = None;
                refresh_preview(app);
            }
        }
        toolbar::Message::PreviousMedia => {
            if app.queue.advance(NavigationDirection::Previous) {
                app.status = None;
                refresh_preview(app);
            }
        }
    }

    Task::none()
}

/// Handles destination button presses by routing the current item.
fn handle_destination_message(
    app: &mut App,
    message: destination_grid::Message,
) -> Task<Message> {
    match message {
        destination_grid::Message::DestinationPressed(display_position) => {
            match routing::move_current_to(&mut app.queue, &app.registry, display_position) {
                Ok(Some(_)) => {
                    app.status = None;
                    refresh_preview(app);
                }
                Ok(None) => {}
                Err(err) => {
                    eprintln!("Failed to move media: {err}");
                    app.status = Some(err.to_string());
                }
            }
        }
    }

    Task::none()
}

/// Re-renders the preview for the item under the cursor.
///
/// A decode failure degrades to "preview unavailable"; the item stays in
/// the queue and navigation keeps working.
pub(super) fn refresh_preview(app: &mut App) {
    app.preview = match app.queue.current() {
        None => PreviewState::Empty,
        Some(path) => match app.renderer.render(path, PREVIEW_MAX_HEIGHT) {
            Ok(data) => PreviewState::Ready(data),
            Err(err) => {
                eprintln!("Failed to render preview for {}: {err}", path.display());
                PreviewState::Unavailable(err.to_string())
            }
        },
    };
}
