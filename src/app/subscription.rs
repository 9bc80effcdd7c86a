// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes keyboard events to queue navigation so the arrow keys mirror the
//! Previous/Next buttons.

use super::Message;
use crate::ui::toolbar;
use iced::keyboard::{key::Named, Key};
use iced::{event, Subscription};

/// Creates the keyboard navigation subscription.
///
/// Keys already captured by a focused widget are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| match status {
        event::Status::Captured => None,
        event::Status::Ignored => {
            if let event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) = event {
                match key {
                    Key::Named(Named::ArrowRight) => {
                        Some(Message::Toolbar(toolbar::Message::NextMedia))
                    }
                    Key::Named(Named::ArrowLeft) => {
                        Some(Message::Toolbar(toolbar::Message::PreviousMedia))
                    }
                    _ => None,
                }
            } else {
                None
            }
        }
    })
}
