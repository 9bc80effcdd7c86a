// SPDX-License-Identifier: MPL-2.0
//! Toolbar with the load / destination management / navigation actions.

use iced::{
    widget::{button, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the toolbar.
pub struct ViewContext {
    /// Whether the cursor can move backward.
    pub can_go_previous: bool,
    /// Whether the cursor can move forward.
    pub can_go_next: bool,
    /// Whether any destinations are registered (enables Clear).
    pub has_destinations: bool,
}

/// Messages emitted by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    LoadMedia,
    AddDestinations,
    ClearDestinations,
    PreviousMedia,
    NextMedia,
}

/// Render the toolbar.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let load_button = button(Text::new("Load Media")).on_press(Message::LoadMedia);

    let add_button = button(Text::new("Add Folders")).on_press(Message::AddDestinations);

    let clear_button = button(Text::new("Clear Folders"))
        .on_press_maybe(ctx.has_destinations.then_some(Message::ClearDestinations));

    let previous_button = button(Text::new("Previous"))
        .on_press_maybe(ctx.can_go_previous.then_some(Message::PreviousMedia));

    let next_button =
        button(Text::new("Next")).on_press_maybe(ctx.can_go_next.then_some(Message::NextMedia));

    Row::new()
        .push(load_button)
        .push(add_button)
        .push(clear_button)
        .push(previous_button)
        .push(next_button)
        .spacing(10)
        .padding(10)
        .width(Length::Fill)
        .into()
}
