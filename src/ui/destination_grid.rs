// SPDX-License-Identifier: MPL-2.0
//! Grid of destination buttons in display order.
//!
//! Buttons are laid out row by row following the registry's display order;
//! pressing one reports its *display position*, which the application
//! resolves back to the stable storage index before routing. The grid never
//! needs to know about that indirection.

use crate::destinations::DisplayEntry;
use iced::{
    widget::{button, Column, Row, Text},
    Element, Length,
};

/// Maximum number of destination buttons per row.
pub const MAX_COLUMNS: usize = 10;

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub entries: &'a [DisplayEntry],
}

/// Messages emitted by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A destination button was pressed; carries the display position.
    DestinationPressed(usize),
}

/// Render the destination buttons.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(5).padding(10).width(Length::Fill);

    for (row_index, row_entries) in ctx.entries.chunks(MAX_COLUMNS).enumerate() {
        let mut row = Row::new().spacing(5).width(Length::Fill);

        for (column_index, entry) in row_entries.iter().enumerate() {
            let display_position = row_index * MAX_COLUMNS + column_index;
            row = row.push(
                button(Text::new(entry.label.as_str()))
                    .on_press(Message::DestinationPressed(display_position))
                    .width(Length::Fill),
            );
        }

        grid = grid.push(row);
    }

    grid.into()
}
