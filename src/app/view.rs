// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message};
use crate::ui::destination_grid;
use crate::ui::preview_pane;
use crate::ui::toolbar;
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Renders the application: toolbar on top, preview in the middle,
/// destination buttons below.
pub fn view(app: &App) -> Element<'_, Message> {
    let toolbar_view = toolbar::view(toolbar::ViewContext {
        can_go_previous: !app.queue.is_empty() && !app.queue.is_at_first(),
        can_go_next: !app.queue.is_empty() && !app.queue.is_at_last(),
        has_destinations: !app.registry.is_empty(),
    })
    .map(Message::Toolbar);

    let preview_view = preview_pane::view(preview_pane::ViewContext {
        preview: &app.preview,
        file_name: app.queue.current().and_then(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
        }),
        position: app.queue.cursor().map(|index| (index + 1, app.queue.len())),
        status: app.status.as_deref(),
    });

    let grid_view = destination_grid::view(destination_grid::ViewContext {
        entries: app.registry.display_entries(),
    })
    .map(Message::Destinations);

    let column = Column::new()
        .push(toolbar_view)
        .push(
            Container::new(preview_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(grid_view);

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
