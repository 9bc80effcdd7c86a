// SPDX-License-Identifier: MPL-2.0
//! Preview pane showing the item under the queue cursor.

use crate::media::ImageData;
use iced::{
    alignment::Horizontal,
    widget::{image::Image, Column, Container, Text},
    Element, Length,
};

/// What the pane currently has to show.
#[derive(Debug, Clone)]
pub enum PreviewState {
    /// The queue is empty; nothing to display.
    Empty,
    /// A decoded, height-bounded preview of the current item.
    Ready(ImageData),
    /// The current item could not be decoded; it stays in the queue.
    Unavailable(String),
}

/// Contextual data needed to render the preview pane.
pub struct ViewContext<'a> {
    pub preview: &'a PreviewState,
    /// File name of the current item, if any.
    pub file_name: Option<String>,
    /// 1-based cursor position and queue length, if the queue is non-empty.
    pub position: Option<(usize, usize)>,
    /// Most recent user-facing failure (e.g. a refused move).
    pub status: Option<&'a str>,
}

/// Render the preview pane.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().spacing(5).align_x(Horizontal::Center);

    match ctx.preview {
        PreviewState::Empty => {
            content = content.push(Text::new("No media loaded"));
        }
        PreviewState::Ready(data) => {
            content = content.push(Image::new(data.handle.clone()));
        }
        PreviewState::Unavailable(reason) => {
            content = content.push(Text::new(format!("Preview unavailable: {reason}")));
        }
    }

    if let (Some(name), Some((index, total))) = (ctx.file_name, ctx.position) {
        content = content.push(Text::new(format!("{name} ({index} / {total})")));
    }

    if let Some(status) = ctx.status {
        content = content.push(Text::new(status.to_string()));
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
