// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` owns the two core structures (the media queue and the destination
//! registry) together with the capability ports the core consumes, and
//! translates component messages into queue/registry operations. All state
//! mutation happens synchronously in the update path; there is no
//! background work touching the queue or the registry.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{DirectoryPicker, PreviewRenderer};
use crate::destinations::DestinationRegistry;
use crate::infrastructure::{MediaPreviewRenderer, RfdDirectoryPicker};
use crate::media_queue::MediaQueue;
use crate::ui::preview_pane::PreviewState;
use iced::{Element, Subscription, Task};
use std::fmt;
use std::path::Path;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Tallest preview bitmap handed to the view, in pixels.
pub const PREVIEW_MAX_HEIGHT: u32 = 400;

/// Root Iced application state bridging the triage core and the UI
/// components.
pub struct App {
    pub(crate) queue: MediaQueue,
    pub(crate) registry: DestinationRegistry,
    pub(crate) preview: PreviewState,
    /// Most recent user-facing failure, shown under the preview.
    pub(crate) status: Option<String>,
    pub(crate) picker: Box<dyn DirectoryPicker>,
    pub(crate) renderer: Box<dyn PreviewRenderer>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("queue_len", &self.queue.len())
            .field("destinations", &self.registry.len())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_ports(Box::new(RfdDirectoryPicker), Box::new(MediaPreviewRenderer))
    }
}

impl App {
    /// Creates an application with explicit port implementations.
    pub fn with_ports(
        picker: Box<dyn DirectoryPicker>,
        renderer: Box<dyn PreviewRenderer>,
    ) -> Self {
        Self {
            queue: MediaQueue::new(),
            registry: DestinationRegistry::new(),
            preview: PreviewState::Empty,
            status: None,
            picker,
            renderer,
        }
    }

    /// Initializes application state, optionally preloading the queue from a
    /// directory passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app = App::default();

        if let Some(directory) = flags.start_directory {
            app.queue.load(Path::new(&directory));
            update::refresh_preview(&mut app);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Sift")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }
}
