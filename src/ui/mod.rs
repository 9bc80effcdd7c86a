// SPDX-License-Identifier: MPL-2.0
//! Presentation components.
//!
//! Each component exposes a `ViewContext` describing what it needs to render
//! and (where interactive) its own `Message` enum that the application maps
//! into top-level messages.

pub mod destination_grid;
pub mod preview_pane;
pub mod toolbar;
