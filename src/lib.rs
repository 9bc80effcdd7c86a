// SPDX-License-Identifier: MPL-2.0
//! `iced_sift` is a media triage tool built with the Iced GUI framework.
//!
//! It walks a folder tree of images and short videos, shows one item at a
//! time, and files the current item into a registered destination folder
//! with a single click, removing it from the browsing queue.

pub mod app;
pub mod application;
pub mod destinations;
pub mod error;
pub mod infrastructure;
pub mod media;
pub mod media_queue;
pub mod routing;
pub mod ui;
