// SPDX-License-Identifier: MPL-2.0
//! Application layer - capability ports consumed by the triage core.
//!
//! The core never talks to dialog toolkits or decoders directly; it consumes
//! the traits defined under [`port`], which infrastructure adapters
//! implement. This keeps the queue/registry logic testable without a real
//! window system or codec stack.

pub mod port;
