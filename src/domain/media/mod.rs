// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module contains the catalog entry types shared by the gallery
//! controller and the presentation layer.

pub mod types;

pub use types::{MediaId, MediaItem, MediaKind};
