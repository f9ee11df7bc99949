// SPDX-License-Identifier: MPL-2.0
//! Application layer - State machines driven by the presentation layer.
//!
//! - [`gallery`]: Modal and carousel state for the media gallery
//! - [`page`]: Scroll and about-modal context for the page
//!
//! # Dependency Rule
//!
//! - Application layer depends on the domain layer (uses domain types)
//! - Presentation layer (`ui`, `app`) reads state and dispatches operations
//! - Nothing here performs I/O or knows about Iced

pub mod gallery;
pub mod page;

pub use gallery::{GalleryController, ImageOverlay, NavigationInfo, Overlay, VideoOverlay};
pub use page::{PageContext, Section};
