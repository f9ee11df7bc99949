// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Every component follows the Elm-style "state down, messages up" pattern:
//! a `view` function renders from borrowed state, and an `update` function
//! turns its `Message` into an `Event` for the application root.
//!
//! # Page
//!
//! - [`navbar`] - Section links, condensed once the page scrolls
//! - [`sections`] - Hero, feature grids, download, contribute and footer
//! - [`gallery`] - Video card, screenshot strip and the two media modals
//! - [`about`] - Project and author modal
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable building blocks (modal layer)
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`notifications`] - Toast notifications for user feedback

pub mod about;
pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod styles;
