// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across the page.
//!
//! # Components
//!
//! - [`modal`] - Dimmed full-window layer used by the gallery and about modals

pub mod modal;
