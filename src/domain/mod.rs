// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core showcase types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) so the gallery state machine
//! can be tested without a rendering environment.
//!
//! # Modules
//!
//! - [`media`]: Catalog entries ([`MediaItem`](media::MediaItem),
//!   [`MediaKind`](media::MediaKind), [`MediaId`](media::MediaId))

pub mod media;
