// SPDX-License-Identifier: MPL-2.0
//! `raytracer_showcase` is a native showcase for the RayTracerNG engine,
//! built with the Iced GUI framework.
//!
//! The page presents the engine's features, tech stack and architecture, a
//! media gallery with a demo video and a screenshot carousel, and download
//! and contribution details.
//!
//! # Layers
//!
//! - [`domain`] - Media items and identifiers
//! - [`media`] - Video identifier extraction from share links
//! - [`catalog`] - Gallery content, built in or loaded from TOML
//! - [`application`] - Gallery controller and page context state machines
//! - [`config`] - User settings (`settings.toml`)
//! - [`content`] - Static page copy
//! - [`ui`] and [`app`] - Iced presentation layer

pub mod app;
pub mod application;
pub mod catalog;
pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;
