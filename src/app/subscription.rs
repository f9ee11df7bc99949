// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are routed here: Escape closes the topmost overlay and
//! the arrow keys step through the screenshot carousel. Arrow presses while
//! no image is shown reach the controller as no-ops.

use super::Message;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval between toast expiry checks.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Maps a key press to an application message.
#[must_use]
pub fn map_key(key: &Key) -> Option<Message> {
    match key {
        Key::Named(Named::Escape) => Some(Message::CloseTopOverlay),
        Key::Named(Named::ArrowLeft) => Some(Message::Gallery(gallery::Message::PreviousImage)),
        Key::Named(Named::ArrowRight) => Some(Message::Gallery(gallery::Message::NextImage)),
        _ => None,
    }
}

/// Listens for keyboard shortcuts that were not captured by a widget.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => map_key(&key),
            _ => None,
        }
    })
}

/// Creates a periodic tick subscription while toasts are pending.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_top_overlay() {
        assert!(matches!(
            map_key(&Key::Named(Named::Escape)),
            Some(Message::CloseTopOverlay)
        ));
    }

    #[test]
    fn arrows_step_the_carousel() {
        assert!(matches!(
            map_key(&Key::Named(Named::ArrowLeft)),
            Some(Message::Gallery(gallery::Message::PreviousImage))
        ));
        assert!(matches!(
            map_key(&Key::Named(Named::ArrowRight)),
            Some(Message::Gallery(gallery::Message::NextImage))
        ));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(map_key(&Key::Named(Named::Enter)).is_none());
        assert!(map_key(&Key::Character("a".into())).is_none());
    }
}
