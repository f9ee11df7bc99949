// SPDX-License-Identifier: MPL-2.0
//! Full-window modal layer.
//!
//! The layer dims everything below it. A click on the backdrop emits the
//! dismiss message; clicks on the content are swallowed so they never reach
//! the backdrop or the page underneath.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{mouse_area, opaque, Container},
    Element, Length,
};

/// Wraps `content` in a centered, dimmed layer meant to sit on top of a
/// `Stack`.
pub fn layer<'a, M: Clone + 'a>(content: Element<'a, M>, on_dismiss: M) -> Element<'a, M> {
    let centered = Container::new(opaque(
        Container::new(content).max_width(sizing::MODAL_MAX_WIDTH),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::backdrop);

    opaque(mouse_area(centered).on_press(on_dismiss))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text;

    #[test]
    fn layer_renders() {
        let _element: Element<'_, ()> = layer(text("body").into(), ());
    }
}
