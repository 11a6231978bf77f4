use serde::{Deserialize, Serialize};

use crate::*;

/// A positioned, clickable button of a round.
///
/// This is pure state: the presentation layer projects it onto the screen and forwards clicks back by
/// [`ElementId`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    color: Color,
    position: Position,
    home: Position,
    order: Order,
    clickable: bool,
    label_visible: bool,
}

impl Element {
    /// New element at `position`, which also becomes its home slot. Labels start visible, clicks
    /// are not accepted until the round enables them.
    pub fn new(color: Color, position: Position, order: Order) -> Self {
        Self {
            color,
            position,
            home: position,
            order,
            clickable: false,
            label_visible: true,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn home(&self) -> Position {
        self.home
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn is_clickable(&self) -> bool {
        self.clickable
    }

    pub fn is_label_visible(&self) -> bool {
        self.label_visible
    }

    /// Text currently shown on the element, if any.
    pub fn label(&self) -> Option<Order> {
        self.label_visible.then_some(self.order)
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn return_home(&mut self) {
        self.position = self.home;
    }

    pub fn show_label(&mut self) {
        self.label_visible = true;
    }

    pub fn hide_label(&mut self) {
        self.label_visible = false;
    }

    pub(crate) fn set_clickable(&mut self, clickable: bool) {
        self.clickable = clickable;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_element_shows_label_and_ignores_clicks() {
        let element = Element::new(Color::from_rgb(0x123456), Position::new(0, 180), 2);
        assert_eq!(element.label(), Some(2));
        assert!(!element.is_clickable());
        assert_eq!(element.home(), element.position());
    }

    #[test]
    fn moving_keeps_home_slot() {
        let mut element = Element::new(Color::from_rgb(0), Position::ORIGIN, 1);
        element.set_position(Position::new(40, 300));
        element.hide_label();

        assert_eq!(element.position(), Position::new(40, 300));
        assert_eq!(element.label(), None);

        element.return_home();
        assert_eq!(element.position(), Position::ORIGIN);
    }
}
