use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Commands are painted back-to-front in the order they were pushed. The
/// list keeps its allocation across [`clear`](Self::clear) calls so a warmed
/// list does not allocate per frame.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a draw command on top of everything recorded so far.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;
    use crate::scene::Border;

    #[test]
    fn paint_order_is_push_order() {
        let red = Color::from_srgb_u8(255, 0, 0, 255);
        let mut list = DrawList::new();
        list.push_solid_rect(Rect::new(0.0, 0.0, 10.0, 10.0), red);
        list.push_stroked_circle(Vec2::new(5.0, 5.0), 5.0, Border::new(1.0, red));
        list.push_solid_rect(Rect::new(2.0, 2.0, 4.0, 4.0), red);

        let kinds: Vec<&str> = list
            .items()
            .iter()
            .map(|c| match c {
                DrawCmd::Rect(_) => "rect",
                DrawCmd::Circle(_) => "circle",
            })
            .collect();
        assert_eq!(kinds, ["rect", "circle", "rect"]);
    }

    #[test]
    fn clear_empties_list() {
        let mut list = DrawList::new();
        list.push_solid_circle(Vec2::zero(), 1.0, Color::transparent());
        assert_eq!(list.len(), 1);
        list.clear();
        assert!(list.is_empty());
    }
}
