//! The rendering layer the list drives.

use flipline_core::geometry::Rect;

use crate::flip::ItemStyle;
use crate::id::ItemId;

/// Measures and styles the rendered element of each item.
///
/// Implemented by whatever draws the list: a DOM binding, a retained-mode
/// widget tree, or a headless mock.
pub trait ElementHost {
    /// Current on-screen box of the item, including any in-flight offset.
    ///
    /// Returns `None` when the item is not mounted.
    fn measure(&self, id: &ItemId) -> Option<Rect>;

    /// Box the item occupies in layout, ignoring any applied offset.
    ///
    /// Hosts that cannot tell the two apart may rely on the default.
    fn measure_layout(&self, id: &ItemId) -> Option<Rect> {
        self.measure(id)
    }

    /// Write a visual style to the item's element.
    ///
    /// When `style.transition` is set the host animates to the style and reports
    /// completion back to the list; otherwise the change is immediate and
    /// interrupts any running transition without reporting it.
    fn apply_style(&mut self, id: &ItemId, style: &ItemStyle);
}

/// A host that can also re-render the whole list.
pub trait ListRenderer: ElementHost {
    /// Lay out `views` in order. Items missing from `views` are unmounted.
    fn render(&mut self, views: &[ItemView]);
}

/// Per-item render state handed to [`ListRenderer::render`].
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    pub id: ItemId,
    /// Position in the backing list; used to resolve drag events back to items.
    pub index: usize,
    /// `0.0` while the item is the drag source.
    pub opacity: f32,
    /// The item is playing its exit transition.
    pub removing: bool,
}
