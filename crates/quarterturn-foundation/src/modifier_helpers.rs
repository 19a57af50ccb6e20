//! Helper macros to reduce boilerplate when implementing modifier nodes.
//!
//! Setting the capability bits on the element and implementing the
//! specialized trait is enough for a node to take part in the matching
//! pipeline stage; these macros wire up the `as_*` accessors.

/// Implements `as_draw_node` for a type that implements `DrawModifierNode`.
///
/// # Example
///
/// ```text
/// impl ModifierNode for MyNode {
///     impl_draw_node!();
/// }
/// ```
#[macro_export]
macro_rules! impl_draw_node {
    () => {
        fn as_draw_node(&self) -> Option<&dyn $crate::DrawModifierNode> {
            Some(self)
        }
    };
}

/// Implements `as_layout_node` for a type that implements `LayoutModifierNode`.
#[macro_export]
macro_rules! impl_layout_node {
    () => {
        fn as_layout_node(&self) -> Option<&dyn $crate::LayoutModifierNode> {
            Some(self)
        }
    };
}

/// Implements every capability accessor listed, in any order.
///
/// ```text
/// impl ModifierNode for MyNode {
///     impl_modifier_node!(layout, draw);
/// }
/// ```
#[macro_export]
macro_rules! impl_modifier_node {
    (draw) => {
        $crate::impl_draw_node!();
    };
    (layout) => {
        $crate::impl_layout_node!();
    };
    (draw, $($rest:tt)*) => {
        $crate::impl_draw_node!();
        $crate::impl_modifier_node!($($rest)*);
    };
    (layout, $($rest:tt)*) => {
        $crate::impl_layout_node!();
        $crate::impl_modifier_node!($($rest)*);
    };
}
