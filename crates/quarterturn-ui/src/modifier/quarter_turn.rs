use super::{inspector_metadata, Modifier};
use crate::modifier_nodes::{QuarterTurnLayoutElement, RotateElement};
use crate::quarter_turn::QuarterTurn;

impl Modifier {
    /// Rotates the content by `quarter_turns` multiples of 90 degrees, clockwise.
    ///
    /// A half turn only rotates drawing. A quarter turn in either direction
    /// also exchanges the width and height the content occupies in layout, so
    /// siblings and parents see the rotated footprint. Counts that amount to
    /// no rotation return `self` unchanged.
    ///
    /// Example: `Modifier::empty().quarter_rotate(-1)`
    pub fn quarter_rotate(self, quarter_turns: i32) -> Self {
        let turn = QuarterTurn::from_quarter_turns(quarter_turns);
        if turn == QuarterTurn::None {
            return self;
        }
        let degrees = turn.to_degrees();
        log::debug!("quarter_rotate({quarter_turns}) resolved to {turn} ({degrees} degrees)");

        let mut modifier = Self::with_element(RotateElement::new(degrees));
        if turn.swaps_dimensions() {
            modifier = modifier.then(Self::with_element(QuarterTurnLayoutElement));
        }
        let modifier = modifier.with_inspector_metadata(inspector_metadata(
            "quarterRotate",
            move |info| {
                info.add_property("quarterTurns", turn.quarter_turns().to_string());
                info.add_property("degrees", degrees.to_string());
            },
        ));
        self.then(modifier)
    }
}
