//! Ship kinds and straight-line placements.

use alloc::string::String;

use crate::grid::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

/// Type of ship: name and length.
///
/// Kinds are told apart by name, so two kinds may share a length.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipKind {
    name: String,
    length: usize,
}

impl ShipKind {
    /// Create a new ship kind.
    pub fn new(name: impl Into<String>, length: usize) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }

    /// Ship's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A straight run of `length` cells starting at `anchor`, extending right
/// (horizontal) or down (vertical).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub anchor: Coordinate,
    pub orientation: Orientation,
    pub length: usize,
}

impl Placement {
    pub fn new(anchor: Coordinate, orientation: Orientation, length: usize) -> Self {
        Self {
            anchor,
            orientation,
            length,
        }
    }

    /// Whether every cell lies inside a `size × size` grid.
    pub fn fits(&self, size: usize) -> bool {
        let Coordinate { row, col } = self.anchor;
        match self.orientation {
            Orientation::Horizontal => row < size && col + self.length <= size,
            Orientation::Vertical => col < size && row + self.length <= size,
        }
    }

    /// Cells covered by the placement, from the anchor outwards.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let Placement {
            anchor,
            orientation,
            length,
        } = *self;
        (0..length).map(move |k| match orientation {
            Orientation::Horizontal => Coordinate::new(anchor.row, anchor.col + k),
            Orientation::Vertical => Coordinate::new(anchor.row + k, anchor.col),
        })
    }

    pub fn covers(&self, coord: Coordinate) -> bool {
        let Coordinate { row, col } = self.anchor;
        match self.orientation {
            Orientation::Horizontal => {
                coord.row == row && coord.col >= col && coord.col < col + self.length
            }
            Orientation::Vertical => {
                coord.col == col && coord.row >= row && coord.row < row + self.length
            }
        }
    }
}
