//! Authoritative fleet board: ship placements and shots fired at them.
//!
//! This is the opponent's side of a sweep. It answers each shot with a
//! [`ShotOutcome`] that the driver relays to a targeting strategy.

use alloc::format;
use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{BoardError, ShotOutcome};
use crate::config::EngineConfig;
use crate::grid::{Coordinate, Grid};
use crate::ship::{Orientation, Placement, ShipKind};

/// Random placement attempts per ship before giving up.
const PLACEMENT_ATTEMPTS: usize = 100;

pub struct Board {
    config: EngineConfig,
    ship_map: Grid<Option<usize>>,
    fired: Grid<bool>,
    placements: Vec<Option<Placement>>,
    /// Segments not yet hit, per kind.
    afloat: Vec<usize>,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new(config: EngineConfig) -> Result<Self, BoardError> {
        config.validate()?;
        let size = config.grid_size;
        let kinds = config.ship_kinds.len();
        Ok(Board {
            ship_map: Grid::new(size, None),
            fired: Grid::new(size, false),
            placements: vec![None; kinds],
            afloat: vec![0; kinds],
            config,
        })
    }

    /// Create a board with every kind of the catalogue placed at random.
    pub fn randomized<R: Rng>(config: EngineConfig, rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Board::new(config)?;
        for idx in 0..board.config.ship_kinds.len() {
            let placement = board.random_placement(rng, idx)?;
            let name = board.config.ship_kinds[idx].name().to_string();
            board.place(&name, placement.anchor, placement.orientation)?;
        }
        Ok(board)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn size(&self) -> usize {
        self.config.grid_size
    }

    /// Place the named kind at `anchor`, extending right or down.
    pub fn place(
        &mut self,
        kind: &str,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let (idx, def) = self
            .config
            .kind(kind)
            .map_err(|_| BoardError::UnknownShipKind(kind.to_string()))?;
        if self.placements[idx].is_some() {
            return Err(BoardError::AlreadyPlaced(kind.to_string()));
        }
        let placement = Placement::new(anchor, orientation, def.length());
        if !placement.fits(self.size()) {
            return Err(BoardError::OutOfBounds(anchor));
        }
        if placement.cells().any(|c| self.ship_map.at(c) != Some(None)) {
            return Err(BoardError::Overlaps);
        }
        for cell in placement.cells() {
            self.ship_map
                .set(cell, Some(idx))
                .map_err(|_| BoardError::OutOfBounds(cell))?;
        }
        self.afloat[idx] = def.length();
        self.placements[idx] = Some(placement);
        Ok(())
    }

    /// Returns a random non-overlapping placement for the kind at `kind_index`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        kind_index: usize,
    ) -> Result<Placement, BoardError> {
        let def = self
            .config
            .ship_kinds
            .get(kind_index)
            .ok_or_else(|| BoardError::UnknownShipKind(format!("#{}", kind_index)))?;
        let size = self.size();
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (size - 1, size - def.length()),
                Orientation::Vertical => (size - def.length(), size - 1),
            };
            let anchor = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            let placement = Placement::new(anchor, orientation, def.length());
            if placement.cells().all(|c| self.ship_map.at(c) == Some(None)) {
                return Ok(placement);
            }
        }
        Err(BoardError::UnableToPlace(def.name().to_string()))
    }

    /// Where the named kind was placed, if it was.
    pub fn placement(&self, kind: &str) -> Option<Placement> {
        let (idx, _) = self.config.kind(kind).ok()?;
        self.placements[idx]
    }

    /// Kind occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&ShipKind> {
        let idx = self.ship_map.at(coord)??;
        self.config.ship_kinds.get(idx)
    }

    pub fn is_fired(&self, coord: Coordinate) -> bool {
        self.fired.at(coord).unwrap_or(false)
    }

    /// Process a shot at `coord`, recording it and reporting the result.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        if !self.fired.contains(coord) {
            return Err(BoardError::OutOfBounds(coord));
        }
        if self.is_fired(coord) {
            return Err(BoardError::AlreadyFired(coord));
        }
        self.fired
            .set(coord, true)
            .map_err(|_| BoardError::OutOfBounds(coord))?;

        let Some(idx) = self.ship_map.at(coord).flatten() else {
            return Ok(ShotOutcome::Miss);
        };
        let name = self.config.ship_kinds[idx].name().to_string();
        self.afloat[idx] -= 1;
        if self.afloat[idx] == 0 {
            Ok(ShotOutcome::Sunk(name))
        } else {
            Ok(ShotOutcome::Hit(name))
        }
    }

    /// Whether the named kind has been placed and fully destroyed.
    pub fn is_sunk(&self, kind: &str) -> bool {
        match self.config.kind(kind) {
            Ok((idx, _)) => self.placements[idx].is_some() && self.afloat[idx] == 0,
            Err(_) => false,
        }
    }

    /// Returns `true` once at least one ship is placed and every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.placements.iter().any(Option::is_some) && self.afloat.iter().all(|&n| n == 0)
    }

    /// Number of ship segments still afloat.
    pub fn segments_afloat(&self) -> usize {
        self.afloat.iter().sum()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  placements: {:?},\n  afloat: {:?}\n}}",
            self.size(),
            self.placements,
            self.afloat
        )
    }
}

/// `#` intact ship, `X` hit, `o` miss, `.` open water.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        for r in 0..size {
            for c in 0..size {
                let coord = Coordinate::new(r, c);
                let ch = match (self.ship_map.at(coord).flatten(), self.is_fired(coord)) {
                    (Some(_), true) => 'X',
                    (Some(_), false) => '#',
                    (None, true) => 'o',
                    (None, false) => '.',
                };
                write!(f, "{} ", ch)?;
            }
            if r + 1 < size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
