//! Platform template catalog stamped into the ground layer by generation.

use reef_runner_core::{PlatformKind, TileKind};

/// Rectangular tile footprint stored column-major with explicit empty slots.
#[derive(Clone, Debug)]
pub(crate) struct Footprint {
    width: u32,
    height: u32,
    cells: Vec<Option<TileKind>>,
}

impl Footprint {
    fn from_columns(columns: &[&[Option<TileKind>]]) -> Self {
        let width = columns.len() as u32;
        let height = columns.iter().map(|column| column.len()).max().unwrap_or(0) as u32;
        let mut cells = Vec::with_capacity((width * height) as usize);
        for column in columns {
            for y in 0..height as usize {
                cells.push(column.get(y).copied().flatten());
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn tile_at(&self, x: u32, y: u32) -> Option<TileKind> {
        self.cells[(x * self.height + y) as usize]
    }

    fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

/// Decoration mask stored column-major, stamped one row above the footprint.
#[derive(Clone, Debug)]
pub(crate) struct DecorMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl DecorMask {
    pub(crate) fn from_columns(columns: &[&[bool]]) -> Self {
        let width = columns.len() as u32;
        let height = columns.iter().map(|column| column.len()).max().unwrap_or(0) as u32;
        let mut cells = Vec::with_capacity((width * height) as usize);
        for column in columns {
            for y in 0..height as usize {
                cells.push(column.get(y).copied().unwrap_or(false));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn is_set(&self, x: u32, y: u32) -> bool {
        self.cells[(x * self.height + y) as usize]
    }
}

/// One entry of the fixed platform catalog.
#[derive(Clone, Debug)]
pub(crate) struct PlatformTemplate {
    pub(crate) kind: PlatformKind,
    pub(crate) footprint: Footprint,
    pub(crate) foreground: Option<DecorMask>,
    pub(crate) background: Option<DecorMask>,
}

/// Template variants that carry an enemy on their top row.
pub(crate) fn spawns_enemy(kind: PlatformKind) -> bool {
    matches!(kind, PlatformKind::Brick | PlatformKind::RevPyramid)
}

/// Template variants that carry a breakable crate on their top row.
pub(crate) fn spawns_crate(kind: PlatformKind) -> bool {
    matches!(kind, PlatformKind::Dirt)
}

const D: Option<TileKind> = Some(TileKind::Dirt);
const B: Option<TileKind> = Some(TileKind::Brick);
const E: Option<TileKind> = None;

/// Builds the fixed template catalog.
///
/// Templates whose footprint holds no tiles are discarded here so the
/// selection loop in generation can never stall on an unplaceable pick.
pub(crate) fn catalog() -> Vec<PlatformTemplate> {
    let mut templates = vec![
        PlatformTemplate {
            kind: PlatformKind::Dirt,
            footprint: Footprint::from_columns(&[
                &[D],
                &[D],
                &[D],
                &[D],
                &[D],
                &[D],
                &[D],
                &[D],
                &[D],
                &[D],
            ]),
            foreground: Some(DecorMask::from_columns(&[
                &[false],
                &[false],
                &[false],
                &[true],
                &[false],
                &[true],
                &[true],
                &[false],
                &[false],
                &[false],
            ])),
            background: Some(DecorMask::from_columns(&[
                &[false],
                &[true],
                &[true],
                &[false],
                &[true],
                &[false],
                &[false],
                &[true],
                &[true],
                &[false],
            ])),
        },
        PlatformTemplate {
            kind: PlatformKind::Brick,
            footprint: Footprint::from_columns(&[
                &[B],
                &[B],
                &[B],
                &[B],
                &[B],
                &[B],
                &[B],
                &[B],
                &[B],
                &[B],
            ]),
            foreground: None,
            background: None,
        },
        PlatformTemplate {
            kind: PlatformKind::Hill,
            footprint: Footprint::from_columns(&[&[D, E], &[D, D], &[D, D], &[D, E]]),
            foreground: None,
            background: None,
        },
        PlatformTemplate {
            kind: PlatformKind::Stairs,
            footprint: Footprint::from_columns(&[
                &[B, E, E],
                &[B, B, E],
                &[B, B, B],
                &[E, B, B],
                &[E, E, B],
            ]),
            foreground: None,
            background: None,
        },
        PlatformTemplate {
            kind: PlatformKind::Pyramid,
            footprint: Footprint::from_columns(&[
                &[B, E, E],
                &[B, B, E],
                &[B, B, B],
                &[B, B, B],
                &[B, B, B],
                &[B, B, E],
                &[B, E, E],
            ]),
            foreground: None,
            background: None,
        },
        PlatformTemplate {
            kind: PlatformKind::RevPyramid,
            footprint: Footprint::from_columns(&[
                &[E, E, B],
                &[E, B, B],
                &[B, B, B],
                &[B, B, B],
                &[B, B, B],
                &[E, B, B],
                &[E, E, B],
            ]),
            foreground: None,
            background: None,
        },
        PlatformTemplate {
            kind: PlatformKind::Triple,
            footprint: Footprint::from_columns(&[
                &[B, E, E, E, E, E, B],
                &[B, E, E, B, E, E, B],
                &[B, E, E, B, E, E, B],
                &[B, E, E, B, E, E, B],
                &[B, E, E, B, E, E, B],
                &[B, E, E, E, E, E, B],
            ]),
            foreground: None,
            background: None,
        },
        PlatformTemplate {
            kind: PlatformKind::Gapped,
            footprint: Footprint::from_columns(&[
                &[B, E, E, E, E, E, B],
                &[B, E, E, B, E, E, B],
                &[B, E, E, B, E, E, B],
                &[B, E, E, E, E, E, B],
                &[E, E, E, E, E, E, E],
                &[E, E, E, E, E, E, E],
                &[E, B, E, E, E, B, E],
                &[E, B, E, E, E, B, E],
                &[E, E, E, E, E, E, E],
                &[E, E, E, E, E, E, E],
                &[E, E, E, B, E, E, E],
                &[E, E, E, B, E, E, E],
            ]),
            foreground: None,
            background: None,
        },
    ];
    templates.retain(|template| !template.footprint.is_empty());
    templates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_contains_every_variant() {
        let templates = catalog();
        assert_eq!(templates.len(), 8);
        for kind in [
            PlatformKind::Dirt,
            PlatformKind::Brick,
            PlatformKind::Hill,
            PlatformKind::Stairs,
            PlatformKind::Pyramid,
            PlatformKind::RevPyramid,
            PlatformKind::Triple,
            PlatformKind::Gapped,
        ] {
            assert!(
                templates.iter().any(|template| template.kind == kind),
                "missing {kind:?}"
            );
        }
    }

    #[test]
    fn catalog_rejects_empty_footprints() {
        for template in catalog() {
            assert!(
                !template.footprint.is_empty(),
                "{:?} has an empty footprint",
                template.kind
            );
        }
    }

    #[test]
    fn dirt_run_is_ten_wide_and_decorated() {
        let templates = catalog();
        let dirt = templates
            .iter()
            .find(|template| template.kind == PlatformKind::Dirt)
            .expect("dirt template");
        assert_eq!(dirt.footprint.width(), 10);
        assert_eq!(dirt.footprint.height(), 1);
        assert!(dirt.foreground.is_some());
        assert!(dirt.background.is_some());
        assert_eq!(dirt.footprint.tile_at(0, 0), Some(TileKind::Dirt));
    }

    #[test]
    fn rev_pyramid_leaves_its_lower_corners_open() {
        let templates = catalog();
        let rev = templates
            .iter()
            .find(|template| template.kind == PlatformKind::RevPyramid)
            .expect("rev pyramid template");
        assert_eq!(rev.footprint.width(), 7);
        assert_eq!(rev.footprint.height(), 3);
        assert_eq!(rev.footprint.tile_at(0, 0), None);
        assert_eq!(rev.footprint.tile_at(0, 2), Some(TileKind::Brick));
        assert_eq!(rev.footprint.tile_at(3, 0), Some(TileKind::Brick));
    }

    #[test]
    fn gapped_islands_match_their_silhouette() {
        let templates = catalog();
        let gapped = templates
            .iter()
            .find(|template| template.kind == PlatformKind::Gapped)
            .expect("gapped template");
        assert_eq!(gapped.footprint.width(), 12);
        assert_eq!(gapped.footprint.height(), 7);
        assert_eq!(gapped.footprint.tile_at(4, 0), None);
        assert_eq!(gapped.footprint.tile_at(6, 1), Some(TileKind::Brick));
        assert_eq!(gapped.footprint.tile_at(10, 3), Some(TileKind::Brick));
    }

    #[test]
    fn spawn_tables_cover_the_expected_variants() {
        assert!(spawns_enemy(PlatformKind::Brick));
        assert!(spawns_enemy(PlatformKind::RevPyramid));
        assert!(!spawns_enemy(PlatformKind::Dirt));
        assert!(spawns_crate(PlatformKind::Dirt));
        assert!(!spawns_crate(PlatformKind::Gapped));
    }
}
