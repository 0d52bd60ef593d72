//! Anchor positions of the dimension callouts on the reference drawing.
//!
//! Positions are normalized: percentages of the rendered image's width and
//! height, so they stay correct at any display size. Values outside `0..=100`
//! are legal and place a callout beside or above the image.

use crate::types::{DimensionId, DimensionList};
use eframe::egui;
use serde::{Deserialize, Serialize};

/// A point expressed as a percentage of an image's width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPoint {
    /// Horizontal position, percent of image width
    pub x_pct: f32,
    /// Vertical position, percent of image height
    pub y_pct: f32,
}

impl NormalizedPoint {
    /// Creates a point from percentages.
    pub const fn new(x_pct: f32, y_pct: f32) -> Self {
        Self { x_pct, y_pct }
    }

    /// Maps the point into `image`, the on-screen bounding box of the drawing.
    pub fn resolve(self, image: egui::Rect) -> egui::Pos2 {
        egui::pos2(
            image.min.x + image.width() * self.x_pct / 100.0,
            image.min.y + image.height() * self.y_pct / 100.0,
        )
    }
}

/// How an overlay element is placed relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorAlign {
    /// The anchor point is the element's top-left corner
    TopLeft,
    /// The element is shifted by half its size so the point is its center
    Centered,
}

impl AnchorAlign {
    /// Rectangle of an element of `size` anchored at `anchor`.
    pub fn element_rect(self, anchor: egui::Pos2, size: egui::Vec2) -> egui::Rect {
        match self {
            AnchorAlign::TopLeft => egui::Rect::from_min_size(anchor, size),
            AnchorAlign::Centered => egui::Rect::from_center_size(anchor, size),
        }
    }
}

/// Lookup from every dimension to its optional anchor on the drawing.
///
/// The table, not the dimension list, decides what is renderable: an entry
/// of `None` means the callout is not drawn at all.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorTable {
    positions: [Option<NormalizedPoint>; DimensionId::COUNT],
}

impl Default for AnchorTable {
    /// The callout layout of the feeder drawing.
    fn default() -> Self {
        let mut positions = [None; DimensionId::COUNT];
        for id in DimensionId::ALL {
            positions[id.index()] = Some(feeder_anchor(id));
        }
        Self { positions }
    }
}

impl AnchorTable {
    /// A table with no anchors at all.
    pub fn empty() -> Self {
        Self {
            positions: [None; DimensionId::COUNT],
        }
    }

    /// Anchor of `id`, if it has one.
    pub fn position(&self, id: DimensionId) -> Option<NormalizedPoint> {
        self.positions[id.index()]
    }

    /// Sets or clears the anchor of `id`.
    pub fn set(&mut self, id: DimensionId, position: Option<NormalizedPoint>) {
        self.positions[id.index()] = position;
    }

    /// Returns a copy of this table with the anchor of `id` removed.
    pub fn without(mut self, id: DimensionId) -> Self {
        self.set(id, None);
        self
    }

    /// Number of identifiers that have an anchor.
    pub fn anchored_count(&self) -> usize {
        self.positions.iter().filter(|p| p.is_some()).count()
    }
}

/// Where each callout sits on the feeder drawing, beside its dimension line.
fn feeder_anchor(id: DimensionId) -> NormalizedPoint {
    match id {
        DimensionId::A => NormalizedPoint::new(3.0, 19.0),
        DimensionId::B => NormalizedPoint::new(2.0, 35.0),
        DimensionId::C => NormalizedPoint::new(6.0, 41.0),
        DimensionId::D => NormalizedPoint::new(22.0, 35.0),
        DimensionId::E => NormalizedPoint::new(30.0, 37.5),
        DimensionId::F => NormalizedPoint::new(4.0, 68.0),
        DimensionId::G => NormalizedPoint::new(35.0, 66.0),
        DimensionId::H => NormalizedPoint::new(6.0, 78.0),
        DimensionId::I => NormalizedPoint::new(40.0, 78.0),
        DimensionId::J => NormalizedPoint::new(40.0, 48.0),
        DimensionId::K => NormalizedPoint::new(37.0, 41.4),
        DimensionId::L => NormalizedPoint::new(65.0, 36.0),
        // Above the drawing.
        DimensionId::M => NormalizedPoint::new(22.0, -3.0),
        DimensionId::N => NormalizedPoint::new(38.0, 5.0),
        DimensionId::O => NormalizedPoint::new(40.0, 30.0),
        DimensionId::P => NormalizedPoint::new(50.0, 23.0),
    }
}

/// One renderable callout: a dimension paired with its anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPlacement {
    /// Dimension shown by this callout
    pub id: DimensionId,
    /// Where the callout is anchored
    pub point: NormalizedPoint,
}

/// Produces one placement per dimension that has an anchor, in list order.
///
/// Dimensions without an anchor are skipped without complaint.
pub fn render_anchors(dimensions: &DimensionList, table: &AnchorTable) -> Vec<AnchorPlacement> {
    dimensions
        .iter()
        .filter_map(|dim| {
            table
                .position(dim.id)
                .map(|point| AnchorPlacement { id: dim.id, point })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_places_every_dimension() {
        let placements = render_anchors(&DimensionList::new(), &AnchorTable::default());
        assert_eq!(placements.len(), 16);
        let ids: Vec<DimensionId> = placements.iter().map(|p| p.id).collect();
        assert_eq!(ids, DimensionId::ALL.to_vec());
    }

    #[test]
    fn test_ids_without_anchor_are_omitted() {
        let table = AnchorTable::default()
            .without(DimensionId::D)
            .without(DimensionId::N);
        let placements = render_anchors(&DimensionList::new(), &table);

        assert_eq!(placements.len(), 14);
        assert_eq!(table.anchored_count(), 14);
        for id in DimensionId::ALL {
            let count = placements.iter().filter(|p| p.id == id).count();
            let expected = usize::from(table.position(id).is_some());
            assert_eq!(count, expected, "placements for {id}");
        }
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        assert!(render_anchors(&DimensionList::new(), &AnchorTable::empty()).is_empty());
    }

    #[test]
    fn test_resolve_maps_percentages_into_image_rect() {
        let image = egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(400.0, 200.0));
        let p = NormalizedPoint::new(25.0, 50.0).resolve(image);
        assert_eq!(p, egui::pos2(200.0, 150.0));
    }

    #[test]
    fn test_negative_y_lands_above_the_image() {
        let image = egui::Rect::from_min_size(egui::pos2(0.0, 100.0), egui::vec2(1000.0, 1000.0));
        let anchor = AnchorTable::default()
            .position(DimensionId::M)
            .expect("M is anchored")
            .resolve(image);
        assert!(anchor.y < image.min.y);
        assert_eq!(anchor, egui::pos2(220.0, 70.0));
    }

    #[test]
    fn test_centered_alignment_shifts_by_half_size() {
        let anchor = egui::pos2(100.0, 100.0);
        let size = egui::vec2(40.0, 20.0);
        let top_left = AnchorAlign::TopLeft.element_rect(anchor, size);
        let centered = AnchorAlign::Centered.element_rect(anchor, size);
        assert_eq!(top_left.min, anchor);
        assert_eq!(centered.min, egui::pos2(80.0, 90.0));
        assert_eq!(centered.center(), anchor);
    }
}
