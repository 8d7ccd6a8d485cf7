//! Anatomical zone classification.
//!
//! Two region tables describe the same diagram at different granularities:
//! [`coarse`] maps points to enumerated [`AreaCode`]s used for storage and
//! filtering, [`fine`] maps them to descriptive French labels used for
//! display. The tables are independent: stored codes do not change when
//! labels are refined.
//!
//! Both follow the same lookup: filter by view, take the highest-priority
//! rectangle that contains the point (inclusive on all sides), and fall back
//! to a band/side heuristic when the point lands in a coverage gap. The
//! coarse heuristic splits left/right strictly at the center line; the fine
//! one reserves a midline band.

pub mod coarse;
pub mod fine;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CENTER_LINE_X, DIAGRAM_HEIGHT, DIAGRAM_WIDTH, HEAD_BAND_END_Y, LIMB_BAND_END_Y, TORSO_BAND_END_Y,
};
use crate::viewport::Point;

pub use coarse::{AreaCode, CoarseClassifier};
pub use fine::FineClassifier;

/// Orientation of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BodyView {
    #[default]
    Front,
    Back,
}

impl BodyView {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Front => "FRONT",
            Self::Back => "BACK",
        }
    }

    /// Case-insensitive parse of `FRONT` / `BACK`.
    #[must_use]
    pub fn parse(view: &str) -> Option<Self> {
        if view.eq_ignore_ascii_case("front") {
            Some(Self::Front)
        } else if view.eq_ignore_ascii_case("back") {
            Some(Self::Back)
        } else {
            None
        }
    }
}

/// Which classification table to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Descriptive labels for display.
    Fine,
    /// Enumerated codes for storage and filtering.
    #[default]
    Coarse,
}

impl Granularity {
    /// Case-insensitive parse of `fine` / `coarse`.
    #[must_use]
    pub fn parse(granularity: &str) -> Option<Self> {
        if granularity.eq_ignore_ascii_case("fine") {
            Some(Self::Fine)
        } else if granularity.eq_ignore_ascii_case("coarse") {
            Some(Self::Coarse)
        } else {
            None
        }
    }
}

/// Patient side a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
    Center,
}

impl Side {
    /// Strict split at the center line.
    ///
    /// The diagram faces the viewer on [`BodyView::Front`], so screen-left is
    /// the patient's right; on [`BodyView::Back`] it is the patient's left.
    #[must_use]
    pub fn strict(x: f64, view: BodyView) -> Self {
        let screen_left = x < CENTER_LINE_X;
        match (view, screen_left) {
            (BodyView::Front, true) | (BodyView::Back, false) => Self::Right,
            (BodyView::Front, false) | (BodyView::Back, true) => Self::Left,
        }
    }

    /// Split with a midline band of half-width `band` around the center line.
    #[must_use]
    pub fn banded(x: f64, view: BodyView, band: f64) -> Self {
        if (x - CENTER_LINE_X).abs() <= band {
            Self::Center
        } else {
            Self::strict(x, view)
        }
    }
}

/// Vertical band used by the fallback heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Head,
    Torso,
    Limb,
    Foot,
}

impl Band {
    #[must_use]
    pub fn from_y(y: f64) -> Self {
        if y < HEAD_BAND_END_Y {
            Self::Head
        } else if y < TORSO_BAND_END_Y {
            Self::Torso
        } else if y < LIMB_BAND_END_Y {
            Self::Limb
        } else {
            Self::Foot
        }
    }
}

/// A rectangular zone in diagram space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region<A> {
    pub area: A,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub view: BodyView,
    /// Higher wins where regions overlap.
    pub priority: u8,
}

impl<A> Region<A> {
    /// Inclusive containment on all four sides.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x_min && point.x <= self.x_max && point.y >= self.y_min && point.y <= self.y_max
    }
}

/// Regions of one table split per view and sorted by descending priority.
///
/// The sort is stable, so equal priorities keep their table order.
#[derive(Debug, Clone)]
pub struct RegionTable<A: 'static> {
    front: Vec<&'static Region<A>>,
    back: Vec<&'static Region<A>>,
}

impl<A: Copy + 'static> RegionTable<A> {
    #[must_use]
    pub fn new(regions: &'static [Region<A>]) -> Self {
        Self { front: sorted_for(regions, BodyView::Front), back: sorted_for(regions, BodyView::Back) }
    }

    /// Regions of `view` in lookup order.
    #[must_use]
    pub fn regions(&self, view: BodyView) -> &[&'static Region<A>] {
        match view {
            BodyView::Front => &self.front,
            BodyView::Back => &self.back,
        }
    }

    /// The highest-priority region of `view` containing `point`.
    #[must_use]
    pub fn lookup(&self, point: Point, view: BodyView) -> Option<&'static Region<A>> {
        self.regions(view).iter().copied().find(|r| r.contains(point))
    }
}

fn sorted_for<A: 'static>(regions: &'static [Region<A>], view: BodyView) -> Vec<&'static Region<A>> {
    let mut filtered: Vec<&'static Region<A>> = regions.iter().filter(|r| r.view == view).collect();
    filtered.sort_by(|a, b| b.priority.cmp(&a.priority));
    filtered
}

/// Shared capability of both classification strategies.
pub trait ZoneClassifier: Send + Sync {
    fn granularity(&self) -> Granularity;

    /// Zone identifier for `point`. Never fails: points outside every region,
    /// and points outside the diagram, get a heuristic zone.
    fn classify(&self, point: Point, view: BodyView) -> &'static str;
}

/// The process-wide classifier for `granularity`.
#[must_use]
pub fn classifier_for(granularity: Granularity) -> &'static dyn ZoneClassifier {
    match granularity {
        Granularity::Coarse => coarse_classifier(),
        Granularity::Fine => fine_classifier(),
    }
}

#[must_use]
pub fn coarse_classifier() -> &'static CoarseClassifier {
    static CLASSIFIER: OnceLock<CoarseClassifier> = OnceLock::new();
    CLASSIFIER.get_or_init(CoarseClassifier::new)
}

#[must_use]
pub fn fine_classifier() -> &'static FineClassifier {
    static CLASSIFIER: OnceLock<FineClassifier> = OnceLock::new();
    CLASSIFIER.get_or_init(FineClassifier::new)
}

/// Whether `(x, y)` lies inside the diagram. Not enforced by `classify`.
#[must_use]
pub fn is_valid_coordinate(x: f64, y: f64) -> bool {
    (0.0..=DIAGRAM_WIDTH).contains(&x) && (0.0..=DIAGRAM_HEIGHT).contains(&y)
}
