//! Marker model: recorded wound locations and the pending click marker.
//!
//! Saved markers come from the external records store and are read-only here.
//! A classification click produces a [`TempMarker`] that lives in the
//! [`MarkerStore`] until the host form either confirms it (handing back the
//! persisted [`Marker`]) or discards it. [`MapMarker`] lets the renderer walk
//! both kinds uniformly while keeping the two states distinct.

#[cfg(test)]
#[path = "marker_test.rs"]
mod marker_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::viewport::Point;
use crate::zones::{AreaCode, BodyView};

/// Identifier of a persisted wound record.
pub type MarkerId = i64;

/// Healing status of a recorded wound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WoundStatus {
    #[default]
    Active,
    Healing,
    Healed,
    Infected,
}

/// A recorded wound location, in diagram space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: MarkerId,
    pub x_position: f64,
    pub y_position: f64,
    pub view: BodyView,
    #[serde(default)]
    pub status: WoundStatus,
}

/// Marker created by a classification click, not yet persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TempMarker {
    /// Render key; unrelated to any record id.
    pub key: Uuid,
    pub x: f64,
    pub y: f64,
    pub zone_code: AreaCode,
    pub label: &'static str,
    pub view: BodyView,
}

impl TempMarker {
    #[must_use]
    pub fn new(point: Point, zone_code: AreaCode, label: &'static str, view: BodyView) -> Self {
        Self { key: Uuid::new_v4(), x: point.x, y: point.y, zone_code, label, view }
    }
}

/// Anything with a position in diagram space.
pub trait Located {
    fn location(&self) -> Point;
}

impl Located for Marker {
    fn location(&self) -> Point {
        Point::new(self.x_position, self.y_position)
    }
}

impl Located for TempMarker {
    fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Either marker kind, for uniform rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum MapMarker {
    Pending(TempMarker),
    Saved(Marker),
}

impl MapMarker {
    #[must_use]
    pub fn view(&self) -> BodyView {
        match self {
            Self::Pending(m) => m.view,
            Self::Saved(m) => m.view,
        }
    }
}

impl Located for MapMarker {
    fn location(&self) -> Point {
        match self {
            Self::Pending(m) => m.location(),
            Self::Saved(m) => m.location(),
        }
    }
}

/// Saved markers plus at most one pending marker.
#[derive(Debug, Clone, Default)]
pub struct MarkerStore {
    saved: Vec<Marker>,
    pending: Option<TempMarker>,
}

impl MarkerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all saved markers with a fresh snapshot from the records store.
    pub fn load(&mut self, markers: Vec<Marker>) {
        self.saved = markers;
    }

    #[must_use]
    pub fn saved(&self) -> &[Marker] {
        &self.saved
    }

    /// Saved markers drawn on `view`.
    #[must_use]
    pub fn saved_for(&self, view: BodyView) -> Vec<&Marker> {
        self.saved.iter().filter(|m| m.view == view).collect()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&TempMarker> {
        self.pending.as_ref()
    }

    /// Set the pending marker, replacing any previous one.
    pub fn set_pending(&mut self, marker: TempMarker) {
        self.pending = Some(marker);
    }

    /// Drop the pending marker, returning it.
    pub fn discard_pending(&mut self) -> Option<TempMarker> {
        self.pending.take()
    }

    /// The host saved the pending marker: clear it and record the persisted one.
    ///
    /// A marker whose id is already present replaces the stale copy.
    pub fn confirm_pending(&mut self, saved: Marker) -> Option<TempMarker> {
        let previous = self.pending.take();
        match self.saved.iter_mut().find(|m| m.id == saved.id) {
            Some(existing) => *existing = saved,
            None => self.saved.push(saved),
        }
        previous
    }

    /// Every marker on `view`: saved markers first, pending last (drawn on top).
    #[must_use]
    pub fn map_markers(&self, view: BodyView) -> Vec<MapMarker> {
        let mut out: Vec<MapMarker> =
            self.saved.iter().filter(|m| m.view == view).cloned().map(MapMarker::Saved).collect();
        if let Some(pending) = self.pending.as_ref().filter(|m| m.view == view) {
            out.push(MapMarker::Pending(pending.clone()));
        }
        out
    }
}
