//! Enumerated area codes and their region table.

use serde::{Deserialize, Serialize};

use super::{Band, BodyView, Granularity, Region, RegionTable, Side, ZoneClassifier};
use crate::viewport::Point;

/// Coarse anatomical area code, as stored on wound records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AreaCode {
    Head,
    Face,
    Occiput,
    Neck,
    ShoulderRight,
    ShoulderLeft,
    Chest,
    Abdomen,
    Pelvis,
    UpperBack,
    ScapulaRight,
    ScapulaLeft,
    LowerBack,
    Sacrum,
    ButtockRight,
    ButtockLeft,
    ArmRight,
    ArmLeft,
    ElbowRight,
    ElbowLeft,
    ForearmRight,
    ForearmLeft,
    HandRight,
    HandLeft,
    HipRight,
    HipLeft,
    ThighRight,
    ThighLeft,
    KneeRight,
    KneeLeft,
    PoplitealRight,
    PoplitealLeft,
    LegRight,
    LegLeft,
    CalfRight,
    CalfLeft,
    AnkleRight,
    AnkleLeft,
    FootRight,
    FootLeft,
    HeelRight,
    HeelLeft,
}

impl AreaCode {
    /// Every code, in declaration order.
    pub const ALL: [AreaCode; 42] = [
        Self::Head,
        Self::Face,
        Self::Occiput,
        Self::Neck,
        Self::ShoulderRight,
        Self::ShoulderLeft,
        Self::Chest,
        Self::Abdomen,
        Self::Pelvis,
        Self::UpperBack,
        Self::ScapulaRight,
        Self::ScapulaLeft,
        Self::LowerBack,
        Self::Sacrum,
        Self::ButtockRight,
        Self::ButtockLeft,
        Self::ArmRight,
        Self::ArmLeft,
        Self::ElbowRight,
        Self::ElbowLeft,
        Self::ForearmRight,
        Self::ForearmLeft,
        Self::HandRight,
        Self::HandLeft,
        Self::HipRight,
        Self::HipLeft,
        Self::ThighRight,
        Self::ThighLeft,
        Self::KneeRight,
        Self::KneeLeft,
        Self::PoplitealRight,
        Self::PoplitealLeft,
        Self::LegRight,
        Self::LegLeft,
        Self::CalfRight,
        Self::CalfLeft,
        Self::AnkleRight,
        Self::AnkleLeft,
        Self::FootRight,
        Self::FootLeft,
        Self::HeelRight,
        Self::HeelLeft,
    ];

    /// Wire form of the code (matches the serde representation).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Head => "HEAD",
            Self::Face => "FACE",
            Self::Occiput => "OCCIPUT",
            Self::Neck => "NECK",
            Self::ShoulderRight => "SHOULDER_RIGHT",
            Self::ShoulderLeft => "SHOULDER_LEFT",
            Self::Chest => "CHEST",
            Self::Abdomen => "ABDOMEN",
            Self::Pelvis => "PELVIS",
            Self::UpperBack => "UPPER_BACK",
            Self::ScapulaRight => "SCAPULA_RIGHT",
            Self::ScapulaLeft => "SCAPULA_LEFT",
            Self::LowerBack => "LOWER_BACK",
            Self::Sacrum => "SACRUM",
            Self::ButtockRight => "BUTTOCK_RIGHT",
            Self::ButtockLeft => "BUTTOCK_LEFT",
            Self::ArmRight => "ARM_RIGHT",
            Self::ArmLeft => "ARM_LEFT",
            Self::ElbowRight => "ELBOW_RIGHT",
            Self::ElbowLeft => "ELBOW_LEFT",
            Self::ForearmRight => "FOREARM_RIGHT",
            Self::ForearmLeft => "FOREARM_LEFT",
            Self::HandRight => "HAND_RIGHT",
            Self::HandLeft => "HAND_LEFT",
            Self::HipRight => "HIP_RIGHT",
            Self::HipLeft => "HIP_LEFT",
            Self::ThighRight => "THIGH_RIGHT",
            Self::ThighLeft => "THIGH_LEFT",
            Self::KneeRight => "KNEE_RIGHT",
            Self::KneeLeft => "KNEE_LEFT",
            Self::PoplitealRight => "POPLITEAL_RIGHT",
            Self::PoplitealLeft => "POPLITEAL_LEFT",
            Self::LegRight => "LEG_RIGHT",
            Self::LegLeft => "LEG_LEFT",
            Self::CalfRight => "CALF_RIGHT",
            Self::CalfLeft => "CALF_LEFT",
            Self::AnkleRight => "ANKLE_RIGHT",
            Self::AnkleLeft => "ANKLE_LEFT",
            Self::FootRight => "FOOT_RIGHT",
            Self::FootLeft => "FOOT_LEFT",
            Self::HeelRight => "HEEL_RIGHT",
            Self::HeelLeft => "HEEL_LEFT",
        }
    }

    /// Parse the wire form produced by [`AreaCode::as_str`].
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }
}

const fn front(area: AreaCode, x_min: f64, x_max: f64, y_min: f64, y_max: f64, priority: u8) -> Region<AreaCode> {
    Region { area, x_min, x_max, y_min, y_max, view: BodyView::Front, priority }
}

const fn back(area: AreaCode, x_min: f64, x_max: f64, y_min: f64, y_max: f64, priority: u8) -> Region<AreaCode> {
    Region { area, x_min, x_max, y_min, y_max, view: BodyView::Back, priority }
}

/// Screen-left is the patient's right on the front view and the patient's
/// left on the back view, so the lateral codes swap columns between views.
pub static REGIONS: [Region<AreaCode>; 62] = [
    // ── Front ───────────────────────────────────────────────
    front(AreaCode::Head, 206.0, 306.0, 10.0, 135.0, 1),
    front(AreaCode::Face, 218.0, 294.0, 60.0, 130.0, 2),
    front(AreaCode::Neck, 228.0, 284.0, 130.0, 170.0, 2),
    front(AreaCode::ShoulderRight, 150.0, 215.0, 160.0, 215.0, 2),
    front(AreaCode::ShoulderLeft, 297.0, 362.0, 160.0, 215.0, 2),
    front(AreaCode::Chest, 190.0, 322.0, 165.0, 300.0, 1),
    front(AreaCode::Abdomen, 190.0, 322.0, 300.0, 420.0, 1),
    front(AreaCode::Pelvis, 195.0, 317.0, 420.0, 490.0, 1),
    front(AreaCode::ArmRight, 120.0, 178.0, 215.0, 340.0, 1),
    front(AreaCode::ArmLeft, 334.0, 392.0, 215.0, 340.0, 1),
    front(AreaCode::ElbowRight, 110.0, 172.0, 340.0, 375.0, 2),
    front(AreaCode::ElbowLeft, 340.0, 402.0, 340.0, 375.0, 2),
    front(AreaCode::ForearmRight, 95.0, 165.0, 375.0, 465.0, 1),
    front(AreaCode::ForearmLeft, 347.0, 417.0, 375.0, 465.0, 1),
    front(AreaCode::HandRight, 70.0, 155.0, 465.0, 560.0, 1),
    front(AreaCode::HandLeft, 357.0, 442.0, 465.0, 560.0, 1),
    front(AreaCode::HipRight, 175.0, 225.0, 440.0, 520.0, 2),
    front(AreaCode::HipLeft, 287.0, 337.0, 440.0, 520.0, 2),
    front(AreaCode::ThighRight, 180.0, 254.0, 490.0, 690.0, 1),
    front(AreaCode::ThighLeft, 258.0, 332.0, 490.0, 690.0, 1),
    front(AreaCode::KneeRight, 185.0, 250.0, 690.0, 750.0, 2),
    front(AreaCode::KneeLeft, 262.0, 327.0, 690.0, 750.0, 2),
    front(AreaCode::LegRight, 188.0, 248.0, 750.0, 880.0, 1),
    front(AreaCode::LegLeft, 264.0, 324.0, 750.0, 880.0, 1),
    front(AreaCode::AnkleRight, 192.0, 245.0, 880.0, 915.0, 2),
    front(AreaCode::AnkleLeft, 267.0, 320.0, 880.0, 915.0, 2),
    front(AreaCode::FootRight, 170.0, 250.0, 915.0, 1000.0, 1),
    front(AreaCode::FootLeft, 262.0, 342.0, 915.0, 1000.0, 1),
    // ── Back ────────────────────────────────────────────────
    back(AreaCode::Head, 206.0, 306.0, 10.0, 135.0, 1),
    back(AreaCode::Occiput, 216.0, 296.0, 60.0, 130.0, 2),
    back(AreaCode::Neck, 228.0, 284.0, 130.0, 170.0, 2),
    back(AreaCode::ShoulderLeft, 150.0, 215.0, 160.0, 215.0, 2),
    back(AreaCode::ShoulderRight, 297.0, 362.0, 160.0, 215.0, 2),
    back(AreaCode::UpperBack, 190.0, 322.0, 165.0, 330.0, 1),
    back(AreaCode::ScapulaLeft, 198.0, 250.0, 190.0, 280.0, 2),
    back(AreaCode::ScapulaRight, 262.0, 314.0, 190.0, 280.0, 2),
    back(AreaCode::LowerBack, 190.0, 322.0, 330.0, 430.0, 1),
    back(AreaCode::Sacrum, 231.0, 281.0, 420.0, 470.0, 3),
    back(AreaCode::ButtockLeft, 185.0, 256.0, 430.0, 520.0, 2),
    back(AreaCode::ButtockRight, 256.0, 327.0, 430.0, 520.0, 2),
    back(AreaCode::ArmLeft, 120.0, 178.0, 215.0, 340.0, 1),
    back(AreaCode::ArmRight, 334.0, 392.0, 215.0, 340.0, 1),
    back(AreaCode::ElbowLeft, 110.0, 172.0, 340.0, 375.0, 2),
    back(AreaCode::ElbowRight, 340.0, 402.0, 340.0, 375.0, 2),
    back(AreaCode::ForearmLeft, 95.0, 165.0, 375.0, 465.0, 1),
    back(AreaCode::ForearmRight, 347.0, 417.0, 375.0, 465.0, 1),
    back(AreaCode::HandLeft, 70.0, 155.0, 465.0, 560.0, 1),
    back(AreaCode::HandRight, 357.0, 442.0, 465.0, 560.0, 1),
    back(AreaCode::ThighLeft, 180.0, 254.0, 520.0, 690.0, 1),
    back(AreaCode::ThighRight, 258.0, 332.0, 520.0, 690.0, 1),
    back(AreaCode::PoplitealLeft, 185.0, 250.0, 690.0, 745.0, 2),
    back(AreaCode::PoplitealRight, 262.0, 327.0, 690.0, 745.0, 2),
    back(AreaCode::CalfLeft, 188.0, 248.0, 745.0, 880.0, 1),
    back(AreaCode::CalfRight, 264.0, 324.0, 745.0, 880.0, 1),
    back(AreaCode::AnkleLeft, 192.0, 245.0, 880.0, 915.0, 2),
    back(AreaCode::AnkleRight, 267.0, 320.0, 880.0, 915.0, 2),
    back(AreaCode::HeelLeft, 195.0, 245.0, 960.0, 1010.0, 2),
    back(AreaCode::HeelRight, 267.0, 317.0, 960.0, 1010.0, 2),
    back(AreaCode::FootLeft, 185.0, 250.0, 915.0, 1010.0, 1),
    back(AreaCode::FootRight, 262.0, 327.0, 915.0, 1010.0, 1),
    // Hip points on the back view read as the outer buttock.
    back(AreaCode::ButtockLeft, 175.0, 185.0, 440.0, 520.0, 1),
    back(AreaCode::ButtockRight, 327.0, 337.0, 440.0, 520.0, 1),
];

/// Classifier over [`REGIONS`] returning [`AreaCode`]s.
#[derive(Debug, Clone)]
pub struct CoarseClassifier {
    table: RegionTable<AreaCode>,
}

impl Default for CoarseClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CoarseClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self { table: RegionTable::new(&REGIONS) }
    }

    #[must_use]
    pub fn table(&self) -> &RegionTable<AreaCode> {
        &self.table
    }

    /// Area code for `point`, falling back to [`fallback_code`] in gaps.
    #[must_use]
    pub fn classify_code(&self, point: Point, view: BodyView) -> AreaCode {
        match self.table.lookup(point, view) {
            Some(region) => region.area,
            None => fallback_code(point, view),
        }
    }
}

impl ZoneClassifier for CoarseClassifier {
    fn granularity(&self) -> Granularity {
        Granularity::Coarse
    }

    fn classify(&self, point: Point, view: BodyView) -> &'static str {
        self.classify_code(point, view).as_str()
    }
}

/// Band/side heuristic for points no region covers. Strict split, no midline.
#[must_use]
pub fn fallback_code(point: Point, view: BodyView) -> AreaCode {
    let side = Side::strict(point.x, view);
    match Band::from_y(point.y) {
        Band::Head => AreaCode::Head,
        Band::Torso => match view {
            BodyView::Front => AreaCode::Chest,
            BodyView::Back => AreaCode::UpperBack,
        },
        Band::Limb => match side {
            Side::Left => AreaCode::LegLeft,
            Side::Right | Side::Center => AreaCode::LegRight,
        },
        Band::Foot => match side {
            Side::Left => AreaCode::FootLeft,
            Side::Right | Side::Center => AreaCode::FootRight,
        },
    }
}
