//! Descriptive (French) zone labels and their region table.
//!
//! Finer than [`super::coarse`]: the face, trunk and extremities are split into
//! the landmarks nurses chart against (sternum, umbilicus, sacrum, heel...).
//! Labels are display strings, not storage keys.

use super::{Band, BodyView, Granularity, Region, RegionTable, Side, ZoneClassifier};
use crate::consts::CENTER_BAND;
use crate::viewport::Point;

const fn f(label: &'static str, x_min: f64, x_max: f64, y_min: f64, y_max: f64, priority: u8) -> Region<&'static str> {
    Region { area: label, x_min, x_max, y_min, y_max, view: BodyView::Front, priority }
}

const fn b(label: &'static str, x_min: f64, x_max: f64, y_min: f64, y_max: f64, priority: u8) -> Region<&'static str> {
    Region { area: label, x_min, x_max, y_min, y_max, view: BodyView::Back, priority }
}

pub static REGIONS: [Region<&'static str>; 114] = [
    // ── Front: head & neck ──────────────────────────────────
    f("Tête", 200.0, 312.0, 10.0, 135.0, 0),
    f("Cuir chevelu", 206.0, 306.0, 10.0, 60.0, 1),
    f("Visage", 218.0, 294.0, 60.0, 135.0, 1),
    f("Front", 218.0, 294.0, 60.0, 80.0, 2),
    f("Joue droite", 218.0, 245.0, 95.0, 120.0, 2),
    f("Joue gauche", 267.0, 294.0, 95.0, 120.0, 2),
    f("Œil droit", 226.0, 254.0, 80.0, 95.0, 3),
    f("Œil gauche", 258.0, 286.0, 80.0, 95.0, 3),
    f("Oreille droite", 200.0, 217.0, 75.0, 110.0, 3),
    f("Oreille gauche", 295.0, 312.0, 75.0, 110.0, 3),
    f("Bouche", 240.0, 272.0, 108.0, 120.0, 3),
    f("Menton", 236.0, 276.0, 120.0, 135.0, 3),
    f("Nez", 246.0, 266.0, 90.0, 108.0, 4),
    f("Cou", 228.0, 284.0, 135.0, 170.0, 1),
    // ── Front: trunk ────────────────────────────────────────
    f("Clavicule droite", 190.0, 250.0, 160.0, 180.0, 2),
    f("Clavicule gauche", 262.0, 322.0, 160.0, 180.0, 2),
    f("Épaule droite", 150.0, 215.0, 160.0, 215.0, 2),
    f("Épaule gauche", 297.0, 362.0, 160.0, 215.0, 2),
    f("Thorax droit", 190.0, 256.0, 165.0, 300.0, 1),
    f("Thorax gauche", 256.0, 322.0, 165.0, 300.0, 1),
    f("Sein droit", 195.0, 236.0, 200.0, 270.0, 2),
    f("Sein gauche", 276.0, 317.0, 200.0, 270.0, 2),
    f("Sternum", 236.0, 276.0, 180.0, 300.0, 3),
    f("Abdomen", 190.0, 322.0, 300.0, 420.0, 1),
    f("Hypochondre droit", 190.0, 226.0, 300.0, 340.0, 2),
    f("Épigastre", 226.0, 286.0, 300.0, 340.0, 2),
    f("Hypochondre gauche", 286.0, 322.0, 300.0, 340.0, 2),
    f("Flanc droit", 190.0, 236.0, 340.0, 400.0, 2),
    f("Flanc gauche", 276.0, 322.0, 340.0, 400.0, 2),
    f("Ombilic", 241.0, 271.0, 345.0, 375.0, 3),
    f("Fosse iliaque droite", 195.0, 236.0, 400.0, 440.0, 2),
    f("Hypogastre", 236.0, 276.0, 400.0, 440.0, 2),
    f("Fosse iliaque gauche", 276.0, 317.0, 400.0, 440.0, 2),
    f("Aine droite", 195.0, 236.0, 440.0, 490.0, 2),
    f("Aine gauche", 276.0, 317.0, 440.0, 490.0, 2),
    f("Pubis", 231.0, 281.0, 440.0, 475.0, 3),
    f("Hanche droite", 175.0, 200.0, 440.0, 520.0, 2),
    f("Hanche gauche", 312.0, 337.0, 440.0, 520.0, 2),
    // ── Front: upper limbs ──────────────────────────────────
    f("Bras droit", 120.0, 178.0, 215.0, 340.0, 1),
    f("Bras gauche", 334.0, 392.0, 215.0, 340.0, 1),
    f("Pli du coude droit", 110.0, 172.0, 340.0, 375.0, 2),
    f("Pli du coude gauche", 340.0, 402.0, 340.0, 375.0, 2),
    f("Avant-bras droit", 95.0, 165.0, 375.0, 450.0, 1),
    f("Avant-bras gauche", 347.0, 417.0, 375.0, 450.0, 1),
    f("Poignet droit", 85.0, 160.0, 450.0, 475.0, 2),
    f("Poignet gauche", 352.0, 427.0, 450.0, 475.0, 2),
    f("Paume droite", 80.0, 150.0, 475.0, 525.0, 1),
    f("Paume gauche", 362.0, 432.0, 475.0, 525.0, 1),
    f("Doigts main droite", 70.0, 155.0, 525.0, 560.0, 1),
    f("Doigts main gauche", 357.0, 442.0, 525.0, 560.0, 1),
    // ── Front: lower limbs ──────────────────────────────────
    f("Cuisse droite", 180.0, 254.0, 490.0, 690.0, 1),
    f("Cuisse gauche", 258.0, 332.0, 490.0, 690.0, 1),
    f("Genou droit", 185.0, 250.0, 690.0, 750.0, 2),
    f("Genou gauche", 262.0, 327.0, 690.0, 750.0, 2),
    f("Jambe droite", 188.0, 248.0, 750.0, 880.0, 1),
    f("Jambe gauche", 264.0, 324.0, 750.0, 880.0, 1),
    f("Cheville droite", 192.0, 245.0, 880.0, 915.0, 2),
    f("Cheville gauche", 267.0, 320.0, 880.0, 915.0, 2),
    f("Dos du pied droit", 170.0, 250.0, 915.0, 975.0, 1),
    f("Dos du pied gauche", 262.0, 342.0, 915.0, 975.0, 1),
    f("Orteils droits", 170.0, 250.0, 975.0, 1000.0, 2),
    f("Orteils gauches", 262.0, 342.0, 975.0, 1000.0, 2),
    // ── Back: head & neck ───────────────────────────────────
    b("Tête", 200.0, 312.0, 10.0, 135.0, 0),
    b("Cuir chevelu", 206.0, 306.0, 10.0, 135.0, 1),
    b("Occiput", 216.0, 296.0, 60.0, 130.0, 2),
    b("Oreille gauche", 200.0, 217.0, 75.0, 110.0, 3),
    b("Oreille droite", 295.0, 312.0, 75.0, 110.0, 3),
    b("Nuque", 228.0, 284.0, 130.0, 170.0, 2),
    // ── Back: trunk ─────────────────────────────────────────
    b("Épaule gauche", 150.0, 215.0, 160.0, 215.0, 2),
    b("Épaule droite", 297.0, 362.0, 160.0, 215.0, 2),
    b("Dos gauche", 190.0, 256.0, 165.0, 330.0, 1),
    b("Dos droit", 256.0, 322.0, 165.0, 330.0, 1),
    b("Omoplate gauche", 198.0, 250.0, 190.0, 280.0, 2),
    b("Omoplate droite", 262.0, 314.0, 190.0, 280.0, 2),
    b("Colonne dorsale", 246.0, 266.0, 165.0, 330.0, 3),
    b("Région lombaire gauche", 190.0, 256.0, 330.0, 430.0, 1),
    b("Région lombaire droite", 256.0, 322.0, 330.0, 430.0, 1),
    b("Colonne lombaire", 246.0, 266.0, 330.0, 420.0, 3),
    b("Sacrum", 231.0, 281.0, 420.0, 465.0, 4),
    b("Coccyx", 246.0, 266.0, 465.0, 485.0, 4),
    b("Fesse gauche", 185.0, 256.0, 430.0, 520.0, 2),
    b("Fesse droite", 256.0, 327.0, 430.0, 520.0, 2),
    b("Ischion gauche", 205.0, 240.0, 495.0, 520.0, 3),
    b("Ischion droit", 272.0, 307.0, 495.0, 520.0, 3),
    b("Trochanter gauche", 175.0, 195.0, 450.0, 500.0, 3),
    b("Trochanter droit", 317.0, 337.0, 450.0, 500.0, 3),
    // ── Back: upper limbs ───────────────────────────────────
    b("Bras gauche", 120.0, 178.0, 215.0, 340.0, 1),
    b("Bras droit", 334.0, 392.0, 215.0, 340.0, 1),
    b("Coude gauche", 110.0, 172.0, 340.0, 375.0, 2),
    b("Coude droit", 340.0, 402.0, 340.0, 375.0, 2),
    b("Avant-bras gauche", 95.0, 165.0, 375.0, 450.0, 1),
    b("Avant-bras droit", 347.0, 417.0, 375.0, 450.0, 1),
    b("Poignet gauche", 85.0, 160.0, 450.0, 475.0, 2),
    b("Poignet droit", 352.0, 427.0, 450.0, 475.0, 2),
    b("Dos de la main gauche", 70.0, 155.0, 475.0, 560.0, 1),
    b("Dos de la main droite", 357.0, 442.0, 475.0, 560.0, 1),
    // ── Back: lower limbs ───────────────────────────────────
    b("Cuisse postérieure gauche", 180.0, 254.0, 520.0, 690.0, 1),
    b("Cuisse postérieure droite", 258.0, 332.0, 520.0, 690.0, 1),
    b("Creux poplité gauche", 185.0, 250.0, 690.0, 745.0, 2),
    b("Creux poplité droit", 262.0, 327.0, 690.0, 745.0, 2),
    b("Mollet gauche", 188.0, 248.0, 745.0, 880.0, 1),
    b("Mollet droit", 264.0, 324.0, 745.0, 880.0, 1),
    b("Cheville gauche", 192.0, 245.0, 880.0, 915.0, 2),
    b("Cheville droite", 267.0, 320.0, 880.0, 915.0, 2),
    b("Tendon d'Achille gauche", 205.0, 232.0, 880.0, 915.0, 3),
    b("Tendon d'Achille droit", 280.0, 307.0, 880.0, 915.0, 3),
    b("Plante du pied gauche", 185.0, 250.0, 915.0, 1010.0, 1),
    b("Plante du pied droit", 262.0, 327.0, 915.0, 1010.0, 1),
    b("Talon gauche", 195.0, 245.0, 960.0, 1010.0, 3),
    b("Talon droit", 267.0, 317.0, 960.0, 1010.0, 3),
    b("Malléole externe gauche", 185.0, 192.0, 885.0, 910.0, 3),
    b("Malléole externe droite", 320.0, 327.0, 885.0, 910.0, 3),
    b("Malléole interne gauche", 245.0, 252.0, 885.0, 910.0, 3),
    b("Malléole interne droite", 260.0, 267.0, 885.0, 910.0, 3),
];

/// Classifier over [`REGIONS`] returning descriptive labels.
#[derive(Debug, Clone)]
pub struct FineClassifier {
    table: RegionTable<&'static str>,
    center_band: f64,
}

impl Default for FineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl FineClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self::with_center_band(CENTER_BAND)
    }

    /// Classifier whose fallback treats `|x - center| <= band` as the midline.
    #[must_use]
    pub fn with_center_band(band: f64) -> Self {
        Self { table: RegionTable::new(&REGIONS), center_band: band }
    }

    #[must_use]
    pub fn table(&self) -> &RegionTable<&'static str> {
        &self.table
    }

    #[must_use]
    pub fn center_band(&self) -> f64 {
        self.center_band
    }

    #[must_use]
    pub fn label(&self, point: Point, view: BodyView) -> &'static str {
        match self.table.lookup(point, view) {
            Some(region) => region.area,
            None => fallback_label(point, view, self.center_band),
        }
    }
}

impl ZoneClassifier for FineClassifier {
    fn granularity(&self) -> Granularity {
        Granularity::Fine
    }

    fn classify(&self, point: Point, view: BodyView) -> &'static str {
        self.label(point, view)
    }
}

/// Band/side heuristic with a midline band of half-width `center_band`.
#[must_use]
pub fn fallback_label(point: Point, view: BodyView, center_band: f64) -> &'static str {
    let side = Side::banded(point.x, view, center_band);
    match (Band::from_y(point.y), view, side) {
        (Band::Head, _, _) => "Tête",
        (Band::Torso, BodyView::Front, Side::Right) => "Tronc droit",
        (Band::Torso, BodyView::Front, Side::Left) => "Tronc gauche",
        (Band::Torso, BodyView::Front, Side::Center) => "Tronc (ligne médiane)",
        (Band::Torso, BodyView::Back, Side::Right) => "Dos droit",
        (Band::Torso, BodyView::Back, Side::Left) => "Dos gauche",
        (Band::Torso, BodyView::Back, Side::Center) => "Colonne vertébrale",
        (Band::Limb, _, Side::Right) => "Membre inférieur droit",
        (Band::Limb, _, Side::Left) => "Membre inférieur gauche",
        (Band::Limb, _, Side::Center) => "Membres inférieurs (ligne médiane)",
        (Band::Foot, _, Side::Right) => "Pied droit",
        (Band::Foot, _, Side::Left) => "Pied gauche",
        (Band::Foot, _, Side::Center) => "Pieds (ligne médiane)",
    }
}
