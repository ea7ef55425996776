//! Trait-basierte Kurvenfamilie fuer interaktives Fitten.
//!
//! Jede Kurvenart implementiert den `CurveModel`-Trait: geschlossene
//! Modellfunktion, Parameteranzahl und die geschlossene Rueckableitung der
//! Parameter aus den zwei Drag-Punkten. Die Ableitung wirft nie; entartete
//! Konfigurationen liefern entweder einen definierten Fallback (Gerade) oder
//! fliessen als NaN/Inf sichtbar in die Preview.

pub mod composite;
pub mod cosine;
pub mod exponential;
pub mod gaussian;
pub mod line;
pub mod lorentzian;
pub mod quadratic;
pub mod sine;

pub use composite::{CombineOp, ModelExpr};
pub use cosine::CosineCurve;
pub use exponential::ExponentialCurve;
pub use gaussian::GaussianCurve;
pub use line::LineCurve;
pub use lorentzian::LorentzianCurve;
pub use quadratic::QuadraticCurve;
pub use sine::SineCurve;

use glam::DVec2;

/// Anzahl der Preview-Stuetzstellen.
pub const PREVIEW_SAMPLES: usize = 250;

/// Ueberstand des Preview-Fensters relativ zum Punktabstand.
pub const PREVIEW_MARGIN_FACTOR: f64 = 1.5;

/// Einschraenkung der Bewegung eines Drag-Punkts relativ zu einem
/// Referenzpunkt (Daten-Koordinaten). Explizite Variante statt Closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restriction {
    /// y wird auf die Haelfte des Referenz-y geklemmt (Halbwertspunkt).
    HalfOfReferenceY,
}

impl Restriction {
    /// Wendet die Einschraenkung auf eine vorgeschlagene Position an.
    pub fn apply(self, reference: DVec2, proposed: DVec2) -> DVec2 {
        match self {
            Restriction::HalfOfReferenceY => DVec2::new(proposed.x, reference.y / 2.0),
        }
    }
}

/// Gemeinsamer Vertrag aller Kurvenarten.
pub trait CurveModel {
    /// Anzeigename der Kurvenart.
    fn name(&self) -> &'static str;

    /// Formel als Text (fuer Toolbar und Fit-Auswahl).
    fn formula(&self) -> &'static str;

    /// Modellfunktion `f(x, params)`, rein und ohne Seiteneffekte.
    fn eval(&self, x: f64, params: &[f64]) -> f64;

    /// Feste Parameteranzahl der Kurvenart.
    fn param_count(&self) -> usize;

    /// Geschlossene Rueckableitung der Parameter aus den zwei Drag-Punkten
    /// (Daten-Koordinaten). Nicht iterativ, wirft nie.
    fn derive_params(&self, p1: DVec2, p2: DVec2) -> Vec<f64>;

    /// x-Intervall fuer die Preview.
    ///
    /// Standard: `[min - 1.5*Delta, max + 1.5*Delta]` um beide Punkte; die
    /// Parabel zentriert stattdessen auf Punkt 1 (Scheitel).
    fn preview_window(&self, p1: DVec2, p2: DVec2) -> (f64, f64) {
        let dx = (p1.x - p2.x).abs() * PREVIEW_MARGIN_FACTOR;
        (p1.x.min(p2.x) - dx, p1.x.max(p2.x) + dx)
    }

    /// Bewegungs-Einschraenkung fuer Punkt 2 (Referenz: Punkt 1).
    fn secondary_restriction(&self) -> Option<Restriction> {
        None
    }

    /// Default-Platzierung der zwei Drag-Punkte als Achsen-Bruchteile
    /// (0..1, Ursprung unten links).
    fn default_point_fractions(&self) -> [(f32, f32); 2] {
        [(0.3, 0.4), (0.6, 0.6)]
    }
}

/// Alle eingebauten Kurvenarten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Line,
    Quadratic,
    Exponential,
    Gaussian,
    Sine,
    Cosine,
    Lorentzian,
}

impl CurveKind {
    /// Alle Kurvenarten in Toolbar-Reihenfolge.
    pub const ALL: [CurveKind; 7] = [
        CurveKind::Line,
        CurveKind::Quadratic,
        CurveKind::Exponential,
        CurveKind::Gaussian,
        CurveKind::Sine,
        CurveKind::Cosine,
        CurveKind::Lorentzian,
    ];

    /// Liefert die Modell-Implementierung der Kurvenart.
    pub fn model(self) -> &'static dyn CurveModel {
        match self {
            CurveKind::Line => &LineCurve,
            CurveKind::Quadratic => &QuadraticCurve,
            CurveKind::Exponential => &ExponentialCurve,
            CurveKind::Gaussian => &GaussianCurve,
            CurveKind::Sine => &SineCurve,
            CurveKind::Cosine => &CosineCurve,
            CurveKind::Lorentzian => &LorentzianCurve,
        }
    }

    /// Anzeigename der Kurvenart.
    pub fn name(self) -> &'static str {
        self.model().name()
    }
}

/// Tauscht Peak- und Seitenpunkt, wenn der Seitenpunkt extremer ist als der
/// benannte Peak (vorzeichenbewusst: negative Peaks zeigen nach unten).
///
/// Gemeinsame Konvention von Gauss- und Lorentz-Ableitung.
pub(crate) fn order_peak_side(p1: DVec2, p2: DVec2) -> (DVec2, DVec2) {
    let (peak, side) = (p1, p2);
    if (peak.y < side.y && peak.y > 0.0) || (peak.y >= side.y && peak.y < 0.0) {
        (side, peak)
    } else {
        (peak, side)
    }
}
