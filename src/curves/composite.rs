//! Zusammengesetzte Modelle: Kurven-Terme algebraisch kombiniert.
//!
//! Ein `ModelExpr` ist ein Ausdrucksbaum aus Kurven-Blaettern und binaeren
//! Operatoren. Der Parametervektor wird bei der Auswertung links-praefix
//! aufgeteilt: der linke Teilbaum bekommt die ersten `param_count()` Werte,
//! der rechte den Rest, rekursiv. Diese Konvention traegt die Korrektheit
//! der Seed-Extraktion und darf nicht verschoben werden.

use super::{CurveKind, CurveModel};

/// Binaere Operatoren fuer Modell-Kombination (elementweise auf f64).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Ganzzahlige Division (`floor(a/b)`)
    FloorDiv,
    /// Rest der Division
    Rem,
    /// Potenz (`a^b`)
    Pow,
}

impl CombineOp {
    /// Wendet den Operator auf zwei Werte an. Division durch null liefert
    /// Inf/NaN, das sichtbar in die Preview fliesst.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            CombineOp::Add => a + b,
            CombineOp::Sub => a - b,
            CombineOp::Mul => a * b,
            CombineOp::Div => a / b,
            CombineOp::FloorDiv => (a / b).floor(),
            CombineOp::Rem => a % b,
            CombineOp::Pow => a.powf(b),
        }
    }

    /// Operator-Symbol fuer die Anzeige.
    pub fn symbol(self) -> &'static str {
        match self {
            CombineOp::Add => "+",
            CombineOp::Sub => "-",
            CombineOp::Mul => "*",
            CombineOp::Div => "/",
            CombineOp::FloorDiv => "//",
            CombineOp::Rem => "%",
            CombineOp::Pow => "**",
        }
    }
}

/// Ausdrucksbaum eines (zusammengesetzten) Modells.
///
/// Kombination nimmt die Operanden per Wert: eine Wiederverwendung desselben
/// Terms auf beiden Seiten verlangt ein explizites `clone()` und erzeugt
/// damit eine frische, unabhaengige Kopie (Zustand zum Kombinationszeitpunkt).
/// Alias-Zyklen sind so konstruktiv ausgeschlossen.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelExpr {
    /// Einzelne Kurvenart
    Leaf(CurveKind),
    /// Kombination zweier Teilbaeume
    Node {
        op: CombineOp,
        left: Box<ModelExpr>,
        right: Box<ModelExpr>,
    },
}

impl ModelExpr {
    /// Einzelkurven-Modell.
    pub fn leaf(kind: CurveKind) -> Self {
        ModelExpr::Leaf(kind)
    }

    /// Kombiniert zwei Modelle zu einem neuen Knoten.
    pub fn combine(op: CombineOp, left: ModelExpr, right: ModelExpr) -> Self {
        ModelExpr::Node {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Gesamt-Parameteranzahl (Summe aller Blaetter).
    pub fn param_count(&self) -> usize {
        match self {
            ModelExpr::Leaf(kind) => kind.model().param_count(),
            ModelExpr::Node { left, right, .. } => left.param_count() + right.param_count(),
        }
    }

    /// Blaetter in Links-nach-Rechts-Reihenfolge (Parameter-Slice-Ordnung).
    pub fn leaves(&self) -> Vec<CurveKind> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<CurveKind>) {
        match self {
            ModelExpr::Leaf(kind) => out.push(*kind),
            ModelExpr::Node { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }

    /// Ob der Ausdruck ein einzelnes Blatt ist.
    pub fn is_leaf(&self) -> bool {
        matches!(self, ModelExpr::Leaf(_))
    }

    /// Wertet das Modell aus. Eine falsche Gesamt-Parameteranzahl ist ein
    /// Programmierfehler an der Integrationsgrenze und schlaegt laut fehl.
    pub fn eval(&self, x: f64, params: &[f64]) -> f64 {
        assert_eq!(
            params.len(),
            self.param_count(),
            "Parametervektor passt nicht zum Modell"
        );
        self.eval_unchecked(x, params)
    }

    fn eval_unchecked(&self, x: f64, params: &[f64]) -> f64 {
        match self {
            ModelExpr::Leaf(kind) => kind.model().eval(x, params),
            ModelExpr::Node { op, left, right } => {
                let split = left.param_count();
                let a = left.eval_unchecked(x, &params[..split]);
                let b = right.eval_unchecked(x, &params[split..]);
                op.apply(a, b)
            }
        }
    }

    /// Formel-Beschreibung fuer die Anzeige, z.B. `(Gauss + Gerade)`.
    pub fn describe(&self) -> String {
        match self {
            ModelExpr::Leaf(kind) => kind.name().to_string(),
            ModelExpr::Node { op, left, right } => {
                format!("({} {} {})", left.describe(), op.symbol(), right.describe())
            }
        }
    }
}
