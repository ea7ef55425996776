//! Datensatz mit Selektions-Maske fuer den Fit.

/// 2D-Scatter-Daten mit optionalen Fehlerbalken und boolescher Auswahl-Maske.
#[derive(Debug, Clone)]
pub struct DataSet {
    xdata: Vec<f64>,
    ydata: Vec<f64>,
    xerr: Option<Vec<f64>>,
    yerr: Option<Vec<f64>>,
    /// Auswahl-Maske; initial sind alle Punkte selektiert
    mask: Vec<bool>,
}

impl DataSet {
    /// Erstellt einen Datensatz ohne Fehlerangaben.
    ///
    /// x und y muessen gleich lang sein (Programmierfehler sonst).
    pub fn new(xdata: Vec<f64>, ydata: Vec<f64>) -> Self {
        assert_eq!(
            xdata.len(),
            ydata.len(),
            "xdata und ydata muessen gleich lang sein"
        );
        let len = xdata.len();
        Self {
            xdata,
            ydata,
            xerr: None,
            yerr: None,
            mask: vec![true; len],
        }
    }

    /// Setzt die Standardabweichungen pro Punkt (Laengen werden geprueft).
    pub fn with_errors(mut self, xerr: Option<Vec<f64>>, yerr: Option<Vec<f64>>) -> Self {
        if let Some(ref e) = xerr {
            assert_eq!(e.len(), self.len(), "xerr muss gleich lang wie xdata sein");
        }
        if let Some(ref e) = yerr {
            assert_eq!(e.len(), self.len(), "yerr muss gleich lang wie ydata sein");
        }
        self.xerr = xerr;
        self.yerr = yerr;
        self
    }

    /// Anzahl der Datenpunkte.
    pub fn len(&self) -> usize {
        self.xdata.len()
    }

    /// Ob der Datensatz leer ist.
    pub fn is_empty(&self) -> bool {
        self.xdata.is_empty()
    }

    /// Alle x-Werte.
    pub fn xdata(&self) -> &[f64] {
        &self.xdata
    }

    /// Alle y-Werte.
    pub fn ydata(&self) -> &[f64] {
        &self.ydata
    }

    /// y-Standardabweichungen, falls vorhanden.
    pub fn yerr(&self) -> Option<&[f64]> {
        self.yerr.as_deref()
    }

    /// x-Standardabweichungen, falls vorhanden.
    pub fn xerr(&self) -> Option<&[f64]> {
        self.xerr.as_deref()
    }

    /// Aktuelle Auswahl-Maske.
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// Anzahl selektierter Punkte.
    pub fn selected_count(&self) -> usize {
        self.mask.iter().filter(|m| **m).count()
    }

    /// Selektiert alle Punkte.
    pub fn select_all(&mut self) {
        self.mask.fill(true);
    }

    /// Hebt die Auswahl komplett auf.
    pub fn select_none(&mut self) {
        self.mask.fill(false);
    }

    /// Ersetzt die Maske (Laenge wird geprueft).
    pub fn set_mask(&mut self, mask: Vec<bool>) {
        assert_eq!(mask.len(), self.len(), "Maske muss gleich lang wie Daten sein");
        self.mask = mask;
    }

    /// Wendet ein Praedikat ueber (x, y) als Auswahl-Filter an.
    pub fn add_filter(&mut self, filter: impl Fn(f64, f64) -> bool) {
        for (i, m) in self.mask.iter_mut().enumerate() {
            *m = filter(self.xdata[i], self.ydata[i]);
        }
    }

    /// Selektierte (x, y)-Paare gemaess Maske.
    pub fn selected(&self) -> (Vec<f64>, Vec<f64>) {
        let xs = Self::masked(&self.xdata, &self.mask);
        let ys = Self::masked(&self.ydata, &self.mask);
        (xs, ys)
    }

    /// Selektierte Daten, Fallback auf alle Punkte bei leerer Auswahl.
    ///
    /// Fit-Pfad: eine leere Maske bedeutet "fitte alles", nicht "fitte nichts".
    pub fn selected_or_all(&self) -> (Vec<f64>, Vec<f64>) {
        if self.selected_count() == 0 {
            (self.xdata.clone(), self.ydata.clone())
        } else {
            self.selected()
        }
    }

    /// y-Fehler passend zu `selected_or_all`.
    pub fn selected_yerr_or_all(&self) -> Option<Vec<f64>> {
        let yerr = self.yerr.as_ref()?;
        if self.selected_count() == 0 {
            Some(yerr.clone())
        } else {
            Some(Self::masked(yerr, &self.mask))
        }
    }

    /// x-Spanne der selektierten Punkte (Fallback: alle).
    pub fn selected_x_range(&self) -> (f64, f64) {
        let (xs, _) = self.selected_or_all();
        let min = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if min > max {
            (0.0, 1.0)
        } else {
            (min, max)
        }
    }

    fn masked(values: &[f64], mask: &[bool]) -> Vec<f64> {
        values
            .iter()
            .zip(mask)
            .filter_map(|(v, m)| m.then_some(*v))
            .collect()
    }
}
