//! Dichte lineare Algebra fuer kleine Normalgleichungssysteme.
//!
//! Die Systeme haben Parameteranzahl-Dimension (2 bis ~30), dafuer reicht
//! Gauss-Elimination mit Teilpivotisierung vollkommen aus.

/// Loest `A·x = b` in-place. `None` bei (numerisch) singulaerer Matrix.
pub fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();
    debug_assert!(a.len() == n && a.iter().all(|row| row.len() == n));

    for col in 0..n {
        // Teilpivot: betragsmaessig groesstes Element der Spalte
        let pivot_row = (col..n).max_by(|&i, &j| {
            a[i][col]
                .abs()
                .partial_cmp(&a[j][col].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if a[pivot_row][col].abs() < 1e-300 {
            return None;
        }
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        for row in (col + 1)..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    // Rueckwaerts-Substitution
    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut sum = b[row];
        for k in (row + 1)..n {
            sum -= a[row][k] * x[k];
        }
        if !a[row][row].is_normal() {
            return None;
        }
        x[row] = sum / a[row][row];
    }
    x.iter().all(|v| v.is_finite()).then_some(x)
}

/// Invertiert eine quadratische Matrix spaltenweise ueber `solve`.
pub fn invert(a: &[Vec<f64>]) -> Option<Vec<Vec<f64>>> {
    let n = a.len();
    let mut columns = Vec::with_capacity(n);
    for col in 0..n {
        let mut unit = vec![0.0; n];
        unit[col] = 1.0;
        columns.push(solve(a.to_vec(), unit)?);
    }
    // Spalten zu Zeilen transponieren
    let mut inv = vec![vec![0.0; n]; n];
    for (col, column) in columns.iter().enumerate() {
        for (row, &v) in column.iter().enumerate() {
            inv[row][col] = v;
        }
    }
    Some(inv)
}
