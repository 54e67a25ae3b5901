use crate::{
    Real,
    error::{ExtractionError, ExtractionResult},
};
use nalgebra::{self as na, OMatrix, OVector, U3};

/// Singular values below this threshold are treated as zero when solving the
/// least-squares system.
const SVD_EPSILON: Real = 1e-12;

/// Curvatures below this threshold leave the vertex location undefined.
const CURVATURE_EPSILON: Real = 1e-12;

/// A parabola in vertex form, `y(t) = p2 * (t - p1)^2 + p0`.
///
/// `p0` is the vertex value, `p1` the vertex location (in samples or time
/// units, whichever the caller fitted in) and `p2` the curvature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParabolicFit {
    pub p0: Real,
    pub p1: Real,
    pub p2: Real,
}

impl ParabolicFit {
    pub fn value_at(&self, t: Real) -> Real {
        self.p2 * (t - self.p1).powi(2) + self.p0
    }

    /// Discriminant of `y(t) = 0` in the offset `t - p1`.
    pub fn zero_discriminant(&self) -> Real {
        -self.p0 / self.p2
    }

    /// Both real roots of `y(t) = 0`, in ascending order, when they exist.
    pub fn zeros(&self) -> Option<(Real, Real)> {
        let discriminant = self.zero_discriminant();
        (discriminant >= 0.0).then(|| {
            (
                self.p1 - discriminant.sqrt(),
                self.p1 + discriminant.sqrt(),
            )
        })
    }
}

/// Fits a vertex-form parabola to the `(t, y)` points whose abscissae lie in
/// the inclusive interval `t_range`, by least squares.
///
/// Vertex form is an exact reparameterization of the standard quadratic
/// `a*t^2 + b*t + c`, in which the least-squares problem is linear. It is
/// solved directly via SVD and the minimizer converted back to vertex form,
/// so the fit is deterministic and needs no starting point.
///
/// Fails with [ExtractionError::InsufficientPoints] when fewer than 3
/// distinct abscissae fall inside `t_range`, and with
/// [ExtractionError::DegenerateFit] when the best-fitting quadratic has no
/// curvature (collinear points), which leaves the vertex undefined.
pub fn fit_parabola(
    points: &[(Real, Real)],
    t_range: (Real, Real),
) -> ExtractionResult<ParabolicFit> {
    let (t_lower, t_upper) = t_range;
    let selected: Vec<(Real, Real)> = points
        .iter()
        .copied()
        .filter(|(t, _)| (t_lower..=t_upper).contains(t))
        .collect();

    let mut abscissae: Vec<Real> = selected.iter().map(|(t, _)| *t).collect();
    abscissae.sort_by(Real::total_cmp);
    abscissae.dedup();
    if abscissae.len() < 3 {
        return Err(ExtractionError::InsufficientPoints(abscissae.len()));
    }

    let t = OVector::<Real, na::Dyn>::from_iterator(
        selected.len(),
        selected.iter().map(|(t, _)| *t),
    );
    let y = OVector::<Real, na::Dyn>::from_iterator(
        selected.len(),
        selected.iter().map(|(_, y)| *y),
    );
    let ones = OVector::<Real, na::Dyn>::from_element(selected.len(), 1.0);
    let design =
        OMatrix::<Real, na::Dyn, U3>::from_columns(&[t.component_mul(&t), t, ones]);

    let solution = design
        .svd(true, true)
        .solve(&y, SVD_EPSILON)
        .map_err(|_| ExtractionError::DegenerateFit)?;
    let (a, b, c) = (solution[0], solution[1], solution[2]);

    if a.abs() < CURVATURE_EPSILON {
        return Err(ExtractionError::DegenerateFit);
    }
    Ok(ParabolicFit {
        p0: c - b * b / (4.0 * a),
        p1: -b / (2.0 * a),
        p2: a,
    })
}
