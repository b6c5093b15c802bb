//! regression::ols: ordinary least squares via QR decomposition.
//!
//! Purpose
//! -------
//! Fit `y = Xβ + ε` by least squares and report the quantities the
//! causality tests need: coefficients, residual sum of squares, residual
//! degrees of freedom, the Gaussian log-likelihood, and the unscaled
//! covariance `(XᵀX)⁻¹`.
//!
//! Key behaviors
//! -------------
//! - Copy the `ndarray` design into a `nalgebra::DMatrix` and factor it as
//!   `X = QR` (thin Q). Coefficients solve `Rβ = Qᵀy` by back-substitution,
//!   so `XᵀX` is never formed explicitly.
//! - Detect rank deficiency from the diagonal of `R` and report it as
//!   [`RegressionError::Singular`] instead of returning NaN coefficients.
//! - Form `(XᵀX)⁻¹ = R⁻¹R⁻ᵀ` for Wald-type restrictions on the coefficients.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x.nrows() == y.len()` and `x.nrows() > x.ncols()`.
//! - A diagonal entry `|R_jj| ≤ max_i |R_ii| · max(n, p) · ε` marks column
//!   `j` as linearly dependent on the columns before it.
//!
//! Conventions
//! -----------
//! - No column pivoting; designs from `regression::design` are small and
//!   well ordered, and the tolerance above catches exact collinearity
//!   such as a constant regressor alongside the intercept.
//! - Returned vectors and matrices are `ndarray` types; `nalgebra` stays an
//!   internal detail of this module.
use crate::regression::errors::{RegressionError, RegressionResult};
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2};
use std::f64::consts::PI;

/// OlsFit: a fitted least-squares regression.
///
/// Fields
/// ------
/// - `coefficients`: `Array1<f64>`
///   Estimated β, one entry per design column.
/// - `ssr`: `f64`
///   Residual sum of squares ‖y − Xβ‖².
/// - `nobs`: `usize`
///   Number of observations (design rows).
/// - `df_resid`: `usize`
///   Residual degrees of freedom `nobs − params`.
/// - `cov_unscaled`: `Array2<f64>`
///   `(XᵀX)⁻¹`; multiply by [`OlsFit::sigma2`] for the coefficient
///   covariance.
#[derive(Debug, Clone, PartialEq)]
pub struct OlsFit {
    pub coefficients: Array1<f64>,
    pub ssr: f64,
    pub nobs: usize,
    pub df_resid: usize,
    pub cov_unscaled: Array2<f64>,
}

impl OlsFit {
    /// Fit `y` on the columns of `x` by least squares.
    ///
    /// Errors
    /// ------
    /// - `RegressionError::ShapeMismatch` when `x.nrows() != y.len()`.
    /// - `RegressionError::NoResidualDof` when `x.nrows() <= x.ncols()`.
    /// - `RegressionError::Singular` when `x` is rank-deficient.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_granger::regression::ols::OlsFit;
    /// let x = array![[1.0, 1.0], [2.0, 1.0], [3.0, 1.0], [4.0, 1.0]];
    /// let y = array![3.0, 5.0, 7.0, 9.0];
    /// let fit = OlsFit::fit(&x, &y).unwrap();
    /// assert!((fit.coefficients[0] - 2.0).abs() < 1e-10);
    /// assert!(fit.ssr < 1e-20);
    /// ```
    pub fn fit(x: &Array2<f64>, y: &Array1<f64>) -> RegressionResult<Self> {
        let (nobs, params) = x.dim();
        if nobs != y.len() {
            return Err(RegressionError::ShapeMismatch { rows: nobs, response_len: y.len() });
        }
        if nobs <= params {
            return Err(RegressionError::NoResidualDof { nobs, params });
        }

        let x_mat = to_dmatrix(x);
        let y_vec = DVector::from_iterator(nobs, y.iter().copied());

        let qr = x_mat.clone().qr();
        let r = qr.r();
        check_rank(&r, nobs)?;

        let qty = qr.q().transpose() * &y_vec;
        let beta = r
            .solve_upper_triangular(&qty)
            .ok_or(RegressionError::Singular { column: params - 1 })?;
        let r_inv = r.try_inverse().ok_or(RegressionError::Singular { column: params - 1 })?;
        let cov = &r_inv * r_inv.transpose();

        let residuals = &y_vec - &x_mat * &beta;
        let ssr = residuals.norm_squared();

        Ok(OlsFit {
            coefficients: Array1::from_iter(beta.iter().copied()),
            ssr,
            nobs,
            df_resid: nobs - params,
            cov_unscaled: Array2::from_shape_fn((params, params), |(i, j)| cov[(i, j)]),
        })
    }

    /// Unbiased residual variance `σ̂² = SSR / (n − p)`.
    pub fn sigma2(&self) -> f64 {
        self.ssr / self.df_resid as f64
    }

    /// Gaussian log-likelihood at the ML variance `SSR / n`.
    pub fn log_likelihood(&self) -> f64 {
        let n = self.nobs as f64;
        -0.5 * n * ((2.0 * PI).ln() + (self.ssr / n).ln() + 1.0)
    }
}

/// Copy a row-major `ndarray` matrix into a `nalgebra::DMatrix`.
fn to_dmatrix(x: &Array2<f64>) -> DMatrix<f64> {
    DMatrix::from_fn(x.nrows(), x.ncols(), |i, j| x[[i, j]])
}

/// Reject designs whose QR factor has a negligible diagonal entry.
fn check_rank(r: &DMatrix<f64>, nobs: usize) -> RegressionResult<()> {
    let diag = r.diagonal();
    let max_diag = diag.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let tol = max_diag * (nobs.max(r.ncols()) as f64) * f64::EPSILON;

    match diag.iter().position(|v| !v.is_finite() || v.abs() <= tol) {
        Some(column) => Err(RegressionError::Singular { column }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Exact recovery of coefficients on noise-free data.
    // - SSR, degrees of freedom, and the unscaled covariance on a small
    //   hand-computable regression.
    // - Rank-deficiency and shape guards.
    //
    // They intentionally DO NOT cover:
    // - Conditioning on badly scaled designs; the causality tests exercise
    //   realistic magnitudes end to end.
    // -------------------------------------------------------------------------

    const TOL: f64 = 1e-10;

    #[test]
    // Purpose
    // -------
    // Verify that a noise-free linear relation is recovered exactly.
    //
    // Given
    // -----
    // - y = 2·x₁ − 3·x₂ + 0.5 on five rows with an intercept column.
    //
    // Expect
    // ------
    // - Coefficients (2, −3, 0.5) and SSR ≈ 0.
    fn fit_recovers_noise_free_coefficients() {
        // Arrange
        let x = array![
            [1.0, 4.0, 1.0],
            [2.0, 1.0, 1.0],
            [3.0, 5.0, 1.0],
            [4.0, 2.0, 1.0],
            [5.0, 7.0, 1.0]
        ];
        let y = x.map_axis(ndarray::Axis(1), |row| 2.0 * row[0] - 3.0 * row[1] + 0.5);

        // Act
        let fit = OlsFit::fit(&x, &y).expect("full-rank design");

        // Assert
        assert_relative_eq!(fit.coefficients[0], 2.0, epsilon = TOL);
        assert_relative_eq!(fit.coefficients[1], -3.0, epsilon = TOL);
        assert_relative_eq!(fit.coefficients[2], 0.5, epsilon = TOL);
        assert!(fit.ssr < 1e-18, "ssr should vanish, got {}", fit.ssr);
        assert_eq!(fit.df_resid, 2);
    }

    #[test]
    // Purpose
    // -------
    // Check SSR and (XᵀX)⁻¹ against closed-form values for a mean-only
    // model, where β̂ = ȳ, SSR = Σ(y − ȳ)², and (XᵀX)⁻¹ = 1/n.
    //
    // Given
    // -----
    // - A single intercept column and y = [1, 2, 3, 6].
    //
    // Expect
    // ------
    // - β̂ = 3, SSR = 14, cov_unscaled = [[0.25]], σ̂² = 14/3.
    fn fit_matches_closed_form_for_intercept_only_model() {
        let x = array![[1.0], [1.0], [1.0], [1.0]];
        let y = array![1.0, 2.0, 3.0, 6.0];

        let fit = OlsFit::fit(&x, &y).expect("full-rank design");

        assert_relative_eq!(fit.coefficients[0], 3.0, epsilon = TOL);
        assert_relative_eq!(fit.ssr, 14.0, epsilon = TOL);
        assert_relative_eq!(fit.cov_unscaled[[0, 0]], 0.25, epsilon = TOL);
        assert_relative_eq!(fit.sigma2(), 14.0 / 3.0, epsilon = TOL);

        let n = 4.0_f64;
        let expected_llf = -0.5 * n * ((2.0 * PI).ln() + (14.0 / n).ln() + 1.0);
        assert_relative_eq!(fit.log_likelihood(), expected_llf, epsilon = TOL);
    }

    #[test]
    fn fit_reports_singular_for_constant_column_next_to_intercept() {
        let x = array![[3.0, 1.0], [3.0, 1.0], [3.0, 1.0], [3.0, 1.0]];
        let y = array![1.0, 2.0, 3.0, 4.0];

        match OlsFit::fit(&x, &y) {
            Err(RegressionError::Singular { column }) => assert_eq!(column, 1),
            other => panic!("expected Singular error, got {other:?}"),
        }
    }

    #[test]
    fn fit_rejects_shape_mismatch_and_square_designs() {
        let x = array![[1.0, 1.0], [2.0, 1.0]];
        assert_eq!(
            OlsFit::fit(&x, &array![1.0, 2.0, 3.0]),
            Err(RegressionError::ShapeMismatch { rows: 2, response_len: 3 })
        );
        assert_eq!(
            OlsFit::fit(&x, &array![1.0, 2.0]),
            Err(RegressionError::NoResidualDof { nobs: 2, params: 2 })
        );
    }
}
