//! statistical_tests::granger: pairwise Granger causality via nested OLS.
//!
//! Purpose
//! -------
//! Test whether lagged values of a *cause* series B improve a linear
//! prediction of a *target* series A beyond A's own lags. For every lag
//! order k = 1,…,max_lag the restricted model
//!
//!   A(t) = c + Σⱼ₌₁ᵏ aⱼ A(t−j) + ε
//!
//! is compared with the unrestricted model
//!
//!   A(t) = c + Σⱼ₌₁ᵏ aⱼ A(t−j) + Σⱼ₌₁ᵏ bⱼ B(t−j) + ε
//!
//! and the null H₀: b₁ = … = bₖ = 0 ("B does not Granger-cause A") is tested.
//!
//! Key behaviors
//! -------------
//! - Primary statistic: the SSR-based F-test
//!   F = ((RSSᵣ − RSSᵤ)/k) / (RSSᵤ/(N − 2k − 1)) with p-value from
//!   F(k, N − 2k − 1).
//! - Supplementary statistics per lag: SSR-based χ² (N·(RSSᵣ − RSSᵤ)/RSSᵤ),
//!   likelihood ratio (−2(ℓᵣ − ℓᵤ)), both against χ²(k), and a Wald
//!   parameter F-test on the cause-lag coefficients. The Wald F equals the
//!   SSR F up to rounding and acts as a numerical cross-check.
//! - Per-lag computations are independent and run on a `rayon` parallel
//!   iterator; results are collected in increasing lag order.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs pass `statistical_tests::validation::validate_input` for
//!   `max_lag` before any regression is fitted; one validation covers all
//!   smaller lags.
//! - Each lag uses its own sample t = k,…,T−1 (N = T − k rows).
//! - Statistics are clamped at 0 from below to absorb rounding when
//!   RSSᵣ ≈ RSSᵤ; p-values are clamped into [0, 1].
//!
//! Conventions
//! -----------
//! - "target" is the series on the left-hand side (A), "cause" the series
//!   whose lags are added (B). Swapping the arguments tests the opposite
//!   direction.
//! - Degrees of freedom are reported as `(df_num, df_denom) = (k, N − 2k − 1)`.
//!
//! Downstream usage
//! ----------------
//! - Call [`granger_causality`] with two aligned slices, or go through
//!   `data::SeriesPair::granger` to keep series names attached.
//! - Interpret results with a significance level chosen by the caller:
//!   `outcome.p_value() < alpha` rejects H₀ at that lag.
//!
//! Testing notes
//! -------------
//! - Unit tests cover ordering and bounds of outputs, the insufficient-data
//!   boundary, singular designs, idempotence, agreement between the SSR and
//!   Wald F statistics, and detection of a planted lagged dependence.
//! - The canonical ChickEgg scenario is exercised in `tests/`.
use crate::regression::{LaggedDesign, OlsFit, lagged_design};
use crate::statistical_tests::errors::{GrangerError, GrangerResult, ModelKind};
use crate::statistical_tests::validation::validate_input;
use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;
use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor};
use tracing::debug;

/// FTest: an F statistic with its degrees of freedom and upper-tail p-value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FTest {
    pub statistic: f64,
    pub p_value: f64,
    pub df_num: usize,
    pub df_denom: usize,
}

/// Chi2Test: a χ² statistic with its degrees of freedom and p-value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Chi2Test {
    pub statistic: f64,
    pub p_value: f64,
    pub df: usize,
}

/// LagOutcome: Granger test results for a single lag order.
///
/// Purpose
/// -------
/// Hold the per-lag record: the lag, the SSR-based F-test (statistic,
/// p-value, degrees of freedom) and the supplementary χ², likelihood-ratio
/// and Wald statistics, together with both residual sums of squares.
///
/// Fields
/// ------
/// - `lag`: lag order k (≥ 1).
/// - `nobs`: usable observations N = T − k.
/// - `ssr_restricted`, `ssr_unrestricted`: RSS of the two nested models.
/// - `ssr_ftest`: primary F(k, N − 2k − 1) test.
/// - `ssr_chi2test`: N·(RSSᵣ − RSSᵤ)/RSSᵤ against χ²(k).
/// - `lr_test`: −2(ℓᵣ − ℓᵤ) against χ²(k).
/// - `params_ftest`: Wald F on the k cause-lag coefficients.
///
/// Invariants
/// ----------
/// - All statistics are ≥ 0; all p-values lie in [0, 1].
/// - `lr_test.statistic ≤ ssr_chi2test.statistic` (up to rounding).
///
/// Notes
/// -----
/// - A plain value object; it does not own or reference the input series.
#[derive(Debug, Clone, PartialEq)]
pub struct LagOutcome {
    lag: usize,
    nobs: usize,
    ssr_restricted: f64,
    ssr_unrestricted: f64,
    ssr_ftest: FTest,
    ssr_chi2test: Chi2Test,
    lr_test: Chi2Test,
    params_ftest: FTest,
}

impl LagOutcome {
    /// Run the causality test at a single lag order `lag`.
    ///
    /// Parameters
    /// ----------
    /// - `target`: `&[f64]`
    ///   Series A being predicted.
    /// - `cause`: `&[f64]`
    ///   Series B whose lags are added in the unrestricted model.
    /// - `lag`: `usize`
    ///   Lag order k ≥ 1.
    ///
    /// Errors
    /// ------
    /// - Any error of [`validate_input`] evaluated at `lag`.
    /// - `GrangerError::SingularMatrix` when either design is rank-deficient.
    /// - `GrangerError::ZeroResidual` when the unrestricted model fits
    ///   exactly.
    pub fn at_lag(target: &[f64], cause: &[f64], lag: usize) -> GrangerResult<Self> {
        validate_input(target, cause, lag)?;
        compute_lag(target, cause, lag)
    }

    /// Lag order k.
    pub fn lag(&self) -> usize {
        self.lag
    }

    /// Usable observations N = T − k.
    pub fn nobs(&self) -> usize {
        self.nobs
    }

    /// SSR-based F statistic.
    pub fn f_statistic(&self) -> f64 {
        self.ssr_ftest.statistic
    }

    /// p-value of the SSR-based F statistic.
    pub fn p_value(&self) -> f64 {
        self.ssr_ftest.p_value
    }

    /// Degrees of freedom `(k, N − 2k − 1)` of the F statistic.
    pub fn df(&self) -> (usize, usize) {
        (self.ssr_ftest.df_num, self.ssr_ftest.df_denom)
    }

    pub fn ssr_restricted(&self) -> f64 {
        self.ssr_restricted
    }

    pub fn ssr_unrestricted(&self) -> f64 {
        self.ssr_unrestricted
    }

    pub fn ssr_ftest(&self) -> FTest {
        self.ssr_ftest
    }

    pub fn ssr_chi2test(&self) -> Chi2Test {
        self.ssr_chi2test
    }

    pub fn lr_test(&self) -> Chi2Test {
        self.lr_test
    }

    pub fn params_ftest(&self) -> FTest {
        self.params_ftest
    }

    /// Whether H₀ ("cause does not Granger-cause target") is rejected at `alpha`.
    pub fn rejects_null(&self, alpha: f64) -> bool {
        self.p_value() < alpha
    }
}

/// Run the Granger causality test for every lag 1..=`max_lag`.
///
/// Parameters
/// ----------
/// - `target`: `&[f64]`
///   Series A whose prediction is being tested.
/// - `cause`: `&[f64]`
///   Series B whose lags may help predict A. Same length as `target`.
/// - `max_lag`: `usize`
///   Largest lag order; must be ≥ 1 and satisfy T > 3·max_lag + 1.
///
/// Returns
/// -------
/// `GrangerResult<Vec<LagOutcome>>`
///   Exactly `max_lag` outcomes with `lag()` equal to 1, 2, …, max_lag.
///
/// Errors
/// ------
/// - `GrangerError::InvalidMaxLag`, `LengthMismatch`, `InvalidData`,
///   `InsufficientData` from [`validate_input`]. Insufficient data aborts the
///   whole run rather than returning the lags that happen to fit.
/// - `GrangerError::SingularMatrix` / `ZeroResidual` from any lag. Lags are
///   evaluated in parallel, but when several fail the error of the lowest
///   failing lag is returned.
///
/// Panics
/// ------
/// - Never panics on user input.
///
/// Examples
/// --------
/// ```rust
/// use rust_granger::statistical_tests::granger::granger_causality;
///
/// let cause: Vec<f64> = (0..60).map(|t| ((t * 7919) % 101) as f64).collect();
/// let mut target = vec![0.0; 60];
/// for t in 1..60 {
///     target[t] = 0.8 * cause[t - 1] + ((t * 31) % 7) as f64;
/// }
///
/// let outcomes = granger_causality(&target, &cause, 3).unwrap();
/// assert_eq!(outcomes.len(), 3);
/// assert!(outcomes[0].p_value() < 0.01);
/// ```
pub fn granger_causality(
    target: &[f64], cause: &[f64], max_lag: usize,
) -> GrangerResult<Vec<LagOutcome>> {
    validate_input(target, cause, max_lag)?;
    debug!(nobs = target.len(), max_lag, "running Granger causality test");

    let per_lag: Vec<GrangerResult<LagOutcome>> =
        (1..=max_lag).into_par_iter().map(|lag| compute_lag(target, cause, lag)).collect();
    // Sequential collect so the reported error is the lowest failing lag.
    per_lag.into_iter().collect()
}

//
// ---------- Private helpers ----------
//

/// Fit both models at `lag` and assemble the outcome. Inputs are validated.
fn compute_lag(target: &[f64], cause: &[f64], lag: usize) -> GrangerResult<LagOutcome> {
    let design: LaggedDesign = lagged_design(target, cause, lag)
        .map_err(|e| GrangerError::from_regression(lag, ModelKind::Unrestricted, e))?;

    let restricted = OlsFit::fit(&design.restricted, &design.response)
        .map_err(|e| GrangerError::from_regression(lag, ModelKind::Restricted, e))?;
    let unrestricted = OlsFit::fit(&design.unrestricted, &design.response)
        .map_err(|e| GrangerError::from_regression(lag, ModelKind::Unrestricted, e))?;

    let nobs = design.nobs();
    if unrestricted.ssr <= exact_fit_tolerance(&design) {
        return Err(GrangerError::ZeroResidual { lag });
    }

    let df_denom = unrestricted.df_resid;
    let ssr_r = restricted.ssr;
    let ssr_u = unrestricted.ssr;
    let k = lag as f64;

    let f_stat = (((ssr_r - ssr_u) / k) / (ssr_u / df_denom as f64)).max(0.0);
    let chi2_stat = (nobs as f64 * (ssr_r - ssr_u) / ssr_u).max(0.0);
    let lr_stat = (-2.0 * (restricted.log_likelihood() - unrestricted.log_likelihood())).max(0.0);
    let wald_stat = wald_f(&design, &unrestricted)?;

    let outcome = LagOutcome {
        lag,
        nobs,
        ssr_restricted: ssr_r,
        ssr_unrestricted: ssr_u,
        ssr_ftest: f_test(lag, f_stat, lag, df_denom)?,
        ssr_chi2test: chi2_test(lag, chi2_stat, lag)?,
        lr_test: chi2_test(lag, lr_stat, lag)?,
        params_ftest: f_test(lag, wald_stat, lag, df_denom)?,
    };

    debug!(
        lag,
        f = outcome.f_statistic(),
        p = outcome.p_value(),
        df_denom,
        "Granger lag evaluated"
    );
    Ok(outcome)
}

/// SSR at or below which the unrestricted fit counts as exact.
///
/// A residual norm within `N·ε` of the response norm is rounding noise from
/// the QR solve, not a genuine residual.
fn exact_fit_tolerance(design: &LaggedDesign) -> f64 {
    let energy = design.response.dot(&design.response);
    (f64::EPSILON * design.nobs() as f64).powi(2) * energy
}

/// Wald F statistic for H₀: the cause-lag coefficients are jointly zero.
///
/// F = β_Bᵀ [σ̂² (XᵀX)⁻¹]_BB⁻¹ β_B / k, where B indexes the cause-lag
/// columns of the unrestricted design.
fn wald_f(design: &LaggedDesign, fit: &OlsFit) -> GrangerResult<f64> {
    let cols = design.cause_columns();
    let k = cols.len();
    let start = cols.start;
    let sigma2 = fit.sigma2();

    let beta_b = DVector::from_fn(k, |i, _| fit.coefficients[start + i]);
    let v_bb = DMatrix::from_fn(k, k, |i, j| sigma2 * fit.cov_unscaled[[start + i, start + j]]);
    let v_inv = v_bb
        .try_inverse()
        .ok_or(GrangerError::SingularMatrix { lag: design.lag, model: ModelKind::Unrestricted })?;

    Ok((beta_b.dot(&(v_inv * &beta_b)) / k as f64).max(0.0))
}

fn f_test(lag: usize, statistic: f64, df_num: usize, df_denom: usize) -> GrangerResult<FTest> {
    let dist = FisherSnedecor::new(df_num as f64, df_denom as f64)
        .map_err(|e| GrangerError::Distribution { lag, message: e.to_string() })?;
    Ok(FTest { statistic, p_value: dist.sf(statistic).clamp(0.0, 1.0), df_num, df_denom })
}

fn chi2_test(lag: usize, statistic: f64, df: usize) -> GrangerResult<Chi2Test> {
    let dist = ChiSquared::new(df as f64)
        .map_err(|e| GrangerError::Distribution { lag, message: e.to_string() })?;
    Ok(Chi2Test { statistic, p_value: dist.sf(statistic).clamp(0.0, 1.0), df })
}
