//! analysis::report: printable results of the causality tests.
//!
//! Purpose
//! -------
//! Keep test results as structured values and render them on demand.
//! [`CausalityReport`] covers one direction; [`AnalysisReport`] bundles both
//! directions with the significance level used for the verdicts.
//!
//! Conventions
//! -----------
//! - Each lag prints the SSR F-test, SSR χ², likelihood-ratio and parameter
//!   F-test lines, with four decimals for statistics and p-values.
//! - A verdict is significant when at least one lag rejects H₀ at `alpha`.
//!   No multiple-comparison correction is applied.
use crate::{
    data::SeriesPair,
    statistical_tests::{Chi2Test, FTest, GrangerResult, LagOutcome},
};
use std::{fmt, path::PathBuf};

/// CausalityReport: per-lag outcomes for "does `cause` Granger-cause `target`?".
#[derive(Debug, Clone, PartialEq)]
pub struct CausalityReport {
    target: String,
    cause: String,
    outcomes: Vec<LagOutcome>,
}

impl CausalityReport {
    /// Test `pair` at lags 1..=`max_lag`.
    ///
    /// Errors
    /// ------
    /// - Any [`GrangerError`](crate::statistical_tests::GrangerError) of
    ///   [`granger_causality`](crate::statistical_tests::granger_causality).
    pub fn from_pair(pair: &SeriesPair<'_>, max_lag: usize) -> GrangerResult<Self> {
        let outcomes = pair.granger(max_lag)?;
        Ok(CausalityReport {
            target: pair.target_name().to_string(),
            cause: pair.cause_name().to_string(),
            outcomes,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn cause(&self) -> &str {
        &self.cause
    }

    pub fn max_lag(&self) -> usize {
        self.outcomes.len()
    }

    /// Outcomes ordered by lag, starting at 1.
    pub fn outcomes(&self) -> &[LagOutcome] {
        &self.outcomes
    }

    /// Outcome at lag `lag`, if tested.
    pub fn at_lag(&self, lag: usize) -> Option<&LagOutcome> {
        lag.checked_sub(1).and_then(|i| self.outcomes.get(i))
    }

    /// Smallest lag whose SSR F-test rejects H₀ at `alpha`.
    pub fn first_significant_lag(&self, alpha: f64) -> Option<usize> {
        self.outcomes.iter().find(|o| o.rejects_null(alpha)).map(LagOutcome::lag)
    }

    pub fn is_significant(&self, alpha: f64) -> bool {
        self.first_significant_lag(alpha).is_some()
    }

    /// One-line conclusion at `alpha`, for display.
    pub fn verdict(&self, alpha: f64) -> Verdict<'_> {
        Verdict { report: self, alpha }
    }
}

impl fmt::Display for CausalityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Granger causality: does '{}' help predict '{}'?", self.cause, self.target)?;
        for outcome in &self.outcomes {
            writeln!(f)?;
            writeln!(f, "number of lags (no zero) {}", outcome.lag())?;
            write_f(f, "ssr based F test:", outcome.ssr_ftest())?;
            write_chi2(f, "ssr based chi2 test:", outcome.ssr_chi2test())?;
            write_chi2(f, "likelihood ratio test:", outcome.lr_test())?;
            write_f(f, "parameter F test:", outcome.params_ftest())?;
        }
        Ok(())
    }
}

fn write_f(f: &mut fmt::Formatter<'_>, label: &str, test: FTest) -> fmt::Result {
    writeln!(
        f,
        "{label:<22} F={:<10.4}, p={:<10.4}, df_denom={}, df_num={}",
        test.statistic, test.p_value, test.df_denom, test.df_num
    )
}

fn write_chi2(f: &mut fmt::Formatter<'_>, label: &str, test: Chi2Test) -> fmt::Result {
    writeln!(
        f,
        "{label:<22} chi2={:<10.4}, p={:<10.4}, df={}",
        test.statistic, test.p_value, test.df
    )
}

/// Verdict: display adapter returned by [`CausalityReport::verdict`].
#[derive(Debug, Clone, Copy)]
pub struct Verdict<'a> {
    report: &'a CausalityReport,
    alpha: f64,
}

impl fmt::Display for Verdict<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let CausalityReport { target, cause, .. } = self.report;
        match self.report.first_significant_lag(self.alpha) {
            Some(lag) => write!(
                f,
                "'{cause}' Granger-causes '{target}' at alpha={} (first at lag {lag})",
                self.alpha
            ),
            None => write!(
                f,
                "no evidence that '{cause}' Granger-causes '{target}' at alpha={} for lags 1..={}",
                self.alpha,
                self.report.max_lag()
            ),
        }
    }
}

/// AnalysisReport: both test directions of one run.
///
/// Fields
/// ------
/// - `rows`: observations loaded.
/// - `significance`: alpha used for the verdicts.
/// - `chart`: path of the rendered chart, if one was drawn.
/// - `forward`: "second series caused by first" (egg by chicken by default).
/// - `reverse`: the swapped direction.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub rows: usize,
    pub significance: f64,
    pub chart: Option<PathBuf>,
    pub forward: CausalityReport,
    pub reverse: CausalityReport,
}

impl AnalysisReport {
    pub fn directions(&self) -> [&CausalityReport; 2] {
        [&self.forward, &self.reverse]
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in self.directions() {
            writeln!(f, "{report}")?;
        }
        writeln!(f, "Summary ({} observations)", self.rows)?;
        for report in self.directions() {
            writeln!(f, "  {}", report.verdict(self.significance))?;
        }
        if let Some(path) = &self.chart {
            writeln!(f, "  chart written to {}", path.display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Lag lookup and verdict logic on a planted one-way dependence.
    // - The printed block layout (one header plus four test lines per lag).
    // -------------------------------------------------------------------------

    fn planted() -> (Vec<f64>, Vec<f64>, Vec<i64>) {
        let mut state: u64 = 17;
        let mut next = move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((state >> 11) as f64 / (1u64 << 53) as f64) - 0.5
        };
        let cause: Vec<f64> = (0..80).map(|_| next()).collect();
        let mut target = vec![0.0; 80];
        for t in 1..80 {
            target[t] = 0.9 * cause[t - 1] + 0.1 * next();
        }
        let years = (1900..1980).collect();
        (target, cause, years)
    }

    #[test]
    // Purpose
    // -------
    // Verify verdicts follow the per-lag p-values in both directions.
    //
    // Given
    // -----
    // - `target` driven by lag 1 of `cause` plus small noise.
    //
    // Expect
    // ------
    // - Forward direction significant from lag 1.
    // - `at_lag` is 1-based and bounded by `max_lag`.
    fn verdict_reports_first_significant_lag() {
        // Arrange
        let (target, cause, years) = planted();
        let pair = SeriesPair::new("target", &target, "cause", &cause, &years);

        // Act
        let report = CausalityReport::from_pair(&pair, 2).expect("valid input");

        // Assert
        assert_eq!(report.max_lag(), 2);
        assert_eq!(report.first_significant_lag(0.05), Some(1));
        assert!(report.is_significant(0.05));
        assert_eq!(report.at_lag(1).map(LagOutcome::lag), Some(1));
        assert!(report.at_lag(0).is_none() && report.at_lag(3).is_none());
        assert!(report.verdict(0.05).to_string().contains("first at lag 1"));
    }

    #[test]
    fn display_prints_four_test_lines_per_lag() {
        let (target, cause, years) = planted();
        let pair = SeriesPair::new("egg", &target, "chicken", &cause, &years);
        let report = CausalityReport::from_pair(&pair, 3).expect("valid input");

        let text = report.to_string();

        assert!(text.starts_with("Granger causality: does 'chicken' help predict 'egg'?"));
        assert_eq!(text.matches("number of lags (no zero)").count(), 3);
        assert_eq!(text.matches("ssr based F test:").count(), 3);
        assert_eq!(text.matches("likelihood ratio test:").count(), 3);
        assert!(text.contains("df_denom=76, df_num=1"));
    }

    #[test]
    fn analysis_report_summarizes_both_directions() {
        let (target, cause, years) = planted();
        let pair = SeriesPair::new("egg", &target, "chicken", &cause, &years);
        let report = AnalysisReport {
            rows: target.len(),
            significance: 0.05,
            chart: None,
            forward: CausalityReport::from_pair(&pair, 1).expect("valid input"),
            reverse: CausalityReport::from_pair(&pair.swapped(), 1).expect("valid input"),
        };

        let text = report.to_string();

        assert!(text.contains("Summary (80 observations)"));
        assert!(text.contains("'chicken' Granger-causes 'egg'"));
        assert!(!text.contains("chart written"));
    }
}
