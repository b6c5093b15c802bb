//! data::pair: a borrowed (target, cause) view over two loaded series.
//!
//! A [`SeriesPair`] fixes the direction of a causality test: does the past
//! of `cause` help predict `target`? [`SeriesPair::swapped`] flips the
//! direction without copying or re-reading the data.
use crate::statistical_tests::{GrangerResult, LagOutcome, granger_causality};

/// SeriesPair: two aligned series with names and roles.
///
/// Invariants
/// ----------
/// - `target`, `cause`, and `years` come from the same table and share its
///   row order and length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPair<'a> {
    target_name: &'a str,
    target: &'a [f64],
    cause_name: &'a str,
    cause: &'a [f64],
    years: &'a [i64],
}

impl<'a> SeriesPair<'a> {
    pub fn new(
        target_name: &'a str, target: &'a [f64], cause_name: &'a str, cause: &'a [f64],
        years: &'a [i64],
    ) -> Self {
        SeriesPair { target_name, target, cause_name, cause, years }
    }

    pub fn target_name(&self) -> &'a str {
        self.target_name
    }

    pub fn target(&self) -> &'a [f64] {
        self.target
    }

    pub fn cause_name(&self) -> &'a str {
        self.cause_name
    }

    pub fn cause(&self) -> &'a [f64] {
        self.cause
    }

    pub fn years(&self) -> &'a [i64] {
        self.years
    }

    /// The opposite direction: `cause` becomes the target and vice versa.
    pub fn swapped(&self) -> SeriesPair<'a> {
        SeriesPair {
            target_name: self.cause_name,
            target: self.cause,
            cause_name: self.target_name,
            cause: self.target,
            years: self.years,
        }
    }

    /// Run the Granger test "does `cause` Granger-cause `target`?" for lags
    /// 1..=`max_lag`.
    pub fn granger(&self, max_lag: usize) -> GrangerResult<Vec<LagOutcome>> {
        granger_causality(self.target, self.cause, max_lag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swapped_exchanges_roles_and_round_trips() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        let years = [2000, 2001, 2002];
        let pair = SeriesPair::new("a", &a, "b", &b, &years);

        let flipped = pair.swapped();

        assert_eq!(flipped.target_name(), "b");
        assert_eq!(flipped.cause(), &a);
        assert_eq!(flipped.years(), &years);
        assert_eq!(flipped.swapped(), pair);
    }
}
