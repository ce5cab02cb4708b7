//! A small horizontal bar chart drawn with text, used for the income versus expenses view.

use crate::model::{Amount, AmountFormat};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Title of the summary chart.
pub const SUMMARY_TITLE: &str = "Income vs Expenses";

const BAR: char = '#';

/// A titled set of labelled bars.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BarChart {
    title: String,
    bars: Vec<(String, Amount)>,
}

impl BarChart {
    pub fn new<S, I>(title: impl Into<String>, bars: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Amount)>,
    {
        Self {
            title: title.into(),
            bars: bars.into_iter().map(|(l, a)| (l.into(), a)).collect(),
        }
    }

    /// Draws the chart. The largest magnitude fills `width` characters and the others are scaled
    /// against it; when every value is zero all bars are empty.
    ///
    /// ```
    /// # use fincalc::chart::BarChart;
    /// # use fincalc::model::{Amount, AmountFormat};
    /// # use std::str::FromStr;
    /// let chart = BarChart::new(
    ///     "Test",
    ///     [("A", Amount::from_str("10").unwrap()), ("BB", Amount::from_str("5").unwrap())],
    /// );
    /// assert_eq!(
    ///     chart.render(4, &AmountFormat::default()),
    ///     "Test\nA  | #### $10.00\nBB | ## $5.00\n"
    /// );
    /// ```
    pub fn render(&self, width: usize, format: &AmountFormat) -> String {
        let label_width = self.bars.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        let max = self
            .bars
            .iter()
            .map(|(_, a)| a.value().abs())
            .max()
            .unwrap_or(Decimal::ZERO);

        let mut out = format!("{}\n", self.title);
        for (label, amount) in &self.bars {
            let len = bar_len(amount.value().abs(), max, width);
            let bar: String = std::iter::repeat(BAR).take(len).collect();
            out.push_str(&format!(
                "{label:<label_width$} | {bar} {}\n",
                format.format(*amount)
            ));
        }
        out
    }
}

fn bar_len(value: Decimal, max: Decimal, width: usize) -> usize {
    if max.is_zero() {
        return 0;
    }
    let scaled = (value / max * Decimal::from(width)).round();
    scaled.to_usize().unwrap_or(0).min(width)
}
