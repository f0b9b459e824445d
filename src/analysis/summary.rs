//! Per-element period summaries: the means, extremes, degree-day totals and
//! missing-day tallies printed on summary charts.

use crate::analysis::error::StatisticsError;
use crate::analysis::normalize::number_of_missing_days;
use crate::analysis::statistics::{period_statistic, StatKind};
use crate::types::element::Element;
use crate::types::rounding::{NumericKind, StatOptions, StatValue};
use polars::prelude::DataFrame;

/// Mean, maximum and minimum of one element, each computed independently.
///
/// A field holds an error when that statistic could not be computed (for example
/// because the element is absent from the table or every day is missing); the other
/// fields are unaffected.
#[derive(Debug)]
pub struct ElementSummary {
    pub element: Element,
    pub mean: Result<StatValue, StatisticsError>,
    pub maximum: Result<StatValue, StatisticsError>,
    pub minimum: Result<StatValue, StatisticsError>,
}

impl ElementSummary {
    /// Summarizes `element` at its display precision.
    pub fn compute(frame: &DataFrame, element: Element) -> Self {
        let options = element.display_options();
        let stat = |kind| period_statistic(frame, element.column_name(), kind, options);
        ElementSummary {
            element,
            mean: stat(StatKind::Mean),
            maximum: stat(StatKind::Maximum),
            minimum: stat(StatKind::Minimum),
        }
    }
}

/// Summaries of every [`Element`] in table column order.
#[derive(Debug)]
pub struct PeriodSummary {
    pub elements: Vec<ElementSummary>,
}

impl PeriodSummary {
    pub fn from_frame(frame: &DataFrame) -> Self {
        PeriodSummary {
            elements: Element::ALL
                .into_iter()
                .map(|element| ElementSummary::compute(frame, element))
                .collect(),
        }
    }

    pub fn get(&self, element: Element) -> Option<&ElementSummary> {
        self.elements.iter().find(|summary| summary.element == element)
    }
}

/// Period totals of heating, cooling and growing degree days.
#[derive(Debug)]
pub struct DegreeDaySums {
    pub heating: Result<StatValue, StatisticsError>,
    pub cooling: Result<StatValue, StatisticsError>,
    pub growing: Result<StatValue, StatisticsError>,
}

impl DegreeDaySums {
    pub fn from_frame(frame: &DataFrame) -> Self {
        let options = StatOptions::builder()
            .data_type(NumericKind::Integer)
            .build();
        let sum = |element: Element| {
            period_statistic(frame, element.column_name(), StatKind::Sum, options)
        };
        DegreeDaySums {
            heating: sum(Element::HeatingDegreeDays),
            cooling: sum(Element::CoolingDegreeDays),
            growing: sum(Element::GrowingDegreeDays),
        }
    }

    /// Whether heating demand outweighed cooling demand over the period.
    ///
    /// `None` when either total is unavailable.
    pub fn heating_dominant(&self) -> Option<bool> {
        match (&self.heating, &self.cooling) {
            (Ok(heating), Ok(cooling)) => Some(heating.as_f64() > cooling.as_f64()),
            _ => None,
        }
    }
}

/// How complete a period's record is, judged by its missing-day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingDataLevel {
    /// No missing days.
    Complete,
    /// One to four missing days.
    Partial,
    /// Five or more missing days.
    Sparse,
}

impl MissingDataLevel {
    pub fn classify(missing_days: usize) -> Self {
        match missing_days {
            0 => MissingDataLevel::Complete,
            1..=4 => MissingDataLevel::Partial,
            _ => MissingDataLevel::Sparse,
        }
    }
}

/// Missing-day counts for a set of elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingDays {
    pub counts: Vec<(Element, usize)>,
}

impl MissingDays {
    /// Counts missing days for each of `elements`.
    ///
    /// # Errors
    ///
    /// Fails on the first element that is absent or holds a malformed value.
    pub fn count(frame: &DataFrame, elements: &[Element]) -> Result<Self, StatisticsError> {
        let counts = elements
            .iter()
            .map(|element| -> Result<(Element, usize), StatisticsError> {
                Ok((*element, number_of_missing_days(frame, element.column_name())?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MissingDays { counts })
    }

    pub fn get(&self, element: Element) -> Option<usize> {
        self.counts
            .iter()
            .find(|(e, _)| *e == element)
            .map(|(_, count)| *count)
    }

    /// The largest count among the elements, the figure shown on a multi-element chart.
    pub fn max(&self) -> usize {
        self.counts.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }

    pub fn level(&self) -> MissingDataLevel {
        MissingDataLevel::classify(self.max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new("Maximum Temperature".into(), ["60", "65", "M", "71"]),
            Column::new("Average Temperature".into(), ["50.5", "52.0", "M", "57.25"]),
            Column::new("Precipitation".into(), ["0.10", "T", "0.333", "M"]),
            Column::new("Heating Degree Days".into(), ["14", "13", "M", "8"]),
            Column::new("Cooling Degree Days".into(), ["0", "0", "M", "1"]),
            Column::new("Growing Degree Days".into(), ["M", "M", "M", "M"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_summary_uses_display_precision() {
        let summary = PeriodSummary::from_frame(&frame());
        assert_eq!(summary.elements.len(), Element::ALL.len());

        let max_t = summary.get(Element::MaximumTemperature).unwrap();
        assert_eq!(max_t.mean.as_ref().unwrap(), &StatValue::Integer(65));
        assert_eq!(max_t.maximum.as_ref().unwrap(), &StatValue::Integer(71));
        assert_eq!(max_t.minimum.as_ref().unwrap(), &StatValue::Integer(60));

        let avg_t = summary.get(Element::AverageTemperature).unwrap();
        let mean = avg_t.mean.as_ref().unwrap().as_f64();
        assert!((mean - 53.3).abs() < 1e-9);

        let pcpn = summary.get(Element::Precipitation).unwrap();
        let total_mean = pcpn.mean.as_ref().unwrap().as_f64();
        assert!((total_mean - 0.14).abs() < 1e-9);
    }

    #[test]
    fn test_summary_fields_fail_independently() {
        let summary = PeriodSummary::from_frame(&frame());
        let snow = summary.get(Element::Snowfall).unwrap();
        assert!(matches!(snow.mean, Err(StatisticsError::ColumnNotFound(_))));

        let gdd = summary.get(Element::GrowingDegreeDays).unwrap();
        assert!(matches!(gdd.maximum, Err(StatisticsError::AllMissing { .. })));

        assert!(summary.get(Element::MaximumTemperature).unwrap().mean.is_ok());
    }

    #[test]
    fn test_degree_day_sums() {
        let sums = DegreeDaySums::from_frame(&frame());
        assert_eq!(sums.heating.as_ref().unwrap(), &StatValue::Integer(35));
        assert_eq!(sums.cooling.as_ref().unwrap(), &StatValue::Integer(1));
        assert!(sums.growing.is_err());
        assert_eq!(sums.heating_dominant(), Some(true));
    }

    #[test]
    fn test_missing_days() -> Result<(), StatisticsError> {
        let missing = MissingDays::count(
            &frame(),
            &[
                Element::MaximumTemperature,
                Element::Precipitation,
                Element::GrowingDegreeDays,
            ],
        )?;
        assert_eq!(missing.get(Element::MaximumTemperature), Some(1));
        assert_eq!(missing.get(Element::Precipitation), Some(1));
        assert_eq!(missing.max(), 4);
        assert_eq!(missing.level(), MissingDataLevel::Partial);

        assert_eq!(MissingDataLevel::classify(0), MissingDataLevel::Complete);
        assert_eq!(MissingDataLevel::classify(5), MissingDataLevel::Sparse);
        Ok(())
    }
}
