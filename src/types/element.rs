//! Defines the daily climate elements returned by the ACIS `StnData` service and the
//! column names they occupy in a station table.

use crate::types::rounding::{NumericKind, Precision, StatOptions};
use serde::Serialize;
use std::fmt;

/// Name of the date column in every station table produced by this crate.
pub const DATE_COLUMN: &str = "Date";

/// A daily climate element.
///
/// Each variant maps to one column of the station table (see [`Element::column_name`])
/// and one entry of the `elems` list sent to ACIS.
/// The declaration order is the column order of a fetched table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    /// Daily maximum temperature (°F).
    MaximumTemperature,
    /// Daily minimum temperature (°F).
    MinimumTemperature,
    /// Daily average temperature (°F).
    AverageTemperature,
    /// Departure of the daily average temperature from the 1991-2020 normal (°F).
    AverageTemperatureDeparture,
    /// Heating degree days (base 65 °F).
    HeatingDegreeDays,
    /// Cooling degree days (base 65 °F).
    CoolingDegreeDays,
    /// Liquid precipitation (inches). May contain trace values.
    Precipitation,
    /// Snowfall (inches). May contain trace values.
    Snowfall,
    /// Snow depth (inches). May contain trace values.
    SnowDepth,
    /// Growing degree days (base 50 °F).
    GrowingDegreeDays,
}

/// One entry of the ACIS `elems` request list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ElementSpec {
    /// A plain element code such as `"maxt"`.
    Code(&'static str),
    /// An element reduced against its climate normal.
    Normal {
        name: &'static str,
        normal: &'static str,
    },
}

impl Element {
    /// All elements in table column order.
    pub const ALL: [Element; 10] = [
        Element::MaximumTemperature,
        Element::MinimumTemperature,
        Element::AverageTemperature,
        Element::AverageTemperatureDeparture,
        Element::HeatingDegreeDays,
        Element::CoolingDegreeDays,
        Element::Precipitation,
        Element::Snowfall,
        Element::SnowDepth,
        Element::GrowingDegreeDays,
    ];

    /// The column name used for this element in a station table.
    pub fn column_name(&self) -> &'static str {
        match self {
            Element::MaximumTemperature => "Maximum Temperature",
            Element::MinimumTemperature => "Minimum Temperature",
            Element::AverageTemperature => "Average Temperature",
            Element::AverageTemperatureDeparture => "Average Temperature Departure",
            Element::HeatingDegreeDays => "Heating Degree Days",
            Element::CoolingDegreeDays => "Cooling Degree Days",
            Element::Precipitation => "Precipitation",
            Element::Snowfall => "Snowfall",
            Element::SnowDepth => "Snow Depth",
            Element::GrowingDegreeDays => "Growing Degree Days",
        }
    }

    pub(crate) fn request_spec(&self) -> ElementSpec {
        match self {
            Element::MaximumTemperature => ElementSpec::Code("maxt"),
            Element::MinimumTemperature => ElementSpec::Code("mint"),
            Element::AverageTemperature => ElementSpec::Code("avgt"),
            Element::AverageTemperatureDeparture => ElementSpec::Normal {
                name: "avgt",
                normal: "departure",
            },
            Element::HeatingDegreeDays => ElementSpec::Code("hdd"),
            Element::CoolingDegreeDays => ElementSpec::Code("cdd"),
            Element::Precipitation => ElementSpec::Code("pcpn"),
            Element::Snowfall => ElementSpec::Code("snow"),
            Element::SnowDepth => ElementSpec::Code("snwd"),
            Element::GrowingDegreeDays => ElementSpec::Code("gdd"),
        }
    }

    /// Looks up an element by its table column name.
    pub fn from_column_name(name: &str) -> Option<Element> {
        Element::ALL
            .into_iter()
            .find(|element| element.column_name() == name)
    }

    /// The precision period summaries report this element at.
    ///
    /// Temperatures, degree days and snow depth are whole numbers; the average
    /// temperature, its departure and snowfall use tenths; precipitation uses hundredths.
    pub fn display_precision(&self) -> Precision {
        match self {
            Element::AverageTemperature
            | Element::AverageTemperatureDeparture
            | Element::Snowfall => Precision::Tenth,
            Element::Precipitation => Precision::Hundredth,
            _ => Precision::Whole,
        }
    }

    /// Rounding options matching [`Element::display_precision`]: integer output for
    /// whole-number elements, rounded floats otherwise.
    pub fn display_options(&self) -> StatOptions {
        let precision = self.display_precision();
        let data_type = match precision {
            Precision::Whole => NumericKind::Integer,
            _ => NumericKind::Float,
        };
        StatOptions::builder()
            .round(true)
            .to_nearest(precision)
            .data_type(data_type)
            .build()
    }

    /// Whether ACIS may report a trace (`"T"`) for this element.
    pub fn accepts_trace(&self) -> bool {
        matches!(
            self,
            Element::Precipitation | Element::Snowfall | Element::SnowDepth
        )
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}
