//! JSON bodies exchanged with the ACIS `StnData` web service.

use crate::types::element::{Element, ElementSpec};
use crate::types::period::Period;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Station metadata fields requested alongside the data.
const META_FIELDS: &str = "name,state,elev,ll";

/// A `StnData` request for every [`Element`] of one station over one period.
#[derive(Debug, Clone, Serialize)]
pub struct StnDataRequest {
    pub sid: String,
    pub sdate: String,
    pub edate: String,
    pub elems: Vec<ElementSpec>,
    pub meta: &'static str,
}

impl StnDataRequest {
    /// Builds the request. Station identifiers are sent upper-cased.
    pub fn new(station: &str, period: Period) -> Self {
        StnDataRequest {
            sid: normalize_station_id(station),
            sdate: period.start.format("%Y-%m-%d").to_string(),
            edate: period.end.format("%Y-%m-%d").to_string(),
            elems: Element::ALL.iter().map(Element::request_spec).collect(),
            meta: META_FIELDS,
        }
    }
}

pub(crate) fn normalize_station_id(station: &str) -> String {
    station.trim().to_uppercase()
}

/// The body returned by `StnData`.
///
/// A rejected request carries `error` and nothing else.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StnDataResponse {
    #[serde(default)]
    pub meta: Option<StationMeta>,
    /// One row per day: the date followed by one value per requested element.
    #[serde(default)]
    pub data: Vec<Vec<Value>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Station metadata as reported by ACIS.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StationMeta {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    /// Elevation in feet.
    #[serde(default)]
    pub elev: Option<f64>,
    /// Longitude and latitude, in that order.
    #[serde(default)]
    pub ll: Option<[f64; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_request_body() -> Result<(), Box<dyn std::error::Error>> {
        let period = Period {
            start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        };
        let request = StnDataRequest::new(" kbos ", period);
        let json = serde_json::to_value(&request)?;

        assert_eq!(json["sid"], "KBOS");
        assert_eq!(json["sdate"], "2025-01-01");
        assert_eq!(json["edate"], "2025-01-31");
        assert_eq!(json["elems"].as_array().map(Vec::len), Some(Element::ALL.len()));
        assert_eq!(json["elems"][3]["normal"], "departure");
        assert_eq!(json["meta"], "name,state,elev,ll");
        Ok(())
    }

    #[test]
    fn test_response_with_meta() -> Result<(), serde_json::Error> {
        let response: StnDataResponse = serde_json::from_str(
            r#"{
                "meta": {"name": "BOSTON LOGAN INTL AP", "state": "MA", "elev": 15.0,
                         "ll": [-71.01, 42.36]},
                "data": [["2025-01-01", "41", "30", "35.5", "2.1", "29", "0", "T", "0.0", "0", "0"]]
            }"#,
        )?;
        let meta = response.meta.unwrap_or_default();
        assert_eq!(meta.name.as_deref(), Some("BOSTON LOGAN INTL AP"));
        assert_eq!(meta.ll, Some([-71.01, 42.36]));
        assert_eq!(response.data.len(), 1);
        assert!(response.error.is_none());
        Ok(())
    }

    #[test]
    fn test_error_response() -> Result<(), serde_json::Error> {
        let response: StnDataResponse = serde_json::from_str(r#"{"error": "no data available"}"#)?;
        assert_eq!(response.error.as_deref(), Some("no data available"));
        assert!(response.data.is_empty());
        Ok(())
    }
}
