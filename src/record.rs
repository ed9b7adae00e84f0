//! The geolocation record returned by the lookup endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single IP geolocation result.
///
/// The well-known ipinfo.io fields are modeled explicitly, in the order the
/// service returns them. Anything else in the response (`bogon`, `anycast`,
/// plan-specific objects, ...) is preserved verbatim in `extra`, so a record
/// re-serializes to the same JSON it was parsed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    /// The IP address the lookup resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Reverse DNS name for the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// City name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Region or state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Two-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Latitude and longitude as `"lat,lon"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<String>,
    /// AS number and organization name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal: Option<String>,
    /// IANA timezone name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Any additional fields returned by the endpoint, preserved as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl GeoRecord {
    /// Returns the record's fields as `(name, value)` pairs in display order:
    /// the known fields that are present, in declaration order, followed by
    /// everything in `extra`.
    ///
    /// The console display and the CSV rows both iterate this list, so their
    /// field order always matches.
    pub fn fields(&self) -> Vec<(&str, String)> {
        let known: [(&str, &Option<String>); 9] = [
            ("ip", &self.ip),
            ("hostname", &self.hostname),
            ("city", &self.city),
            ("region", &self.region),
            ("country", &self.country),
            ("loc", &self.loc),
            ("org", &self.org),
            ("postal", &self.postal),
            ("timezone", &self.timezone),
        ];

        let mut fields = Vec::with_capacity(known.len() + self.extra.len());
        for (name, value) in known {
            if let Some(value) = value {
                fields.push((name, value.clone()));
            }
        }
        for (name, value) in &self.extra {
            fields.push((name.as_str(), render_value(value)));
        }
        fields
    }

    /// True when the record carries no fields at all.
    ///
    /// The endpoint answering with `{}` is treated the same as no answer:
    /// nothing to display, nothing to save.
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}

/// Renders a JSON value for display and CSV output.
///
/// Strings are written bare; any other value keeps its compact JSON form, so
/// booleans come out as `true`/`false` and a nested object stays one cell.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
