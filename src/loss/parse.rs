use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// One row of the loss dataset, as read from the CSV source.
#[derive(Clone, Debug, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "COUNTRY", default)]
    pub country: String,
    #[serde(rename = "DEATHS", default, deserialize_with = "blank_as_zero")]
    pub deaths: f64,
    #[serde(
        rename = "DAMAGE_MILLIONS_DOLLARS",
        default,
        deserialize_with = "blank_as_zero"
    )]
    pub damage_millions: f64,
    #[serde(rename = "CAUSE_CODE", default, deserialize_with = "lenient_code")]
    pub cause_code: Option<i64>,
    #[serde(rename = "YEAR", default)]
    pub year: String,
}

fn blank_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_amount(&raw).map_err(D::Error::custom)
}

fn lenient_code<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(parse_code(&raw))
}

pub(super) fn parse_amount(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("expected a finite number, found {trimmed:?}")),
    }
}

pub(super) fn parse_code(raw: &str) -> Option<i64> {
    let value = raw.trim().parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 {
        Some(value as i64)
    } else {
        None
    }
}
