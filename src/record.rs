// src/record.rs

use std::collections::HashMap;

use serde::de::value::{Error as DeError, MapDeserializer};
use serde::{Deserialize, Deserializer};

use crate::error::{Result, ScrapeError};
use crate::table::RawRow;

/// Header labels the schema binds to, in the site's column order.
pub const LABELS: [&str; 13] = [
    "Food Name",
    "GI",
    "Food Manufacturer",
    "Product Category",
    "Country of food production",
    "Serving Size (g)",
    "Carbohydrate portion (g) or Average Carbohydrate portion (g)",
    "GL",
    "Reference:",
    "Subjects type",
    "Time",
    "Subjects Number",
    "Year of test",
];

/// Whitespace-only cells become `""`; anything else is kept verbatim.
fn blank_as_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(de)?;
    if s.trim().is_empty() {
        Ok(String::new())
    } else {
        Ok(s)
    }
}

/// One GI measurement. Values stay text: the site mixes numbers with
/// ranges, "n/a" and footnote markers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GiEntry {
    #[serde(rename = "Food Name", deserialize_with = "blank_as_empty")]
    pub food_name: String,
    #[serde(rename = "GI", deserialize_with = "blank_as_empty")]
    pub gi: String,
    #[serde(rename = "Food Manufacturer", deserialize_with = "blank_as_empty")]
    pub manufacturer: String,
    #[serde(rename = "Product Category", deserialize_with = "blank_as_empty")]
    pub category: String,
    #[serde(rename = "Country of food production", deserialize_with = "blank_as_empty")]
    pub country: String,
    #[serde(rename = "Serving Size (g)", deserialize_with = "blank_as_empty")]
    pub serving_size: String,
    #[serde(
        rename = "Carbohydrate portion (g) or Average Carbohydrate portion (g)",
        deserialize_with = "blank_as_empty"
    )]
    pub carbs_portion: String,
    #[serde(rename = "GL", deserialize_with = "blank_as_empty")]
    pub gl: String,
    #[serde(rename = "Reference:", deserialize_with = "blank_as_empty")]
    pub reference: String,
    #[serde(rename = "Subjects type", deserialize_with = "blank_as_empty")]
    pub subjects_type: String,
    #[serde(rename = "Time", deserialize_with = "blank_as_empty")]
    pub time: String,
    #[serde(rename = "Subjects Number", deserialize_with = "blank_as_empty")]
    pub subjects_number: String,
    #[serde(rename = "Year of test", deserialize_with = "blank_as_empty")]
    pub year: String,
}

impl GiEntry {
    /// Value stored under a header label, `None` for labels outside the schema.
    pub fn get(&self, label: &str) -> Option<&str> {
        let v = match label {
            "Food Name" => &self.food_name,
            "GI" => &self.gi,
            "Food Manufacturer" => &self.manufacturer,
            "Product Category" => &self.category,
            "Country of food production" => &self.country,
            "Serving Size (g)" => &self.serving_size,
            "Carbohydrate portion (g) or Average Carbohydrate portion (g)" => &self.carbs_portion,
            "GL" => &self.gl,
            "Reference:" => &self.reference,
            "Subjects type" => &self.subjects_type,
            "Time" => &self.time,
            "Subjects Number" => &self.subjects_number,
            "Year of test" => &self.year,
            _ => return None,
        };
        Some(v.as_str())
    }
}

/// Bind a reconciled row to the schema by header label.
///
/// Headers are zipped positionally with the row; a repeated label keeps the
/// value of its last occurrence. Labels outside the schema are ignored. The
/// row is rejected only when a schema label is absent from `headers`.
pub fn validate(headers: &[String], row: &RawRow) -> Result<GiEntry> {
    let by_label: HashMap<&str, &str> = headers
        .iter()
        .map(String::as_str)
        .zip(row.values().iter().map(String::as_str))
        .collect();

    let de = MapDeserializer::<_, DeError>::new(by_label.into_iter());
    GiEntry::deserialize(de).map_err(|e| ScrapeError::SchemaValidation {
        row: row.label().to_string(),
        message: e.to_string(),
    })
}
