use serde::{Deserialize, Serialize};

/// One observation (one row = one country in one year).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub category: String,
    pub ordinal: i32,
    pub value: f64,
}

impl Record {
    pub fn new(category: impl Into<String>, ordinal: i32, value: f64) -> Self {
        Self {
            category: category.into(),
            ordinal,
            value,
        }
    }
}

/// The three datasets behind the charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetId {
    /// `gdp_per_capita.json` (grouped bar chart)
    GdpPerCapita,
    /// `gdp.json` (line chart)
    Gdp,
    /// `population.json` (scatter chart)
    Population,
}

impl DatasetId {
    pub const ALL: [DatasetId; 3] = [DatasetId::GdpPerCapita, DatasetId::Gdp, DatasetId::Population];

    pub fn file_name(&self) -> &'static str {
        match self {
            DatasetId::GdpPerCapita => "gdp_per_capita.json",
            DatasetId::Gdp => "gdp.json",
            DatasetId::Population => "population.json",
        }
    }

    /// Name of the numeric field in the JSON rows.
    pub fn value_field(&self) -> &'static str {
        match self {
            DatasetId::GdpPerCapita => "GDP_per_Capita",
            DatasetId::Gdp => "GDP",
            DatasetId::Population => "Population",
        }
    }

    /// Decode a JSON array of rows of this dataset's shape into records.
    pub fn parse_records(&self, json: &str) -> Result<Vec<Record>, serde_json::Error> {
        Ok(match self {
            DatasetId::GdpPerCapita => serde_json::from_str::<Vec<GdpPerCapitaRow>>(json)?
                .into_iter()
                .map(Record::from)
                .collect(),
            DatasetId::Gdp => serde_json::from_str::<Vec<GdpRow>>(json)?
                .into_iter()
                .map(Record::from)
                .collect(),
            DatasetId::Population => serde_json::from_str::<Vec<PopulationRow>>(json)?
                .into_iter()
                .map(Record::from)
                .collect(),
        })
    }
}

impl std::fmt::Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Raw row of `gdp_per_capita.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GdpPerCapitaRow {
    #[serde(rename = "Year", deserialize_with = "de_i32_from_string_or_number")]
    pub year: i32,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "GDP_per_Capita")]
    pub gdp_per_capita: f64,
}

/// Raw row of `gdp.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GdpRow {
    #[serde(rename = "Year", deserialize_with = "de_i32_from_string_or_number")]
    pub year: i32,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "GDP")]
    pub gdp: f64,
}

/// Raw row of `population.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationRow {
    #[serde(rename = "Year", deserialize_with = "de_i32_from_string_or_number")]
    pub year: i32,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Population")]
    pub population: f64,
}

impl From<GdpPerCapitaRow> for Record {
    fn from(r: GdpPerCapitaRow) -> Self {
        Record::new(r.country, r.year, r.gdp_per_capita)
    }
}

impl From<GdpRow> for Record {
    fn from(r: GdpRow) -> Self {
        Record::new(r.country, r.year, r.gdp)
    }
}

impl From<PopulationRow> for Record {
    fn from(r: PopulationRow) -> Self {
        Record::new(r.country, r.year, r.population)
    }
}

/// Serde helper: exported spreadsheets sometimes write the year as `"2000"`.
fn de_i32_from_string_or_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct I32Visitor;

    impl<'de> Visitor<'de> for I32Visitor {
        type Value = i32;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a year as integer or string")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i32::try_from(v).map_err(E::custom)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i32::try_from(v).map_err(E::custom)
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v.fract() != 0.0 || !v.is_finite() {
                return Err(E::custom("year must be a whole number"));
            }
            Ok(v as i32)
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.trim().parse::<i32>().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(I32Visitor)
}
