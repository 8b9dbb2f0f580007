use crate::error::LoadError;
use log::warn;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io;

// Header names are matched exactly; the life expectancy header really ends in a space.
pub const COL_COUNTRY: &str = "Country";
pub const COL_YEAR: &str = "Year";
pub const COL_LIFE_EXPECTANCY: &str = "Life expectancy ";
pub const COL_ADULT_MORTALITY: &str = "Adult Mortality";
pub const COL_INFANT_DEATHS: &str = "infant deaths";

/// One (country, year) observation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Record {
    pub country: String,
    pub year: i32,
    /// `None` when the source cell is blank or not a number.
    pub life_expectancy: Option<f64>,
    pub adult_mortality: f64,
    pub infant_deaths: f64,
}

impl Record {
    pub fn new(
        country: &str,
        year: i32,
        life_expectancy: f64,
        adult_mortality: f64,
        infant_deaths: f64,
    ) -> Self {
        Record {
            country: country.to_string(),
            year,
            life_expectancy: Some(life_expectancy).filter(|v| !v.is_nan()),
            adult_mortality,
            infant_deaths,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    pub fn from_csv_str(text: &str) -> Result<Self, LoadError> {
        Self::from_reader(text.as_bytes())
    }

    pub fn from_reader<R: io::Read>(rdr: R) -> Result<Self, LoadError> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(rdr);
        let headers = rdr.headers()?.clone();
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(LoadError::MissingColumn(name))
        };
        let country = column(COL_COUNTRY)?;
        let year_col = column(COL_YEAR)?;
        let life = column(COL_LIFE_EXPECTANCY)?;
        let mortality = column(COL_ADULT_MORTALITY)?;
        let infant = column(COL_INFANT_DEATHS)?;

        let mut records = Vec::new();
        for (i, row) in rdr.records().enumerate() {
            let row = row?;
            let line = row.position().map_or(i as u64 + 2, |p| p.line());
            let cell = |idx: usize| row.get(idx).unwrap_or("");
            let year_text = cell(year_col);
            let Some(year) = parse_year(year_text) else {
                warn!("line {}: skipping row with year '{}'", line, year_text);
                continue;
            };
            records.push(Record {
                country: cell(country).to_string(),
                year,
                life_expectancy: parse_float_prefix(cell(life)),
                adult_mortality: coerce_number(cell(mortality)),
                infant_deaths: coerce_number(cell(infant)),
            });
        }
        Ok(Dataset { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct country names in lexicographic order.
    pub fn countries(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.country.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Distinct years in ascending order.
    pub fn years(&self) -> Vec<i32> {
        let set: BTreeSet<i32> = self.records.iter().map(|r| r.year).collect();
        set.into_iter().collect()
    }
}

/// Unary-plus style coercion: blank is zero, garbage is NaN.
pub fn coerce_number(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        return 0.0;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

/// Longest leading decimal prefix, as a lenient float parser would read it.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let t = s.trim_start();
    let bytes = t.as_bytes();
    let mut end = 0usize;
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exp = false;
    let mut last_good = None;
    while end < bytes.len() {
        let c = bytes[end];
        match c {
            b'0'..=b'9' => {
                seen_digit = true;
            }
            b'+' | b'-' if end == 0 || matches!(bytes[end - 1], b'e' | b'E') => {}
            b'.' if !seen_dot && !seen_exp => seen_dot = true,
            b'e' | b'E' if seen_digit && !seen_exp => seen_exp = true,
            _ => break,
        }
        end += 1;
        if seen_digit {
            if let Ok(v) = t[..end].parse::<f64>() {
                last_good = Some(v);
            }
        }
    }
    last_good
}

/// Year as unary plus reads it; `None` when that is not a whole number.
fn parse_year(s: &str) -> Option<i32> {
    let v = coerce_number(s);
    if !v.is_finite() || v.fract() != 0.0 {
        return None;
    }
    if v < i32::MIN as f64 || v > i32::MAX as f64 {
        return None;
    }
    Some(v as i32)
}
