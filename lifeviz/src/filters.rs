use crate::data::{Dataset, Record};
use crate::error::{Control, DispatchError};
use serde::Serialize;
use std::fmt;

/// Label of the "no constraint" option in both controls.
pub const ALL: &str = "All";

/// A filter dimension: either unconstrained or pinned to one value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, v: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(x) => x == v,
        }
    }

    /// Exact comparison: `All` is a sentinel, not a value, so it matches nothing.
    pub fn equals(&self, v: &T) -> bool {
        match self {
            Selection::All => false,
            Selection::Only(x) => x == v,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Only(x) => Some(x),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Only(v) => v.fmt(f),
        }
    }
}

impl<T: fmt::Display> Serialize for Selection<T> {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Filters {
    pub country: Selection<String>,
    pub year: Selection<i32>,
}

impl Filters {
    pub fn new(country: Selection<String>, year: Selection<i32>) -> Self {
        Filters { country, year }
    }

    /// Both dimensions, each optional. Used by the map.
    pub fn apply<'a>(&self, ds: &'a Dataset) -> Vec<&'a Record> {
        ds.records()
            .iter()
            .filter(|r| self.country.admits(&r.country) && self.year.admits(&r.year))
            .collect()
    }

    /// Country only; the year is ignored. Used by the trend scene.
    pub fn apply_country_only<'a>(&self, ds: &'a Dataset) -> Vec<&'a Record> {
        ds.records()
            .iter()
            .filter(|r| self.country.equals(&r.country))
            .collect()
    }

    /// Exact match on both dimensions. Used by the comparison scene.
    pub fn apply_exact<'a>(&self, ds: &'a Dataset) -> Vec<&'a Record> {
        ds.records()
            .iter()
            .filter(|r| self.country.equals(&r.country) && self.year.equals(&r.year))
            .collect()
    }
}

/// The selectable values derived from a dataset at load time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    countries: Vec<String>,
    years: Vec<i32>,
}

impl FilterOptions {
    pub fn from_dataset(ds: &Dataset) -> Self {
        FilterOptions {
            countries: ds.countries(),
            years: ds.years(),
        }
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Country control entries, sentinel first.
    pub fn country_labels(&self) -> Vec<String> {
        std::iter::once(ALL.to_string())
            .chain(self.countries.iter().cloned())
            .collect()
    }

    /// Year control entries, sentinel first.
    pub fn year_labels(&self) -> Vec<String> {
        std::iter::once(ALL.to_string())
            .chain(self.years.iter().map(|y| y.to_string()))
            .collect()
    }

    pub fn parse_country(&self, value: &str) -> Result<Selection<String>, DispatchError> {
        if value == ALL {
            return Ok(Selection::All);
        }
        if self.countries.binary_search_by(|c| c.as_str().cmp(value)).is_ok() {
            Ok(Selection::Only(value.to_string()))
        } else {
            Err(unknown(Control::Country, value))
        }
    }

    pub fn parse_year(&self, value: &str) -> Result<Selection<i32>, DispatchError> {
        if value == ALL {
            return Ok(Selection::All);
        }
        match value.trim().parse::<i32>() {
            Ok(y) if self.years.binary_search(&y).is_ok() => Ok(Selection::Only(y)),
            _ => Err(unknown(Control::Year, value)),
        }
    }
}

fn unknown(control: Control, value: &str) -> DispatchError {
    DispatchError::UnknownOption {
        control,
        value: value.to_string(),
    }
}
