//! In-memory weather table

use crate::models::Observation;

/// Ordered, read-only collection of observations.
///
/// Built once by the loader; queries only ever borrow it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherDataset {
    records: Vec<Observation>,
}

impl WeatherDataset {
    pub fn new(records: Vec<Observation>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Observation] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// New dataset holding only the records matching `keep`
    pub fn filtered<F>(&self, keep: F) -> Self
    where
        F: Fn(&Observation) -> bool,
    {
        Self::new(self.records.iter().filter(|r| keep(r)).cloned().collect())
    }
}

impl FromIterator<Observation> for WeatherDataset {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a WeatherDataset {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
