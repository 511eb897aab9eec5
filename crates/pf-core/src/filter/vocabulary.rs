use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{FilterAxis, ALL};
use crate::project::Project;

/// Selectable values per axis, each list led by the `"All"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabularies {
    pub categories: Vec<String>,
    pub types: Vec<String>,
    pub complexities: Vec<String>,
}

impl Vocabularies {
    pub fn for_axis(&self, axis: FilterAxis) -> &[String] {
        match axis {
            FilterAxis::Category => &self.categories,
            FilterAxis::Type => &self.types,
            FilterAxis::Complexity => &self.complexities,
        }
    }
}

fn distinct_in_order<'a, I>(values: I) -> Vec<String>
where
    I: Iterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut out = vec![ALL.to_string()];
    for value in values {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

/// Derives the three vocabularies in first-seen catalog order.
///
/// An empty catalog yields `["All"]` for every axis.
pub fn derive_vocabularies<'a, I>(projects: I) -> Vocabularies
where
    I: IntoIterator<Item = &'a Project>,
{
    let projects: Vec<&Project> = projects.into_iter().collect();
    let vocab = |axis: FilterAxis| distinct_in_order(projects.iter().map(|p| p.axis_value(axis)));

    Vocabularies {
        categories: vocab(FilterAxis::Category),
        types: vocab(FilterAxis::Type),
        complexities: vocab(FilterAxis::Complexity),
    }
}
