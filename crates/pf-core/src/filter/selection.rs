use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Sentinel selection value meaning "no constraint on this axis".
pub const ALL: &str = "All";

/// One of the three categorical axes a project can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterAxis {
    Category,
    Type,
    Complexity,
}

impl FilterAxis {
    pub const ALL_AXES: [FilterAxis; 3] =
        [FilterAxis::Category, FilterAxis::Type, FilterAxis::Complexity];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterAxis::Category => "category",
            FilterAxis::Type => "type",
            FilterAxis::Complexity => "complexity",
        }
    }
}

impl Display for FilterAxis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constraint on a single axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AxisFilter {
    #[default]
    All,
    Only(String),
}

impl AxisFilter {
    /// Whether `value` passes this constraint. Comparison is exact.
    pub fn admits(&self, value: &str) -> bool {
        match self {
            AxisFilter::All => true,
            AxisFilter::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, AxisFilter::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            AxisFilter::All => ALL,
            AxisFilter::Only(value) => value,
        }
    }
}

impl From<&str> for AxisFilter {
    /// Maps the sentinel `"All"` to [`AxisFilter::All`], anything else to
    /// [`AxisFilter::Only`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pf_core::AxisFilter;
    ///
    /// assert_eq!(AxisFilter::from("All"), AxisFilter::All);
    /// assert_eq!(AxisFilter::from("Business"), AxisFilter::Only("Business".to_string()));
    /// ```
    fn from(s: &str) -> Self {
        if s == ALL {
            AxisFilter::All
        } else {
            AxisFilter::Only(s.to_string())
        }
    }
}

impl From<String> for AxisFilter {
    fn from(s: String) -> Self {
        if s == ALL {
            AxisFilter::All
        } else {
            AxisFilter::Only(s)
        }
    }
}

impl Display for AxisFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AxisFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AxisFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(AxisFilter::from)
    }
}

/// Current category / type / complexity constraints.
///
/// The default selection constrains nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub category: AxisFilter,
    #[serde(default, rename = "type")]
    pub project_type: AxisFilter,
    #[serde(default)]
    pub complexity: AxisFilter,
}

impl FilterSelection {
    /// Selection with every axis set to the sentinel.
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds a selection from raw vocabulary strings, `"All"` included.
    pub fn from_values(category: &str, project_type: &str, complexity: &str) -> Self {
        Self {
            category: category.into(),
            project_type: project_type.into(),
            complexity: complexity.into(),
        }
    }

    pub fn get(&self, axis: FilterAxis) -> &AxisFilter {
        match axis {
            FilterAxis::Category => &self.category,
            FilterAxis::Type => &self.project_type,
            FilterAxis::Complexity => &self.complexity,
        }
    }

    /// Returns a copy with one axis replaced.
    pub fn with(mut self, axis: FilterAxis, filter: impl Into<AxisFilter>) -> Self {
        let filter = filter.into();
        match axis {
            FilterAxis::Category => self.category = filter,
            FilterAxis::Type => self.project_type = filter,
            FilterAxis::Complexity => self.complexity = filter,
        }
        self
    }

    /// Number of axes carrying a concrete constraint.
    pub fn active_count(&self) -> usize {
        FilterAxis::ALL_AXES
            .iter()
            .filter(|axis| !self.get(**axis).is_all())
            .count()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active_count() == 0
    }
}
