use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One data series as consumed by the layouts.
///
/// For bars `values` are per-category samples; for radar charts they are
/// per-indicator samples of a single ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    #[serde(default)]
    pub stack: Option<String>,
    #[serde(default = "default_show")]
    pub show: bool,
    #[serde(default)]
    pub axis_index: usize,
}

fn default_show() -> bool {
    true
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            stack: None,
            show: true,
            axis_index: 0,
        }
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    #[must_use]
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    #[must_use]
    pub fn with_axis_index(mut self, axis_index: usize) -> Self {
        self.axis_index = axis_index;
        self
    }

    /// Stack id, with empty ids treated as "not stacked".
    #[must_use]
    pub fn stack_id(&self) -> Option<&str> {
        self.stack.as_deref().filter(|id| !id.is_empty())
    }
}

/// Legend collaborator deciding which series take part in a pass at all.
pub trait LegendFilter {
    fn is_active(&self, series_name: &str) -> bool;
}

/// Legend with every entry enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllActive;

impl LegendFilter for AllActive {
    fn is_active(&self, _series_name: &str) -> bool {
        true
    }
}

impl LegendFilter for HashSet<String> {
    /// The set holds the names toggled off.
    fn is_active(&self, series_name: &str) -> bool {
        !self.contains(series_name)
    }
}

impl<F> LegendFilter for F
where
    F: Fn(&str) -> bool,
{
    fn is_active(&self, series_name: &str) -> bool {
        self(series_name)
    }
}
