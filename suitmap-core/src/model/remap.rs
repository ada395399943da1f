use super::{CellValue, EvaluationScale};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// an ordered lookup table from cell values to new cell values. either side of
/// an entry may be `None`, which stands for no-data. when a key appears more
/// than once, the first entry wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remap {
    entries: Vec<(CellValue, CellValue)>,
}

impl Remap {
    pub fn new(entries: Vec<(CellValue, CellValue)>) -> Remap {
        Remap { entries }
    }

    /// the pass-through table used when a contribution enters the weighted
    /// overlay: every scale value maps to itself and no-data stays no-data.
    pub fn identity(scale: &EvaluationScale) -> Remap {
        let entries = scale
            .values()
            .map(|v| (Some(v), Some(v)))
            .chain(std::iter::once((None, None)))
            .collect();
        Remap { entries }
    }

    pub fn entries(&self) -> &[(CellValue, CellValue)] {
        &self.entries
    }

    /// finds the mapped value for a cell. the outer `None` means the value has no
    /// entry in this table.
    pub fn lookup(&self, value: CellValue) -> Option<CellValue> {
        self.entries
            .iter()
            .find(|(from, _)| *from == value)
            .map(|(_, to)| *to)
    }

    /// maps a value, keeping it unchanged when the table has no entry for it.
    pub fn apply_or_keep(&self, value: CellValue) -> CellValue {
        self.lookup(value).unwrap_or(value)
    }

    /// maps a value, turning values without an entry into no-data.
    pub fn apply_or_nodata(&self, value: CellValue) -> CellValue {
        self.lookup(value).flatten()
    }
}

impl Display for Remap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show = |v: &CellValue| match v {
            Some(v) => v.to_string(),
            None => String::from("NODATA"),
        };
        let s = self
            .entries
            .iter()
            .map(|(from, to)| format!("{} {}", show(from), show(to)))
            .join(";");
        write!(f, "{s}")
    }
}
