//! Recode table and bin-estimate primitives.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{RecodeError, Result};

/// Static many-to-one mapping of raw census labels to public labels.
///
/// Lookups go through a hash index built on first use. Labels the table does
/// not know pass through unchanged, unless the table is exhaustive.
pub struct RecodeTable {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
    exhaustive: bool,
    index: OnceLock<HashMap<&'static str, &'static str>>,
}

impl RecodeTable {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            name,
            entries,
            exhaustive: false,
            index: OnceLock::new(),
        }
    }

    /// A table whose misses are errors rather than pass-through.
    pub const fn exhaustive(
        name: &'static str,
        entries: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            name,
            entries,
            exhaustive: true,
            index: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_exhaustive(&self) -> bool {
        self.exhaustive
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    fn index(&self) -> &HashMap<&'static str, &'static str> {
        self.index
            .get_or_init(|| self.entries.iter().copied().collect())
    }

    /// Mapped label for `raw`, if the table has one.
    pub fn get(&self, raw: &str) -> Option<&'static str> {
        self.index().get(raw).copied()
    }

    /// Recodes `raw`, passing unknown labels through.
    ///
    /// # Errors
    ///
    /// [`RecodeError::Unmapped`] when the table is exhaustive and has no entry.
    pub fn recode<'a>(&self, raw: &'a str) -> Result<&'a str> {
        match self.get(raw) {
            Some(label) => Ok(label),
            None if self.exhaustive => Err(RecodeError::Unmapped {
                table: self.name,
                label: raw.to_string(),
            }),
            None => Ok(raw),
        }
    }

    /// Distinct target labels in the order they first appear in the table.
    pub fn target_order(&self) -> Vec<&'static str> {
        let mut order: Vec<&'static str> = Vec::new();
        for &(_, target) in self.entries {
            if !order.contains(&target) {
                order.push(target);
            }
        }
        order
    }

    /// Distinct target labels sorted alphabetically.
    pub fn sorted_targets(&self) -> Vec<&'static str> {
        let mut targets = self.target_order();
        targets.sort_unstable();
        targets
    }
}

impl fmt::Debug for RecodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecodeTable")
            .field("name", &self.name)
            .field("entries", &self.entries.len())
            .field("exhaustive", &self.exhaustive)
            .finish()
    }
}

/// Function recode: receives the field name and the raw label.
pub type RecodeFn = fn(&str, &str) -> String;

/// A recode applied to raw category labels while collapsing a distribution.
#[derive(Clone, Copy)]
pub enum Recode {
    Table(&'static RecodeTable),
    Function(RecodeFn),
}

impl Recode {
    /// Recoded label for `raw` read from `field`.
    ///
    /// # Errors
    ///
    /// Propagates [`RecodeError::Unmapped`] from exhaustive tables.
    pub fn apply(&self, field: &str, raw: &str) -> Result<String> {
        match self {
            Recode::Table(table) => table.recode(raw).map(str::to_string),
            Recode::Function(func) => Ok(func(field, raw)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Recode::Table(table) => table.name(),
            Recode::Function(_) => "function",
        }
    }
}

impl From<&'static RecodeTable> for Recode {
    fn from(table: &'static RecodeTable) -> Self {
        Recode::Table(table)
    }
}

impl fmt::Debug for Recode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recode::Table(table) => f.debug_tuple("Table").field(&table.name()).finish(),
            Recode::Function(_) => f.write_str("Function"),
        }
    }
}

/// Numeric estimate for each bin of a binned distribution.
///
/// A bin mapped to `None` (e.g. "Unspecified") has no defined estimate.
#[derive(Debug)]
pub struct BinEstimates {
    name: &'static str,
    entries: &'static [(&'static str, Option<f64>)],
}

impl BinEstimates {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, Option<f64>)]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `None` when the bin is unknown, `Some(None)` when it is known but
    /// has no estimate.
    pub fn lookup(&self, bin: &str) -> Option<Option<f64>> {
        self.entries
            .iter()
            .find(|(label, _)| *label == bin)
            .map(|(_, estimate)| *estimate)
    }

    /// Estimate for `bin`; absent for unknown and undefined bins alike.
    pub fn estimate(&self, bin: &str) -> Option<f64> {
        self.lookup(bin).flatten()
    }

    pub fn bins(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(label, _)| *label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SMALL: RecodeTable = RecodeTable::new("small", &[("a", "A"), ("b", "A"), ("c", "C")]);
    static STRICT: RecodeTable = RecodeTable::exhaustive("strict", &[("a", "A")]);

    #[test]
    fn pass_through_and_exhaustive_miss() {
        assert_eq!(SMALL.recode("b"), Ok("A"));
        assert_eq!(SMALL.recode("z"), Ok("z"));
        assert_eq!(
            STRICT.recode("z"),
            Err(RecodeError::Unmapped {
                table: "strict",
                label: "z".to_string()
            })
        );
    }

    #[test]
    fn target_order_is_first_seen_and_distinct() {
        assert_eq!(SMALL.target_order(), vec!["A", "C"]);
    }

    #[test]
    fn function_recode_sees_field() {
        fn tag(field: &str, raw: &str) -> String {
            format!("{field}:{raw}")
        }
        let recode = Recode::Function(tag);
        assert_eq!(recode.apply("gender", "Male").as_deref(), Ok("gender:Male"));
    }
}
