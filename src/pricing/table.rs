use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::foundation::error::{PrintframeError, PrintframeResult};
use crate::pricing::bracket::Bracket;

const RANGED_JSON: &str = include_str!("../../data/rates_ranged.json");
const BELOW_JSON: &str = include_str!("../../data/rates_below.json");

/// Static print rate table: category -> size -> ordered brackets.
///
/// Category, size and bracket order is the order of the source JSON object keys. Bracket order
/// is significant because lookup is first-match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RateTable {
    categories: Vec<Category>,
}

/// Rates for one print category (e.g. sleeve vs. laminated).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    name: String,
    sizes: Vec<SizeRates>,
}

/// Ordered brackets for one print size within a category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizeRates {
    label: String,
    brackets: Vec<Bracket>,
}

impl Category {
    /// Category name as written in the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sizes in table order.
    pub fn sizes(&self) -> &[SizeRates] {
        &self.sizes
    }
}

impl SizeRates {
    /// Size label as written in the table (e.g. `"5x7"`).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Brackets in table order.
    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }
}

impl RateTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in table using the `"10-15"`, `"16-40"`, ..., `"1000+"` descriptor vocabulary.
    pub fn ranged() -> PrintframeResult<Self> {
        Self::from_json_str(RANGED_JSON)
    }

    /// Built-in table using the `"<15"`, `"15-40"`, ..., `"1000+"` descriptor vocabulary.
    pub fn below() -> PrintframeResult<Self> {
        Self::from_json_str(BELOW_JSON)
    }

    /// Parse a rate table from a JSON string.
    pub fn from_json_str(s: &str) -> PrintframeResult<Self> {
        let table: Self = serde_json::from_str(s)
            .map_err(|e| PrintframeError::serde(format!("parse rate table JSON: {e}")))?;
        table.warn_malformed();
        Ok(table)
    }

    /// Parse a rate table from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PrintframeResult<Self> {
        let table: Self = serde_json::from_reader(r)
            .map_err(|e| PrintframeError::serde(format!("parse rate table JSON: {e}")))?;
        table.warn_malformed();
        Ok(table)
    }

    /// Parse a rate table from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PrintframeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PrintframeError::validation(format!("open rate table '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Append (or replace) the brackets for `category` / `size`.
    ///
    /// New categories and sizes go after the existing ones.
    pub fn with_brackets(
        mut self,
        category: impl Into<String>,
        size: impl Into<String>,
        brackets: Vec<Bracket>,
    ) -> Self {
        let category = category.into();
        let size = size.into();

        let cat = match self.categories.iter().position(|c| c.name == category) {
            Some(i) => &mut self.categories[i],
            None => {
                self.categories.push(Category {
                    name: category,
                    sizes: Vec::new(),
                });
                let last = self.categories.len() - 1;
                &mut self.categories[last]
            }
        };
        match cat.sizes.iter_mut().find(|s| s.label == size) {
            Some(s) => s.brackets = brackets,
            None => cat.sizes.push(SizeRates {
                label: size,
                brackets,
            }),
        }
        self
    }

    /// Categories in table order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by exact name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Size labels of `category` in table order; empty when the category is unknown.
    pub fn sizes(&self, category: &str) -> Vec<&str> {
        self.category(category)
            .map(|c| c.sizes.iter().map(|s| s.label.as_str()).collect())
            .unwrap_or_default()
    }

    /// Brackets for `category` / `size`, if both keys exist.
    pub fn brackets(&self, category: &str, size: &str) -> Option<&[Bracket]> {
        self.category(category)?
            .sizes
            .iter()
            .find(|s| s.label == size)
            .map(|s| s.brackets.as_slice())
    }

    /// `(category, size, descriptor)` for every bracket whose descriptor does not parse.
    pub fn malformed_descriptors(&self) -> Vec<(&str, &str, &str)> {
        let mut out = Vec::new();
        for c in &self.categories {
            for s in &c.sizes {
                for b in s.brackets.iter().filter(|b| b.range().is_none()) {
                    out.push((c.name.as_str(), s.label.as_str(), b.descriptor()));
                }
            }
        }
        out
    }

    fn warn_malformed(&self) {
        for (category, size, descriptor) in self.malformed_descriptors() {
            tracing::warn!(category, size, descriptor, "skipping malformed bracket descriptor");
        }
    }
}

/// JSON object decoded into a key-ordered list.
struct OrderedMap<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((k, v)) = map.next_entry::<String, V>()? {
                    entries.push((k, v));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}

impl<'de> Deserialize<'de> for RateTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = OrderedMap::<OrderedMap<OrderedMap<u64>>>::deserialize(deserializer)?;
        let categories = raw
            .0
            .into_iter()
            .map(|(name, sizes)| Category {
                name,
                sizes: sizes
                    .0
                    .into_iter()
                    .map(|(label, brackets)| SizeRates {
                        label,
                        brackets: brackets
                            .0
                            .into_iter()
                            .map(|(d, price)| Bracket::new(d, price))
                            .collect(),
                    })
                    .collect(),
            })
            .collect();
        Ok(Self { categories })
    }
}

impl Serialize for SizeRates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.brackets
                .iter()
                .map(|b| (b.descriptor(), b.unit_price())),
        )
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.sizes.iter().map(|s| (s.label.as_str(), s)))
    }
}

impl Serialize for RateTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.categories.iter().map(|c| (c.name.as_str(), c)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pricing/table.rs"]
mod tests;
