use std::fmt;

/// Parsed quantity bracket descriptor.
///
/// Rate tables in the wild use two vocabularies (`"10-15"`, `"16-40"`, `"1000+"` and
/// `"<15"`, `"15-40"`, `"1000+"`), so all three forms are accepted side by side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BracketRange {
    /// `"min-max"`: `min <= q <= max`.
    Inclusive {
        /// Lower bound, inclusive.
        min: i64,
        /// Upper bound, inclusive.
        max: i64,
    },
    /// `"min+"`: `q >= min`.
    AtLeast {
        /// Lower bound, inclusive.
        min: i64,
    },
    /// `"<max"`: `q < max`.
    Below {
        /// Upper bound, exclusive.
        max: i64,
    },
}

impl BracketRange {
    /// Parse a descriptor. Returns `None` for anything that is not one of the three forms.
    pub fn parse(descriptor: &str) -> Option<Self> {
        let d = descriptor.trim();
        if let Some(rest) = d.strip_prefix('<') {
            return parse_bound(rest).map(|max| Self::Below { max });
        }
        if let Some(rest) = d.strip_suffix('+') {
            return parse_bound(rest).map(|min| Self::AtLeast { min });
        }
        // Split on the first '-' after the leading character so "-5-3" still reads as (-5, 3).
        let split_at = d
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(i, _)| i)?;
        let min = parse_bound(&d[..split_at])?;
        let max = parse_bound(&d[split_at + 1..])?;
        Some(Self::Inclusive { min, max })
    }

    /// Whether `quantity` falls in this bracket.
    pub fn contains(self, quantity: i64) -> bool {
        match self {
            Self::Inclusive { min, max } => min <= quantity && quantity <= max,
            Self::AtLeast { min } => quantity >= min,
            Self::Below { max } => quantity < max,
        }
    }
}

impl fmt::Display for BracketRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inclusive { min, max } => write!(f, "{min}-{max}"),
            Self::AtLeast { min } => write!(f, "{min}+"),
            Self::Below { max } => write!(f, "<{max}"),
        }
    }
}

fn parse_bound(s: &str) -> Option<i64> {
    s.trim().parse::<i64>().ok()
}

/// One rate-table entry: the descriptor as written plus its unit price.
///
/// The raw descriptor is kept even when it does not parse so that table order and
/// round-tripping stay faithful to the source data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bracket {
    descriptor: String,
    range: Option<BracketRange>,
    unit_price: u64,
}

impl Bracket {
    /// Build a bracket from a descriptor string and unit price.
    pub fn new(descriptor: impl Into<String>, unit_price: u64) -> Self {
        let descriptor = descriptor.into();
        let range = BracketRange::parse(&descriptor);
        Self {
            descriptor,
            range,
            unit_price,
        }
    }

    /// Descriptor exactly as it appeared in the table.
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// Parsed range, or `None` for a malformed descriptor.
    pub fn range(&self) -> Option<BracketRange> {
        self.range
    }

    /// Unit price in integer currency units.
    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// Malformed descriptors never match.
    pub fn matches(&self, quantity: i64) -> bool {
        self.range.is_some_and(|r| r.contains(quantity))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pricing/bracket.rs"]
mod tests;
