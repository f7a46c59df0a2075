use {
    crate::zip_code::ZipCode,
    std::{collections::BTreeSet, fmt},
};

/// Inclusive range of US zip codes.
///
/// Always normalized, `low <= high`. Ranges order by `low`, then by `high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZipRange {
    low: ZipCode,
    high: ZipCode,
}

impl ZipRange {
    /// Creates the range from the lowest to the highest of the given codes.
    pub fn new(a: ZipCode, b: ZipCode) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn low(&self) -> ZipCode {
        self.low
    }

    pub fn high(&self) -> ZipCode {
        self.high
    }

    pub fn contains(&self, code: ZipCode) -> bool {
        self.low <= code && code <= self.high
    }

    /// Number of zip codes covered. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u32 {
        self.high.value() - self.low.value() + 1
    }

    /// Whether the two ranges intersect or one immediately follows the other.
    ///
    /// `[00000,12345]` is followed by `[12346,23456]`, and `[00000,12345]`
    /// intersects `[00500,23456]`.
    pub fn mergeable(a: &ZipRange, b: &ZipRange) -> bool {
        !(a.low > b.high.next() || a.high < b.low.previous())
    }

    /// Smallest range containing both of the given ranges.
    pub fn enclosing(a: &ZipRange, b: &ZipRange) -> ZipRange {
        let enclosed = ZipRange::new(a.low.min(b.low), a.high.max(b.high));
        log::debug!("{} <-- {} + {}", enclosed, a, b);
        enclosed
    }

    /// Combines all ranges that are [mergeable](ZipRange::mergeable).
    ///
    /// The returned set covers exactly the same zip codes as the input, and no
    /// two of its ranges intersect or are adjacent.
    pub fn consolidate<I>(ranges: I) -> BTreeSet<ZipRange>
    where
        I: IntoIterator<Item = ZipRange>,
    {
        let sorted = ranges.into_iter().collect::<BTreeSet<_>>();
        let mut consolidated = BTreeSet::new();

        let mut sorted = sorted.into_iter();
        if let Some(mut merged) = sorted.next() {
            for range in sorted {
                if Self::mergeable(&merged, &range) {
                    merged = Self::enclosing(&merged, &range);
                } else {
                    consolidated.insert(merged);
                    merged = range;
                }
            }
            consolidated.insert(merged);
        }

        log::debug!("Consolidated ranges: {}", print_ranges(&consolidated));
        consolidated
    }
}

impl fmt::Display for ZipRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.low, self.high)
    }
}

/// Space delimited list of ranges, e.g. `[00001,00030] [00040,00055]`.
pub fn print_ranges<'a, I>(ranges: I) -> String
where
    I: IntoIterator<Item = &'a ZipRange>,
{
    ranges
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
