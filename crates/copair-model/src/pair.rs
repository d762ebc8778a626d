use serde::{Deserialize, Serialize};

/// An unordered pair of drug names.
///
/// The constructor stores the lexicographically smaller name first, so the
/// derived equality, ordering, and hashing are symmetric in construction
/// order: `DrugPair::new("A", "B") == DrugPair::new("B", "A")`.
///
/// Two equal names are representable (a degenerate pair) and reported by
/// [`is_degenerate`](DrugPair::is_degenerate); the type does not reject
/// them. The pipeline never produces one: instance drug sets hold distinct
/// names and the enumerator only combines different elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DrugPair {
    first: String,
    second: String,
}

impl DrugPair {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let a = a.into();
        let b = b.into();
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    /// The two member names, smaller first.
    pub fn drugs(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }

    /// True when both members are the same name.
    pub fn is_degenerate(&self) -> bool {
        self.first == self.second
    }
}
