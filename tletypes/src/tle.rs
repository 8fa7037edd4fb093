use derive_more::Display;

/// Unstructured TLE catalog record
/// https://en.wikipedia.org/wiki/Two-line_element_set
///
/// Only the line-type markers are guaranteed by construction; the interior
/// field columns are validated when the record is decoded.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[display(fmt = "{}", "name")]
pub struct TleRecord {
    /// Object label from the catalog name line, whitespace-trimmed, may be empty
    pub name: String,

    /// First element line, starts with "1 "
    pub line1: String,

    /// Second element line, starts with "2 "
    pub line2: String,
}

impl TleRecord {
    pub fn new<N, L1, L2>(name: N, line1: L1, line2: L2) -> Self
    where
        N: Into<String>,
        L1: Into<String>,
        L2: Into<String>,
    {
        Self {
            name: name.into(),
            line1: line1.into(),
            line2: line2.into(),
        }
    }
}
