pub use crate::body::ReferenceBody;
pub use crate::elements::MeanElements;
pub use crate::time::UtcTimestamp;
pub use crate::tle::TleRecord;
