use std::ops::AddAssign;

/// Row accounting of a single ingestion pass.
///
/// Every row that is read ends up either joined or skipped, so
/// `joined + skipped() == read` holds once the input is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub read: u64,
    pub joined: u64,
    pub skipped_malformed: u64,
    pub skipped_invalid_coordinates: u64,
}

impl IngestStats {
    pub fn skipped(&self) -> u64 {
        self.skipped_malformed + self.skipped_invalid_coordinates
    }
}

impl AddAssign for IngestStats {
    fn add_assign(&mut self, rhs: Self) {
        self.read += rhs.read;
        self.joined += rhs.joined;
        self.skipped_malformed += rhs.skipped_malformed;
        self.skipped_invalid_coordinates += rhs.skipped_invalid_coordinates;
    }
}
