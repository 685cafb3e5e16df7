use crate::JobRecord;

/// Ordered in-memory collection of job records for one session.
///
/// Positions are plain indices: removing a record shifts every later record
/// down by one and nothing holding an old position is told about it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobStore {
    records: Vec<JobRecord>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<JobRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&JobRecord> {
        self.records.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut JobRecord> {
        self.records.get_mut(index)
    }

    /// Appends a record and returns its position.
    pub fn push(&mut self, record: JobRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Removes the record at `index`, or returns `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<JobRecord> {
        (index < self.records.len()).then(|| self.records.remove(index))
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &JobRecord> {
        self.records.iter()
    }
}
