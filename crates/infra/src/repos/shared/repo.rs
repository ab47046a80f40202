#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateResult {
    pub updated_count: u64,
}
