/// Snapshot of an exam session, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub current: usize,
    pub remaining_secs: u32,
    pub total_secs: u32,
    pub is_terminated: bool,
}
