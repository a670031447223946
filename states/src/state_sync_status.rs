#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSyncStatus {
    /// Registered but never computed.
    #[default]
    BeforeInit,
    /// An input changed since the last run.
    Dirty,
    Clean,
}
