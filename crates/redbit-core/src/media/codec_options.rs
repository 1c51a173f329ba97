/// Codec configuration for hiding a message
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct CodecOptions {
    /// What happens when the message needs more pixels than the carrier has.
    pub capacity_policy: CapacityPolicy,
}

impl CodecOptions {
    pub fn with_capacity_policy(mut self, capacity_policy: CapacityPolicy) -> Self {
        self.capacity_policy = capacity_policy;
        self
    }
}

/// Capacity strategy for messages that do not fit into a carrier
#[derive(Debug, Default, Clone, Copy, Ord, PartialOrd, Eq, PartialEq)]
pub enum CapacityPolicy {
    /// Fail with [`SteganoError::CapacityExceeded`][crate::SteganoError::CapacityExceeded]
    /// before any pixel is touched.
    #[default]
    Reject,
    /// Hide as many bits as there are pixels and drop the rest.
    /// The terminator gets lost, so the message cannot be unveiled afterwards.
    Truncate,
}
