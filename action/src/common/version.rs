//! Protocol versioning.

/// Version tag carried by every envelope header.
pub type ProtocolVersion = u32;

/// Protocol version stamped into newly constructed envelopes.
pub const PROTOCOL_VERSION: ProtocolVersion = 1;

/// Checks whether an envelope version can be handled by this implementation.
pub fn is_supported(version: ProtocolVersion) -> bool {
    version == PROTOCOL_VERSION
}
