use serde::{Deserialize, Serialize};

use crate::domain::location::{Coordinates, Draft, Permission};

/// Why a position fetch was started; decides what happens with the result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchPurpose {
    CenterOnUser,
    /// Draft snapshot taken when Save was tapped
    SaveDraft(Draft),
}

/// Results coming back from the location provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocationMsg {
    PermissionResolved(Permission),
    PositionFetched {
        purpose: FetchPurpose,
        coordinates: Coordinates,
        /// Wall clock at fix time, in milliseconds since the Unix epoch
        timestamp_ms: u64,
    },
    PositionFailed {
        purpose: FetchPurpose,
        reason: String,
    },
}
