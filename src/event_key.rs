use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one mixing partition: the (source event, bunch crossing) pair
/// a vertex or track originated from.
///
/// Kept as a genuine composite so it can be used directly as a map key. Bunch
/// crossings are signed (out-of-time pileup sits at negative crossings) and
/// are not bounded, so packing the pair into a single integer is not
/// collision-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventKey {
    pub event: u64,
    pub bunch_crossing: i32,
}

impl EventKey {
    pub fn new(event: u64, bunch_crossing: i32) -> Self {
        Self {
            event,
            bunch_crossing,
        }
    }

    /// True for the in-time source event (bunch crossing 0); everything else
    /// is pileup.
    pub fn is_signal(&self) -> bool {
        self.bunch_crossing == 0
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event {} bunchx {}", self.event, self.bunch_crossing)
    }
}
