//! The shot token passed between player actors.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// What kind of shot the source player made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotKind {
    /// Opening shot injected by the coordinator on behalf of the server.
    Serve,
    /// A regular shot.
    Shoot,
    /// A missed shot. The receiver charges a point to the source.
    Miss,
}

/// A single hop of the token: who shot, and how.
///
/// Created per hop and consumed by the receiving actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shot {
    pub source: PlayerId,
    pub kind: ShotKind,
}

impl Shot {
    #[must_use]
    pub const fn new(source: PlayerId, kind: ShotKind) -> Self {
        Self { source, kind }
    }

    #[must_use]
    pub const fn serve(server: PlayerId) -> Self {
        Self::new(server, ShotKind::Serve)
    }

    #[must_use]
    pub fn is_miss(&self) -> bool {
        self.kind == ShotKind::Miss
    }
}
