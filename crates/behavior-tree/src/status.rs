//! Status returned by behavior nodes.

/// The result of evaluating a behavior node for one tick.
///
/// # Frame-based Semantics
///
/// A tick is a plain call that runs to completion. Work that spans several
/// frames is expressed by returning [`Status::Running`] and being ticked
/// again on a later frame:
/// - Conditions evaluate immediately (e.g., "Is enemy visible?")
/// - Actions either finish within the tick or report `Running`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action finished without errors.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be performed.
    Failure,

    /// The behavior has not finished and must be ticked again next frame.
    ///
    /// This is the only status an ancestor has to remember in order to
    /// resume where it left off.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` for `Success` and `Failure`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }

    /// Swaps Success and Failure. `Running` is returned unchanged.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}

impl From<bool> for Status {
    /// Maps a predicate result: `true` is `Success`, `false` is `Failure`.
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
