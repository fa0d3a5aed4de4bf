//! Status returned by behavior nodes.

use std::fmt;

/// The result of ticking a behavior node once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Not finished.  Tick again next frame; the node keeps its progress.
    Running,

    /// Finished and achieved its goal.
    Success,

    /// Finished without achieving its goal.
    Failure,
}

impl Status {
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// `true` for `Success` or `Failure`.
    #[inline]
    pub fn is_done(self) -> bool {
        !self.is_running()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Running => "running",
            Status::Success => "success",
            Status::Failure => "failure",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
