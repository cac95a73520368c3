//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// Every node finishes within the tick that evaluated it, so there is no
/// `Running` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Condition held, or the action was chosen.
    Success,

    /// Condition did not hold, or the action could not be chosen.
    Failure,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Success becomes Failure and vice versa.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }
}

impl From<bool> for Status {
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_bool() {
        assert_eq!(Status::from(true), Status::Success);
        assert!(Status::from(false).is_failure());
        assert_eq!(Status::Success.invert(), Status::Failure);
    }
}
