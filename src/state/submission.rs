//! Submission outcome state

/// Where the current lead submission attempt stands.
///
/// Transitions are linear per attempt: any non-submitting state may start a
/// new attempt, which runs `Submitting` to either `Succeeded` or `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Whether a submission is currently in flight
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// User-facing outcome message, if one applies
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Idle | Self::Submitting => None,
            Self::Succeeded => Some("전자책이 곧 이메일로 발송됩니다. 감사합니다!"),
            Self::Failed => Some("오류가 발생했습니다. 다시 시도해주세요."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
    }

    #[test]
    fn test_is_submitting() {
        assert!(SubmissionState::Submitting.is_submitting());
        assert!(!SubmissionState::Idle.is_submitting());
        assert!(!SubmissionState::Succeeded.is_submitting());
        assert!(!SubmissionState::Failed.is_submitting());
    }

    #[test]
    fn test_messages() {
        assert!(SubmissionState::Idle.message().is_none());
        assert!(SubmissionState::Submitting.message().is_none());
        assert!(SubmissionState::Succeeded
            .message()
            .unwrap()
            .contains("감사합니다"));
        assert!(SubmissionState::Failed
            .message()
            .unwrap()
            .contains("다시 시도"));
    }
}
