//! Registration steps.
//!
//! A form shows one of three field groups at a time. `Next` and `Back`
//! move by one step and saturate at either end.

/// Visible field group of a registration form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    #[default]
    BasicInfo,
    Details,
    MediaAndSubmit,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::BasicInfo, Step::Details, Step::MediaAndSubmit];

    /// 1-based position, as shown in the step indicator.
    pub fn number(&self) -> u8 {
        match self {
            Step::BasicInfo => 1,
            Step::Details => 2,
            Step::MediaAndSubmit => 3,
        }
    }

    pub fn next(self) -> Step {
        match self {
            Step::BasicInfo => Step::Details,
            Step::Details | Step::MediaAndSubmit => Step::MediaAndSubmit,
        }
    }

    pub fn back(self) -> Step {
        match self {
            Step::BasicInfo | Step::Details => Step::BasicInfo,
            Step::MediaAndSubmit => Step::Details,
        }
    }

    pub fn is_first(&self) -> bool {
        *self == Step::BasicInfo
    }

    pub fn is_last(&self) -> bool {
        *self == Step::MediaAndSubmit
    }

    /// Whether the indicator segment for `other` is lit while on this step.
    pub fn has_reached(&self, other: Step) -> bool {
        *self >= other
    }
}

/// Whether `Next` requires the current step's fields to be valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdvancePolicy {
    /// Always advance; everything is validated on submit.
    #[default]
    Ungated,
    /// Validate the visible step and stay on it if anything fails.
    ValidateCurrentStep,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_back() {
        assert_eq!(Step::BasicInfo.next(), Step::Details);
        assert_eq!(Step::Details.next(), Step::MediaAndSubmit);
        assert_eq!(Step::MediaAndSubmit.back(), Step::Details);
        assert_eq!(Step::Details.back(), Step::BasicInfo);
    }

    #[test]
    fn test_saturates_at_ends() {
        assert_eq!(Step::MediaAndSubmit.next(), Step::MediaAndSubmit);
        assert_eq!(Step::BasicInfo.back(), Step::BasicInfo);
    }

    #[test]
    fn test_indicator() {
        let step = Step::Details;
        let lit: Vec<u8> = Step::ALL
            .iter()
            .filter(|s| step.has_reached(**s))
            .map(Step::number)
            .collect();
        assert_eq!(lit, [1, 2]);
    }
}
