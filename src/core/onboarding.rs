//! Onboarding wizard state machine
//!
//! ```text
//! AskGrade --yes--> AskServiceType --choose--> Done
//!    |                 |      ^
//!    |               unsure   understood
//!    |                 v      |
//!    |              AskServiceTypeHelp
//!    +--no--> AskVisitCenter --start exploring--> Done
//! ```
//!
//! Every step offers a fixed set of buttons, so there are no validation
//! failures: an input without a button in the current step is ignored.

use serde::{Deserialize, Serialize};

use crate::domain::ServiceType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnboardingStep {
    /// "Have you received a long-term-care grade?"
    AskGrade,
    /// Grade holder picks the kind of care
    AskServiceType,
    /// Explanation of the two kinds of care
    AskServiceTypeHelp,
    /// No grade yet: advice to apply at the insurance office
    AskVisitCenter,
    Done,
}

impl OnboardingStep {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OnboardingStep::Done)
    }

    /// Whether the step shows a back button
    pub fn can_go_back(&self) -> bool {
        matches!(
            self,
            OnboardingStep::AskServiceType
                | OnboardingStep::AskServiceTypeHelp
                | OnboardingStep::AskVisitCenter
        )
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            OnboardingStep::AskGrade => "장기 요양등급을 받으셨나요?",
            OnboardingStep::AskServiceType => "어떤 돌봄 서비스를 찾으세요?",
            OnboardingStep::AskServiceTypeHelp => "시설급여 vs 재가급여",
            OnboardingStep::AskVisitCenter => {
                "가까운 국민건강보험공단에 방문해 등급 신청을 진행해 주세요"
            }
            OnboardingStep::Done => "",
        }
    }

    /// Buttons offered by the step, back button excluded
    pub fn inputs(&self) -> Vec<OnboardingInput> {
        match self {
            OnboardingStep::AskGrade => vec![OnboardingInput::Yes, OnboardingInput::No],
            OnboardingStep::AskServiceType => vec![
                OnboardingInput::Choose(ServiceType::FacilityBased),
                OnboardingInput::Choose(ServiceType::HomeBased),
                OnboardingInput::Unsure,
            ],
            OnboardingStep::AskServiceTypeHelp => vec![OnboardingInput::Understood],
            OnboardingStep::AskVisitCenter => vec![OnboardingInput::StartExploring],
            OnboardingStep::Done => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingInput {
    Yes,
    No,
    Choose(ServiceType),
    Unsure,
    Understood,
    StartExploring,
    Back,
}

impl OnboardingInput {
    pub fn label(&self) -> &'static str {
        match self {
            OnboardingInput::Yes => "네",
            OnboardingInput::No => "아니요",
            OnboardingInput::Choose(kind) => kind.as_str(),
            OnboardingInput::Unsure => "모르겠어요",
            OnboardingInput::Understood => "이해했어요, 선택하러 가기",
            OnboardingInput::StartExploring => "시설 탐색 시작하기",
            OnboardingInput::Back => "이전",
        }
    }
}

/// Answers collected by a finished wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingOutcome {
    pub has_grade: bool,
    /// Unset on the no-grade path; downstream screens always treat it as optional
    pub service_type: Option<ServiceType>,
}

/// Pure: the transition table
pub fn next_step(step: OnboardingStep, input: OnboardingInput) -> OnboardingStep {
    use OnboardingInput as I;
    use OnboardingStep as S;

    match (step, input) {
        (S::AskGrade, I::Yes) => S::AskServiceType,
        (S::AskGrade, I::No) => S::AskVisitCenter,
        (S::AskServiceType, I::Choose(_)) => S::Done,
        (S::AskServiceType, I::Unsure) => S::AskServiceTypeHelp,
        (S::AskServiceTypeHelp, I::Understood) => S::AskServiceType,
        (S::AskVisitCenter, I::StartExploring) => S::Done,
        (S::AskServiceType | S::AskVisitCenter, I::Back) => S::AskGrade,
        (S::AskServiceTypeHelp, I::Back) => S::AskServiceType,
        (current, _) => current,
    }
}

/// Wizard state: the current step plus the answers given so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingWizard {
    step: OnboardingStep,
    has_grade: Option<bool>,
    service_type: Option<ServiceType>,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::AskGrade,
            has_grade: None,
            service_type: None,
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    /// Apply one button press. Returns the outcome exactly once, on the
    /// transition into `Done`; later input is ignored.
    pub fn apply(&mut self, input: OnboardingInput) -> Option<OnboardingOutcome> {
        if self.step.is_terminal() {
            return None;
        }

        let next = next_step(self.step, input);
        if next == self.step {
            return None;
        }

        match (self.step, input) {
            (OnboardingStep::AskGrade, OnboardingInput::Yes) => self.has_grade = Some(true),
            (OnboardingStep::AskGrade, OnboardingInput::No) => self.has_grade = Some(false),
            (OnboardingStep::AskServiceType, OnboardingInput::Choose(kind)) => {
                self.service_type = Some(kind)
            }
            _ => {}
        }

        self.step = next;
        next.is_terminal().then(|| OnboardingOutcome {
            has_grade: self.has_grade.unwrap_or(false),
            service_type: self.service_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OnboardingInput as I;
    use OnboardingStep as S;

    #[test]
    fn test_transition_table() {
        assert_eq!(next_step(S::AskGrade, I::Yes), S::AskServiceType);
        assert_eq!(next_step(S::AskGrade, I::No), S::AskVisitCenter);
        assert_eq!(next_step(S::AskServiceType, I::Choose(ServiceType::HomeBased)), S::Done);
        assert_eq!(next_step(S::AskServiceType, I::Unsure), S::AskServiceTypeHelp);
        assert_eq!(next_step(S::AskServiceTypeHelp, I::Understood), S::AskServiceType);
        assert_eq!(next_step(S::AskVisitCenter, I::StartExploring), S::Done);
    }

    #[test]
    fn test_back_rules() {
        assert_eq!(next_step(S::AskServiceType, I::Back), S::AskGrade);
        assert_eq!(next_step(S::AskVisitCenter, I::Back), S::AskGrade);
        assert_eq!(next_step(S::AskServiceTypeHelp, I::Back), S::AskServiceType);
        assert_eq!(next_step(S::AskGrade, I::Back), S::AskGrade);
    }

    #[test]
    fn test_inputs_without_a_button_are_ignored() {
        assert_eq!(next_step(S::AskGrade, I::StartExploring), S::AskGrade);
        assert_eq!(next_step(S::AskVisitCenter, I::Choose(ServiceType::HomeBased)), S::AskVisitCenter);
        assert_eq!(next_step(S::Done, I::Back), S::Done);
    }

    #[test]
    fn test_grade_holder_path() {
        let mut wizard = OnboardingWizard::new();
        assert_eq!(wizard.apply(I::Yes), None);
        assert_eq!(wizard.apply(I::Unsure), None);
        assert_eq!(wizard.step(), S::AskServiceTypeHelp);
        assert_eq!(wizard.apply(I::Understood), None);

        let outcome = wizard.apply(I::Choose(ServiceType::FacilityBased));
        assert_eq!(
            outcome,
            Some(OnboardingOutcome {
                has_grade: true,
                service_type: Some(ServiceType::FacilityBased),
            })
        );
        assert!(wizard.step().is_terminal());
        assert_eq!(wizard.apply(I::Back), None);
        assert_eq!(wizard.step(), S::Done);
    }

    #[test]
    fn test_no_grade_path() {
        let mut wizard = OnboardingWizard::new();
        wizard.apply(I::No);
        assert_eq!(wizard.step(), S::AskVisitCenter);
        assert_eq!(
            wizard.apply(I::StartExploring),
            Some(OnboardingOutcome {
                has_grade: false,
                service_type: None,
            })
        );
    }

    #[test]
    fn test_changing_answer_after_back() {
        let mut wizard = OnboardingWizard::new();
        wizard.apply(I::No);
        wizard.apply(I::Back);
        wizard.apply(I::Yes);
        let outcome = wizard.apply(I::Choose(ServiceType::HomeBased)).unwrap();
        assert!(outcome.has_grade);
        assert_eq!(outcome.service_type, Some(ServiceType::HomeBased));
    }

    #[test]
    fn test_step_buttons() {
        assert!(!S::AskGrade.can_go_back());
        assert!(S::AskServiceTypeHelp.can_go_back());
        assert_eq!(S::AskServiceType.inputs().len(), 3);
        assert!(S::Done.inputs().is_empty());
    }
}
