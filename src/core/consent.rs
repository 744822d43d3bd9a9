//! Consent wizard shown after choosing to sign in with the login provider
//!
//! Two steps: the provider's login consent, then the service's required
//! agreements. Each step's Next button is enabled only when its required
//! boxes are checked.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentStep {
    Provider,
    Required,
    Complete,
}

/// Required agreements of the second step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredAgreement {
    Age14,
    Terms,
    Privacy,
    Location,
}

impl RequiredAgreement {
    pub const ALL: [RequiredAgreement; 4] = [
        RequiredAgreement::Age14,
        RequiredAgreement::Terms,
        RequiredAgreement::Privacy,
        RequiredAgreement::Location,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RequiredAgreement::Age14 => "만 14세 이상입니다 (필수)",
            RequiredAgreement::Terms => "이용약관 동의 (필수)",
            RequiredAgreement::Privacy => "개인정보 수집·이용 동의 (필수)",
            RequiredAgreement::Location => "위치정보 이용 동의 (필수)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentForm {
    step: ConsentStep,
    agree_all: bool,
    agree_login: bool,
    age14: bool,
    terms: bool,
    privacy: bool,
    location: bool,
}

impl Default for ConsentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsentForm {
    pub fn new() -> Self {
        Self {
            step: ConsentStep::Provider,
            agree_all: false,
            agree_login: false,
            age14: false,
            terms: false,
            privacy: false,
            location: false,
        }
    }

    pub fn step(&self) -> ConsentStep {
        self.step
    }

    pub fn agree_all(&self) -> bool {
        self.agree_all
    }

    pub fn agree_login(&self) -> bool {
        self.agree_login
    }

    /// "Agree to all" sets the login agreement to the same new value
    pub fn toggle_all(&mut self) {
        let next = !self.agree_all;
        self.agree_all = next;
        self.agree_login = next;
    }

    pub fn toggle_login(&mut self) {
        self.agree_login = !self.agree_login;
    }

    pub fn toggle(&mut self, agreement: RequiredAgreement) {
        let flag = match agreement {
            RequiredAgreement::Age14 => &mut self.age14,
            RequiredAgreement::Terms => &mut self.terms,
            RequiredAgreement::Privacy => &mut self.privacy,
            RequiredAgreement::Location => &mut self.location,
        };
        *flag = !*flag;
    }

    pub fn is_checked(&self, agreement: RequiredAgreement) -> bool {
        match agreement {
            RequiredAgreement::Age14 => self.age14,
            RequiredAgreement::Terms => self.terms,
            RequiredAgreement::Privacy => self.privacy,
            RequiredAgreement::Location => self.location,
        }
    }

    pub fn required_ok(&self) -> bool {
        RequiredAgreement::ALL.iter().all(|a| self.is_checked(*a))
    }

    /// Whether the Next button of the current step is enabled
    pub fn can_continue(&self) -> bool {
        match self.step {
            ConsentStep::Provider => self.agree_login,
            ConsentStep::Required => self.required_ok(),
            ConsentStep::Complete => false,
        }
    }

    /// Press Next. Returns true once the whole wizard is complete.
    pub fn next(&mut self) -> bool {
        if !self.can_continue() {
            return false;
        }
        self.step = match self.step {
            ConsentStep::Provider => ConsentStep::Required,
            ConsentStep::Required | ConsentStep::Complete => ConsentStep::Complete,
        };
        self.step == ConsentStep::Complete
    }

    pub fn back(&mut self) {
        if self.step == ConsentStep::Required {
            self.step = ConsentStep::Provider;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_step_requires_login_agreement() {
        let mut form = ConsentForm::new();
        assert!(!form.can_continue());
        assert!(!form.next());
        assert_eq!(form.step(), ConsentStep::Provider);

        form.toggle_all();
        assert!(form.agree_login());
        assert!(!form.next());
        assert_eq!(form.step(), ConsentStep::Required);
    }

    #[test]
    fn test_toggle_all_off_clears_login() {
        let mut form = ConsentForm::new();
        form.toggle_login();
        form.toggle_all();
        form.toggle_all();
        assert!(!form.agree_all());
        assert!(!form.agree_login());
    }

    #[test]
    fn test_required_step_needs_all_four() {
        let mut form = ConsentForm::new();
        form.toggle_login();
        form.next();

        for agreement in &RequiredAgreement::ALL[..3] {
            form.toggle(*agreement);
        }
        assert!(!form.can_continue());
        assert!(!form.next());

        form.toggle(RequiredAgreement::Location);
        assert!(form.next());
        assert_eq!(form.step(), ConsentStep::Complete);
    }

    #[test]
    fn test_back_returns_to_provider_step() {
        let mut form = ConsentForm::new();
        form.toggle_login();
        form.next();
        form.back();
        assert_eq!(form.step(), ConsentStep::Provider);
        assert!(form.agree_login());
    }
}
