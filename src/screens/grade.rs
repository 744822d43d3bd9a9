use std::time::Duration;

use crate::navigation::{Navigation, Route};
use crate::timer::CancellableTimer;

pub const GRADE_QUESTION: &str = "국민건강공단에 방문하셨나요?";
pub const GRADE_CONFIRMATION: &str = "곧 담당자가 방문할 예정이니 기다려주세요 🙏";

/// Grade application screen. After submission it returns home on its own;
/// dropping the screen cancels the pending navigation.
pub struct GradeScreen {
    delay: Duration,
    redirect: Option<CancellableTimer<Navigation>>,
}

impl GradeScreen {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            redirect: None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.redirect.is_some()
    }

    pub fn message(&self) -> &'static str {
        if self.is_submitted() {
            GRADE_CONFIRMATION
        } else {
            GRADE_QUESTION
        }
    }

    /// Press "submitted". Pressing again keeps the original timer.
    pub fn submit(&mut self) {
        if self.redirect.is_none() {
            self.redirect = Some(CancellableTimer::schedule(
                self.delay,
                Navigation::Replace(Route::Home),
            ));
        }
    }

    /// The automatic navigation, `None` if nothing was submitted or it was cancelled
    pub async fn redirect(&mut self) -> Option<Navigation> {
        self.redirect.as_mut()?.fired().await
    }

    pub fn cancel(&mut self) {
        if let Some(timer) = self.redirect.as_mut() {
            timer.cancel();
        }
    }
}
