use std::sync::Arc;
use tracing::debug;

use crate::api::ApiClient;
use crate::domain::Profile;
use crate::error::Result;

pub const MSG_PROFILE_SAVED: &str = "저장되었습니다";

/// Profile settings form
pub struct ProfileScreen {
    api: Arc<ApiClient>,
    form: Profile,
    loaded: bool,
    message: Option<String>,
}

impl ProfileScreen {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            form: Profile::default(),
            loaded: false,
            message: None,
        }
    }

    /// Prefill the form. Signed-out users and server errors leave it blank.
    pub async fn load(&mut self) {
        match self.api.profile().await {
            Ok(profile) => self.form = profile,
            Err(e) => debug!("Profile not loaded: {}", e),
        }
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn form(&self) -> &Profile {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Profile {
        &mut self.form
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Send the form; the outcome is also kept as the status message
    pub async fn save(&mut self) -> Result<()> {
        match self.api.update_profile(&self.form).await {
            Ok(()) => {
                self.message = Some(MSG_PROFILE_SAVED.to_string());
                Ok(())
            }
            Err(e) => {
                self.message = Some(format!("실패: {e}"));
                Err(e)
            }
        }
    }
}
