use std::time::Duration;
use tracing::debug;

use crate::error::Result;
use crate::navigation::{Navigation, Route};
use crate::storage::{records, KeyValueStore, SharedStore};
use crate::timer::CancellableTimer;

/// Home for returning users, Welcome for everyone else
pub async fn resolve_launch_route(store: &dyn KeyValueStore) -> Result<Route> {
    if records::is_onboarding_done(store).await? {
        Ok(Route::Home)
    } else {
        Ok(Route::Welcome)
    }
}

/// Splash screen: waits out the splash delay, then replaces itself with the
/// launch route
pub struct LaunchScreen {
    store: SharedStore,
    splash: CancellableTimer<()>,
}

impl LaunchScreen {
    pub fn start(store: SharedStore, delay: Duration) -> Self {
        Self {
            store,
            splash: CancellableTimer::schedule(delay, ()),
        }
    }

    /// `None` when the splash was cancelled before it elapsed
    pub async fn finish(&mut self) -> Result<Option<Navigation>> {
        if self.splash.fired().await.is_none() {
            debug!("Splash cancelled before launch routing");
            return Ok(None);
        }
        let route = resolve_launch_route(&*self.store).await?;
        debug!("Launching into {}", route);
        Ok(Some(Navigation::Replace(route)))
    }

    pub fn cancel(&mut self) {
        self.splash.cancel();
    }
}

/// The welcome screen's only action
pub fn welcome_start() -> Navigation {
    Navigation::Push(Route::Consent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::timer::SPLASH_DELAY;
    use std::sync::Arc;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_first_launch_goes_to_welcome_after_splash() {
        let start = Instant::now();
        let mut screen = LaunchScreen::start(Arc::new(MemoryStore::new()), SPLASH_DELAY);
        let nav = screen.finish().await.unwrap();
        assert_eq!(nav, Some(Navigation::Replace(Route::Welcome)));
        assert!(start.elapsed() >= SPLASH_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_returning_user_goes_home() {
        let store = MemoryStore::with_entries([(records::ONBOARDING_DONE, "1")]);
        let mut screen = LaunchScreen::start(Arc::new(store), SPLASH_DELAY);
        assert_eq!(
            screen.finish().await.unwrap(),
            Some(Navigation::Replace(Route::Home))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_splash_does_not_navigate() {
        let mut screen = LaunchScreen::start(Arc::new(MemoryStore::new()), SPLASH_DELAY);
        screen.cancel();
        assert_eq!(screen.finish().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_only_exact_done_flag_counts() {
        let store = MemoryStore::with_entries([(records::ONBOARDING_DONE, "true")]);
        assert_eq!(resolve_launch_route(&store).await.unwrap(), Route::Welcome);
        assert_eq!(welcome_start(), Navigation::Push(Route::Consent));
    }
}
