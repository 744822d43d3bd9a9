//! Route identifiers and navigation requests produced by screen controllers
//!
//! Screens never touch a platform router. They return a [`Navigation`] and
//! the shell (the CLI here, a UI elsewhere) carries it out.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Splash,
    Welcome,
    Consent,
    Onboarding,
    Home,
    Facilities,
    Search,
    Profile,
    FacilityDetail(String),
    Calculator(String),
    Filters,
    Grade,
    Login,
}

impl Route {
    /// Routes shown as tabs
    pub const TABS: [Route; 4] = [Route::Home, Route::Facilities, Route::Search, Route::Profile];

    pub fn path(&self) -> String {
        match self {
            Route::Splash => "/".to_string(),
            Route::Welcome => "/welcome".to_string(),
            Route::Consent => "/consent".to_string(),
            Route::Onboarding => "/onboarding".to_string(),
            Route::Home => "/home".to_string(),
            Route::Facilities => "/facilities".to_string(),
            Route::Search => "/search".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::FacilityDetail(id) => format!("/facility/{id}"),
            Route::Calculator(id) => format!("/calculator/{id}"),
            Route::Filters => "/filters".to_string(),
            Route::Grade => "/grade".to_string(),
            Route::Login => "/login".to_string(),
        }
    }

    pub fn is_tab(&self) -> bool {
        Self::TABS.contains(self)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|seg| !seg.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::Splash,
            ["welcome"] => Route::Welcome,
            ["consent"] => Route::Consent,
            ["onboarding"] => Route::Onboarding,
            ["home"] => Route::Home,
            ["facilities"] => Route::Facilities,
            ["search"] => Route::Search,
            ["profile"] => Route::Profile,
            ["facility", id] => Route::FacilityDetail((*id).to_string()),
            ["calculator", id] => Route::Calculator((*id).to_string()),
            ["filters"] => Route::Filters,
            ["grade"] => Route::Grade,
            ["login"] => Route::Login,
            _ => return Err(format!("unknown route: {s:?}")),
        };
        Ok(route)
    }
}

/// What a screen asks the shell to do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Push a route on top of the current one
    Push(Route),
    /// Replace the current route, used for the launch and onboarding hand-offs
    Replace(Route),
    Back,
    /// Open an external page in the browser
    OpenUrl(String),
}

/// Rejected credentials send the user to the login screen
pub fn redirect_for_error(error: &Error) -> Option<Navigation> {
    error
        .requires_login()
        .then_some(Navigation::Replace(Route::Login))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_redirects_to_login() {
        let expired = Error::Unauthorized("expired".to_string());
        assert_eq!(redirect_for_error(&expired), Some(Navigation::Replace(Route::Login)));
        assert_eq!(redirect_for_error(&Error::Network("down".to_string())), None);
    }

    #[test]
    fn test_paths_parse_back_to_routes() {
        let routes = [
            Route::Splash,
            Route::Welcome,
            Route::Consent,
            Route::Onboarding,
            Route::Home,
            Route::Search,
            Route::FacilityDetail("12".to_string()),
            Route::Calculator("3".to_string()),
            Route::Filters,
            Route::Grade,
            Route::Login,
        ];
        for route in routes {
            assert_eq!(route.path().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn test_unknown_routes_are_rejected() {
        assert!("/facility".parse::<Route>().is_err());
        assert!("/settings".parse::<Route>().is_err());
        assert_eq!("home/".parse::<Route>(), Ok(Route::Home));
    }

    #[test]
    fn test_tabs() {
        assert!(Route::Search.is_tab());
        assert!(!Route::Filters.is_tab());
    }
}
