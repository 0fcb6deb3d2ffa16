//! Route table — the app's pages and the login guard.

use crate::shared::CoinId;
use std::fmt;

/// A page of the app.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Welcome,
    /// `/cryptos`
    Cryptos,
    /// `/cryptos/{id}`
    Crypto(CoinId),
    /// `/news`
    News,
    /// `/login`, signed-out users only.
    Login,
}

/// Result of resolving a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(Route),
}

impl Route {
    /// Parses a path. Query strings, fragments and trailing slashes are
    /// ignored. `None` for anything not in the table.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Route::Welcome),
            ["cryptos"] => Some(Route::Cryptos),
            ["cryptos", id] => {
                let id = urlencoding::decode(id).ok()?;
                let id = CoinId::new(id.into_owned());
                (!id.is_empty()).then_some(Route::Crypto(id))
            }
            ["news"] => Some(Route::News),
            ["login"] => Some(Route::Login),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Welcome => "/".to_string(),
            Route::Cryptos => "/cryptos".to_string(),
            Route::Crypto(id) => format!("/cryptos/{}", urlencoding::encode(id.as_str())),
            Route::News => "/news".to_string(),
            Route::Login => "/login".to_string(),
        }
    }

    /// Whether the route may be shown to a signed-in user.
    pub fn allows_authenticated(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Resolves a location to the page to render or the page to redirect to.
///
/// Unknown paths redirect to the welcome page. A signed-in user visiting
/// the login page is redirected to the crypto list.
pub fn resolve(path: &str, authenticated: bool) -> Resolution {
    match Route::parse(path) {
        None => {
            tracing::debug!(path, "Unknown route, redirecting");
            Resolution::Redirect(Route::Welcome)
        }
        Some(route) if authenticated && !route.allows_authenticated() => {
            Resolution::Redirect(Route::Cryptos)
        }
        Some(route) => Resolution::Render(route),
    }
}
