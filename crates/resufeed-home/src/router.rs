//! In-app routes and the auth redirect rule.

/// The three pages of the landing app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    /// The landing page with the resume gallery.
    Home,
    /// Sign-in page, carrying the path to return to afterwards.
    Auth { next: String },
    /// Resume upload page.
    Upload,
}

impl AppRoute {
    /// Path form of the route.
    pub fn path(&self) -> String {
        match self {
            AppRoute::Home => "/".to_string(),
            AppRoute::Auth { next } => format!("/auth?next={next}"),
            AppRoute::Upload => "/upload".to_string(),
        }
    }

    /// Parses a path back into a route.
    pub fn parse(path: &str) -> Option<AppRoute> {
        if path == "/" {
            return Some(AppRoute::Home);
        }
        if path == "/upload" {
            return Some(AppRoute::Upload);
        }
        if let Some(rest) = path.strip_prefix("/auth") {
            let next = rest.strip_prefix("?next=").unwrap_or("/");
            return Some(AppRoute::Auth {
                next: next.to_string(),
            });
        }
        None
    }
}

/// Redirect target for an unauthenticated visitor on `current`, or `None`
/// when already signed in. The return path rides along as `next`.
pub fn auth_redirect(authenticated: bool, current: &AppRoute) -> Option<AppRoute> {
    if authenticated {
        None
    } else {
        Some(AppRoute::Auth {
            next: current.path(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trips() {
        let routes = [
            AppRoute::Home,
            AppRoute::Upload,
            AppRoute::Auth { next: "/".into() },
        ];
        for route in routes {
            assert_eq!(AppRoute::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_parse_auth_with_next() {
        assert_eq!(
            AppRoute::parse("/auth?next=/"),
            Some(AppRoute::Auth { next: "/".into() })
        );
        // Bare /auth falls back to the landing page.
        assert_eq!(
            AppRoute::parse("/auth"),
            Some(AppRoute::Auth { next: "/".into() })
        );
        assert_eq!(AppRoute::parse("/nope"), None);
    }

    #[test]
    fn test_unauthenticated_home_redirects_with_return_path() {
        let redirect = auth_redirect(false, &AppRoute::Home);
        assert_eq!(redirect.as_ref().map(|r| r.path()).as_deref(), Some("/auth?next=/"));
        assert_eq!(auth_redirect(true, &AppRoute::Home), None);
    }
}
