//! Static route table shared by every shell.

/// Pages the shell can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
}

impl Route {
    /// Resolve a location path to the page it mounts.
    ///
    /// Query string and fragment are ignored. Unknown paths resolve to `None`
    /// and the shell renders its not-found page.
    #[must_use]
    pub fn resolve(location: &str) -> Option<Self> {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        match path {
            "" | "/" => Some(Self::Home),
            _ => None,
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
        }
    }
}

/// One entry of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

impl NavLink {
    #[must_use]
    pub fn href(self) -> &'static str {
        self.route.path()
    }
}

/// Navigation bar contents, in display order.
pub const NAV_LINKS: &[NavLink] = &[NavLink {
    label: "Home",
    route: Route::Home,
}];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_link_home_to_root() {
        assert_eq!(NAV_LINKS.len(), 1);
        assert_eq!(NAV_LINKS[0].label, "Home");
        assert_eq!(NAV_LINKS[0].href(), "/");
    }

    #[test]
    fn should_resolve_every_nav_link_to_its_route() {
        for link in NAV_LINKS {
            assert_eq!(Route::resolve(link.href()), Some(link.route));
        }
    }

    #[test]
    fn should_resolve_root_ignoring_query_and_fragment() {
        assert_eq!(Route::resolve("/"), Some(Route::Home));
        assert_eq!(Route::resolve(""), Some(Route::Home));
        assert_eq!(Route::resolve("/?ref=nav"), Some(Route::Home));
        assert_eq!(Route::resolve("/#top"), Some(Route::Home));
    }

    #[test]
    fn should_not_resolve_unknown_paths() {
        assert_eq!(Route::resolve("/api/"), None);
        assert_eq!(Route::resolve("/home"), None);
        assert_eq!(Route::resolve("//"), None);
    }
}
