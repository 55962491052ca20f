//! Route table for the app shell
//!
//! Two paths, one view: both `/` and `/forms` render the contact form.

/// A resolved route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    Root,
    /// `/forms`
    Forms,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Root, Route::Forms];

    /// Resolve a path to a route. A trailing slash is ignored.
    pub fn resolve(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Forms => "/forms",
        }
    }
}
