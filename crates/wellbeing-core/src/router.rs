//! Path to view resolution.
//!
//! Matching is exact: no case folding, no trailing-slash normalization, no
//! query-string stripping. Anything outside the table is `NotFound`.

use crate::types::ViewDescriptor;

/// Stateless resolver from a location path to a [`ViewDescriptor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewRouter;

impl ViewRouter {
    /// Resolve `path` to exactly one descriptor. Total and pure.
    pub fn resolve(path: &str) -> ViewDescriptor {
        ViewDescriptor::NAVIGABLE
            .into_iter()
            .find(|view| view.path() == Some(path))
            .unwrap_or(ViewDescriptor::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(ViewRouter::resolve("/"), ViewDescriptor::Overview);
        assert_eq!(ViewRouter::resolve("/reports"), ViewDescriptor::Reports);
        assert_eq!(ViewRouter::resolve("/surveys"), ViewDescriptor::Surveys);
        assert_eq!(ViewRouter::resolve("/ai"), ViewDescriptor::AiSupport);
    }

    #[test]
    fn test_empty_path_is_not_found() {
        assert_eq!(ViewRouter::resolve(""), ViewDescriptor::NotFound);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(ViewRouter::resolve("/AI"), ViewDescriptor::NotFound);
        assert_eq!(ViewRouter::resolve("/Reports"), ViewDescriptor::NotFound);
    }

    #[test]
    fn test_no_trailing_slash_normalization() {
        assert_eq!(ViewRouter::resolve("/ai/"), ViewDescriptor::NotFound);
        assert_eq!(ViewRouter::resolve("/surveys/"), ViewDescriptor::NotFound);
        assert_eq!(ViewRouter::resolve("//"), ViewDescriptor::NotFound);
    }

    #[test]
    fn test_unknown_and_malformed_paths() {
        for path in ["/settings", "reports", " /", "/ai?x=1", "/reports#top", "\0", "🧠"] {
            assert_eq!(ViewRouter::resolve(path), ViewDescriptor::NotFound, "{path:?}");
        }
    }

    #[test]
    fn test_every_navigable_view_round_trips_through_its_path() {
        for view in ViewDescriptor::NAVIGABLE {
            let path = view.path().unwrap();
            assert_eq!(ViewRouter::resolve(path), view);
        }
    }
}
