//! Authentication request DTOs

use serde::Deserialize;

/// Query parameters GitHub sends to the OAuth redirect target
///
/// `code` is absent when the user cancelled or GitHub reported an error;
/// `next` is where the user originally wanted to go.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub next: Option<String>,
}

impl CallbackQuery {
    /// Post-login redirect target, restricted to site-local paths
    pub fn next_url(&self) -> &str {
        match self.next.as_deref() {
            Some(next) if next.starts_with('/') && !next.starts_with("//") => next,
            _ => "/",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(next: Option<&str>) -> CallbackQuery {
        CallbackQuery {
            code: None,
            next: next.map(String::from),
        }
    }

    #[test]
    fn test_next_url_defaults_to_root() {
        assert_eq!(query(None).next_url(), "/");
        assert_eq!(query(Some("")).next_url(), "/");
    }

    #[test]
    fn test_next_url_accepts_local_paths() {
        assert_eq!(query(Some("/problems")).next_url(), "/problems");
        assert_eq!(query(Some("/problem?problem_id=1")).next_url(), "/problem?problem_id=1");
    }

    #[test]
    fn test_next_url_rejects_external_targets() {
        assert_eq!(query(Some("https://evil.example")).next_url(), "/");
        assert_eq!(query(Some("//evil.example")).next_url(), "/");
    }
}
