//! The navigation seam.
//!
//! Guard decisions and the session-expiry subscriber both end in "go
//! somewhere"; [`Navigator`] is the trait that somewhere is expressed
//! through, so nothing in this workspace depends on a concrete UI shell.

use crate::guard::GuardDecision;

/// A navigation the application should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// The login entry point, optionally remembering a return path.
    Login {
        /// Path to return to after a successful login.
        redirect: Option<String>,
    },
    /// The home/default route.
    Home,
    /// An arbitrary concrete path.
    Path(String),
}

/// Performs navigations decided elsewhere.
pub trait Navigator: Send + Sync {
    /// Navigate to `target`.
    fn navigate(&self, target: NavigationTarget);
}

/// Apply a guard decision through a navigator.
///
/// Returns `true` if the transition may proceed, `false` if a redirect was
/// issued instead.
pub fn apply(decision: GuardDecision, navigator: &dyn Navigator) -> bool {
    match decision {
        GuardDecision::Allow => true,
        GuardDecision::RedirectToLogin { redirect } => {
            tracing::debug!(redirect = %redirect, "navigation requires login");
            navigator.navigate(NavigationTarget::Login {
                redirect: Some(redirect),
            });
            false
        }
        GuardDecision::RedirectToHome => {
            tracing::debug!("navigation requires admin role");
            navigator.navigate(NavigationTarget::Home);
            false
        }
    }
}

/// Navigator that records every target (for tests).
#[cfg(feature = "test-utils")]
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    targets: std::sync::Mutex<Vec<NavigationTarget>>,
}

#[cfg(feature = "test-utils")]
impl RecordingNavigator {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every target navigated to, in order.
    #[must_use]
    pub fn targets(&self) -> Vec<NavigationTarget> {
        self.targets.lock().map_or_else(|_| Vec::new(), |t| t.clone())
    }
}

#[cfg(feature = "test-utils")]
impl Navigator for RecordingNavigator {
    fn navigate(&self, target: NavigationTarget) {
        if let Ok(mut targets) = self.targets.lock() {
            targets.push(target);
        }
    }
}

#[cfg(all(test, feature = "test-utils"))]
mod tests {
    use super::*;

    #[test]
    fn test_allow_issues_no_navigation() {
        let navigator = RecordingNavigator::new();
        assert!(apply(GuardDecision::Allow, &navigator));
        assert!(navigator.targets().is_empty());
    }

    #[test]
    fn test_login_redirect_preserves_return_path() {
        let navigator = RecordingNavigator::new();
        let decision = GuardDecision::RedirectToLogin {
            redirect: "/orders/7".to_string(),
        };

        assert!(!apply(decision, &navigator));
        assert_eq!(
            navigator.targets(),
            vec![NavigationTarget::Login {
                redirect: Some("/orders/7".to_string())
            }]
        );
    }

    #[test]
    fn test_home_redirect() {
        let navigator = RecordingNavigator::new();
        assert!(!apply(GuardDecision::RedirectToHome, &navigator));
        assert_eq!(navigator.targets(), vec![NavigationTarget::Home]);
    }
}
