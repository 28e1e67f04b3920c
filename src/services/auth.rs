use std::ops::Deref;
use std::rc::Rc;

use dioxus::prelude::*;

/// Ends the current user session.
pub trait AuthService {
    fn logout(&self);
}

/// Shared handle to an [`AuthService`], comparable by identity.
#[derive(Clone)]
pub struct AuthHandle(Rc<dyn AuthService>);

impl AuthHandle {
    pub fn new(service: impl AuthService + 'static) -> Self {
        Self(Rc::new(service))
    }

    pub fn from_rc(service: Rc<dyn AuthService>) -> Self {
        Self(service)
    }
}

impl Deref for AuthHandle {
    type Target = dyn AuthService;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for AuthHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.0) as *const (),
            Rc::as_ptr(&other.0) as *const (),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: String,
}

/// In-memory session kept in a signal
#[derive(Clone, Copy, PartialEq)]
pub struct SessionAuth {
    session: Signal<Option<Session>>,
}

impl SessionAuth {
    pub fn new(session: Signal<Option<Session>>) -> Self {
        Self { session }
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn sign_in(&mut self, user: impl Into<String>) {
        let user = user.into();
        tracing::info!(%user, "signed in");
        self.session.set(Some(Session { user }));
    }
}

impl AuthService for SessionAuth {
    fn logout(&self) {
        let mut session = self.session;
        let ended = session.write().take();
        match ended {
            Some(ended) => tracing::info!(user = %ended.user, "logged out"),
            None => tracing::warn!("logout requested without an active session"),
        }
    }
}

pub fn use_session_auth(user: &str) -> SessionAuth {
    let session = use_signal(|| {
        Some(Session {
            user: user.to_string(),
        })
    });
    SessionAuth::new(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Counting(Cell<usize>);

    impl AuthService for Counting {
        fn logout(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_handle_forwards_logout() {
        let inner = Rc::new(Counting::default());
        let handle = AuthHandle::from_rc(inner.clone());
        handle.logout();
        handle.clone().logout();
        assert_eq!(inner.0.get(), 2);
    }

    #[test]
    fn test_handles_over_same_service_are_equal() {
        let inner: Rc<dyn AuthService> = Rc::new(Counting::default());
        let a = AuthHandle::from_rc(inner.clone());
        let b = AuthHandle::from_rc(inner);
        assert!(a == b);
        assert!(a != AuthHandle::new(Counting::default()));
    }
}
