// src/auth/gate.rs

/// Who the session says is making the request. `is_admin` is captured at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i64,
    pub username: String,
    pub is_admin: bool,
}

/// Access level a route requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Session,
    Admin,
}

impl Gate {
    /// `true` if the (possibly anonymous) caller may pass.
    pub fn allows(self, who: Option<&Identity>) -> bool {
        match self {
            Gate::Session => who.is_some(),
            Gate::Admin => who.is_some_and(|w| w.is_admin),
        }
    }
}
