use crate::model::user::UserDto;

/// Shared login state, provided at the app root.
#[derive(Clone, Default)]
pub struct UserState {
    /// The logged in user, None when logged out.
    pub user: Option<UserDto>,
    /// Whether the initial fetch has resolved.
    pub fetched: bool,
}

impl UserState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}
