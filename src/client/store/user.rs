use crate::model::user::UserDto;

/// The logged in user, shared through context as a `Signal<UserState>`.
#[derive(Clone, Default)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Set once `/api/auth/user` has answered, whatever the answer was.
    pub fetched: bool,
}

impl UserState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.admin)
    }
}
