use crate::server::model::user::User;

/// Identity of an authenticated request, produced by the auth guard and passed
/// explicitly into service calls that need gym scoping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuthContext {
    pub user_id: i32,
    pub gym_id: i32,
}

/// A staff account together with its stored password hash, used only during
/// login. The hash never leaves the session service.
#[derive(Debug, Clone)]
pub struct AuthCredentials {
    pub user: User,
    pub password_hash: String,
}
