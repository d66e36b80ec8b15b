//! Mock account directory and active-user session storage.
//!
//! Authentication here is a simulation: credentials live in the browser's
//! localStorage, seeded with two demo accounts on first boot. Non-WASM targets
//! operate on the in-memory seed so the logic stays testable on the host.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const ACCOUNTS_KEY: &str = "orbitdesk.accounts.v1";
const ACTIVE_USER_KEY: &str = "orbitdesk.user.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: u32,
    pub username: String,
    pub password: String,
    pub avatar: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures surfaced by the login and registration flows.
pub enum LoginError {
    /// Username/password pair did not match a stored account.
    #[error("invalid username or password")]
    InvalidCredentials,
    /// Registration attempted with a username that already exists.
    #[error("username is already taken")]
    UsernameTaken,
    /// Underlying storage read or write failed.
    #[error("account storage failed: {0}")]
    Storage(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDirectory {
    accounts: Vec<UserAccount>,
}

impl Default for AccountDirectory {
    fn default() -> Self {
        Self {
            accounts: vec![
                UserAccount {
                    id: 1,
                    username: "admin".to_string(),
                    password: "password".to_string(),
                    avatar: "A".to_string(),
                },
                UserAccount {
                    id: 2,
                    username: "guest".to_string(),
                    password: "guest".to_string(),
                    avatar: "G".to_string(),
                },
            ],
        }
    }
}

impl AccountDirectory {
    pub fn accounts(&self) -> &[UserAccount] {
        &self.accounts
    }

    /// Verifies a credential pair against the directory.
    pub fn login(&self, username: &str, password: &str) -> Result<UserAccount, LoginError> {
        self.accounts
            .iter()
            .find(|account| account.username == username && account.password == password)
            .cloned()
            .ok_or(LoginError::InvalidCredentials)
    }

    /// Adds a new account. Usernames are unique within the directory.
    pub fn register(&mut self, username: &str, password: &str) -> Result<UserAccount, LoginError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(LoginError::InvalidCredentials);
        }
        if self.accounts.iter().any(|a| a.username == username) {
            return Err(LoginError::UsernameTaken);
        }
        let id = self.accounts.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let account = UserAccount {
            id,
            username: username.to_string(),
            password: password.to_string(),
            avatar: username
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default(),
        };
        self.accounts.push(account.clone());
        Ok(account)
    }
}

/// Loads the account directory, seeding the demo accounts on first boot.
pub fn load_directory() -> AccountDirectory {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            if let Ok(Some(raw)) = storage.get_item(ACCOUNTS_KEY) {
                if let Ok(directory) = serde_json::from_str::<AccountDirectory>(&raw) {
                    return directory;
                }
            }
        }
    }
    AccountDirectory::default()
}

/// Writes the account directory back to storage.
pub fn persist_directory(directory: &AccountDirectory) -> Result<(), LoginError> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage()
            .ok_or_else(|| LoginError::Storage("localStorage unavailable".to_string()))?;
        let raw = serde_json::to_string(directory)
            .map_err(|err| LoginError::Storage(err.to_string()))?;
        storage
            .set_item(ACCOUNTS_KEY, &raw)
            .map_err(|_| LoginError::Storage("localStorage write failed".to_string()))?;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = directory;
    }

    Ok(())
}

/// Restores the signed-in user from a previous session, if any.
pub fn load_active_user() -> Option<UserAccount> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage()?;
        let raw = storage.get_item(ACTIVE_USER_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Persists (or clears, on logout) the active user record.
pub fn persist_active_user(user: Option<&UserAccount>) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let result = match user {
            Some(user) => match serde_json::to_string(user) {
                Ok(raw) => storage.set_item(ACTIVE_USER_KEY, &raw),
                Err(err) => {
                    leptos::logging::warn!("active user serialize failed: {err}");
                    return;
                }
            },
            None => storage.remove_item(ACTIVE_USER_KEY),
        };
        if result.is_err() {
            leptos::logging::warn!("active user persist failed");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = user;
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn seeded_accounts_can_log_in() {
        let directory = AccountDirectory::default();
        let admin = directory.login("admin", "password").expect("admin login");
        assert_eq!(admin.username, "admin");
        let guest = directory.login("guest", "guest").expect("guest login");
        assert_eq!(guest.username, "guest");
    }

    #[test]
    fn wrong_password_is_rejected() {
        let directory = AccountDirectory::default();
        assert_eq!(
            directory.login("admin", "hunter2"),
            Err(LoginError::InvalidCredentials)
        );
        assert_eq!(
            directory.login("nobody", "password"),
            Err(LoginError::InvalidCredentials)
        );
    }

    #[test]
    fn register_then_login_round_trips() {
        let mut directory = AccountDirectory::default();
        let account = directory.register("mara", "s3cret").expect("register");
        assert_eq!(account.avatar, "M");
        assert_eq!(directory.login("mara", "s3cret"), Ok(account));
    }

    #[test]
    fn duplicate_username_is_rejected() {
        let mut directory = AccountDirectory::default();
        assert_eq!(
            directory.register("admin", "whatever"),
            Err(LoginError::UsernameTaken)
        );
    }

    #[test]
    fn empty_credentials_are_rejected() {
        let mut directory = AccountDirectory::default();
        assert_eq!(
            directory.register("  ", "pw"),
            Err(LoginError::InvalidCredentials)
        );
        assert_eq!(
            directory.register("someone", ""),
            Err(LoginError::InvalidCredentials)
        );
    }
}
