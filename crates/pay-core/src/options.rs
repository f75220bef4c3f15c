//! # Option Center
//!
//! Menu options offered to each kind of user. Held as explicit state by
//! the caller (see `pay-api`'s `AppState`).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PaymentError;

/// Kind of user driving the booth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    Member,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Member => "member",
            Role::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guest" => Ok(Role::Guest),
            "member" => Ok(Role::Member),
            "admin" => Ok(Role::Admin),
            other => Err(PaymentError::InvalidRequest(format!("Unknown role: {}", other))),
        }
    }
}

/// A selectable menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuOption {
    Exit,
    Register,
    Login,
    ListMovies,
    PersonalProfile,
    Logout,
    ListMoviesAdmin,
    ListAllUsers,
    SearchUser,
    AddUser,
    DeleteUser,
}

impl MenuOption {
    /// Label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Exit => "Exit",
            MenuOption::Register => "Register",
            MenuOption::Login => "Login",
            MenuOption::ListMovies => "List Movies",
            MenuOption::PersonalProfile => "Personal Profile",
            MenuOption::Logout => "Logout",
            MenuOption::ListMoviesAdmin => "List Movies (Admin)",
            MenuOption::ListAllUsers => "List All Users",
            MenuOption::SearchUser => "Search User",
            MenuOption::AddUser => "Add User",
            MenuOption::DeleteUser => "Delete User",
        }
    }
}

/// Per-role option lists. Index 0 is always `Exit`.
#[derive(Debug, Clone)]
pub struct OptionCenter {
    guest: Vec<MenuOption>,
    member: Vec<MenuOption>,
    admin: Vec<MenuOption>,
}

impl OptionCenter {
    pub fn new() -> Self {
        use MenuOption::*;

        Self {
            guest: vec![Exit, Register, Login, ListMovies],
            member: vec![Exit, ListMovies, PersonalProfile, Logout],
            admin: vec![
                Exit,
                PersonalProfile,
                Logout,
                ListMoviesAdmin,
                ListAllUsers,
                SearchUser,
                AddUser,
                DeleteUser,
            ],
        }
    }

    /// Options available to `role`, in menu order
    pub fn options_for(&self, role: Role) -> &[MenuOption] {
        match role {
            Role::Guest => &self.guest,
            Role::Member => &self.member,
            Role::Admin => &self.admin,
        }
    }

    /// Look up the option at a menu index
    pub fn select(&self, role: Role, index: usize) -> Option<MenuOption> {
        self.options_for(role).get(index).copied()
    }
}

impl Default for OptionCenter {
    fn default() -> Self {
        Self::new()
    }
}
