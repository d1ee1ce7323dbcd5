use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The two roles the backend knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Employee,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Admin => "admin",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user as reported by `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `id` - Backend identifier
    /// * `name` - User's display name
    /// * `email` - User's email address
    /// * `role` - Role that drives the capability checks
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Payload for `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Registration {
    /// New accounts register as employees.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role: Role::Employee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_uses_lowercase_wire_names() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "name": "Ada",
            "email": "ada@example.com",
            "role": "admin",
        }))
        .unwrap();
        assert!(user.is_admin());
        assert_eq!(Role::Employee.to_string(), "employee");
    }

    #[test]
    fn registration_defaults_to_employee() {
        let registration = Registration::new("Bo", "bo@example.com", "hunter2");
        assert_eq!(
            serde_json::to_value(&registration).unwrap(),
            json!({
                "name": "Bo",
                "email": "bo@example.com",
                "password": "hunter2",
                "role": "employee",
            })
        );
    }
}
