use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Driver,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Driver => "DRIVER",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::User => "Passenger",
            Role::Driver => "Driver",
        }
    }

    /// Parses the value of a role `<select>`; anything unknown is a passenger.
    pub fn from_form_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("DRIVER") {
            Role::Driver
        } else {
            Role::User
        }
    }
}

/// The current user as the backend describes it. The client keeps a cached
/// copy next to the token for as long as the session lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_reviews: Option<u32>,
}

impl User {
    pub fn is_driver(&self) -> bool {
        self.role == Role::Driver
    }
}
