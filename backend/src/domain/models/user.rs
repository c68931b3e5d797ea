use serde::{Deserialize, Serialize};

pub const MOCK_PARENT_ID: &str = "p1";
pub const MOCK_PARENT_NAME: &str = "Ahmed Mohammed";
pub const MOCK_PARENT_PHONE: &str = "0501234567";
/// Children owned by the mock parent (the seeded records)
pub const MOCK_PARENT_CHILD_IDS: [&str; 2] = ["c1", "c2"];

/// The authenticated parent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub children: Vec<String>,
}

impl User {
    /// Fixed mock profile handed out on login, carrying the given email
    pub fn mock_profile(email: &str) -> Self {
        Self {
            id: MOCK_PARENT_ID.to_string(),
            name: MOCK_PARENT_NAME.to_string(),
            email: email.to_string(),
            phone: MOCK_PARENT_PHONE.to_string(),
            children: MOCK_PARENT_CHILD_IDS.iter().map(|id| id.to_string()).collect(),
        }
    }
}
