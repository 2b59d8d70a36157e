use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Superadmin,
}

impl Role {
    /// Admins and superadmins can approve deposit requests.
    pub fn can_approve(&self) -> bool {
        matches!(self, Role::Admin | Role::Superadmin)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub nama_lengkap: String,
    pub username: String,
    pub nomor_telepon: Option<String>,
    pub role: Role,
    /// Free-text note, visible to admins only.
    pub catatan: Option<String>,
}
