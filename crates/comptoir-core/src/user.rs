// User profile and role tiers

use serde::{Deserialize, Serialize};

/// Profile record attached to an authenticated session.
///
/// Only meaningful while a token is held; the session store clears it
/// whenever the token is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserProfile {
    /// Role tier for this profile. Missing or unknown roles fall back to
    /// the staff tier, which sees the smallest navigation menu.
    pub fn role_tier(&self) -> Role {
        self.role
            .as_deref()
            .map(Role::from_str)
            .unwrap_or_default()
    }
}

/// Role tiers keying the navigation menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// Anonymous staff role (stock + facturation only)
    #[default]
    Staff,
    /// Shop administrator
    Admin,
    /// Cross-shop administrator
    SuperAdmin,
}

impl Role {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => Role::Admin,
            "superadmin" => Role::SuperAdmin,
            _ => Role::Staff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!(Role::from_str("admin"), Role::Admin);
        assert_eq!(Role::from_str("ADMIN"), Role::Admin);
        assert_eq!(Role::from_str("superadmin"), Role::SuperAdmin);
        assert_eq!(Role::from_str("staff"), Role::Staff);
        assert_eq!(Role::from_str("anything-else"), Role::Staff);
    }

    #[test]
    fn test_profile_role_tier() {
        let mut profile = UserProfile {
            id: 1,
            username: "alice".to_string(),
            email: None,
            role: None,
        };
        assert_eq!(profile.role_tier(), Role::Staff);

        profile.role = Some("superadmin".to_string());
        assert_eq!(profile.role_tier(), Role::SuperAdmin);
    }

    #[test]
    fn test_profile_roundtrip_without_optionals() {
        let profile = UserProfile {
            id: 7,
            username: "bob".to_string(),
            email: None,
            role: None,
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"id":7,"username":"bob"}"#);

        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
