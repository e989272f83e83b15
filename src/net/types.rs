//! Wire DTOs for the authentication API.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON. Optional identity fields default to
//! `None` so older payloads (no panels, no clinic) still deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/auth/me`, `/auth/login` and
/// `/auth/select-panel`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Role name, when the backend assigns one.
    #[serde(default)]
    pub role: Option<String>,
    /// Owning company, if any.
    #[serde(default)]
    pub company_id: Option<String>,
    /// Veterinary clinic the user works for, if any.
    #[serde(default, alias = "veterinaryClinicId")]
    pub clinic_id: Option<String>,
    /// Currently selected panel.
    #[serde(default)]
    pub panel_id: Option<String>,
    /// Type of the currently selected panel (`PETSHOP`, `CLINIC`, `GROOMING`).
    #[serde(default)]
    pub panel_type: Option<String>,
    /// Panels this user may switch between.
    #[serde(default)]
    pub panels: Vec<PanelSummary>,
}

/// A panel the user has access to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub panel_type: String,
}

/// Body returned by the login and panel-selection endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

/// Credentials posted to `/auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body posted to `/auth/select-panel`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectPanelRequest<'a> {
    pub panel_id: &'a str,
    pub panel_type: &'a str,
}
