use serde::{Deserialize, Serialize};

// ── Admin ──────────────────────────────────────────────

/// Response of `GET /api/admin/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DashboardStats {
    pub clients: i64,
    /// Monthly revenue in thousands.
    pub revenue: f64,
    pub pending: i64,
}

/// Delivery status of a client project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ClientStatus {
    Active,
    Pending,
    Delayed,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Pending => "Pending",
            ClientStatus::Delayed => "Delayed",
        }
    }

    /// Only active projects get the success badge; everything else warns.
    pub fn is_healthy(&self) -> bool {
        matches!(self, ClientStatus::Active)
    }
}

/// One row of `GET /api/admin/clients`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ClientRecord {
    pub name: String,
    pub project: String,
    pub status: ClientStatus,
    /// Display string such as `$500k`.
    pub budget: String,
    #[serde(default)]
    pub avatar: String,
}

impl ClientRecord {
    /// Avatar letter, falling back to the first character of the name.
    pub fn avatar_letter(&self) -> String {
        if !self.avatar.is_empty() {
            return self.avatar.clone();
        }
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Everything the admin dashboard shows. Both endpoints must succeed for a
/// live value to exist.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboardData {
    pub stats: DashboardStats,
    pub clients: Vec<ClientRecord>,
}

// ── Client ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum TimelineStatus {
    Completed,
    Active,
    Pending,
}

impl TimelineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineStatus::Completed => "completed",
            TimelineStatus::Active => "active",
            TimelineStatus::Pending => "pending",
        }
    }
}

/// One project milestone. `date` is display text, not a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TimelineEntry {
    pub status: TimelineStatus,
    pub title: String,
    pub date: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum DocumentKind {
    Pdf,
    Image,
}

/// Descriptive entry for a shared file; there is no content behind it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DocumentRecord {
    pub name: String,
    pub size: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
}

/// Response of `GET /api/client/dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ClientDashboardData {
    pub project_name: String,
    pub client_name: String,
    pub balance: f64,
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}
