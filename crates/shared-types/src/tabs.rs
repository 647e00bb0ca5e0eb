//! Closed tab sets for each dashboard.
//!
//! Tab selection is transient UI state. Every variant is always a valid
//! selection and the first variant is the initial one.

/// Sections of the admin dashboard, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdminTab {
    #[default]
    Dashboard,
    Clients,
    Analytics,
    Invoices,
    Settings,
}

impl AdminTab {
    pub const ALL: [AdminTab; 5] = [
        AdminTab::Dashboard,
        AdminTab::Clients,
        AdminTab::Analytics,
        AdminTab::Invoices,
        AdminTab::Settings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            AdminTab::Dashboard => "dashboard",
            AdminTab::Clients => "clients",
            AdminTab::Analytics => "analytics",
            AdminTab::Invoices => "invoices",
            AdminTab::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Dashboard => "Dashboard",
            AdminTab::Clients => "Clients",
            AdminTab::Analytics => "Analytics",
            AdminTab::Invoices => "Invoices",
            AdminTab::Settings => "Settings",
        }
    }
}

/// Sections of the client dashboard, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClientTab {
    #[default]
    Overview,
    Projects,
    Documents,
    Support,
}

impl ClientTab {
    pub const ALL: [ClientTab; 4] = [
        ClientTab::Overview,
        ClientTab::Projects,
        ClientTab::Documents,
        ClientTab::Support,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ClientTab::Overview => "overview",
            ClientTab::Projects => "projects",
            ClientTab::Documents => "documents",
            ClientTab::Support => "support",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClientTab::Overview => "Overview",
            ClientTab::Projects => "My Project",
            ClientTab::Documents => "Documents",
            ClientTab::Support => "Support",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn defaults_are_first_tabs() {
        assert_eq!(AdminTab::default(), AdminTab::ALL[0]);
        assert_eq!(ClientTab::default(), ClientTab::ALL[0]);
    }

    #[test]
    fn ids_are_unique() {
        let admin: HashSet<_> = AdminTab::ALL.iter().map(AdminTab::id).collect();
        assert_eq!(admin.len(), AdminTab::ALL.len());
        let client: HashSet<_> = ClientTab::ALL.iter().map(ClientTab::id).collect();
        assert_eq!(client.len(), ClientTab::ALL.len());
    }

    #[test]
    fn sidebar_order_matches_ids() {
        let ids: Vec<_> = AdminTab::ALL.iter().map(AdminTab::id).collect();
        assert_eq!(ids, ["dashboard", "clients", "analytics", "invoices", "settings"]);
        let ids: Vec<_> = ClientTab::ALL.iter().map(ClientTab::id).collect();
        assert_eq!(ids, ["overview", "projects", "documents", "support"]);
    }
}
