use shared_types::{
    ClientDashboardData, ClientRecord, ClientStatus, DashboardStats, DocumentKind, DocumentRecord,
    TimelineEntry, TimelineStatus,
};

/// Monthly revenue (thousands) reported when `DEMO_MONTHLY_REVENUE` is unset.
pub const DEFAULT_MONTHLY_REVENUE: f64 = 15.0;

/// In-memory agency book: the client roster the admin sees and the project
/// the seeded client account follows.
#[derive(Debug, Clone)]
pub struct Portfolio {
    roster: Vec<ClientRecord>,
    monthly_revenue: f64,
    project: Option<ClientDashboardData>,
}

impl Portfolio {
    pub fn new(
        roster: Vec<ClientRecord>,
        monthly_revenue: f64,
        project: Option<ClientDashboardData>,
    ) -> Self {
        Self {
            roster,
            monthly_revenue,
            project,
        }
    }

    /// The demo backend's seed data. Revenue comes from
    /// `DEMO_MONTHLY_REVENUE` when it parses as a number.
    pub fn seeded() -> Self {
        let monthly_revenue = std::env::var("DEMO_MONTHLY_REVENUE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MONTHLY_REVENUE);

        let roster = vec![
            record("Venturemond Demo Corp", "Dashboard Redesign", ClientStatus::Active, "$15k"),
            record("Northwind Traders", "Inventory Sync", ClientStatus::Pending, "$42k"),
            record("Globex", "Data Migration", ClientStatus::Delayed, "$120k"),
        ];

        let project = ClientDashboardData {
            project_name: "Dashboard Redesign".to_string(),
            client_name: "Client User".to_string(),
            balance: 1250.0,
            documents: vec![DocumentRecord {
                name: "Statement_of_Work.pdf".to_string(),
                size: "640 KB".to_string(),
                date: "1 week ago".to_string(),
                kind: DocumentKind::Pdf,
            }],
            timeline: vec![
                entry(TimelineStatus::Completed, "Kickoff", "Oct 1"),
                entry(TimelineStatus::Active, "Design Review", "In Progress"),
                entry(TimelineStatus::Pending, "Launch", "Dec 1"),
            ],
        };

        Self::new(roster, monthly_revenue, Some(project))
    }

    pub fn clients(&self) -> &[ClientRecord] {
        &self.roster
    }

    /// Headline numbers derived from the roster.
    pub fn stats(&self) -> DashboardStats {
        let pending = self
            .roster
            .iter()
            .filter(|c| c.status == ClientStatus::Pending)
            .count();
        DashboardStats {
            clients: self.roster.len() as i64,
            revenue: self.monthly_revenue,
            pending: pending as i64,
        }
    }

    pub fn client_project(&self) -> Option<&ClientDashboardData> {
        self.project.as_ref()
    }
}

fn record(name: &str, project: &str, status: ClientStatus, budget: &str) -> ClientRecord {
    ClientRecord {
        name: name.to_string(),
        project: project.to_string(),
        status,
        budget: budget.to_string(),
        avatar: name.chars().take(1).collect(),
    }
}

fn entry(status: TimelineStatus, title: &str, date: &str) -> TimelineEntry {
    TimelineEntry {
        status,
        title: title.to_string(),
        date: date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_are_derived_from_roster() {
        let portfolio = Portfolio::new(
            vec![
                record("A", "a", ClientStatus::Pending, "$1"),
                record("B", "b", ClientStatus::Pending, "$1"),
                record("C", "c", ClientStatus::Active, "$1"),
                record("D", "d", ClientStatus::Delayed, "$1"),
            ],
            7.5,
            None,
        );
        let stats = portfolio.stats();
        assert_eq!(stats.clients, 4);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.revenue, 7.5);
    }

    #[test]
    fn empty_roster_has_zero_stats() {
        let stats = Portfolio::new(Vec::new(), 0.0, None).stats();
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn seeded_portfolio_has_a_client_project() {
        let portfolio = Portfolio::seeded();
        assert_eq!(portfolio.clients().len(), 3);
        assert_eq!(portfolio.clients()[0].avatar, "V");
        let project = portfolio.client_project().unwrap();
        assert_eq!(project.project_name, "Dashboard Redesign");
    }
}
