//! Fixed datasets shown when live data cannot be loaded.
//!
//! Each function returns a complete value; nothing here is ever merged with
//! a partial live response.

use crate::dashboard::{
    AdminDashboardData, ClientDashboardData, ClientRecord, ClientStatus, DashboardStats,
    DocumentKind, DocumentRecord, TimelineEntry, TimelineStatus,
};

/// Heights (percent) of the admin revenue-trend bars, oldest first.
pub const REVENUE_TREND: [u8; 7] = [40, 70, 50, 90, 60, 80, 100];

pub fn admin_stats() -> DashboardStats {
    DashboardStats {
        clients: 142,
        revenue: 45.2,
        pending: 18,
    }
}

fn client(name: &str, project: &str, status: ClientStatus, budget: &str) -> ClientRecord {
    ClientRecord {
        name: name.to_string(),
        project: project.to_string(),
        status,
        budget: budget.to_string(),
        avatar: name.chars().take(1).collect(),
    }
}

pub fn admin_clients() -> Vec<ClientRecord> {
    vec![
        client("Stark Industries", "Arc Reactor UI", ClientStatus::Active, "$500k"),
        client("Wayne Enterprises", "Batcave Security", ClientStatus::Pending, "$850k"),
        client("Cyberdyne", "Skynet Protocol", ClientStatus::Delayed, "$1.2M"),
        client("Umbrella Corp", "Viral Marketing", ClientStatus::Active, "$200k"),
    ]
}

pub fn admin_dashboard() -> AdminDashboardData {
    AdminDashboardData {
        stats: admin_stats(),
        clients: admin_clients(),
    }
}

pub fn client_dashboard() -> ClientDashboardData {
    ClientDashboardData {
        project_name: "Quantum Website Redesign".to_string(),
        client_name: "Alex Morgan".to_string(),
        balance: 2450.00,
        documents: vec![
            DocumentRecord {
                name: "Project_Proposal_v2.pdf".to_string(),
                size: "2.4 MB".to_string(),
                date: "2 days ago".to_string(),
                kind: DocumentKind::Pdf,
            },
            DocumentRecord {
                name: "Homepage_Mockup_v1.png".to_string(),
                size: "5.1 MB".to_string(),
                date: "5 days ago".to_string(),
                kind: DocumentKind::Image,
            },
        ],
        timeline: vec![
            milestone(TimelineStatus::Completed, "Discovery", "Sep 15"),
            milestone(TimelineStatus::Completed, "Wireframing", "Sep 30"),
            milestone(TimelineStatus::Active, "UI Design", "In Progress"),
            milestone(TimelineStatus::Pending, "Development", "Nov 1"),
        ],
    }
}

fn milestone(status: TimelineStatus, title: &str, date: &str) -> TimelineEntry {
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
    fn admin_demo_values() {
        let data = admin_dashboard();
        assert_eq!(data.stats.clients, 142);
        assert_eq!(data.stats.revenue, 45.2);
        assert_eq!(data.stats.pending, 18);
        let names: Vec<_> = data.clients.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["Stark Industries", "Wayne Enterprises", "Cyberdyne", "Umbrella Corp"]
        );
        assert_eq!(data.clients[2].avatar, "C");
    }

    #[test]
    fn client_demo_timeline_is_chronological() {
        let data = client_dashboard();
        let statuses: Vec<_> = data.timeline.iter().map(|t| t.status).collect();
        assert_eq!(
            statuses,
            [
                TimelineStatus::Completed,
                TimelineStatus::Completed,
                TimelineStatus::Active,
                TimelineStatus::Pending
            ]
        );
        assert_eq!(data.balance, 2450.0);
        assert_eq!(data.documents.len(), 2);
    }

    #[test]
    fn demo_values_are_stable_across_calls() {
        assert_eq!(admin_dashboard(), admin_dashboard());
        assert_eq!(client_dashboard(), client_dashboard());
    }
}
