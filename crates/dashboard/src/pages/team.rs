//! Team page. The roster is fixed; there is no team table.

use super::StatCard;

pub const TITLE: &str = "Team Management";
pub const SUBTITLE: &str = "Manage your legal team and collaborate on cases";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub status: &'static str,
    pub specialization: &'static str,
    pub cases: u32,
}

pub const ROSTER: [TeamMember; 4] = [
    TeamMember {
        name: "Sarah Johnson",
        role: "IP Attorney",
        email: "sarah.johnson@innovalex.ai",
        phone: "+1 (555) 123-4567",
        status: "active",
        specialization: "Patent Law",
        cases: 12,
    },
    TeamMember {
        name: "Michael Chen",
        role: "Legal Researcher",
        email: "michael.chen@innovalex.ai",
        phone: "+1 (555) 234-5678",
        status: "active",
        specialization: "Copyright Law",
        cases: 8,
    },
    TeamMember {
        name: "Emily Rodriguez",
        role: "Paralegal",
        email: "emily.rodriguez@innovalex.ai",
        phone: "+1 (555) 345-6789",
        status: "active",
        specialization: "Document Preparation",
        cases: 15,
    },
    TeamMember {
        name: "David Park",
        role: "AI Legal Analyst",
        email: "david.park@innovalex.ai",
        phone: "+1 (555) 456-7890",
        status: "active",
        specialization: "AI & Technology Law",
        cases: 6,
    },
];

impl TeamMember {
    /// Avatar fallback: first letter of each name part.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamPage {
    pub stats: Vec<StatCard>,
    pub members: Vec<TeamMember>,
}

impl TeamPage {
    pub fn build(members: &[TeamMember]) -> Self {
        let total_cases: u32 = members.iter().map(|m| m.cases).sum();
        let average = if members.is_empty() {
            0
        } else {
            (f64::from(total_cases) / members.len() as f64).round() as u32
        };
        Self {
            stats: vec![
                StatCard::new("Total Members", members.len(), "People on the team"),
                StatCard::new("Active Cases", total_cases, "Assigned across the team"),
                StatCard::new("Avg Load", average, "Cases per member"),
            ],
            members: members.to_vec(),
        }
    }
}

impl Default for TeamPage {
    fn default() -> Self {
        Self::build(&ROSTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_stats() {
        let page = TeamPage::default();
        let values: Vec<&str> = page.stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["4", "41", "10"]);
    }

    #[test]
    fn empty_team_has_zero_load() {
        let page = TeamPage::build(&[]);
        assert_eq!(page.stats[2].value, "0");
    }

    #[test]
    fn initials_from_name() {
        assert_eq!(ROSTER[2].initials(), "ER");
    }
}
