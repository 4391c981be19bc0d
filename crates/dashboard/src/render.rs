//! Plain-text rendering of a layout and page for the console host.

use std::fmt;

use chrono::Utc;
use innovalex_core::types::Timestamp;

use crate::app::Page;
use crate::layout::Layout;
use crate::pages::alerts::{self, AlertCard, AlertFilter};
use crate::pages::dashboard;
use crate::pages::documents::{self, DocumentCard};
use crate::pages::ip_assets::{self, IpAssetCard};
use crate::pages::legal_cases::{self, LegalCaseCard};
use crate::pages::team;
use crate::pages::{PageBody, StatCard};

/// A page inside its layout, rendered via `Display`.
pub struct Screen<'a> {
    pub layout: &'a Layout,
    pub page: &'a Page,
    /// Reference time for relative timestamps.
    pub now: Timestamp,
}

impl<'a> Screen<'a> {
    pub fn new(layout: &'a Layout, page: &'a Page) -> Self {
        Self {
            layout,
            page,
            now: Utc::now(),
        }
    }
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nav(f, self.layout)?;
        writeln!(f)?;
        match self.page {
            Page::Dashboard(overview) => {
                header(f, dashboard::TITLE, dashboard::SUBTITLE)?;
                stats(f, &overview.stats)?;
                if overview.loading {
                    writeln!(f, "  (still loading)")?;
                }
                writeln!(f, "\nRecent Activity")?;
                if overview.recent.is_empty() {
                    writeln!(f, "  (nothing yet)")?;
                }
                for item in &overview.recent {
                    writeln!(
                        f,
                        "  - {} | {} ({})",
                        item.action,
                        item.details,
                        item.time_ago(self.now)
                    )?;
                }
                Ok(())
            }
            Page::IpAssets(page) => {
                header(f, ip_assets::TITLE, ip_assets::SUBTITLE)?;
                action(f, ip_assets::CREATE_ACTION, page.dialog.is_open())?;
                body(f, &page.body, asset_card)
            }
            Page::LegalCases(page) => {
                header(f, legal_cases::TITLE, legal_cases::SUBTITLE)?;
                action(f, legal_cases::CREATE_ACTION, page.dialog.is_open())?;
                stats(f, &page.stats)?;
                body(f, &page.body, case_card)
            }
            Page::Documents(page) => {
                header(f, documents::TITLE, documents::SUBTITLE)?;
                action(f, documents::CREATE_ACTION, page.dialog.is_open())?;
                body(f, &page.body, document_card)
            }
            Page::Alerts(page) => {
                header(f, alerts::TITLE, alerts::SUBTITLE)?;
                stats(f, &page.summary.stat_cards())?;
                let tabs: Vec<String> = AlertFilter::ALL
                    .into_iter()
                    .map(|t| {
                        if t == page.filter {
                            format!("[{}]", t.label())
                        } else {
                            t.label().to_string()
                        }
                    })
                    .collect();
                writeln!(f, "Filter: {}", tabs.join(" "))?;
                body(f, &page.body, alert_card)
            }
            Page::Team(page) => {
                header(f, team::TITLE, team::SUBTITLE)?;
                stats(f, &page.stats)?;
                for m in &page.members {
                    writeln!(
                        f,
                        "\n  ({}) {} - {} [{}]\n      {} | {}\n      {} | {} cases",
                        m.initials(),
                        m.name,
                        m.role,
                        m.status,
                        m.email,
                        m.phone,
                        m.specialization,
                        m.cases
                    )?;
                }
                Ok(())
            }
            Page::Static(route) => header(f, route.name(), "Nothing to show here yet."),
        }
    }
}

fn write_nav(f: &mut fmt::Formatter<'_>, layout: &Layout) -> fmt::Result {
    let links: Vec<String> = layout
        .links
        .iter()
        .map(|l| {
            if l.active {
                format!("*{}*", l.name)
            } else {
                l.name.to_string()
            }
        })
        .collect();
    writeln!(f, "InnovaLex | {}", links.join(" | "))?;
    match &layout.user_email {
        Some(email) => writeln!(f, "Signed in as {email} (sign out)"),
        None => writeln!(f, "Not signed in"),
    }
}

fn header(f: &mut fmt::Formatter<'_>, title: &str, subtitle: &str) -> fmt::Result {
    writeln!(f, "{title}")?;
    writeln!(f, "{subtitle}")
}

fn action(f: &mut fmt::Formatter<'_>, label: &str, dialog_open: bool) -> fmt::Result {
    if dialog_open {
        writeln!(f, "[+ {label}] (dialog open)")
    } else {
        writeln!(f, "[+ {label}]")
    }
}

fn stats(f: &mut fmt::Formatter<'_>, cards: &[StatCard]) -> fmt::Result {
    writeln!(f)?;
    for card in cards {
        writeln!(f, "  {:<22} {:>6}  {}", card.title, card.value, card.description)?;
    }
    Ok(())
}

fn body<T>(
    f: &mut fmt::Formatter<'_>,
    body: &PageBody<T>,
    card: fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    writeln!(f)?;
    match body {
        PageBody::Loading(message) => writeln!(f, "{message}"),
        PageBody::Empty(empty) => {
            writeln!(f, "{}", empty.title)?;
            writeln!(f, "{}", empty.message)?;
            if let Some(label) = empty.action {
                writeln!(f, "[+ {label}]")?;
            }
            Ok(())
        }
        PageBody::Cards(cards) => {
            for c in cards {
                card(f, c)?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}

fn asset_card(f: &mut fmt::Formatter<'_>, card: &IpAssetCard) -> fmt::Result {
    writeln!(f, "{} [{}] ({})", card.title, card.type_label, card.status)?;
    writeln!(f, "  {}", card.description)?;
    if let Some(reg) = &card.registration_number {
        writeln!(f, "  Reg: {reg}")?;
    }
    writeln!(f, "  Created: {}", card.created)?;
    if let Some(expires) = &card.expires {
        writeln!(f, "  Expires: {expires}")?;
    }
    Ok(())
}

fn case_card(f: &mut fmt::Formatter<'_>, card: &LegalCaseCard) -> fmt::Result {
    writeln!(
        f,
        "{} [{}] [{}]",
        card.case_number,
        card.status_label,
        card.priority.as_str()
    )?;
    writeln!(f, "  {}", card.title)?;
    writeln!(f, "  {}", card.description)?;
    writeln!(f, "  Filed: {}", card.filed)?;
    if let Some(value) = &card.estimated_value {
        writeln!(f, "  Est. Value: {value}")?;
    }
    Ok(())
}

fn document_card(f: &mut fmt::Formatter<'_>, card: &DocumentCard) -> fmt::Result {
    write!(f, "{} [{}]", card.title, card.type_label)?;
    if card.ai_generated {
        write!(f, " [AI Generated]")?;
    }
    writeln!(f)?;
    writeln!(f, "  {}", card.approval)?;
    if let Some(signature) = card.signature {
        writeln!(f, "  {signature}")?;
    }
    writeln!(f, "  Created: {}", card.created)
}

fn alert_card(f: &mut fmt::Formatter<'_>, card: &AlertCard) -> fmt::Result {
    writeln!(
        f,
        "{} [{} threat] [{}]",
        card.asset_title,
        card.threat_level.as_str(),
        card.status
    )?;
    writeln!(f, "  Detected on: {}", card.source_host)?;
    if let Some(snippet) = &card.snippet {
        writeln!(f, "  \"{snippet}\"")?;
    }
    writeln!(f, "  Detected: {}", card.detected)?;
    if let Some(confidence) = card.confidence {
        writeln!(f, "  AI Confidence: {confidence}%")?;
    }
    if let Some(resolved) = &card.resolved {
        writeln!(f, "  Resolved: {resolved}")?;
    }
    if let Some(action) = &card.response_action {
        writeln!(f, "  Action Taken: {action}")?;
    }
    if !card.actions.is_empty() {
        let labels: Vec<&str> = card.actions.iter().map(|a| a.label()).collect();
        writeln!(f, "  Actions: {}", labels.join(", "))?;
    }
    Ok(())
}

/// Render against the current time.
pub fn render(layout: &Layout, page: &Page) -> String {
    Screen::new(layout, page).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Route;
    use crate::pages::team::TeamPage;
    use crate::session::SessionContext;

    #[test]
    fn team_screen_marks_active_route() {
        let layout = Layout::build(Route::Team, &SessionContext::new());
        let text = render(&layout, &Page::Team(TeamPage::default()));
        assert!(text.contains("*Team*"));
        assert!(text.contains("Sarah Johnson"));
        assert!(text.contains("Not signed in"));
    }

    #[test]
    fn static_route_renders_placeholder() {
        let layout = Layout::build(Route::Settings, &SessionContext::new());
        let text = render(&layout, &Page::Static(Route::Settings));
        assert!(text.contains("Settings\nNothing to show here yet."));
    }
}
