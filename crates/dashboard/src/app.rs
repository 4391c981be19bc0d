//! Dashboard shell: the four stores sharing one session and one bus, and
//! page assembly by route.

use std::sync::Arc;

use innovalex_db::TableBackend;
use innovalex_events::EventBus;
use tokio::task::JoinHandle;

use crate::layout::{Layout, Route};
use crate::pages::alerts::{AlertFilter, AlertsPage};
use crate::pages::dashboard::DashboardOverview;
use crate::pages::documents::DocumentsPage;
use crate::pages::ip_assets::IpAssetsPage;
use crate::pages::legal_cases::LegalCasesPage;
use crate::pages::team::TeamPage;
use crate::pages::CreateDialog;
use crate::session::SessionContext;
use crate::stores::{AlertStore, DocumentStore, FetchOutcome, IpAssetStore, LegalCaseStore};

/// Per-view UI state the host keeps between renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub dialog: CreateDialog,
    pub alert_filter: AlertFilter,
}

/// A fully built page.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Dashboard(DashboardOverview),
    IpAssets(IpAssetsPage),
    LegalCases(LegalCasesPage),
    Documents(DocumentsPage),
    Alerts(AlertsPage),
    Team(TeamPage),
    /// Routes with no data behind them (analytics, settings).
    Static(Route),
}

/// Fetch outcome of each store after an identity sync.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncReport {
    pub assets: FetchOutcome,
    pub cases: FetchOutcome,
    pub documents: FetchOutcome,
    pub alerts: FetchOutcome,
}

pub struct Dashboard {
    session: SessionContext,
    bus: Arc<EventBus>,
    pub assets: IpAssetStore,
    pub cases: LegalCaseStore,
    pub documents: DocumentStore,
    pub alerts: AlertStore,
}

impl Dashboard {
    pub fn new(db: Arc<dyn TableBackend>, session: SessionContext, bus: Arc<EventBus>) -> Self {
        Self {
            assets: IpAssetStore::new(Arc::clone(&db), session.clone(), Arc::clone(&bus)),
            cases: LegalCaseStore::new(Arc::clone(&db), session.clone(), Arc::clone(&bus)),
            documents: DocumentStore::new(Arc::clone(&db), session.clone(), Arc::clone(&bus)),
            alerts: AlertStore::new(db, session.clone(), Arc::clone(&bus)),
            session,
            bus,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    /// Bring every store in line with the current identity. The four
    /// stores fetch independently and concurrently.
    pub async fn sync_identity(&self) -> SyncReport {
        let (assets, cases, documents, alerts) = tokio::join!(
            self.assets.sync_identity(),
            self.cases.sync_identity(),
            self.documents.sync_identity(),
            self.alerts.sync_identity(),
        );
        SyncReport {
            assets,
            cases,
            documents,
            alerts,
        }
    }

    /// Refetch every store regardless of identity.
    pub async fn refetch_all(&self) -> SyncReport {
        let (assets, cases, documents, alerts) = tokio::join!(
            self.assets.refetch(),
            self.cases.refetch(),
            self.documents.refetch(),
            self.alerts.refetch(),
        );
        SyncReport {
            assets,
            cases,
            documents,
            alerts,
        }
    }

    /// Spawn a task that resyncs the stores on every identity change.
    /// It runs until aborted.
    pub fn watch_identity(self: &Arc<Self>) -> JoinHandle<()> {
        let dashboard = Arc::clone(self);
        let mut changes = dashboard.session.subscribe();
        tokio::spawn(async move {
            while changes.changed().await.is_ok() {
                let report = dashboard.sync_identity().await;
                tracing::debug!(?report, "Stores resynced after identity change");
            }
        })
    }

    pub fn layout(&self, route: Route) -> Layout {
        Layout::build(route, &self.session)
    }

    /// Build the page for `route` from the stores' cached lists.
    pub fn page(&self, route: Route, view: ViewState) -> Page {
        match route {
            Route::Dashboard => Page::Dashboard(DashboardOverview::build(
                &self.assets.snapshot(),
                &self.cases.snapshot(),
                &self.documents.snapshot(),
                &self.alerts.snapshot(),
            )),
            Route::IpAssets => Page::IpAssets(IpAssetsPage::build(&self.assets.snapshot(), view.dialog)),
            Route::LegalCases => {
                Page::LegalCases(LegalCasesPage::build(&self.cases.snapshot(), view.dialog))
            }
            Route::Documents => {
                Page::Documents(DocumentsPage::build(&self.documents.snapshot(), view.dialog))
            }
            Route::Alerts => Page::Alerts(AlertsPage::build(&self.alerts.snapshot(), view.alert_filter)),
            Route::Team => Page::Team(TeamPage::default()),
            Route::Analytics | Route::Settings => Page::Static(route),
        }
    }
}
