//! Search tab: service-type toggle plus a debounced text query over the
//! facility catalog

use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::core::filter::filter_facilities;
use crate::domain::{Facility, ServiceType};
use crate::error::Result;
use crate::navigation::{Navigation, Route};
use crate::storage::{records, SharedStore};
use crate::timer::{Debouncer, SEARCH_DEBOUNCE};

pub struct SearchScreen {
    store: SharedStore,
    catalog: Vec<Facility>,
    query: String,
    selected_type: Option<ServiceType>,
    items: Vec<Facility>,
    evaluations: usize,
}

impl SearchScreen {
    pub fn new(store: SharedStore, catalog: Vec<Facility>) -> Self {
        let items = catalog.clone();
        Self {
            store,
            catalog,
            query: String::new(),
            selected_type: None,
            items,
            evaluations: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_type(&self) -> Option<ServiceType> {
        self.selected_type
    }

    pub fn items(&self) -> &[Facility] {
        &self.items
    }

    /// How many times the result list was recomputed
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    fn refilter(&mut self) {
        self.items = filter_facilities(&self.catalog, &self.query, self.selected_type);
        self.evaluations += 1;
        trace!(
            "Search evaluated: query={:?} type={:?} -> {} results",
            self.query,
            self.selected_type,
            self.items.len()
        );
    }

    /// Screen gained focus: pick up the service type saved elsewhere
    pub async fn on_focus(&mut self) -> Result<()> {
        self.selected_type = records::load_service_type(&*self.store).await?;
        self.refilter();
        Ok(())
    }

    /// Record the text field contents without recomputing results
    pub fn edit_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Apply a settled query
    pub fn apply_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.refilter();
    }

    /// Toggle the service type. Applied and persisted immediately.
    pub async fn change_mode(&mut self, kind: ServiceType) -> Result<()> {
        self.selected_type = Some(kind);
        records::save_service_type(&*self.store, kind).await?;
        debug!("Search mode changed to {}", kind);
        self.refilter();
        Ok(())
    }

    pub fn open_filters(&self) -> Navigation {
        Navigation::Push(Route::Filters)
    }

    pub fn open_detail(&self, facility: &Facility) -> Navigation {
        Navigation::Push(Route::FacilityDetail(facility.id.clone()))
    }

    pub fn open_calculator(&self, facility: &Facility) -> Navigation {
        Navigation::Push(Route::Calculator(facility.id.clone()))
    }
}

/// [`SearchScreen`] with query edits routed through the debouncer
pub struct LiveSearch {
    screen: SearchScreen,
    debouncer: Debouncer<String>,
    settled: mpsc::UnboundedReceiver<String>,
}

impl LiveSearch {
    pub fn new(screen: SearchScreen) -> Self {
        let (debouncer, settled) = Debouncer::new(SEARCH_DEBOUNCE);
        Self {
            screen,
            debouncer,
            settled,
        }
    }

    pub fn screen(&self) -> &SearchScreen {
        &self.screen
    }

    pub async fn on_focus(&mut self) -> Result<()> {
        self.screen.on_focus().await
    }

    /// A keystroke: the results follow once typing pauses
    pub fn type_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.screen.edit_query(text.clone());
        self.debouncer.push(text);
    }

    /// Wait for the next settled query and apply it
    pub async fn settle(&mut self) -> Option<&[Facility]> {
        let query = self.settled.recv().await?;
        self.screen.apply_query(query);
        Some(self.screen.items())
    }

    pub async fn change_mode(&mut self, kind: ServiceType) -> Result<()> {
        self.screen.change_mode(kind).await
    }
}
