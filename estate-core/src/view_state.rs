//! Session state for one storefront view and the transitions that move it.
//!
//! [`ViewState::transition`] is a pure function from state and message to
//! the next state. [`ViewStateController`] owns one state, applies
//! transitions, and re-runs the query after each one so the presentation
//! layer always has a fresh [`QueryPage`] to render.

use std::num::NonZeroUsize;
use std::sync::Arc;

use estate_config::{ConfigLoadError, EngineConfig};
use estate_model::{PropertyType, RoomFilter, SortOrder};
use tracing::trace;

use crate::catalog::CatalogStore;
use crate::error::{EstateError, Result};
use crate::query::engine::{PageRequest, QueryEngine, validate_page_size};
use crate::query::filtering::{CriteriaNormalizer, PriceInput, RawCriteria, normalize_text};
use crate::query::types::{FilterCriteria, QueryPage};

/// Input the presentation layer can send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMessage {
    SetTextQuery(String),
    SetMinPrice(PriceInput),
    SetMaxPrice(PriceInput),
    SetRoomFilter(RoomFilter),
    SetTypeFilter(Option<PropertyType>),
    SetSortOrder(SortOrder),
    /// Replace every criterion from raw form state.
    ApplyRaw(RawCriteria),
    /// Restore unnarrowed criteria.
    ClearFilters,
    SetPage(usize),
    ToggleMapVisible,
}

impl ViewMessage {
    /// Criteria changes send the user back to the first page.
    pub fn resets_page(&self) -> bool {
        !matches!(self, ViewMessage::SetPage(_) | ViewMessage::ToggleMapVisible)
    }

    /// Whether the query result can change.
    pub fn affects_query(&self) -> bool {
        !matches!(self, ViewMessage::ToggleMapVisible)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub criteria: FilterCriteria,
    pub map_visible: bool,
    /// 1-based.
    pub current_page: usize,
    pub page_size: NonZeroUsize,
}

impl ViewState {
    pub fn new(criteria: FilterCriteria, page_size: NonZeroUsize) -> Self {
        Self {
            criteria,
            map_visible: false,
            current_page: 1,
            page_size,
        }
    }

    /// Next state after `message`. `SetPage` stores the requested page as
    /// given (floored at 1); clamping against the result happens when the
    /// query is re-run.
    pub fn transition(
        &self,
        message: &ViewMessage,
        normalizer: &CriteriaNormalizer,
    ) -> ViewState {
        let mut next = self.clone();
        match message {
            ViewMessage::SetTextQuery(text) => {
                next.criteria.text_query = normalize_text(text);
            }
            ViewMessage::SetMinPrice(input) => {
                next.criteria.min_price =
                    normalizer.normalize_min_price(input.clone());
            }
            ViewMessage::SetMaxPrice(input) => {
                next.criteria.max_price =
                    normalizer.normalize_max_price(input.clone());
            }
            ViewMessage::SetRoomFilter(rooms) => {
                next.criteria.room_filter = *rooms;
            }
            ViewMessage::SetTypeFilter(property_type) => {
                next.criteria.type_filter = *property_type;
            }
            ViewMessage::SetSortOrder(order) => {
                next.criteria.sort_order = *order;
            }
            ViewMessage::ApplyRaw(raw) => {
                next.criteria = normalizer.normalize(raw);
            }
            ViewMessage::ClearFilters => {
                next.criteria = normalizer.default_criteria();
            }
            ViewMessage::SetPage(page) => {
                next.current_page = (*page).max(1);
            }
            ViewMessage::ToggleMapVisible => {
                next.map_visible = !next.map_visible;
            }
        }

        if message.resets_page() {
            next.current_page = 1;
        }
        next
    }

    fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.current_page,
            page_size: self.page_size,
        }
    }
}

/// Owns the view state for one session and the latest query result.
#[derive(Debug, Clone)]
pub struct ViewStateController {
    catalog: Arc<CatalogStore>,
    normalizer: CriteriaNormalizer,
    state: ViewState,
    result: QueryPage,
}

impl ViewStateController {
    /// Fails fast when `page_size` is zero.
    pub fn new(catalog: Arc<CatalogStore>, page_size: usize) -> Result<Self> {
        Ok(Self::with_normalizer(
            catalog,
            validate_page_size(page_size)?,
            CriteriaNormalizer::default(),
        ))
    }

    /// Page size and price fallbacks from `config`, validated first. Any
    /// rejected setting is an `InvalidConfiguration`.
    pub fn from_config(
        catalog: Arc<CatalogStore>,
        config: &EngineConfig,
    ) -> Result<Self> {
        let page_size = validate_page_size(config.page_size)?;
        config.validate().map_err(|err| match err {
            ConfigLoadError::Invalid(reason) => {
                EstateError::InvalidConfiguration(reason)
            }
            other => EstateError::Config(other),
        })?;
        Ok(Self::with_normalizer(
            catalog,
            page_size,
            CriteriaNormalizer::from_config(config),
        ))
    }

    fn with_normalizer(
        catalog: Arc<CatalogStore>,
        page_size: NonZeroUsize,
        normalizer: CriteriaNormalizer,
    ) -> Self {
        let state = ViewState::new(normalizer.default_criteria(), page_size);
        let result =
            QueryEngine::run(&catalog, &state.criteria, state.page_request());
        Self {
            catalog,
            normalizer,
            state,
            result,
        }
    }

    /// Apply one transition and return the recomputed page.
    pub fn update(&mut self, message: ViewMessage) -> &QueryPage {
        trace!(?message, page = self.state.current_page, "view transition");

        self.state = self.state.transition(&message, &self.normalizer);
        if message.affects_query() {
            self.recompute();
        }
        &self.result
    }

    fn recompute(&mut self) {
        self.result = QueryEngine::run(
            &self.catalog,
            &self.state.criteria,
            self.state.page_request(),
        );
        self.state.current_page = self.result.page;
    }

    pub fn set_text_query(&mut self, text: impl Into<String>) -> &QueryPage {
        self.update(ViewMessage::SetTextQuery(text.into()))
    }

    pub fn set_min_price(&mut self, input: impl Into<PriceInput>) -> &QueryPage {
        self.update(ViewMessage::SetMinPrice(input.into()))
    }

    pub fn set_max_price(&mut self, input: impl Into<PriceInput>) -> &QueryPage {
        self.update(ViewMessage::SetMaxPrice(input.into()))
    }

    pub fn set_room_filter(&mut self, rooms: RoomFilter) -> &QueryPage {
        self.update(ViewMessage::SetRoomFilter(rooms))
    }

    pub fn set_type_filter(
        &mut self,
        property_type: Option<PropertyType>,
    ) -> &QueryPage {
        self.update(ViewMessage::SetTypeFilter(property_type))
    }

    pub fn set_sort_order(&mut self, order: SortOrder) -> &QueryPage {
        self.update(ViewMessage::SetSortOrder(order))
    }

    pub fn apply_raw(&mut self, raw: &RawCriteria) -> &QueryPage {
        self.update(ViewMessage::ApplyRaw(raw.clone()))
    }

    pub fn clear_filters(&mut self) -> &QueryPage {
        self.update(ViewMessage::ClearFilters)
    }

    pub fn set_page(&mut self, page: usize) -> &QueryPage {
        self.update(ViewMessage::SetPage(page))
    }

    pub fn toggle_map_visible(&mut self) -> bool {
        self.update(ViewMessage::ToggleMapVisible);
        self.state.map_visible
    }

    /// Caption for the map toggle button.
    pub fn map_toggle_label(&self) -> &'static str {
        if self.state.map_visible {
            "Ocultar mapa"
        } else {
            "Ver mapa"
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn result(&self) -> &QueryPage {
        &self.result
    }

    pub fn catalog(&self) -> &Arc<CatalogStore> {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ViewStateController {
        ViewStateController::new(Arc::new(CatalogStore::sample()), 2).unwrap()
    }

    #[test]
    fn starts_on_first_page_with_everything_visible() {
        let controller = controller();
        assert_eq!(controller.state().current_page, 1);
        assert!(!controller.state().map_visible);
        assert_eq!(controller.result().total_count, 4);
        assert_eq!(controller.result().total_pages, 2);
    }

    #[test]
    fn zero_page_size_fails_fast() {
        let err = ViewStateController::new(Arc::new(CatalogStore::sample()), 0)
            .unwrap_err();
        assert!(matches!(err, EstateError::InvalidConfiguration(_)));
    }

    #[test]
    fn inverted_config_bounds_are_invalid_configuration() {
        let config = EngineConfig {
            price_floor: 900_000,
            price_ceiling: 300_000,
            ..EngineConfig::default()
        };
        let err =
            ViewStateController::from_config(Arc::new(CatalogStore::sample()), &config)
                .unwrap_err();
        assert!(matches!(err, EstateError::InvalidConfiguration(_)));
    }

    #[test]
    fn transition_is_pure() {
        let normalizer = CriteriaNormalizer::default();
        let state = ViewState::new(
            normalizer.default_criteria(),
            NonZeroUsize::new(2).unwrap(),
        );
        let before = state.clone();

        let next = state.transition(
            &ViewMessage::SetTextQuery(" Surco ".to_string()),
            &normalizer,
        );

        assert_eq!(state, before);
        assert_eq!(next.criteria.text_query, "surco");
    }

    #[test]
    fn set_page_is_floored_before_query() {
        let normalizer = CriteriaNormalizer::default();
        let state = ViewState::new(
            normalizer.default_criteria(),
            NonZeroUsize::new(2).unwrap(),
        );
        let next = state.transition(&ViewMessage::SetPage(0), &normalizer);
        assert_eq!(next.current_page, 1);
    }

    #[test]
    fn map_toggle_label_follows_state() {
        let mut controller = controller();
        assert_eq!(controller.map_toggle_label(), "Ver mapa");
        assert!(controller.toggle_map_visible());
        assert_eq!(controller.map_toggle_label(), "Ocultar mapa");
        assert!(!controller.toggle_map_visible());
    }

    #[test]
    fn message_classification() {
        assert!(ViewMessage::SetSortOrder(SortOrder::PriceAsc).resets_page());
        assert!(ViewMessage::ClearFilters.resets_page());
        assert!(!ViewMessage::SetPage(2).resets_page());
        assert!(!ViewMessage::ToggleMapVisible.resets_page());
        assert!(!ViewMessage::ToggleMapVisible.affects_query());
        assert!(ViewMessage::SetPage(2).affects_query());
    }
}
