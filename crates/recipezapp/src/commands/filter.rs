use crate::commands::CmdResult;
use crate::filter::FilterUpdate;
use crate::state::CatalogState;

/// Apply one criterion change and recompute the view. Filters are never persisted.
pub fn update(state: &mut CatalogState, update: FilterUpdate) -> CmdResult {
    tracing::debug!(?update, "filter update");
    state.criteria.apply(update);
    state.recompute();
    CmdResult::default()
}

/// Drop every criterion; the view becomes the whole catalog.
pub fn clear(state: &mut CatalogState) -> CmdResult {
    state.criteria.clear();
    state.recompute();
    CmdResult::default()
}
