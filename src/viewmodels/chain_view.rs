// ============================================================================
// CHAIN VIEW - Qué mostrar en cada zona de una cadena de selección
// ============================================================================
// Las pestañas de fechas y el listado son zonas independientes: un fallo de
// sesiones deja las fechas visibles para poder elegir otra
// ============================================================================

use std::fmt::Debug;
use crate::state::SelectionChain;

/// Zona de fechas
#[derive(Debug, Clone, PartialEq)]
pub enum DatesSlot {
    Loading,
    Failed(String),
    NoDates,
    Tabs,
}

/// Zona del listado de la fecha elegida
#[derive(Debug, Clone, PartialEq)]
pub enum ListingSlot {
    /// Falta la ubicación y se está obteniendo
    Locating,
    Loading,
    Failed(String),
    /// Sin sesiones en esa fecha
    Empty(String),
    Ready,
    Nothing,
}

pub fn dates_slot<K, T>(chain: &SelectionChain<K, Vec<T>>) -> DatesSlot
where
    K: Clone + PartialEq + Debug,
    T: Clone,
{
    if chain.target().is_none() || chain.is_loading_dates() {
        return DatesSlot::Loading;
    }
    if !chain.dates().is_empty() {
        return DatesSlot::Tabs;
    }
    match chain.error_message() {
        Some(message) => DatesSlot::Failed(message.to_string()),
        None => DatesSlot::NoDates,
    }
}

/// `locating`: la geolocalización sigue en curso
pub fn listing_slot<K, T>(chain: &SelectionChain<K, Vec<T>>, locating: bool) -> ListingSlot
where
    K: Clone + PartialEq + Debug,
    T: Clone,
{
    if chain.awaiting_location() && locating {
        return ListingSlot::Locating;
    }
    if chain.is_loading_screenings() {
        return ListingSlot::Loading;
    }
    if let Some(message) = chain.error_message() {
        return ListingSlot::Failed(message.to_string());
    }
    match chain.listing() {
        Some(items) if items.is_empty() => {
            ListingSlot::Empty(chain.selected_date().unwrap_or_default().to_string())
        }
        Some(_) => ListingSlot::Ready,
        None => ListingSlot::Nothing,
    }
}
