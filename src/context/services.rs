// ============================================================================
// SERVICES CONTEXT - Inyección de servicios vía contexto de Yew
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;
use crate::config::AppConfig;
use crate::services::{BrowserLocationProvider, DataService, LocationProvider, SupabaseClient, SupabaseDataService};

/// Servicios externos de la app
#[derive(Clone)]
pub struct AppServices {
    pub data: Rc<dyn DataService>,
    pub location: Rc<dyn LocationProvider>,
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data) && Rc::ptr_eq(&self.location, &other.location)
    }
}

impl AppServices {
    /// Supabase + geolocalización del navegador
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            data: Rc::new(SupabaseDataService::new(SupabaseClient::from_config(config))),
            location: Rc::new(BrowserLocationProvider),
        }
    }
}

/// Servicios del `ContextProvider` más cercano (lo monta `App`)
#[hook]
pub fn use_services() -> AppServices {
    use_context::<AppServices>().unwrap_or_else(|| {
        log::error!("❌ use_services sin ContextProvider<AppServices>; usando la configuración global");
        AppServices::from_config(&crate::config::CONFIG)
    })
}
