// ============================================================================
// ARTHOUSE SHOWTIMES - FRONTEND MVVM (Yew + WASM)
// ============================================================================
// Arquitectura:
// - Components: Vistas Yew (sin lógica de datos)
// - Hooks: Conectan estado y servicios con los componentes
// - ViewModels: Cadenas de selección + preparación de datos
// - State / Stores: Estado puro, testeable sin navegador
// - Services: SOLO comunicación (Supabase, geolocalización, SDK de mapas)
// - Models: Estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod viewmodels;
pub mod maps;
pub mod context;
pub mod hooks;
pub mod components;
pub mod utils;

use crate::components::App;
use crate::config::CONFIG;

/// Punto de entrada: panic hook, logging y render de la app
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Arthouse Showtimes ({})", CONFIG.environment);

    if !CONFIG.is_production() {
        log::info!("🔧 Supabase: {}", CONFIG.supabase_url);
    }
    if CONFIG.supabase_anon_key.is_empty() {
        log::warn!("⚠️ SUPABASE_ANON_KEY vacío: las consultas serán rechazadas");
    }

    yew::Renderer::<App>::new().render();
}
