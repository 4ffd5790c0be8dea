// ============================================================================
// USE NAVER MAPS HOOK - Carga del SDK de mapas
// ============================================================================

use yew::prelude::*;
use crate::config::CONFIG;
use crate::services::load_naver_maps;
use crate::stores::MapSdkStatus;

#[hook]
pub fn use_naver_maps() -> MapSdkStatus {
    let status = use_state(MapSdkStatus::default);

    {
        let status = status.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match load_naver_maps(CONFIG.naver_map_key_id.as_deref()).await {
                    Ok(()) => status.set(MapSdkStatus::Ready),
                    Err(e) => {
                        log::error!("❌ Mapa no disponible: {}", e);
                        status.set(MapSdkStatus::Failed(e));
                    }
                }
            });
            || ()
        });
    }

    (*status).clone()
}
