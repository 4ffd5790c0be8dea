// ============================================================================
// MAP STORE - Estado de carga del SDK de mapas
// ============================================================================

use crate::errors::MapInitError;

#[derive(Clone, Debug, PartialEq)]
pub enum MapSdkStatus {
    Loading,
    Ready,
    Failed(MapInitError),
}

impl MapSdkStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, MapSdkStatus::Ready)
    }
}

impl Default for MapSdkStatus {
    fn default() -> Self {
        MapSdkStatus::Loading
    }
}
