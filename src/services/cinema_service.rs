// ============================================================================
// CINEMA SERVICE - Cines (con coordenadas y por distancia)
// ============================================================================

use serde::Serialize;
use crate::errors::DataError;
use crate::models::{Cinema, Coordinates};
use crate::utils::constants::{RPC_CINEMAS_BY_DISTANCE, TABLE_CINEMAS};
use super::supabase_client::{PostgrestQuery, SupabaseClient};

/// Argumentos del RPC `get_cinemas_by_distance`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CinemasByDistanceArgs {
    pub in_user_lat: f64,
    pub in_user_lng: f64,
}

pub fn cinemas_query() -> PostgrestQuery {
    PostgrestQuery::new().select("cinema_code, name, latitude, longitude")
}

/// Todos los cines con coordenadas (para los pins del mapa)
pub async fn list_cinemas(client: &SupabaseClient) -> Result<Vec<Cinema>, DataError> {
    let cinemas: Vec<Cinema> = client
        .select(TABLE_CINEMAS, &cinemas_query())
        .await
        .map_err(|e| DataError::new("list_cinemas", e))?;
    log::info!("🏛️ {} cines", cinemas.len());
    Ok(cinemas)
}

/// Cines ordenados por distancia al usuario (distancia calculada en el servidor)
pub async fn list_cinemas_by_distance(client: &SupabaseClient, location: Coordinates) -> Result<Vec<Cinema>, DataError> {
    let args = CinemasByDistanceArgs {
        in_user_lat: location.latitude,
        in_user_lng: location.longitude,
    };
    let cinemas: Vec<Cinema> = client
        .rpc(RPC_CINEMAS_BY_DISTANCE, &args)
        .await
        .map_err(|e| DataError::new("list_cinemas_by_distance", e))?;
    log::info!("📍 {} cines por distancia", cinemas.len());
    Ok(cinemas)
}
