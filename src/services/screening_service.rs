// ============================================================================
// SCREENING SERVICE - Fechas, sesiones cercanas y horarios por cine
// ============================================================================

use serde::Serialize;
use crate::errors::DataError;
use crate::models::{Coordinates, NearbyCinema, PlayDateRow, Screening};
use crate::utils::constants::{RPC_NEARBY_SCREENINGS, TABLE_UPCOMING_SCREENINGS};
use crate::utils::format::dedupe_dates;
use super::supabase_client::{PostgrestQuery, SupabaseClient};

const TIMETABLE_COLUMNS: &str = "
    screen_name,
    start_dt,
    end_dt,
    remain_seat_cnt,
    total_seat_cnt,
    url,
    movie:movies(title)
";

/// Argumentos del RPC `get_nearby_screenings`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NearbyScreeningsArgs<'a> {
    pub in_movie_id: i64,
    pub in_user_lat: f64,
    pub in_user_lng: f64,
    /// YYYY-MM-DD
    pub in_target_date: &'a str,
}

pub fn movie_dates_query(movie_id: i64) -> PostgrestQuery {
    PostgrestQuery::new()
        .select("play_date")
        .eq("movie_id", movie_id)
        .order("play_date", true)
}

pub fn cinema_dates_query(cinema_code: &str) -> PostgrestQuery {
    PostgrestQuery::new()
        .select("play_date")
        .eq("cinema_code", cinema_code)
        .order("play_date", true)
}

pub fn cinema_timetable_query(cinema_code: &str, date: &str) -> PostgrestQuery {
    PostgrestQuery::new()
        .select(TIMETABLE_COLUMNS)
        .eq("cinema_code", cinema_code)
        .eq("play_date", date)
        .order("start_dt", true)
}

async fn list_dates(client: &SupabaseClient, query: PostgrestQuery, operation: &'static str) -> Result<Vec<String>, DataError> {
    let rows: Vec<PlayDateRow> = client
        .select(TABLE_UPCOMING_SCREENINGS, &query)
        .await
        .map_err(|e| DataError::new(operation, e))?;
    // Una fila por sesión: deduplicar por si acaso
    Ok(dedupe_dates(rows.into_iter().map(|r| r.play_date)))
}

pub async fn list_movie_dates(client: &SupabaseClient, movie_id: i64) -> Result<Vec<String>, DataError> {
    let dates = list_dates(client, movie_dates_query(movie_id), "list_movie_dates").await?;
    log::info!("📅 Película {}: {} fechas", movie_id, dates.len());
    Ok(dates)
}

pub async fn list_cinema_dates(client: &SupabaseClient, cinema_code: &str) -> Result<Vec<String>, DataError> {
    let dates = list_dates(client, cinema_dates_query(cinema_code), "list_cinema_dates").await?;
    log::info!("📅 Cine {}: {} fechas", cinema_code, dates.len());
    Ok(dates)
}

/// Cines cercanos con sesiones de la película en la fecha, ordenados por distancia
pub async fn get_nearby_screenings(
    client: &SupabaseClient,
    movie_id: i64,
    location: Coordinates,
    date: &str,
) -> Result<Vec<NearbyCinema>, DataError> {
    let args = NearbyScreeningsArgs {
        in_movie_id: movie_id,
        in_user_lat: location.latitude,
        in_user_lng: location.longitude,
        in_target_date: date,
    };
    let cinemas: Vec<NearbyCinema> = client
        .rpc(RPC_NEARBY_SCREENINGS, &args)
        .await
        .map_err(|e| DataError::new("get_nearby_screenings", e))?;
    log::info!("🎟️ Película {} el {}: {} cines cercanos", movie_id, date, cinemas.len());
    Ok(cinemas)
}

/// Horario de un cine para una fecha, ordenado por hora de inicio
pub async fn get_cinema_timetable(client: &SupabaseClient, cinema_code: &str, date: &str) -> Result<Vec<Screening>, DataError> {
    let screenings: Vec<Screening> = client
        .select(TABLE_UPCOMING_SCREENINGS, &cinema_timetable_query(cinema_code, date))
        .await
        .map_err(|e| DataError::new("get_cinema_timetable", e))?;
    log::info!("🎟️ Cine {} el {}: {} sesiones", cinema_code, date, screenings.len());
    Ok(screenings)
}
