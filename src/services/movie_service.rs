// ============================================================================
// MOVIE SERVICE - Películas con sesiones próximas
// ============================================================================

use crate::errors::DataError;
use crate::models::Movie;
use crate::utils::constants::TABLE_UPCOMING_MOVIES;
use super::supabase_client::{PostgrestQuery, SupabaseClient};

/// `select=*`: la vista trae además `num_screenings`, que se descarta al deserializar
pub fn upcoming_movies_query() -> PostgrestQuery {
    PostgrestQuery::new().select("*")
}

pub async fn list_upcoming_movies(client: &SupabaseClient) -> Result<Vec<Movie>, DataError> {
    let movies: Vec<Movie> = client
        .select(TABLE_UPCOMING_MOVIES, &upcoming_movies_query())
        .await
        .map_err(|e| DataError::new("list_upcoming_movies", e))?;
    log::info!("🎬 {} películas con sesiones próximas", movies.len());
    Ok(movies)
}
