// ============================================================================
// DATA SERVICE - Superficie de consultas (solo lectura) del backend
// ============================================================================
// Se inyecta como `Rc<dyn DataService>` vía contexto de Yew
// ============================================================================

use async_trait::async_trait;
use crate::errors::DataError;
use crate::models::{Cinema, Coordinates, Movie, NearbyCinema, Screening};
use super::supabase_client::SupabaseClient;
use super::{cinema_service, movie_service, screening_service};

/// Consultas del backend. Cada llamada devuelve la lista completa o falla
#[async_trait(?Send)]
pub trait DataService {
    async fn list_upcoming_movies(&self) -> Result<Vec<Movie>, DataError>;

    /// Deduplicadas, ascendentes
    async fn list_movie_dates(&self, movie_id: i64) -> Result<Vec<String>, DataError>;

    /// Deduplicadas, ascendentes
    async fn list_cinema_dates(&self, cinema_code: &str) -> Result<Vec<String>, DataError>;

    /// Ordenados por distancia
    async fn get_nearby_screenings(
        &self,
        movie_id: i64,
        location: Coordinates,
        date: &str,
    ) -> Result<Vec<NearbyCinema>, DataError>;

    async fn get_cinema_timetable(&self, cinema_code: &str, date: &str) -> Result<Vec<Screening>, DataError>;

    /// Ordenados por distancia
    async fn list_cinemas_by_distance(&self, location: Coordinates) -> Result<Vec<Cinema>, DataError>;

    /// Todos los cines con coordenadas
    async fn list_cinemas(&self) -> Result<Vec<Cinema>, DataError>;
}

/// Implementación sobre Supabase
#[derive(Debug, Clone)]
pub struct SupabaseDataService {
    client: SupabaseClient,
}

impl SupabaseDataService {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl DataService for SupabaseDataService {
    async fn list_upcoming_movies(&self) -> Result<Vec<Movie>, DataError> {
        movie_service::list_upcoming_movies(&self.client).await
    }

    async fn list_movie_dates(&self, movie_id: i64) -> Result<Vec<String>, DataError> {
        screening_service::list_movie_dates(&self.client, movie_id).await
    }

    async fn list_cinema_dates(&self, cinema_code: &str) -> Result<Vec<String>, DataError> {
        screening_service::list_cinema_dates(&self.client, cinema_code).await
    }

    async fn get_nearby_screenings(
        &self,
        movie_id: i64,
        location: Coordinates,
        date: &str,
    ) -> Result<Vec<NearbyCinema>, DataError> {
        screening_service::get_nearby_screenings(&self.client, movie_id, location, date).await
    }

    async fn get_cinema_timetable(&self, cinema_code: &str, date: &str) -> Result<Vec<Screening>, DataError> {
        screening_service::get_cinema_timetable(&self.client, cinema_code, date).await
    }

    async fn list_cinemas_by_distance(&self, location: Coordinates) -> Result<Vec<Cinema>, DataError> {
        cinema_service::list_cinemas_by_distance(&self.client, location).await
    }

    async fn list_cinemas(&self) -> Result<Vec<Cinema>, DataError> {
        cinema_service::list_cinemas(&self.client).await
    }
}
