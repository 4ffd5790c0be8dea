use serde::{Deserialize, Serialize};

/// Título de la película padre (`movie:movies(title)`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieTitle {
    pub title: String,
}

/// Una sesión concreta. Snapshot inmutable: los asientos no se actualizan en vivo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Screening {
    pub screen_name: String,
    pub start_dt: String,
    pub end_dt: String,
    #[serde(default)]
    pub remain_seat_cnt: i32,
    #[serde(default)]
    pub total_seat_cnt: i32,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub movie: Option<MovieTitle>,
}

impl Screening {
    /// Título de la película, vacío si la fila no lo trae
    pub fn title(&self) -> &str {
        self.movie.as_ref().map(|m| m.title.as_str()).unwrap_or("")
    }

    /// URL de reserva, ignorando cadenas vacías
    pub fn booking_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

/// Fila de `play_date` de `upcoming_screenings`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlayDateRow {
    pub play_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timetable_row_with_embedded_movie() {
        let json = r#"{
            "screen_name": "Hall 1",
            "start_dt": "2024-05-01T19:30:00",
            "end_dt": "2024-05-01T21:40:00",
            "remain_seat_cnt": 12,
            "total_seat_cnt": 80,
            "url": "",
            "movie": { "title": "Movie X" }
        }"#;
        let s: Screening = serde_json::from_str(json).unwrap();
        assert_eq!(s.title(), "Movie X");
        assert_eq!(s.booking_url(), None);
    }

    #[test]
    fn nearby_row_without_movie_has_empty_title() {
        let json = r#"{"screen_name":"2관","start_dt":"10:00","end_dt":"12:00","url":null}"#;
        let s: Screening = serde_json::from_str(json).unwrap();
        assert_eq!(s.title(), "");
        assert_eq!(s.remain_seat_cnt, 0);
    }
}
