use serde::{Deserialize, Serialize};

/// Película con sesiones próximas (vista `upcoming_movie_counts`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub poster_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_columns_are_ignored_and_poster_is_optional() {
        let json = r#"[{"id":1,"title":"Movie X","num_screenings":12},
                       {"id":2,"title":"Movie Y","poster_url":"https://img/y.jpg"}]"#;
        let movies: Vec<Movie> = serde_json::from_str(json).unwrap();
        assert_eq!(movies[0].poster_url, None);
        assert_eq!(movies[1].poster_url.as_deref(), Some("https://img/y.jpg"));
    }
}
