// ============================================================================
// CONFIG - Configuración en tiempo de compilación
// ============================================================================
// Los valores vienen de variables de entorno (o de .env vía build.rs)
// ============================================================================

/// Configuración de la aplicación
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    /// Key del SDK de mapas; sin ella la vista de mapa queda en error
    pub naver_map_key_id: Option<String>,
    pub default_map_zoom: f64,
    pub enable_logging: bool,
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: String::new(),
            naver_map_key_id: None,
            default_map_zoom: 12.0,
            enable_logging: true,
            environment: "development".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("SUPABASE_URL"),
            option_env!("SUPABASE_ANON_KEY"),
            option_env!("NAVER_MAP_KEY_ID"),
            option_env!("DEFAULT_MAP_ZOOM"),
            option_env!("ENABLE_LOGGING"),
            option_env!("ENVIRONMENT"),
        )
    }

    fn from_values(
        supabase_url: Option<&str>,
        supabase_anon_key: Option<&str>,
        naver_map_key_id: Option<&str>,
        default_map_zoom: Option<&str>,
        enable_logging: Option<&str>,
        environment: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            supabase_url: supabase_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.supabase_url),
            supabase_anon_key: supabase_anon_key
                .map(str::to_string)
                .unwrap_or(defaults.supabase_anon_key),
            naver_map_key_id: naver_map_key_id
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string),
            default_map_zoom: default_map_zoom
                .and_then(|z| z.parse().ok())
                .unwrap_or(defaults.default_map_zoom),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log según ENABLE_LOGGING
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert!(!config.is_production());
    }

    #[test]
    fn url_is_trimmed_and_blank_map_key_is_absent() {
        let config = AppConfig::from_values(
            Some("https://abc.supabase.co/"),
            Some("anon"),
            Some("   "),
            Some("not-a-number"),
            Some("false"),
            Some("production"),
        );
        assert_eq!(config.supabase_url, "https://abc.supabase.co");
        assert_eq!(config.naver_map_key_id, None);
        assert_eq!(config.default_map_zoom, 12.0);
        assert_eq!(config.log_level(), log::Level::Warn);
        assert!(config.is_production());
    }
}
