// ============================================================================
// SUPABASE CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// PostgREST: tablas en /rest/v1/<tabla>, funciones en /rest/v1/rpc/<fn>
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use crate::config::AppConfig;

/// Query string de PostgREST (`select`, filtros `eq.`, `order`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostgrestQuery {
    select: Option<String>,
    filters: Vec<(String, String)>,
    order: Vec<String>,
}

impl PostgrestQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Columnas a devolver. Se quitan espacios y saltos de línea
    pub fn select(mut self, columns: &str) -> Self {
        let compact: String = columns.chars().filter(|c| !c.is_whitespace()).collect();
        self.select = Some(compact);
        self
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.order.push(format!("{}.{}", column, direction));
        self
    }

    /// Pares clave/valor en el orden en que PostgREST los recibe
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(self.filters.len() + 2);
        if let Some(select) = &self.select {
            params.push(("select".to_string(), select.clone()));
        }
        params.extend(self.filters.iter().cloned());
        if !self.order.is_empty() {
            params.push(("order".to_string(), self.order.join(",")));
        }
        params
    }
}

/// Cliente Supabase - SOLO comunicación HTTP (stateless)
#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.supabase_url, &config.supabase_anon_key)
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub fn rpc_url(&self, function: &str) -> String {
        format!("{}/rest/v1/rpc/{}", self.base_url, function)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
            .header("Accept", "application/json")
    }

    /// GET sobre una tabla o vista
    pub async fn select<T: DeserializeOwned>(&self, table: &str, query: &PostgrestQuery) -> Result<Vec<T>, String> {
        let url = self.table_url(table);
        let params = query.params();
        log::debug!("📡 GET {} {:?}", url, params);

        let response = self
            .authorize(Request::get(&url))
            .query(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::parse_rows(response).await
    }

    /// POST a una función RPC con argumentos nombrados
    pub async fn rpc<B: Serialize, T: DeserializeOwned>(&self, function: &str, args: &B) -> Result<Vec<T>, String> {
        let url = self.rpc_url(function);
        log::debug!("📡 RPC {}", function);

        let response = self
            .authorize(Request::post(&url))
            .json(args)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::parse_rows(response).await
    }

    async fn parse_rows<T: DeserializeOwned>(response: Response) -> Result<Vec<T>, String> {
        if !response.ok() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| response.status_text());
            return Err(format!("HTTP {}: {}", status, error_text));
        }
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_built_from_trimmed_base() {
        let client = SupabaseClient::new("https://abc.supabase.co/", "anon");
        assert_eq!(client.table_url("cinemas"), "https://abc.supabase.co/rest/v1/cinemas");
        assert_eq!(
            client.rpc_url("get_nearby_screenings"),
            "https://abc.supabase.co/rest/v1/rpc/get_nearby_screenings"
        );
    }

    #[test]
    fn query_params_follow_postgrest_syntax() {
        let query = PostgrestQuery::new()
            .select("screen_name,\n  start_dt,\n  movie:movies(title)")
            .eq("cinema_code", "C01")
            .eq("play_date", "2024-05-01")
            .order("play_date", true)
            .order("start_dt", false);

        let params = query.params();
        assert_eq!(
            params,
            vec![
                ("select".to_string(), "screen_name,start_dt,movie:movies(title)".to_string()),
                ("cinema_code".to_string(), "eq.C01".to_string()),
                ("play_date".to_string(), "eq.2024-05-01".to_string()),
                ("order".to_string(), "play_date.asc,start_dt.desc".to_string()),
            ]
        );
    }

    #[test]
    fn empty_query_has_no_params() {
        assert!(PostgrestQuery::new().params().is_empty());
    }
}
