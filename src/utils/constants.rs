/// Script del SDK de mapas; la key se añade como `ncpKeyId`
pub const NAVER_MAPS_SDK_URL: &str = "https://oapi.map.naver.com/openapi/v3/maps.js";

/// Atributo con el que se marca el `<script>` inyectado
pub const NAVER_SDK_DATA_KEY: &str = "navermapsSdk";
pub const NAVER_SDK_SELECTOR: &str = "script[data-navermaps-sdk]";
/// Estado de carga del script: `pending`, `loaded` o `failed`
pub const NAVER_SDK_STATE_ATTR: &str = "data-navermaps-state";

/// Id del contenedor del mapa
pub const MAP_CONTAINER_ID: &str = "cinema-map";

/// Tablas, vistas y RPCs de Supabase
pub const TABLE_UPCOMING_MOVIES: &str = "upcoming_movie_counts";
pub const TABLE_UPCOMING_SCREENINGS: &str = "upcoming_screenings";
pub const TABLE_CINEMAS: &str = "cinemas";
pub const RPC_NEARBY_SCREENINGS: &str = "get_nearby_screenings";
pub const RPC_CINEMAS_BY_DISTANCE: &str = "get_cinemas_by_distance";
