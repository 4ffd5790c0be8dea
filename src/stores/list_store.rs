// ============================================================================
// LIST STORE - Lista cargada una vez (películas, cines)
// ============================================================================

use crate::errors::DataError;

/// Estado de una lista - Compatible con use_state_handle
#[derive(Clone, Debug, PartialEq)]
pub struct ListStore<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListStore<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> ListStore<T> {
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Estado final de una carga; en error la lista queda vacía
    pub fn finished(result: Result<Vec<T>, DataError>) -> Self {
        match result {
            Ok(items) => Self {
                items,
                loading: false,
                error: None,
            },
            Err(e) => {
                log::error!("❌ {}", e);
                Self {
                    items: Vec::new(),
                    loading: false,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
