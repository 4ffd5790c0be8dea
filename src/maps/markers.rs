// ============================================================================
// MARKER LAYER - Dueño de los marcadores de cines
// ============================================================================
// Los marcadores se quitan del mapa cada vez que cambia el conjunto de pins
// y cuando la capa se destruye (desmontaje del componente o nuevo mapa)
// ============================================================================

use yew::Callback;
use super::{CinemaPin, MapRenderer};

pub struct MarkerLayer<R: MapRenderer> {
    renderer: R,
    markers: Vec<(String, R::Marker)>,
}

impl<R: MapRenderer> MarkerLayer<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            markers: Vec::new(),
        }
    }

    /// Reemplazar todos los marcadores. Devuelve cuántos se agregaron
    pub fn replace(&mut self, pins: &[CinemaPin], on_click: &Callback<String>) -> usize {
        self.clear();
        for pin in pins {
            match self.renderer.add_marker(pin, on_click.clone()) {
                Ok(marker) => self.markers.push((pin.cinema_code.clone(), marker)),
                Err(e) => log::warn!("⚠️ No se pudo agregar el marcador de {}: {}", pin.cinema_code, e),
            }
        }
        log::info!("📍 {} marcadores en el mapa", self.markers.len());
        self.markers.len()
    }

    /// Quitar todos los marcadores
    pub fn clear(&mut self) {
        if self.markers.is_empty() {
            return;
        }
        log::info!("🧹 Quitando {} marcadores", self.markers.len());
        for (_, marker) in self.markers.drain(..) {
            self.renderer.remove_marker(marker);
        }
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(|(code, _)| code.as_str())
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

impl<R: MapRenderer> Drop for MarkerLayer<R> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MapError;
    use crate::models::Coordinates;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Renderer falso que registra qué marcadores siguen en el mapa
    #[derive(Clone, Default)]
    struct RecordingRenderer {
        on_map: Rc<RefCell<Vec<String>>>,
        removed: Rc<RefCell<usize>>,
    }

    impl MapRenderer for RecordingRenderer {
        type Marker = String;

        fn add_marker(&mut self, pin: &CinemaPin, _on_click: Callback<String>) -> Result<String, MapError> {
            if !pin.position.is_valid() {
                return Err(MapError::InvalidCoordinates(pin.position.latitude, pin.position.longitude));
            }
            self.on_map.borrow_mut().push(pin.cinema_code.clone());
            Ok(pin.cinema_code.clone())
        }

        fn remove_marker(&mut self, marker: String) {
            self.on_map.borrow_mut().retain(|code| code != &marker);
            *self.removed.borrow_mut() += 1;
        }

        fn set_center(&mut self, _center: Coordinates) -> Result<(), MapError> {
            Ok(())
        }
    }

    fn pin(code: &str, lat: f64) -> CinemaPin {
        CinemaPin {
            cinema_code: code.to_string(),
            cinema_name: format!("Cinema {}", code),
            position: Coordinates::new(lat, 127.0),
        }
    }

    #[test]
    fn replacing_pins_removes_previous_markers() {
        let renderer = RecordingRenderer::default();
        let on_map = renderer.on_map.clone();
        let mut layer = MarkerLayer::new(renderer);
        let noop = Callback::from(|_: String| ());

        assert_eq!(layer.replace(&[pin("A", 37.0), pin("B", 37.1)], &noop), 2);
        assert_eq!(layer.replace(&[pin("C", 37.2)], &noop), 1);

        assert_eq!(*on_map.borrow(), vec!["C".to_string()]);
        assert_eq!(layer.codes().collect::<Vec<_>>(), vec!["C"]);
    }

    #[test]
    fn invalid_pins_are_skipped() {
        let mut layer = MarkerLayer::new(RecordingRenderer::default());
        let noop = Callback::from(|_: String| ());
        assert_eq!(layer.replace(&[pin("A", 37.0), pin("bad", 123.0)], &noop), 1);
    }

    #[test]
    fn dropping_the_layer_cleans_up_every_marker() {
        let renderer = RecordingRenderer::default();
        let on_map = renderer.on_map.clone();
        let removed = renderer.removed.clone();
        {
            let mut layer = MarkerLayer::new(renderer);
            layer.replace(&[pin("A", 37.0), pin("B", 37.1)], &Callback::from(|_: String| ()));
        }
        assert!(on_map.borrow().is_empty());
        assert_eq!(*removed.borrow(), 2);
    }
}
