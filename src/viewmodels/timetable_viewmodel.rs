// ============================================================================
// TIMETABLE VIEWMODEL - Agrupación del horario de un cine por película
// ============================================================================

use crate::models::Screening;

/// Sesiones de una película en el horario de un cine
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningGroup {
    pub title: String,
    pub screenings: Vec<Screening>,
}

impl ScreeningGroup {
    /// Título para mostrar; las filas sin película van bajo "Untitled"
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}

/// Agrupar por título de película.
///
/// Los grupos salen en el orden en que aparece cada título por primera vez y
/// dentro de cada grupo se respeta el orden de llegada del backend. La clave es
/// el título, no la identidad de la película: dos películas distintas con el
/// mismo título quedan en un solo grupo.
pub fn group_by_title(screenings: &[Screening]) -> Vec<ScreeningGroup> {
    let mut groups: Vec<ScreeningGroup> = Vec::new();
    for screening in screenings {
        let title = screening.title();
        match groups.iter_mut().find(|g| g.title == title) {
            Some(group) => group.screenings.push(screening.clone()),
            None => groups.push(ScreeningGroup {
                title: title.to_string(),
                screenings: vec![screening.clone()],
            }),
        }
    }
    groups
}
