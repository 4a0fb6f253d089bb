use serde::{Deserialize, Serialize};

/// Par latitud/longitud tal como lo envía el backend (`{ lat, lng }`)
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Coordenadas finitas y dentro de rango
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<[f64; 2]> for Position {
    fn from(coords: [f64; 2]) -> Self {
        Self::new(coords[0], coords[1])
    }
}

/// Corrida predefinida (origen/destino) ofrecida al despachador
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub start_position: Position,
    pub end_position: Position,
}

/// Catálogo de corridas, en el orden en que llegan del backend.
///
/// El orden de inserción es el orden de presentación en el selector. No se
/// impone unicidad de ids: `find` devuelve la primera coincidencia.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct RouteCatalog {
    routes: Vec<Route>,
}

impl RouteCatalog {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn find(&self, route_id: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.id == route_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl From<Vec<Route>> for RouteCatalog {
    fn from(routes: Vec<Route>) -> Self {
        Self::new(routes)
    }
}

/// Corrida elegida en el selector (vacío = placeholder)
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Selection(Option<String>);

impl Selection {
    /// Traduce el valor del `<select>`: la cadena vacía es "sin selección"
    pub fn from_control_value(value: &str) -> Self {
        if value.is_empty() {
            Self(None)
        } else {
            Self(Some(value.to_string()))
        }
    }

    pub fn route_id(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Valor a reflejar en el `<select>`
    pub fn control_value(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_route_list() {
        let json = r#"[
            {"_id":"r1","title":"Downtown Loop","startPosition":{"lat":1,"lng":1},"endPosition":{"lat":2,"lng":2}},
            {"_id":"r2","title":"Airport","startPosition":{"lat":-23.5,"lng":-46.6},"endPosition":{"lat":-23.4,"lng":-46.4}}
        ]"#;

        let catalog: RouteCatalog = serde_json::from_str(json).unwrap();

        assert_eq!(catalog.len(), 2);
        let titles: Vec<&str> = catalog.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Downtown Loop", "Airport"]);

        let r1 = catalog.find("r1").unwrap();
        assert_eq!(r1.start_position, Position::new(1.0, 1.0));
        assert_eq!(r1.end_position, Position::new(2.0, 2.0));
    }

    #[test]
    fn find_returns_first_match_and_none_for_unknown_ids() {
        let route = |id: &str, title: &str| Route {
            id: id.to_string(),
            title: title.to_string(),
            start_position: Position::new(0.0, 0.0),
            end_position: Position::new(0.0, 0.0),
        };
        let catalog = RouteCatalog::new(vec![route("a", "first"), route("a", "second")]);

        assert_eq!(catalog.find("a").unwrap().title, "first");
        assert!(catalog.find("b").is_none());
        assert!(RouteCatalog::default().find("a").is_none());
    }

    #[test]
    fn empty_control_value_means_no_selection() {
        assert!(Selection::from_control_value("").is_empty());
        assert_eq!(Selection::from_control_value("").control_value(), "");

        let selected = Selection::from_control_value("r1");
        assert_eq!(selected.route_id(), Some("r1"));
        assert_eq!(selected.control_value(), "r1");
    }

    #[test]
    fn position_validation_rejects_out_of_range_and_nan() {
        assert!(Position::new(-23.5, -46.6).is_valid());
        assert!(!Position::new(91.0, 0.0).is_valid());
        assert!(!Position::new(0.0, 181.0).is_valid());
        assert!(!Position::new(f64::NAN, 0.0).is_valid());
    }
}
