use std::collections::BTreeMap;
use crate::models::Position;
use super::{AddRouteOutcome, MapError, MapSurface, RouteMarkers};

/// Contabilidad en memoria de las corridas activas.
///
/// La superficie web delega aquí el invariante de unicidad y la validación de
/// coordenadas antes de tocar el mapa JS.
#[derive(Clone, Default, Debug)]
pub struct ActiveRouteSet {
    routes: BTreeMap<String, RouteMarkers>,
}

impl ActiveRouteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self, route_id: &str) -> Option<&RouteMarkers> {
        self.routes.get(route_id)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn check_position(position: Position) -> Result<(), MapError> {
    if position.is_valid() {
        Ok(())
    } else {
        Err(MapError::InvalidCoordinates { lat: position.lat, lng: position.lng })
    }
}

impl MapSurface for ActiveRouteSet {
    fn add_route(&mut self, route_id: &str, markers: RouteMarkers) -> AddRouteOutcome {
        if self.routes.contains_key(route_id) {
            return AddRouteOutcome::AlreadyActive;
        }
        for position in [markers.vehicle.position, markers.destination.position] {
            if let Err(e) = check_position(position) {
                return AddRouteOutcome::Fault(e);
            }
        }

        self.routes.insert(route_id.to_string(), markers);
        AddRouteOutcome::Added
    }

    fn move_vehicle(&mut self, route_id: &str, position: Position) -> Result<(), MapError> {
        check_position(position)?;
        let markers = self
            .routes
            .get_mut(route_id)
            .ok_or_else(|| MapError::RouteNotActive(route_id.to_string()))?;
        markers.vehicle.position = position;
        Ok(())
    }

    fn remove_route(&mut self, route_id: &str) -> Result<(), MapError> {
        self.routes
            .remove(route_id)
            .map(|_| ())
            .ok_or_else(|| MapError::RouteNotActive(route_id.to_string()))
    }

    fn is_active(&self, route_id: &str) -> bool {
        self.routes.contains_key(route_id)
    }

    fn active_route_ids(&self) -> Vec<String> {
        self.routes.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Route;

    fn route(id: &str, start: (f64, f64), end: (f64, f64)) -> Route {
        Route {
            id: id.to_string(),
            title: format!("Route {}", id),
            start_position: Position::new(start.0, start.1),
            end_position: Position::new(end.0, end.1),
        }
    }

    #[test]
    fn duplicate_add_is_rejected_without_overwriting() {
        let mut set = ActiveRouteSet::new();
        let r1 = route("r1", (1.0, 1.0), (2.0, 2.0));

        assert_eq!(set.add_route("r1", RouteMarkers::for_route(&r1, "#b71c1c")), AddRouteOutcome::Added);
        assert_eq!(
            set.add_route("r1", RouteMarkers::for_route(&r1, "#2962ff")),
            AddRouteOutcome::AlreadyActive
        );

        assert_eq!(set.len(), 1);
        assert_eq!(set.markers("r1").unwrap().vehicle.color, "#b71c1c");
    }

    #[test]
    fn invalid_coordinates_fault_and_leave_set_untouched() {
        let mut set = ActiveRouteSet::new();
        let broken = route("bad", (f64::NAN, 0.0), (2.0, 2.0));

        let outcome = set.add_route("bad", RouteMarkers::for_route(&broken, "#b71c1c"));

        assert!(matches!(outcome, AddRouteOutcome::Fault(MapError::InvalidCoordinates { .. })));
        assert!(set.is_empty());
    }

    #[test]
    fn move_and_remove_require_an_active_route() {
        let mut set = ActiveRouteSet::new();
        let r1 = route("r1", (1.0, 1.0), (2.0, 2.0));
        set.add_route("r1", RouteMarkers::for_route(&r1, "#4a148c"));

        set.move_vehicle("r1", Position::new(1.5, 1.5)).unwrap();
        assert_eq!(set.markers("r1").unwrap().vehicle.position, Position::new(1.5, 1.5));
        assert_eq!(set.markers("r1").unwrap().destination.position, Position::new(2.0, 2.0));

        assert_eq!(
            set.move_vehicle("r2", Position::new(0.0, 0.0)),
            Err(MapError::RouteNotActive("r2".to_string()))
        );

        set.remove_route("r1").unwrap();
        assert!(!set.is_active("r1"));
        assert!(set.remove_route("r1").is_err());
    }

    #[test]
    fn active_ids_are_sorted() {
        let mut set = ActiveRouteSet::new();
        for id in ["r3", "r1", "r2"] {
            set.add_route(id, RouteMarkers::for_route(&route(id, (0.0, 0.0), (1.0, 1.0)), "#2e7d32"));
        }
        assert_eq!(set.active_route_ids(), vec!["r1", "r2", "r3"]);
    }
}
