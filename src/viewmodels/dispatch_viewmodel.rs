// ============================================================================
// DISPATCH VIEWMODEL - Flujo "iniciar corrida" + actualizaciones de posición
// ============================================================================
// Sin DOM: recibe la superficie de mapa y el emisor como traits
// ============================================================================

use rand::Rng;
use thiserror::Error;
use crate::maps::{AddRouteOutcome, MapError, MapSurface, RouteMarkers};
use crate::models::{Notice, PositionUpdate, RouteCatalog, Selection};
use crate::services::DirectionEmitter;
use super::palette::pick_route_color;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DispatchPhase {
    #[default]
    Idle,
    Dispatching,
}

/// Resultado de un envío del formulario que no es una falla
#[derive(Clone, PartialEq, Debug)]
pub enum DispatchOutcome {
    Started { route_id: String, color: &'static str },
    AlreadyActive { route_id: String, title: String },
    NoSelection,
    UnknownRoute { route_id: String },
    MapUnavailable,
    /// Envío reentrante mientras otro está en curso
    Busy,
}

impl DispatchOutcome {
    /// Aviso para el despachador, si corresponde
    pub fn notice(&self) -> Option<Notice> {
        match self {
            DispatchOutcome::Started { .. } | DispatchOutcome::Busy => None,
            DispatchOutcome::AlreadyActive { title, .. } => {
                Some(Notice::error(format!("{} já adicionado, esperar finalizar", title)))
            }
            DispatchOutcome::NoSelection => Some(Notice::info("Selecione uma corrida")),
            DispatchOutcome::UnknownRoute { route_id } => {
                Some(Notice::error(format!("Corrida {} não encontrada", route_id)))
            }
            DispatchOutcome::MapUnavailable => Some(Notice::error("Mapa ainda não está pronto")),
        }
    }
}

/// Falla inesperada del mapa: no se maneja en el flujo, se propaga
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("map fault while starting route {route_id}: {source}")]
    MapFault { route_id: String, source: MapError },
}

/// Vuelve a Idle al salir del envío, también con error
struct PhaseGuard<'a>(&'a mut DispatchPhase);

impl<'a> PhaseGuard<'a> {
    fn enter(phase: &'a mut DispatchPhase) -> Option<Self> {
        if *phase == DispatchPhase::Dispatching {
            return None;
        }
        *phase = DispatchPhase::Dispatching;
        Some(Self(phase))
    }
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        *self.0 = DispatchPhase::Idle;
    }
}

#[derive(Default, Debug)]
pub struct DispatchViewModel {
    phase: DispatchPhase,
}

impl DispatchViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DispatchPhase {
        self.phase
    }

    /// Iniciar la corrida seleccionada.
    ///
    /// Solo emite `new-direction` si el mapa aceptó la corrida. `AlreadyActive`
    /// se traduce en aviso; cualquier otra falla del mapa sale como
    /// `DispatchError`.
    pub fn start_route<S, E, R>(
        &mut self,
        catalog: &RouteCatalog,
        selection: &Selection,
        surface: Option<&mut S>,
        emitter: &E,
        rng: &mut R,
    ) -> Result<DispatchOutcome, DispatchError>
    where
        S: MapSurface + ?Sized,
        E: DirectionEmitter + ?Sized,
        R: Rng + ?Sized,
    {
        let Some(_guard) = PhaseGuard::enter(&mut self.phase) else {
            log::warn!("⚠️ Envío ignorado: ya hay un despacho en curso");
            return Ok(DispatchOutcome::Busy);
        };

        let Some(route_id) = selection.route_id() else {
            return Ok(DispatchOutcome::NoSelection);
        };
        let Some(route) = catalog.find(route_id) else {
            log::warn!("⚠️ Corrida {} no está en el catálogo ({} corridas)", route_id, catalog.len());
            return Ok(DispatchOutcome::UnknownRoute { route_id: route_id.to_string() });
        };
        let Some(surface) = surface else {
            log::warn!("⚠️ Mapa no inicializado, no se puede iniciar {}", route_id);
            return Ok(DispatchOutcome::MapUnavailable);
        };

        let color = pick_route_color(rng);
        match surface.add_route(&route.id, RouteMarkers::for_route(route, color)) {
            AddRouteOutcome::Added => {
                emitter.emit_new_direction(&route.id);
                log::info!("🚗 Corrida '{}' iniciada ({})", route.title, color);
                Ok(DispatchOutcome::Started { route_id: route.id.clone(), color })
            }
            AddRouteOutcome::AlreadyActive => {
                log::info!("🔁 Corrida '{}' ya está activa", route.title);
                Ok(DispatchOutcome::AlreadyActive {
                    route_id: route.id.clone(),
                    title: route.title.clone(),
                })
            }
            AddRouteOutcome::Fault(source) => Err(DispatchError::MapFault {
                route_id: route.id.clone(),
                source,
            }),
        }
    }

    /// Aplica un `new-position`: mueve el vehículo y, si terminó, libera la corrida
    pub fn apply_position_update<S>(
        catalog: &RouteCatalog,
        surface: &mut S,
        update: &PositionUpdate,
    ) -> Result<Option<Notice>, MapError>
    where
        S: MapSurface + ?Sized,
    {
        if !surface.is_active(&update.route_id) {
            log::debug!("Posición para corrida inactiva {} ignorada", update.route_id);
            return Ok(None);
        }

        if !update.finished {
            surface.move_vehicle(&update.route_id, update.position())?;
            return Ok(None);
        }

        // La corrida termina aunque la última posición sea inválida
        if let Err(e) = surface.move_vehicle(&update.route_id, update.position()) {
            log::warn!("⚠️ Última posición de {} descartada: {}", update.route_id, e);
        }

        surface.remove_route(&update.route_id)?;
        let title = catalog
            .find(&update.route_id)
            .map(|route| route.title.as_str())
            .unwrap_or(update.route_id.as_str());
        log::info!("🏁 Corrida '{}' finalizada", title);
        Ok(Some(Notice::success(format!("{} finalizou!", title))))
    }
}
