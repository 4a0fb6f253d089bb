/// Paleta de colores para distinguir corridas en el mapa
pub const ROUTE_COLORS: [&str; 10] = [
    "#b71c1c",
    "#4a148c",
    "#2e7d32",
    "#e65100",
    "#2962ff",
    "#c2185b",
    "#FFCD00",
    "#3e2723",
    "#03a9f4",
    "#827717",
];

/// Id del contenedor DOM del mapa
pub const MAP_CONTAINER_ID: &str = "map";

/// Duración de un snackbar en pantalla (ms)
pub const NOTICE_TIMEOUT_MS: u32 = 4_000;
