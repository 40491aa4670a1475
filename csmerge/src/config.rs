//--------------------------------------------------------------------
// config.rs
//--------------------------------------------------------------------
// Process-wide numeric tunables and the one-time initialisation hook
//--------------------------------------------------------------------

use std::sync::{Once, RwLock};

use crate::once_cell::sync::Lazy;

use crate::geometry::Coord;

/// The numeric knobs consulted by the library. `float_precision` is the
/// tolerance under which two points compare equal; the other two are only
/// consulted by the polyline fallback backend.
///
/// The tunables are process-wide: set them before starting a merge and do
/// not mutate them while one is in flight.
#[derive(Copy, Clone, Debug)]
pub struct Config {
    pub float_precision: Coord,
    pub min_lseg_length: Coord,
    pub max_lsegs_per_bezier: Coord,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            float_precision: 0.001,
            min_lseg_length: 1.0,
            max_lsegs_per_bezier: 10.0,
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));
static INIT: Once = Once::new();

/// Installs the diagnostic warning/error hooks. Call once before any other
/// core function; reinstallation is a no-op.
pub fn initialise() {
    INIT.call_once(|| {
        let _ = env_logger::try_init();
    });
}

pub fn config() -> Config {
    *CONFIG.read().unwrap()
}

pub fn set_config(cfg: Config) {
    *CONFIG.write().unwrap() = cfg;
}

pub fn float_precision() -> Coord {
    config().float_precision
}

pub fn set_float_precision(value: Coord) {
    CONFIG.write().unwrap().float_precision = value;
}

pub fn min_lseg_length() -> Coord {
    config().min_lseg_length
}

pub fn set_min_lseg_length(value: Coord) {
    CONFIG.write().unwrap().min_lseg_length = value;
}

pub fn max_lsegs_per_bezier() -> Coord {
    config().max_lsegs_per_bezier
}

pub fn set_max_lsegs_per_bezier(value: Coord) {
    CONFIG.write().unwrap().max_lsegs_per_bezier = value;
}
