use serde::{Deserialize, Serialize};

use crate::entities::Location;

/// A computed closed tour over the currently saved locations. Never
/// persisted; rebuilt from the live store snapshot on every request. The
/// closing leg back to `stops[0]` is implicit, consumers append it when
/// drawing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Route {
    pub stops: Vec<Location>,
    pub total_distance_m: f64,
}

impl Route {
    pub fn new(stops: Vec<Location>, total_distance_m: f64) -> Self {
        Self {
            stops,
            total_distance_m,
        }
    }
}
