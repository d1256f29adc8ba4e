use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{validation_error, Error};

/// A named point on the map. Immutable once created; the store assigns the
/// id and records the creation instant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

impl Location {
    pub fn new(id: i64, name: String, latitude: f64, longitude: f64) -> Result<Self, Error> {
        if name.trim().is_empty() {
            return Err(validation_error("name must not be blank"));
        }

        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(validation_error(format!(
                "latitude must be a finite number in [-90, 90], got {}",
                latitude
            )));
        }

        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(validation_error(format!(
                "longitude must be a finite number in [-180, 180], got {}",
                longitude
            )));
        }

        Ok(Self {
            id,
            name,
            latitude,
            longitude,
            created_at: Utc::now(),
        })
    }
}

#[test]
fn new_location() {
    let location = Location::new(1, "Tower Bridge".into(), 51.5055, -0.0754).unwrap();

    assert_eq!(location.id, 1);
    assert_eq!(location.name, "Tower Bridge");
}

#[test]
fn blank_name_rejected() {
    assert!(Location::new(1, "".into(), 0.0, 0.0).is_err());
    assert!(Location::new(1, "   ".into(), 0.0, 0.0).is_err());
}

#[test]
fn out_of_range_coordinates_rejected() {
    assert!(Location::new(1, "a".into(), 95.0, 0.0).is_err());
    assert!(Location::new(1, "a".into(), -95.0, 0.0).is_err());
    assert!(Location::new(1, "a".into(), 0.0, -200.0).is_err());
    assert!(Location::new(1, "a".into(), 0.0, 200.0).is_err());
}

#[test]
fn non_finite_coordinates_rejected() {
    assert!(Location::new(1, "a".into(), f64::NAN, 0.0).is_err());
    assert!(Location::new(1, "a".into(), 0.0, f64::INFINITY).is_err());
}

#[test]
fn boundary_coordinates_accepted() {
    assert!(Location::new(1, "a".into(), 90.0, 180.0).is_ok());
    assert!(Location::new(1, "a".into(), -90.0, -180.0).is_ok());
}
