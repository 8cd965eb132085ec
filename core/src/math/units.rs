use std::f64::consts::PI;

/// Engine speed in rev/min to angular speed in rad/s.
pub const RPM_TO_RAD_PER_S: f64 = PI / 30.0;

/// Vehicle speed in m/s to km/h.
pub const MS_TO_KMH: f64 = 3.6;

/// Watts per kilowatt.
pub const W_PER_KW: f64 = 1000.0;

pub fn ms_to_kmh(speed_ms: f64) -> f64 {
    MS_TO_KMH * speed_ms
}

pub fn kmh_to_ms(speed_kmh: f64) -> f64 {
    speed_kmh / MS_TO_KMH
}
