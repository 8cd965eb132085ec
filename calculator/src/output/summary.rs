use ptcore::PowertrainCurves;
use std::fmt;

/// Short console report of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub rpm_samples: usize,
    pub domain_points: usize,
    /// (gear, top speed [km/h]) in gear order.
    pub gear_top_speeds: Vec<(usize, f64)>,
    pub peak_hub_power_kw: f64,
}

impl RunSummary {
    pub fn from_curves(curves: &PowertrainCurves) -> Self {
        Self {
            rpm_samples: curves.rpm.len(),
            domain_points: curves.domain.len(),
            gear_top_speeds: curves
                .gears
                .iter()
                .filter_map(|gear| gear.top_speed_kmh().map(|speed| (gear.gear, speed)))
                .collect(),
            peak_hub_power_kw: curves.peak_hub_power().unwrap_or(0.0),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "rpm samples {}, unified speed points {}",
            self.rpm_samples, self.domain_points
        )?;
        for (gear, speed) in &self.gear_top_speeds {
            writeln!(f, "  gear {}: {:.1} km/h at max rpm", gear, speed)?;
        }
        write!(f, "peak hub power {:.2} kW", self.peak_hub_power_kw)
    }
}
