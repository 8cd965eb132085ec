use crate::math::{SeriesHelper, MS_TO_KMH};
use crate::processing::kinematics::GearSpeedSeries;
use serde::{Deserialize, Serialize};

/// Distinct vehicle speeds reached in any gear, ascending. Shared x-axis for the
/// road-load curves.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpeedDomain {
    pub speed_ms: Vec<f64>,
    pub speed_kmh: Vec<f64>,
}

impl SpeedDomain {
    pub fn from_gears(gears: &[GearSpeedSeries]) -> Self {
        let speed_ms = SeriesHelper::sorted_union(gears.iter().map(|g| g.speed_ms.as_slice()));
        let speed_kmh = SeriesHelper::scale(&speed_ms, MS_TO_KMH);
        Self {
            speed_ms,
            speed_kmh,
        }
    }

    pub fn len(&self) -> usize {
        self.speed_ms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speed_ms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::vehicle::tests::sample_params;
    use crate::processing::kinematics::gear_speed_series;

    fn series(gear: usize, speed_ms: Vec<f64>) -> GearSpeedSeries {
        let speed_kmh = SeriesHelper::scale(&speed_ms, MS_TO_KMH);
        GearSpeedSeries {
            gear,
            ratio: 1.0,
            speed_ms,
            speed_kmh,
        }
    }

    #[test]
    fn domain_is_sorted_set_of_gear_speeds() {
        let gears = gear_speed_series(&sample_params());
        let domain = SpeedDomain::from_gears(&gears);

        let total: usize = gears.iter().map(|g| g.speed_ms.len()).sum();
        assert!(domain.len() <= total);
        assert!(SeriesHelper::is_strictly_increasing(&domain.speed_ms));
        for gear in &gears {
            for v in &gear.speed_ms {
                assert!(domain.speed_ms.contains(v));
            }
        }
        for v in &domain.speed_ms {
            assert!(gears.iter().any(|g| g.speed_ms.contains(v)));
        }
    }

    #[test]
    fn coincident_speeds_collapse_to_one_point() {
        let gears = vec![series(1, vec![1.0, 2.0, 3.0]), series(2, vec![2.0, 4.0, 6.0])];
        let domain = SpeedDomain::from_gears(&gears);
        assert_eq!(domain.speed_ms, vec![1.0, 2.0, 3.0, 4.0, 6.0]);
        assert_eq!(domain.speed_kmh.len(), 5);
        assert_eq!(domain.speed_kmh[3], 3.6 * 4.0);
    }

    #[test]
    fn empty_gear_list_yields_empty_domain() {
        let domain = SpeedDomain::from_gears(&[]);
        assert!(domain.is_empty());
    }
}
