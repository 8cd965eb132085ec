pub mod curves;
pub mod domain;
pub mod hub;
pub mod kinematics;
pub mod resistance;

pub use curves::PowertrainCurves;
pub use domain::SpeedDomain;
pub use kinematics::GearSpeedSeries;
pub use resistance::{ResistanceModel, ResistanceSeries};
