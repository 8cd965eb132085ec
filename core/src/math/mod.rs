pub mod series;
pub mod units;

pub use series::SeriesHelper;
pub use units::{MS_TO_KMH, RPM_TO_RAD_PER_S, W_PER_KW};
