pub mod error;
pub mod filter;
pub mod speed;
pub mod track_point;

pub use error::{FilterError, SpeedError};
pub use filter::{filter, filter_with_report, FilterReport};
pub use track_point::TrackPoint;
