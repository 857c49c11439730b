pub mod intersection_segment;
pub mod intersection_tracker;
pub mod pair_key;
pub mod reconcile_report;
pub mod segment_event;
pub mod segment_sink;
pub mod tracker_options;

pub use intersection_segment::*;
pub use intersection_tracker::*;
pub use pair_key::*;
pub use reconcile_report::*;
pub use segment_event::*;
pub use segment_sink::*;
pub use tracker_options::*;
