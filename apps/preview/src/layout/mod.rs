// Page layout for the live preview: page geometry, break markers, and the
// throttled observer that tracks how tall the rendered content is.

pub mod geometry;
pub mod markers;
pub mod observer;
pub mod throttle;

pub use geometry::page_break_count;
pub use markers::{page_break_markers, PageBreakMarker};
pub use observer::{ContentContainer, HeightSample, LayoutObserver, ReportedContainer};
