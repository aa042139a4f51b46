// Statistics module.
// Record type, source seam, and the cache-and-fetch widget.

pub mod record;
pub mod skills;
pub mod source;
pub mod widget;

pub use record::StatsRecord;
pub use source::StatsSource;
pub use widget::StatsWidget;
