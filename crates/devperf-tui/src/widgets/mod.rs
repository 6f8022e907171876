//! Custom widgets for the dashboard

mod device_table;
mod filter_bar;
mod header;
mod info_banner;
mod metric_carousel;
mod pagination;
mod score_nav;

pub use device_table::{DeviceTable, EMPTY_MESSAGE};
pub use filter_bar::FilterBar;
pub use header::MainHeader;
pub use info_banner::InfoBanner;
pub use metric_carousel::MetricCarousel;
pub use pagination::PaginationBar;
pub use score_nav::ScoreNav;
