pub mod chart_card;
pub mod findings;
pub mod header;
pub mod info_grid;
pub mod kpi;
pub mod nav;
pub mod page_header;
pub mod stats_table;
pub mod status;
pub mod tabs;
