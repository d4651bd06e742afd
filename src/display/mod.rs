// Display module - framework-neutral presentation helpers

pub mod course_style;
pub mod render;

pub use course_style::{course_style, CourseOption, CourseStyle, COURSE_OPTIONS};
pub use render::{
    format_price, render_manage_list, render_menu, render_menu_card, render_stats_panel,
};
