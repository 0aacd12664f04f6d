pub mod stacked;

mod axes_draw;
