mod make_box;

pub use make_box::make_box;
