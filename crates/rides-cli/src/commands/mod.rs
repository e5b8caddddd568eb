mod track;
mod view;

pub use track::handle_track;
pub use view::handle_view;
