mod components;
mod state;
mod view;

pub use view::TrackerView;
