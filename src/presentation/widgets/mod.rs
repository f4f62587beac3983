mod footer_bar;
mod header_bar;
mod input;
mod nav_bar;
mod score_bar;
mod status_bar;
mod waveform;

pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use nav_bar::NavBar;
pub use score_bar::ScoreBar;
pub use status_bar::{Notice, StatusBar, StatusLevel};
pub use waveform::{BAR_COUNT, MAX_HEIGHT, MIN_HEIGHT, Waveform, WaveformView};
