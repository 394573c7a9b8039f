pub mod feedback;
pub mod filter;
pub mod settings;

pub use feedback::Feedback;
pub use feedback::Item;
pub use settings::Settings;
