//! Demo workflow for the Alfred Dependency Bundler.
//!
//! The binary runs one of four Script Filter / Run Script actions. Each one
//! shows a different way of using helpers the bundler installs:
//! `terminal-notifier` for notifications, `Pashua` and `cocoaDialog` for
//! dialogs, and the bundler's icon API for coloured Font Awesome glyphs.

pub mod apps;
pub mod cli;
pub mod env;
pub mod error;
pub mod fontawesome;
pub mod logging;
pub mod sys;
pub mod tools;
pub mod workflow;
