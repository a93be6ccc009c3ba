//! User interface rendering and input handling.
//!
//! - **layout**: session lines to wrapped display rows
//! - **renderer**: crossterm drawing of the terminal window and form overlay
//! - **keymap**: key events to application actions

pub mod keymap;
pub mod layout;
pub mod renderer;

pub use keymap::{Action, FormAction, KeyMapper};
pub use renderer::{Renderer, View};
