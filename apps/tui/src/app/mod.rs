// App module for fan_value_engine
// Holds the interactive selection state and key handling

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::App;
