//! Application state module

mod app_state;
mod celebration_state;
pub(crate) mod events;
mod forms;

pub use app_state::*;
pub use events::FormEvents;
pub use forms::*;

#[cfg(test)]
pub use events::MockFormEvents;
