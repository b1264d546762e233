pub mod dispatch;
pub mod update;

pub use dispatch::spawn_turn;
pub use update::UiUpdate;
