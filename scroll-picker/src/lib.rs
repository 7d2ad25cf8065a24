pub mod drag;
pub mod error;
pub mod event;
pub mod geometry;
pub mod item;
pub mod motion;
pub mod options;
pub mod picker;
pub mod resolver;
pub mod state;
pub mod transitions;
pub mod wheel;

pub use drag::{DragDriver, DragSample};
pub use error::PickerError;
pub use event::{Input, PickerEvent, Pointer};
pub use geometry::Geometry;
pub use item::Item;
pub use motion::Motion;
pub use options::PickerOptions;
pub use picker::Picker;
pub use resolver::{Direction, Target};
pub use state::{Column, ScrollState};
pub use transitions::{Easing, Transition};
pub use wheel::WheelDriver;
