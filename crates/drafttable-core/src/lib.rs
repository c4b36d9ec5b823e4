//! DraftTable Core Library
//!
//! Geometry and interaction engine for a 2D drafting surface: constraint
//! resolution, picking, transforms, the pointer gesture state machine and the
//! interchange text codec.

pub mod assistant;
pub mod canvas;
pub mod geometry;
pub mod ids;
pub mod input;
pub mod interaction;
pub mod interchange;
pub mod selection;
pub mod shapes;
pub mod snap;
pub mod storage;
pub mod tools;
pub mod transform;
pub mod view;

pub use assistant::{AssistantError, AssistantOperation, AssistantReply, ElementSpec, SpecPoint};
pub use canvas::{starter_elements, Canvas};
pub use ids::{IdSource, RandomIds, SequentialIds};
pub use input::{KeyEvent, Modifiers, MouseButton, PointerEvent};
pub use interaction::{handle_key, handle_pointer, DragMode, DragSession, Edit, ElementSink, Frame, Gesture, Step};
pub use interchange::{export, import};
pub use selection::{box_contains, pick_topmost, HIT_TOLERANCE};
pub use shapes::{Circle, Element, ElementId, Line, Polyline, Rectangle, SerializableColor, Shape, ShapeTrait};
pub use snap::{resolve, snap_to_grid, DraftingAids, SnapResult, GRID_SIZE, OBJECT_SNAP_THRESHOLD};
pub use storage::{StorageError, StorageResult};
pub use tools::{create_shape, ToolKind, MIN_DRAW_DISTANCE};
pub use transform::{reflect, translate, MirrorLine, MIRROR_MIN_LENGTH};
pub use view::View;
