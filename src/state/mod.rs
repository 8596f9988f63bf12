// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod navigation;
pub mod activation_state;
pub mod clock_state;
pub mod screen_scope;
pub mod app_state;

pub use navigation::*;
pub use activation_state::*;
pub use clock_state::*;
pub use screen_scope::*;
pub use app_state::*;
