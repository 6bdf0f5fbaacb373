//! Orchestration services for menu sessions.

mod follow_up;
mod handle;
mod reaper;
mod session;
mod template;

pub use follow_up::FollowUp;
pub use handle::SessionHandle;
pub use reaper::TimeoutReaper;
pub use session::{MenuBuilder, MenuError, MenuResult, MenuSession};
pub use template::{render_footer, render_text};
