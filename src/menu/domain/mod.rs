//! Domain model for paginated interactive menus.
//!
//! The domain holds the pure parts of a menu: page arithmetic, the option
//! window of the jump-to-page dropdown, control descriptors, the
//! authorization gate, and the session state those are projected from.
//! Nothing in here performs I/O.

mod config;
mod control;
mod error;
mod gate;
mod ids;
mod message;
mod page;
mod renderable;
mod select;
mod session;

pub use config::MenuConfig;
pub use control::{
    Button, ButtonStyle, CUSTOM_ROW, ControlSet, Intent, NAVIGATION_ROW, SELECT_ROW, SelectMenu,
    navigation_buttons,
};
pub use error::MenuDomainError;
pub use gate::AuthorizationGate;
pub use ids::{ChannelId, MessageId, SessionId, UserId};
pub use message::{Destination, Interaction, Invocation, MessageHandle, MessagePayload};
pub use page::{MaxPages, PageView, ResolvedTarget, offset_index, resolve_target};
pub use renderable::{Embed, EmbedAuthor, EmbedField, Renderable};
pub use select::{OPTION_DESCRIPTION_LIMIT, SELECT_OPTION_LIMIT, SelectOption, select_window};
pub use session::{SessionPhase, SessionState, Transition};
