//! Stateless control descriptors and the intents they emit.
//!
//! Controls never hold a reference to the session that owns them. The
//! session projects a [`ControlSet`] from its state on every render, and
//! the host maps a component activation back into an [`Intent`] which the
//! session interprets.

use serde::{Deserialize, Serialize};

use super::{MenuDomainError, SelectOption};

/// Action requested by activating a control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Intent {
    /// Jump to the first page.
    First,
    /// Step back one page.
    Back,
    /// Step forward one page.
    Forward,
    /// Jump to the last page.
    Last,
    /// Tear the menu down.
    Stop,
    /// Jump to the page encoded in a dropdown option value.
    Select(String),
    /// Activate a domain control registered on the session.
    Custom(String),
}

impl Intent {
    const CUSTOM_PREFIX: &'static str = "custom:";

    /// Returns the component key used to route platform events back to
    /// this intent.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::First => "first".to_owned(),
            Self::Back => "back".to_owned(),
            Self::Forward => "forward".to_owned(),
            Self::Last => "last".to_owned(),
            Self::Stop => "stop".to_owned(),
            Self::Select(_) => "select".to_owned(),
            Self::Custom(id) => format!("{}{id}", Self::CUSTOM_PREFIX),
        }
    }

    /// Rebuilds an intent from a component key and, for dropdowns, the
    /// picked value.
    ///
    /// # Errors
    ///
    /// Returns [`MenuDomainError::UnknownComponent`] when the key is not
    /// recognised or a dropdown event carries no value.
    pub fn from_component(key: &str, values: &[String]) -> Result<Self, MenuDomainError> {
        match key {
            "first" => Ok(Self::First),
            "back" => Ok(Self::Back),
            "forward" => Ok(Self::Forward),
            "last" => Ok(Self::Last),
            "stop" => Ok(Self::Stop),
            "select" => values
                .first()
                .map(|value| Self::Select(value.clone()))
                .ok_or_else(|| MenuDomainError::UnknownComponent(key.to_owned())),
            other => other
                .strip_prefix(Self::CUSTOM_PREFIX)
                .filter(|id| !id.is_empty())
                .map(|id| Self::Custom(id.to_owned()))
                .ok_or_else(|| MenuDomainError::UnknownComponent(other.to_owned())),
        }
    }

    /// Returns `true` for the page navigation intents.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::First | Self::Back | Self::Forward | Self::Last | Self::Select(_)
        )
    }
}

/// Visual style of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    /// Highlighted call to action.
    Primary,
    /// Neutral grey button.
    Secondary,
    /// Green confirmation button.
    Success,
    /// Red destructive button.
    Danger,
}

/// Row holding the navigation buttons.
pub const NAVIGATION_ROW: u8 = 0;
/// Row holding domain buttons.
pub const CUSTOM_ROW: u8 = 1;
/// Row holding the jump-to-page dropdown.
pub const SELECT_ROW: u8 = 2;

/// Button descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    intent: Intent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    emoji: Option<String>,
    style: ButtonStyle,
    row: u8,
    disabled: bool,
}

impl Button {
    /// Creates an enabled button for an intent.
    #[must_use]
    pub const fn new(intent: Intent, style: ButtonStyle, row: u8) -> Self {
        Self {
            intent,
            label: None,
            emoji: None,
            style,
            row,
            disabled: false,
        }
    }

    /// Creates a labelled primary button for a domain control.
    #[must_use]
    pub fn custom(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(Intent::Custom(id.into()), ButtonStyle::Primary, CUSTOM_ROW)
            .with_label(label)
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the emoji.
    #[must_use]
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Sets the disabled flag.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Returns the intent emitted on activation.
    #[must_use]
    pub const fn intent(&self) -> &Intent {
        &self.intent
    }

    /// Returns the label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the emoji, if any.
    #[must_use]
    pub fn emoji(&self) -> Option<&str> {
        self.emoji.as_deref()
    }

    /// Returns the style.
    #[must_use]
    pub const fn style(&self) -> ButtonStyle {
        self.style
    }

    /// Returns the layout row.
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Returns `true` when the button cannot be pressed.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Builds the standard navigation row.
#[must_use]
pub fn navigation_buttons(disabled: bool) -> Vec<Button> {
    let nav = |intent, emoji: &str| {
        Button::new(intent, ButtonStyle::Secondary, NAVIGATION_ROW)
            .with_emoji(emoji)
            .disabled(disabled)
    };
    vec![
        nav(Intent::First, "\u{23EE}\u{FE0F}"),
        nav(Intent::Back, "\u{25C0}\u{FE0F}"),
        nav(Intent::Forward, "\u{25B6}\u{FE0F}"),
        nav(Intent::Last, "\u{23ED}\u{FE0F}"),
        Button::new(Intent::Stop, ButtonStyle::Danger, NAVIGATION_ROW).with_emoji("\u{2716}\u{FE0F}"),
    ]
}

/// Jump-to-page dropdown descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectMenu {
    options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,
    disabled: bool,
}

impl SelectMenu {
    /// Creates an enabled dropdown over the given option window.
    #[must_use]
    pub const fn new(options: Vec<SelectOption>, placeholder: Option<String>) -> Self {
        Self {
            options,
            placeholder,
            disabled: false,
        }
    }

    /// Sets the disabled flag.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Returns the displayed options.
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Returns the placeholder text.
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Returns the layout row.
    #[must_use]
    pub const fn row(&self) -> u8 {
        SELECT_ROW
    }

    /// Returns `true` when the dropdown cannot be used.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Full set of controls attached to a menu message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSet {
    buttons: Vec<Button>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    select: Option<SelectMenu>,
}

impl ControlSet {
    /// Creates a control set.
    #[must_use]
    pub const fn new(buttons: Vec<Button>, select: Option<SelectMenu>) -> Self {
        Self { buttons, select }
    }

    /// Creates an empty control set, used to detach controls from a
    /// message.
    #[must_use]
    pub const fn detached() -> Self {
        Self {
            buttons: Vec::new(),
            select: None,
        }
    }

    /// Returns the buttons in display order.
    #[must_use]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Returns the dropdown, if any.
    #[must_use]
    pub const fn select(&self) -> Option<&SelectMenu> {
        self.select.as_ref()
    }

    /// Finds the button emitting the given intent.
    #[must_use]
    pub fn button(&self, intent: &Intent) -> Option<&Button> {
        self.buttons.iter().find(|button| button.intent() == intent)
    }

    /// Returns `true` when no control is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty() && self.select.is_none()
    }

    /// Returns `true` when every navigation control, including the
    /// dropdown, is disabled.
    #[must_use]
    pub fn navigation_disabled(&self) -> bool {
        let buttons_disabled = self
            .buttons
            .iter()
            .filter(|button| button.intent().is_navigation())
            .all(Button::is_disabled);
        let select_disabled = self.select.as_ref().is_none_or(SelectMenu::is_disabled);
        buttons_disabled && select_disabled
    }
}
