//! Menu session orchestration: the page transition state machine.

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

use crate::menu::{
    domain::{
        AuthorizationGate, ControlSet, Destination, Intent, Interaction, Invocation,
        MenuDomainError, MenuConfig, MessagePayload, PageView, Renderable, ResolvedTarget,
        SelectMenu, SessionPhase, SessionState, Transition, navigation_buttons, offset_index,
        resolve_target, select_window,
    },
    ports::{
        ControlOutcome, CustomControl, MessageSink, PageSource, PageSourceError, ReplyCollector,
        SinkError,
    },
    services::{follow_up::FollowUp, template::render_footer},
};

/// Service-level errors for menu sessions.
#[derive(Debug, Clone, Error)]
pub enum MenuError {
    /// A platform component could not be mapped to an intent.
    #[error(transparent)]
    Domain(#[from] MenuDomainError),
    /// The chat transport rejected an operation. Nothing was committed.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Result type for menu session operations.
pub type MenuResult<T> = Result<T, MenuError>;

/// Page content and controls prepared for one transition.
enum Rendered {
    Page {
        index: usize,
        payload: MessagePayload,
    },
    NoContent(MessagePayload),
    OutOfRange,
}

/// Collects the parts of a menu before it is posted.
pub struct MenuBuilder<S, K, C>
where
    S: PageSource,
    K: MessageSink,
    C: Clock + Send + Sync,
{
    source: S,
    sink: Arc<K>,
    clock: Arc<C>,
    config: MenuConfig,
    controls: Vec<Box<dyn CustomControl<S>>>,
    replies: Option<Arc<dyn ReplyCollector>>,
}

impl<S, K, C> MenuBuilder<S, K, C>
where
    S: PageSource,
    K: MessageSink,
    C: Clock + Send + Sync,
{
    /// Creates a builder with no custom controls and no reply collector.
    #[must_use]
    pub fn new(source: S, sink: Arc<K>, clock: Arc<C>, config: MenuConfig) -> Self {
        Self {
            source,
            sink,
            clock,
            config,
            controls: Vec::new(),
            replies: None,
        }
    }

    /// Registers a custom control shown on the row below navigation.
    #[must_use]
    pub fn with_control(mut self, control: impl CustomControl<S> + 'static) -> Self {
        self.controls.push(Box::new(control));
        self
    }

    /// Sets the reply collector used by free-text follow-ups.
    #[must_use]
    pub fn with_replies(mut self, replies: Arc<dyn ReplyCollector>) -> Self {
        self.replies = Some(replies);
        self
    }

    /// Prepares the source, renders the opening page and posts the menu.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Sink`] when the menu message cannot be posted.
    pub async fn start(self, invocation: Invocation) -> MenuResult<MenuSession<S, K, C>> {
        let started_at = self.clock.utc();
        let deadline = TimeDelta::from_std(self.config.timeout())
            .ok()
            .and_then(|lifetime| started_at.checked_add_signed(lifetime))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        let state = SessionState::new(
            invocation.user(),
            self.config.page_start,
            started_at,
            deadline,
        );
        let mut session = MenuSession {
            source: self.source,
            sink: self.sink,
            clock: self.clock,
            gate: AuthorizationGate::new(invocation.user()),
            destination: *invocation.destination(),
            controls: self.controls,
            replies: self.replies,
            config: self.config,
            state,
        };
        session.open().await?;
        Ok(session)
    }
}

/// One live paginated menu bound to one message and one user.
pub struct MenuSession<S, K, C>
where
    S: PageSource,
    K: MessageSink,
    C: Clock + Send + Sync,
{
    source: S,
    sink: Arc<K>,
    clock: Arc<C>,
    config: MenuConfig,
    gate: AuthorizationGate,
    destination: Destination,
    controls: Vec<Box<dyn CustomControl<S>>>,
    replies: Option<Arc<dyn ReplyCollector>>,
    state: SessionState,
}

impl<S, K, C> MenuSession<S, K, C>
where
    S: PageSource,
    K: MessageSink,
    C: Clock + Send + Sync,
{
    /// Starts a menu with default extras. See [`MenuBuilder`] for custom
    /// controls and follow-ups.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Sink`] when the menu message cannot be posted.
    pub async fn start(
        source: S,
        sink: Arc<K>,
        clock: Arc<C>,
        config: MenuConfig,
        invocation: Invocation,
    ) -> MenuResult<Self> {
        MenuBuilder::new(source, sink, clock, config)
            .start(invocation)
            .await
    }

    /// Returns the session state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns the page source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Returns the time left before expiry, measured with the session
    /// clock.
    #[must_use]
    pub fn remaining(&self) -> std::time::Duration {
        self.state
            .deadline()
            .signed_duration_since(self.clock.utc())
            .to_std()
            .unwrap_or_default()
    }

    /// Handles one control activation.
    ///
    /// Interactions on an inert session return [`Transition::Inert`].
    /// Anyone but the authorized user gets an ephemeral notice, even after
    /// the deadline. The authorized user's first press past the deadline
    /// expires the session.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Sink`] when an edit, delete or notice fails.
    /// The session keeps its previous page in that case.
    pub async fn interact(&mut self, interaction: &Interaction) -> MenuResult<Transition> {
        if self.state.is_terminal() {
            return Ok(Transition::Inert);
        }
        if let Err(err) = self.gate.check(interaction.user()) {
            tracing::debug!(session_id = %self.state.id(), error = %err, "interaction rejected");
            self.sink
                .notify(interaction.user(), &self.config.unauthorized_notice)
                .await?;
            return Ok(Transition::Rejected);
        }
        if self.state.is_overdue(self.clock.utc()) {
            return self.expire().await;
        }
        let current = self.state.current_page();
        match interaction.intent() {
            Intent::First => self.goto(0).await,
            Intent::Back => self.goto(offset_index(current, -1)).await,
            Intent::Forward => self.goto(offset_index(current, 1)).await,
            Intent::Last => match self.source.max_pages().last_index() {
                Some(last) => self.goto(offset_index(last, 0)).await,
                None => Ok(Transition::Unchanged),
            },
            Intent::Stop => self.stop().await,
            Intent::Select(value) => {
                let page = self
                    .source
                    .select_provider()
                    .and_then(|provider| provider.page_for_value(value));
                match page {
                    Some(page) => self.goto(offset_index(page, 0)).await,
                    None => {
                        tracing::debug!(session_id = %self.state.id(), value = %value, "unknown select value");
                        Ok(Transition::Unchanged)
                    }
                }
            }
            Intent::Custom(id) => self.activate(id).await,
        }
    }

    /// Shows the page at `target`, wrapping at both ends when the page
    /// count is known.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Sink`] when the edit fails; `current_page` is
    /// left untouched.
    pub async fn goto(&mut self, target: isize) -> MenuResult<Transition> {
        if self.state.is_terminal() {
            return Ok(Transition::Inert);
        }
        self.state.begin_transition();
        let result = self.transition(target).await;
        self.state.end_transition();
        result
    }

    /// Tears the menu down: the message is deleted, or for ephemeral
    /// responses stripped of its controls. Only the first call acts.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Sink`] when the teardown edit or delete fails.
    /// The session stays stopped.
    pub async fn stop(&mut self) -> MenuResult<Transition> {
        if !self.state.finish(SessionPhase::Stopped) {
            return Ok(Transition::Inert);
        }
        tracing::info!(session_id = %self.state.id(), "menu session stopped");
        let Some(message) = self.state.message().copied() else {
            return Ok(Transition::Stopped);
        };
        let result = if message.is_ephemeral() {
            self.sink.edit(&message, &MessagePayload::detach()).await
        } else {
            self.sink.delete(&message).await
        };
        match result {
            Ok(()) | Err(SinkError::NotFound(_)) => Ok(Transition::Stopped),
            Err(err) => Err(self.sink_failure(err)),
        }
    }

    /// Expires the menu: the message stays with its controls removed.
    /// Only the first call acts.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Sink`] when the teardown edit fails. The
    /// session stays expired.
    pub async fn expire(&mut self) -> MenuResult<Transition> {
        if !self.state.finish(SessionPhase::Expired) {
            return Ok(Transition::Inert);
        }
        tracing::info!(session_id = %self.state.id(), "menu session expired");
        let Some(message) = self.state.message().copied() else {
            return Ok(Transition::Expired);
        };
        match self.sink.edit(&message, &MessagePayload::detach()).await {
            Ok(()) | Err(SinkError::NotFound(_)) => Ok(Transition::Expired),
            Err(err) => Err(self.sink_failure(err)),
        }
    }

    async fn open(&mut self) -> MenuResult<()> {
        let prepared = self.source.prepare().await;
        let start = offset_index(self.config.page_start, 0);
        let rendered = match prepared {
            Ok(()) => self.render(start).await,
            Err(err) => Rendered::NoContent(self.no_content_payload(&err)),
        };
        let (payload, page) = match rendered {
            Rendered::Page { index, payload } => (payload, Some(index)),
            Rendered::NoContent(payload) => (payload, None),
            Rendered::OutOfRange => (
                self.no_content_payload(&PageSourceError::OutOfRange {
                    index: self.config.page_start,
                }),
                None,
            ),
        };
        let message = self
            .sink
            .send(&self.destination, &payload)
            .await
            .map_err(|err| self.sink_failure(err))?;
        self.state.attach(message, payload.controls().clone());
        if let Some(index) = page {
            self.state.commit_page(index, payload.controls().clone());
        }
        tracing::info!(
            session_id = %self.state.id(),
            user = %self.state.authorized_user(),
            message_id = %message.id(),
            page = self.state.current_page(),
            "menu session started"
        );
        Ok(())
    }

    async fn transition(&mut self, target: isize) -> MenuResult<Transition> {
        match self.render(target).await {
            Rendered::OutOfRange => {
                tracing::debug!(session_id = %self.state.id(), requested = target, "page out of range ignored");
                Ok(Transition::Unchanged)
            }
            Rendered::NoContent(payload) => {
                self.edit(&payload).await?;
                Ok(Transition::NoContent)
            }
            Rendered::Page { index, payload } => {
                self.edit(&payload).await?;
                self.state.commit_page(index, payload.controls().clone());
                tracing::debug!(session_id = %self.state.id(), page = index, "page shown");
                Ok(Transition::Shown(index))
            }
        }
    }

    async fn render(&self, target: isize) -> Rendered {
        let max_pages = self.source.max_pages();
        let index = match resolve_target(target, max_pages) {
            ResolvedTarget::Page(index) => index,
            ResolvedTarget::OutOfRange => return Rendered::OutOfRange,
            ResolvedTarget::Empty => {
                return Rendered::NoContent(
                    self.no_content_payload(&PageSourceError::no_content(
                        self.config.no_content_notice.clone(),
                    )),
                );
            }
        };
        let page = match self.source.get_page(index).await {
            Ok(page) => page,
            Err(PageSourceError::OutOfRange { .. }) => return Rendered::OutOfRange,
            Err(err) => return Rendered::NoContent(self.no_content_payload(&err)),
        };
        let footer = render_footer(
            &self.config.footer_template,
            index.saturating_add(1),
            max_pages.known(),
        );
        let view = PageView::new(index, max_pages, self.state.authorized_user(), footer);
        match self.source.format_page(&view, page).await {
            Ok(body) => Rendered::Page {
                index,
                payload: MessagePayload::new(body, self.controls_for(index)),
            },
            Err(err) => Rendered::NoContent(self.no_content_payload(&err)),
        }
    }

    /// Projects the controls for `index` from the source and registered
    /// custom controls.
    fn controls_for(&self, index: usize) -> ControlSet {
        let locked = self.source.max_pages().is_locked();
        let mut buttons = navigation_buttons(locked);
        buttons.extend(
            self.controls
                .iter()
                .map(|control| control.button(&self.source)),
        );
        let select = self.source.select_provider().and_then(|provider| {
            let options = provider.select_options();
            if options.is_empty() {
                return None;
            }
            Some(
                SelectMenu::new(select_window(options, index).to_vec(), provider.placeholder())
                    .disabled(locked),
            )
        });
        ControlSet::new(buttons, select)
    }

    /// Builds the inline error shown in place of a page. The controls on
    /// screen stay live.
    fn no_content_payload(&self, err: &PageSourceError) -> MessagePayload {
        let text = match err {
            PageSourceError::NoContent { reason } => {
                tracing::info!(session_id = %self.state.id(), reason = %reason, "no content to show");
                reason.clone()
            }
            PageSourceError::Transport(_) => {
                tracing::warn!(session_id = %self.state.id(), error = %err, "page fetch failed; showing no-content notice");
                self.config.no_content_notice.clone()
            }
            PageSourceError::OutOfRange { .. } => {
                tracing::info!(session_id = %self.state.id(), error = %err, "no content to show");
                self.config.no_content_notice.clone()
            }
        };
        let controls = if self.state.controls().is_empty() {
            self.controls_for(self.state.current_page())
        } else {
            self.state.controls().clone()
        };
        MessagePayload::new(Renderable::text(text), controls)
    }

    async fn activate(&mut self, id: &str) -> MenuResult<Transition> {
        let prompt = FollowUp::new(
            Arc::clone(&self.sink),
            self.replies.clone(),
            self.destination,
            self.state.authorized_user(),
            self.config.follow_up_timeout(),
        );
        let Some(control) = self.controls.iter().find(|control| control.id() == id) else {
            tracing::debug!(session_id = %self.state.id(), control = %id, "unknown custom control");
            return Ok(Transition::Unchanged);
        };
        let outcome = control.activate(&mut self.source, &prompt).await;
        tracing::debug!(session_id = %self.state.id(), control = %id, ?outcome, "custom control activated");
        match outcome {
            ControlOutcome::Unchanged => Ok(Transition::Unchanged),
            ControlOutcome::Restyled => {
                self.goto(offset_index(self.state.current_page(), 0)).await
            }
            ControlOutcome::Refiltered => self.refilter().await,
        }
    }

    async fn refilter(&mut self) -> MenuResult<Transition> {
        let transition = match self.source.prepare().await {
            Ok(()) => self.goto(0).await?,
            Err(err) => {
                let payload = self.no_content_payload(&err);
                self.edit(&payload).await?;
                Transition::NoContent
            }
        };
        if transition == Transition::NoContent {
            // The filtered list no longer backs the old index.
            let controls = self.state.controls().clone();
            self.state.commit_page(0, controls);
        }
        Ok(transition)
    }

    async fn edit(&self, payload: &MessagePayload) -> MenuResult<()> {
        let Some(message) = self.state.message().copied() else {
            return Ok(());
        };
        self.sink
            .edit(&message, payload)
            .await
            .map_err(|err| self.sink_failure(err))
    }

    fn sink_failure(&self, err: SinkError) -> MenuError {
        match &err {
            SinkError::PermissionDenied(reason) => tracing::warn!(
                session_id = %self.state.id(),
                reason = %reason,
                "sink permission denied; operation abandoned"
            ),
            SinkError::NotFound(_) | SinkError::Transport(_) => tracing::warn!(
                session_id = %self.state.id(),
                error = %err,
                "sink operation failed"
            ),
        }
        MenuError::Sink(err)
    }
}
