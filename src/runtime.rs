//! Runtime Capabilities
//!
//! The narrow interfaces command actions receive: a one-shot menu handle owned
//! by the caller, and the host back-end that performs the actual document
//! mutation. The resolver never calls either of them.

use crate::context::ControlContext;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Caller-owned handle onto the menu a row was activated from
pub trait MenuRuntime: Send + Sync {
    /// `launching_dialog = true` keeps the menu's owner alive while a modal
    /// dialog runs; `false` closes immediately.
    fn close_menu(&self, launching_dialog: bool);
}

/// Runtime for activations that did not come from a menu (e.g. the toolbar)
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedRuntime;

impl MenuRuntime for DetachedRuntime {
    fn close_menu(&self, _launching_dialog: bool) {}
}

/// Remembers every `close_menu` call
#[derive(Debug, Default)]
pub struct RecordingRuntime {
    calls: Mutex<Vec<bool>>,
}

impl RecordingRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<bool> {
        self.calls.lock().clone()
    }
}

impl MenuRuntime for RecordingRuntime {
    fn close_menu(&self, launching_dialog: bool) {
        self.calls.lock().push(launching_dialog);
    }
}

/// A mutation or dialog the host is asked to carry out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HostRequest {
    ChooseImage,
    PasteImage,
    CopyImage,
    EditImageMetadata,
    ResetImageCropping,
    ExpandToFillSpace,
    ChooseVideo,
    RecordVideo,
    MoveVideoEarlier,
    MoveVideoLater,
    ChooseSound,
    PlayCurrentSound,
    RemoveSound,
    FormatText,
    CopyText,
    PasteText,
    ToggleAutoHeight,
    ToggleBackground,
    AddChildBubble,
    ChooseLinkedBooks,
    ChooseDestination,
    Duplicate,
    Delete,
    ToggleDraggable,
}

/// Back-end that mutates the document, shows dialogs, plays sounds
#[async_trait]
pub trait CanvasHost: Send + Sync {
    async fn perform(&self, request: HostRequest, ctx: &ControlContext) -> anyhow::Result<()>;
}

/// Host that only logs what it was asked to do
#[derive(Debug, Default)]
pub struct LoggingHost {
    performed: Mutex<Vec<HostRequest>>,
}

impl LoggingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn performed(&self) -> Vec<HostRequest> {
        self.performed.lock().clone()
    }
}

#[async_trait]
impl CanvasHost for LoggingHost {
    async fn perform(&self, request: HostRequest, ctx: &ControlContext) -> anyhow::Result<()> {
        info!(?request, element_type = %ctx.element_type, "Host request");
        self.performed.lock().push(request);
        Ok(())
    }
}

/// What a command does when activated
#[async_trait]
pub trait CommandAction: Send + Sync {
    async fn run(
        &self,
        ctx: &ControlContext,
        runtime: &dyn MenuRuntime,
        host: &dyn CanvasHost,
    ) -> anyhow::Result<()>;
}

/// Closes the menu, then forwards a request to the host
#[derive(Debug, Clone)]
pub struct HostAction {
    pub request: HostRequest,
    pub launches_dialog: bool,
}

impl HostAction {
    /// Immediate mutation; the menu closes right away
    pub fn immediate(request: HostRequest) -> Self {
        Self {
            request,
            launches_dialog: false,
        }
    }

    /// Opens a modal dialog
    pub fn dialog(request: HostRequest) -> Self {
        Self {
            request,
            launches_dialog: true,
        }
    }
}

#[async_trait]
impl CommandAction for HostAction {
    async fn run(
        &self,
        ctx: &ControlContext,
        runtime: &dyn MenuRuntime,
        host: &dyn CanvasHost,
    ) -> anyhow::Result<()> {
        runtime.close_menu(self.launches_dialog);
        host.perform(self.request.clone(), ctx).await
    }
}
