//! Menu Rows
//!
//! Recursive, render-ready menu rows and the availability cascade that turns
//! a freshly built row tree into its resolved form: invisible rows are dropped
//! and a disabled parent disables every descendant.

use crate::context::ControlContext;
use crate::error::ControlError;
use crate::rules::Predicate;
use crate::runtime::{CanvasHost, CommandAction, MenuRuntime};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// A menu row: an actionable command, or static help text
#[derive(Debug, Clone)]
pub enum MenuRow {
    Command(CommandRow),
    Help(HelpRow),
}

/// Actionable row, possibly with a submenu
#[derive(Clone, Default)]
pub struct CommandRow {
    pub id: String,
    pub label: String,
    pub icon: Option<&'static str>,
    pub shortcut: Option<&'static str>,
    /// Checkmark state for toggles; `None` for plain commands
    pub checked: Option<bool>,
    /// Explicit disablement, independent of `enabled`
    pub disabled: bool,
    pub visible: Option<Predicate>,
    pub enabled: Option<Predicate>,
    pub action: Option<Arc<dyn CommandAction>>,
    pub sub_menu_items: Vec<MenuRow>,
}

/// Informational row; no action, no children, never disabled
#[derive(Debug, Clone, Default)]
pub struct HelpRow {
    pub text: String,
    pub visible: Option<Predicate>,
}

impl fmt::Debug for CommandRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRow")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("shortcut", &self.shortcut)
            .field("checked", &self.checked)
            .field("disabled", &self.disabled)
            .field("has_action", &self.action.is_some())
            .field("sub_menu_items", &self.sub_menu_items)
            .finish()
    }
}

impl CommandRow {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_icon(mut self, icon: Option<&'static str>) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_shortcut(mut self, shortcut: Option<&'static str>) -> Self {
        self.shortcut = shortcut;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn visible_when(mut self, predicate: Predicate) -> Self {
        self.visible = Some(predicate);
        self
    }

    pub fn enabled_when(mut self, predicate: Predicate) -> Self {
        self.enabled = Some(predicate);
        self
    }

    pub fn with_action(mut self, action: Arc<dyn CommandAction>) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_children(mut self, children: Vec<MenuRow>) -> Self {
        self.sub_menu_items = children;
        self
    }

    /// Run this row's action
    ///
    /// Only meaningful on a resolved row, where `disabled` already reflects
    /// the cascade.
    pub async fn activate(
        &self,
        ctx: &ControlContext,
        runtime: &dyn MenuRuntime,
        host: &dyn CanvasHost,
    ) -> Result<(), ControlError> {
        if self.disabled {
            return Err(ControlError::Disabled(self.id.clone()));
        }
        let action = self
            .action
            .as_ref()
            .ok_or_else(|| ControlError::NoAction(self.id.clone()))?;
        info!(row = %self.id, "Activating menu row");
        action
            .run(ctx, runtime, host)
            .await
            .map_err(|e| ControlError::ActionFailed {
                control: self.id.clone(),
                message: format!("{:#}", e),
            })
    }
}

impl HelpRow {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: None,
        }
    }

    pub fn visible_when(mut self, predicate: Predicate) -> Self {
        self.visible = Some(predicate);
        self
    }
}

impl MenuRow {
    pub fn as_command(&self) -> Option<&CommandRow> {
        match self {
            MenuRow::Command(row) => Some(row),
            MenuRow::Help(_) => None,
        }
    }

    /// Levels in this tree, counting the row itself
    pub fn depth(&self) -> usize {
        match self {
            MenuRow::Command(row) => {
                1 + row
                    .sub_menu_items
                    .iter()
                    .map(MenuRow::depth)
                    .max()
                    .unwrap_or(0)
            }
            MenuRow::Help(_) => 1,
        }
    }

    /// Follow child ids from this row; an empty path yields the row itself
    pub fn find(&self, path: &[&str]) -> Option<&CommandRow> {
        let row = self.as_command()?;
        match path.split_first() {
            None => Some(row),
            Some((head, tail)) => row
                .sub_menu_items
                .iter()
                .find(|child| child.as_command().is_some_and(|c| c.id == *head))
                .and_then(|child| child.find(tail)),
        }
    }
}

impl From<CommandRow> for MenuRow {
    fn from(row: CommandRow) -> Self {
        MenuRow::Command(row)
    }
}

impl From<HelpRow> for MenuRow {
    fn from(row: HelpRow) -> Self {
        MenuRow::Help(row)
    }
}

/// Resolve visibility and disablement for `row` and its descendants
///
/// Returns `None` when the row is invisible. A command row ends up disabled
/// when it was explicitly disabled, its own `enabled` check fails, or its
/// parent is disabled; children inherit the result.
pub fn apply_availability(
    row: MenuRow,
    ctx: &ControlContext,
    parent_enabled: bool,
) -> Option<MenuRow> {
    match row {
        MenuRow::Help(help) => {
            let visible = help.visible.map_or(true, |p| p(ctx));
            visible.then_some(MenuRow::Help(help))
        }
        MenuRow::Command(mut command) => {
            if !command.visible.map_or(true, |p| p(ctx)) {
                return None;
            }
            let enabled_check = command.enabled.map_or(true, |p| p(ctx));
            command.disabled = command.disabled || !enabled_check || !parent_enabled;

            let this_enabled = !command.disabled;
            command.sub_menu_items = std::mem::take(&mut command.sub_menu_items)
                .into_iter()
                .filter_map(|child| apply_availability(child, ctx, this_enabled))
                .collect();
            Some(MenuRow::Command(command))
        }
    }
}
