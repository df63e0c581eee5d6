//! Controller facade: activation, deactivation, and command execution
//!
//! The composition root wiring the config store, workspace, registry,
//! ledger, and collaborators together. Handlers never touch the host
//! directly; everything flows through the state struct so each handler is a
//! function of "notification + current resolved state".

use std::cell::RefCell;
use std::rc::Rc;

use crate::commands::Command;
use crate::config::ConfigStore;
use crate::data::{DataSource, Item, SubscriptionId};
use crate::ledger::SubscriptionLedger;
use crate::messages::OptionKey;
use crate::registry::{ControllerId, ViewRegistry};
use crate::select_list::{SelectList, SharedSelectList};
use crate::status_bar::StatusBarService;
use crate::update;
use crate::visibility;
use crate::workspace::Workspace;

/// Shared handle to the host-supplied status-bar service
pub type SharedStatusBar = Rc<RefCell<dyn StatusBarService>>;

/// Everything the reactivity handlers operate on
pub struct ControllerState {
    pub id: ControllerId,
    pub config: ConfigStore,
    pub workspace: Workspace,
    pub registry: ViewRegistry,
    pub ledger: SubscriptionLedger,
    pub data: Box<dyn DataSource>,
    pub status_bar: Option<SharedStatusBar>,
    pub select_list: SharedSelectList,
}

/// One activation of the side-panel controller
pub struct Controller {
    state: ControllerState,
    select_list_sub: Option<SubscriptionId>,
    activated: bool,
}

impl Controller {
    pub fn new(config: ConfigStore, data: Box<dyn DataSource>) -> Self {
        Self::with_workspace(config, data, Workspace::new())
    }

    /// Build against a workspace whose startup phase the host manages
    pub fn with_workspace(
        config: ConfigStore,
        data: Box<dyn DataSource>,
        workspace: Workspace,
    ) -> Self {
        Self {
            state: ControllerState {
                id: ControllerId::next(),
                config,
                workspace,
                registry: ViewRegistry::new(),
                ledger: SubscriptionLedger::new(),
                data,
                status_bar: None,
                select_list: SelectList::shared(),
            },
            select_list_sub: None,
            activated: false,
        }
    }

    /// Activate: prune legacy settings, start collaborators, register
    /// observers, and drain the replayed notifications
    pub fn activate(&mut self) {
        if self.activated {
            tracing::debug!("Activate called on an active controller, ignored");
            return;
        }

        self.state.config.prune_legacy_keys();
        self.state.data.activate();

        self.state.select_list.borrow_mut().initialize();
        let list = self.state.select_list.clone();
        self.select_list_sub = Some(
            self.state
                .data
                .subscribe(Box::new(move |items| list.borrow_mut().populate(items))),
        );

        self.state.config.observe(OptionKey::VisibilityOption);
        self.state.config.observe(OptionKey::VisibilityActive);
        self.state.config.observe(OptionKey::PanelPosition);
        self.state.config.observe(OptionKey::AutoHide);
        self.state.config.observe(OptionKey::HideHeader);
        self.state.config.observe_changes(OptionKey::RootSortBy);

        self.activated = true;
        update::pump(&mut self.state);
        tracing::info!("Controller activated");
    }

    /// Deactivate: symmetric teardown of everything `activate` built plus
    /// whatever the lifecycle manager created since
    pub fn deactivate(&mut self) {
        if !self.activated {
            return;
        }

        self.state.config.drop_observers();

        if let Some(id) = self.select_list_sub.take() {
            self.state.data.unsubscribe(id);
        }
        self.state.select_list.borrow_mut().reset();

        self.state.ledger.release(self.state.data.as_mut());
        self.state.data.deactivate();

        if let Some(view) = self.state.registry.unregister(self.state.id) {
            if let Some(panel) = self.state.workspace.panel_for_item(&view) {
                self.state.workspace.destroy_panel(panel);
            }
            view.borrow_mut().reset();
        }

        if let Err(e) = self.state.config.save() {
            tracing::warn!("Failed to persist settings at deactivation: {}", e);
        }

        self.activated = false;
        tracing::info!("Controller deactivated");
    }

    /// Late-supplied status-bar service; registers the `statusBar` observer
    /// only now that forwarding can succeed
    pub fn provide_status_bar(&mut self, service: SharedStatusBar) {
        let first = self.state.status_bar.is_none();
        self.state.status_bar = Some(service);
        if first {
            self.state.config.observe(OptionKey::StatusBar);
        }
        update::pump(&mut self.state);
    }

    /// Run one host command, then drain any notifications it caused
    pub fn execute(&mut self, command: Command) {
        tracing::debug!(name = command.name(), "Executing command");
        match command {
            Command::TogglePanel => visibility::toggle_panel(&mut self.state),
            Command::AutohidePanel => {
                if let Some(view) = self.state.registry.get(self.state.id) {
                    view.borrow_mut().autohide(None);
                }
            }
            Command::OpenEditor => self.open_editor(None),
            Command::FocusPanel => {
                if let Some(view) = self.state.registry.get(self.state.id) {
                    view.borrow_mut().toggle_focus();
                }
            }
            Command::ToggleSelectList => self.state.select_list.borrow_mut().toggle_panel(),
            // context save/restore lives outside this controller; accepted
            // for contract completeness
            Command::ClearState | Command::ClearStates => {}
            Command::OpenDatabase => self.state.data.open_database(),
            Command::MigrateLegacyFormat => self.state.data.migrate_legacy(),
        }
        update::pump(&mut self.state);
    }

    /// Open the item editor, `None` for a blank form (context-menu path
    /// passes the item under the pointer)
    pub fn open_editor(&mut self, model: Option<Item>) {
        let Some(view) = self.state.registry.get(self.state.id) else {
            return;
        };
        view.borrow_mut().open_editor(model);
    }

    /// Drain pending configuration notifications
    ///
    /// Hosts call this after writing settings through `config_mut`.
    pub fn pump(&mut self) -> usize {
        update::pump(&mut self.state)
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ControllerState {
        &mut self.state
    }

    pub fn config(&self) -> &ConfigStore {
        &self.state.config
    }

    pub fn config_mut(&mut self) -> &mut ConfigStore {
        &mut self.state.config
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.deactivate();
    }
}
