// View state store shared by the 3D layer and the DOM overlay.
//
// The store is the single source of truth for the current view mode and the
// carousel index. Observers are invoked synchronously, in registration
// order, after every mutation that actually changed a value; idempotent
// calls are silent so repeated clicks never restart downstream animations.

/// Which framing the camera is in (or heading toward).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Overview,
    Focus,
}

/// Store mutation requested by a global key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    EnterFocus,
    ExitFocus,
    PrevProject,
    NextProject,
}

/// Map a key to its action under the current mode. Keys that make no sense
/// in the mode fall through to `None`.
pub fn key_action(mode: ViewMode, key: &str) -> Option<KeyAction> {
    match (mode, key) {
        (ViewMode::Overview, "Enter") => Some(KeyAction::EnterFocus),
        (ViewMode::Focus, "Escape") => Some(KeyAction::ExitFocus),
        (ViewMode::Focus, "ArrowLeft") => Some(KeyAction::PrevProject),
        (ViewMode::Focus, "ArrowRight") => Some(KeyAction::NextProject),
        _ => None,
    }
}

pub type StoreListener = Box<dyn FnMut(ViewMode, usize)>;

pub struct ViewStore {
    mode: ViewMode,
    current_project_index: usize,
    catalog_len: usize,
    listeners: Vec<StoreListener>,
}

impl ViewStore {
    /// `catalog_len` must be at least 1; the index wraps modulo this length.
    pub fn new(catalog_len: usize) -> Self {
        debug_assert!(catalog_len >= 1);
        Self {
            mode: ViewMode::Overview,
            current_project_index: 0,
            catalog_len: catalog_len.max(1),
            listeners: Vec::new(),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn current_project_index(&self) -> usize {
        self.current_project_index
    }

    /// Register an observer. It is played back immediately with the current
    /// snapshot so late subscribers start out consistent.
    pub fn subscribe(&mut self, mut listener: impl FnMut(ViewMode, usize) + 'static) {
        listener(self.mode, self.current_project_index);
        self.listeners.push(Box::new(listener));
    }

    pub fn enter_focus(&mut self) {
        self.set_mode(ViewMode::Focus);
    }

    pub fn enter_overview(&mut self) {
        self.set_mode(ViewMode::Overview);
    }

    pub fn next_project(&mut self) {
        self.set_index((self.current_project_index + 1) % self.catalog_len);
    }

    pub fn prev_project(&mut self) {
        self.set_index((self.current_project_index + self.catalog_len - 1) % self.catalog_len);
    }

    /// Apply a global key press against the current mode.
    pub fn apply_key(&mut self, key: &str) {
        match key_action(self.mode, key) {
            Some(KeyAction::EnterFocus) => self.enter_focus(),
            Some(KeyAction::ExitFocus) => self.enter_overview(),
            Some(KeyAction::PrevProject) => self.prev_project(),
            Some(KeyAction::NextProject) => self.next_project(),
            None => {}
        }
    }

    fn set_mode(&mut self, mode: ViewMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.notify();
    }

    fn set_index(&mut self, index: usize) {
        if self.current_project_index == index {
            return;
        }
        self.current_project_index = index;
        self.notify();
    }

    fn notify(&mut self) {
        let mode = self.mode;
        let index = self.current_project_index;
        for listener in self.listeners.iter_mut() {
            listener(mode, index);
        }
    }
}
