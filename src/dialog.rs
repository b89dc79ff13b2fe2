//! User-facing blocking dialogs
//!
//! Controllers never talk to a UI directly. Validation messages, confirmations
//! of destructive actions and session announcements all go through
//! [`Dialogs`], which the host supplies.

/// Alert and confirmation capability supplied by the host
pub trait Dialogs {
    /// Show a message the user must acknowledge
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question
    ///
    /// # Returns
    /// `true` if the user approved
    fn confirm(&mut self, message: &str) -> bool;
}

/// Dialogs that answer every confirmation the same way and remember what
/// they were shown
#[derive(Debug, Clone, Default)]
pub struct ScriptedDialogs {
    /// Answer given to every confirmation
    pub approve: bool,
    pub alerts: Vec<String>,
    pub confirmations: Vec<String>,
}

impl ScriptedDialogs {
    pub fn approving() -> Self {
        Self {
            approve: true,
            ..Self::default()
        }
    }

    pub fn declining() -> Self {
        Self::default()
    }
}

impl Dialogs for ScriptedDialogs {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.approve
    }
}
