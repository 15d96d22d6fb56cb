#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Host page element ids the widget binds to on mount.
pub const CREATE_BUTTON_ID: &str = "createBtn";
pub const SAVE_BUTTON_ID: &str = "saveBtn";
pub const RESET_BUTTON_ID: &str = "resetBtn";

/// Element the widget mounts into; falls back to `<body>` when absent.
pub const MOUNT_ID: &str = "polygon-app";

/// Header of the tray zone.
pub const TRAY_TITLE: &str = "Буферная зона";
/// Header of the workspace zone.
pub const WORKSPACE_TITLE: &str = "Рабочая зона";
/// Acknowledgment shown after a successful save.
pub const SAVED_MESSAGE: &str = "Состояние успешно сохранено!";
/// Confirmation asked before reset.
pub const RESET_PROMPT: &str = "Вы уверены, что хотите сбросить все данные?";

/// One of the three host page controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostControl {
    Create,
    Save,
    Reset,
}

impl HostControl {
    pub const ALL: [Self; 3] = [Self::Create, Self::Save, Self::Reset];

    /// DOM id of the button that triggers this control.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Create => CREATE_BUTTON_ID,
            Self::Save => SAVE_BUTTON_ID,
            Self::Reset => RESET_BUTTON_ID,
        }
    }
}
