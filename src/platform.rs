//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for save/submit shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COMMAND_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COMMAND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Ctrl is accepted everywhere since many terminals never report Cmd
pub fn is_command(modifiers: KeyModifiers) -> bool {
    modifiers.contains(COMMAND_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}

/// Save draft shortcut display
#[cfg(target_os = "macos")]
pub const SAVE_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SAVE_SHORTCUT: &str = "Ctrl+S";

/// Submit shortcut display
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Cmd+Enter";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+Enter";

/// Restore latest draft shortcut display
#[cfg(target_os = "macos")]
pub const RESTORE_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const RESTORE_SHORTCUT: &str = "Ctrl+R";
