//! Global Keyboard Shortcuts

/// Page-wide key bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Escape
    CloseModals,
    /// Ctrl+Shift+Backspace
    ClearAll,
}

impl Shortcut {
    /// Map a keydown (`KeyboardEvent.key` plus modifier flags) to a shortcut
    pub fn from_key(key: &str, ctrl: bool, shift: bool) -> Option<Self> {
        match key {
            "Escape" => Some(Shortcut::CloseModals),
            "Backspace" if ctrl && shift => Some(Shortcut::ClearAll),
            _ => None,
        }
    }

    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Option<Self> {
        Self::from_key(&ev.key(), ev.ctrl_key(), ev.shift_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_mapping() {
        assert_eq!(Shortcut::from_key("Escape", false, false), Some(Shortcut::CloseModals));
        assert_eq!(Shortcut::from_key("Backspace", true, true), Some(Shortcut::ClearAll));
        assert_eq!(Shortcut::from_key("Backspace", true, false), None);
        assert_eq!(Shortcut::from_key("Backspace", false, false), None);
        assert_eq!(Shortcut::from_key("Enter", true, true), None);
    }
}
