use plenilunio_types::SeasonId;
use std::collections::HashSet;
use tracing::debug;

/// Keyboard key pressed while a season control has focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Other(String),
}

impl Key {
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "enter" | "return" => Key::Enter,
            "space" | " " => Key::Space,
            _ => Key::Other(name.to_string()),
        }
    }
}

/// Raw interaction coming from a display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Click/tap on the control tagged with `control`
    Pointer { control: SeasonId },

    /// Key press on the focused control
    Key { control: SeasonId, key: Key },

    /// No more input will follow
    Quit,
}

/// Device-independent request handled by the selection controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    SeasonActivated { id: SeasonId },
}

/// Result of translating an input event on a wired control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub event: AppEvent,
    /// The surface should suppress the key's default behavior (page scroll
    /// on Space).
    pub prevent_default: bool,
}

/// Activation handlers attached to the season controls at startup.
#[derive(Debug, Clone, Default)]
pub struct InputBindings {
    controls: HashSet<SeasonId>,
}

impl InputBindings {
    pub fn wire(controls: &[SeasonId]) -> Self {
        Self {
            controls: controls.iter().cloned().collect(),
        }
    }

    pub fn is_wired(&self, control: &SeasonId) -> bool {
        self.controls.contains(control)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Pointer activation and the Enter/Space keys activate a control; any
    /// other key, and anything aimed at an unwired control, is ignored.
    pub fn translate(&self, input: &InputEvent) -> Option<Activation> {
        let (control, prevent_default) = match input {
            InputEvent::Pointer { control } => (control, false),
            InputEvent::Key {
                control,
                key: Key::Enter,
            } => (control, false),
            InputEvent::Key {
                control,
                key: Key::Space,
            } => (control, true),
            InputEvent::Key { .. } | InputEvent::Quit => return None,
        };

        if !self.is_wired(control) {
            debug!(control = %control, "input on unwired control ignored");
            return None;
        }

        Some(Activation {
            event: AppEvent::SeasonActivated {
                id: control.clone(),
            },
            prevent_default,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings() -> InputBindings {
        InputBindings::wire(&[SeasonId::from("1"), SeasonId::from("2")])
    }

    #[test]
    fn test_pointer_activates() {
        let activation = bindings()
            .translate(&InputEvent::Pointer {
                control: SeasonId::from("2"),
            })
            .unwrap();
        assert_eq!(
            activation.event,
            AppEvent::SeasonActivated {
                id: SeasonId::from("2")
            }
        );
        assert!(!activation.prevent_default);
    }

    #[test]
    fn test_space_prevents_default_enter_does_not() {
        let space = bindings()
            .translate(&InputEvent::Key {
                control: SeasonId::from("1"),
                key: Key::Space,
            })
            .unwrap();
        assert!(space.prevent_default);

        let enter = bindings()
            .translate(&InputEvent::Key {
                control: SeasonId::from("1"),
                key: Key::Enter,
            })
            .unwrap();
        assert!(!enter.prevent_default);
    }

    #[test]
    fn test_other_keys_ignored() {
        let result = bindings().translate(&InputEvent::Key {
            control: SeasonId::from("1"),
            key: Key::parse("Tab"),
        });
        assert!(result.is_none());
    }

    #[test]
    fn test_unwired_control_ignored() {
        let result = bindings().translate(&InputEvent::Pointer {
            control: SeasonId::from("9"),
        });
        assert!(result.is_none());
    }

    #[test]
    fn test_key_parse() {
        assert_eq!(Key::parse("Enter"), Key::Enter);
        assert_eq!(Key::parse("SPACE"), Key::Space);
        assert_eq!(Key::parse(" "), Key::Space);
        assert_eq!(Key::parse("x"), Key::Other("x".to_string()));
    }
}
