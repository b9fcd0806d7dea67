// Viewer action definitions and key mappings

use winit::keyboard::KeyCode;

/// Everything the user can do in the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Free camera (held)
    CameraForward,
    CameraBackward,
    CameraLeft,
    CameraRight,

    // Projection (edge-triggered)
    IsometricView,
    PerspectiveView,

    // Isometric zoom (held)
    ZoomIn,
    ZoomOut,

    // Animator toggles (edge-triggered)
    ToggleGreeter,
    ToggleBaker,

    // Balloon keyframes (edge-triggered)
    PlayBalloonPath,
    RecordKeyframe,
    NudgeBalloon,

    // Balloon vendor (held, head turns edge-triggered per press)
    VendorForward,
    VendorBackward,
    VendorLeft,
    VendorRight,
    VendorTurnLeft,
    VendorTurnRight,
    VendorHeadLeft,
    VendorHeadRight,

    // Meta
    Quit,
}

/// Default key bindings
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        // Camera (WASD - standard layout)
        (KeyCode::KeyW, Action::CameraForward),
        (KeyCode::KeyS, Action::CameraBackward),
        (KeyCode::KeyA, Action::CameraLeft),
        (KeyCode::KeyD, Action::CameraRight),
        // Projection and isometric zoom
        (KeyCode::KeyI, Action::IsometricView),
        (KeyCode::KeyU, Action::PerspectiveView),
        (KeyCode::KeyZ, Action::ZoomIn),
        (KeyCode::KeyX, Action::ZoomOut),
        // Animator toggles
        (KeyCode::Digit1, Action::ToggleGreeter),
        (KeyCode::Digit2, Action::ToggleBaker),
        // Balloon keyframes
        (KeyCode::KeyP, Action::PlayBalloonPath),
        (KeyCode::KeyL, Action::RecordKeyframe),
        (KeyCode::KeyK, Action::NudgeBalloon),
        // Vendor drive
        (KeyCode::ArrowUp, Action::VendorForward),
        (KeyCode::ArrowDown, Action::VendorBackward),
        (KeyCode::ArrowLeft, Action::VendorLeft),
        (KeyCode::ArrowRight, Action::VendorRight),
        (KeyCode::KeyR, Action::VendorTurnLeft),
        (KeyCode::KeyT, Action::VendorTurnRight),
        (KeyCode::KeyM, Action::VendorHeadRight),
        (KeyCode::KeyN, Action::VendorHeadLeft),
        // Meta
        (KeyCode::Escape, Action::Quit),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        assert_eq!(Action::CameraForward, Action::CameraForward);
        assert_ne!(Action::CameraForward, Action::CameraBackward);
    }

    #[test]
    fn test_default_bindings_exist() {
        let bindings = default_bindings();
        assert!(bindings.len() >= 20);
    }

    #[test]
    fn test_no_duplicate_keys() {
        let bindings = default_bindings();
        let mut seen = std::collections::HashSet::new();
        for (key, _) in bindings {
            assert!(seen.insert(key), "Duplicate key binding: {:?}", key);
        }
    }

    #[test]
    fn test_no_duplicate_actions() {
        let bindings = default_bindings();
        let mut seen = std::collections::HashSet::new();
        for (_, action) in bindings {
            assert!(seen.insert(action), "Action bound twice: {:?}", action);
        }
    }
}
