//! Input events delivered to the canvas.
//!
//! A host translates whatever its toolkit reports into [`CanvasEvent`]s and
//! hands them to [`Canvas::handle_event`](crate::canvas::Canvas::handle_event)
//! one at a time.
//!
//! - [`Key`]: symbolic key code. Only [`Key::Space`] has meaning to the canvas.
//! - [`CanvasEvent`]: a timer tick or a key going down or up.

use std::fmt::Display;
use std::str::FromStr;

/// Symbolic key code as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// The space bar
    Space,
    /// Any other key, by the host's name for it
    Other(String),
}

impl Key {
    /// Maps a host key name to a [`Key`].
    ///
    /// Accepts the names toolkits commonly use for the space bar (`"space"`,
    /// `"Space"`, `" "`); anything else becomes [`Key::Other`].
    pub fn from_name(name: &str) -> Key {
        if name == " " || name.eq_ignore_ascii_case("space") {
            Key::Space
        } else {
            Key::Other(name.to_string())
        }
    }
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Key::from_name(s))
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Space => write!(f, "Space"),
            Key::Other(name) => write!(f, "{name}"),
        }
    }
}

/// Events a host delivers to the canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasEvent {
    /// The animation timer fired
    Tick,
    /// A key was pressed (repeats may arrive while it is held)
    KeyDown {
        /// The key that was pressed
        key: Key,
    },
    /// A key was released
    KeyUp {
        /// The key that was released
        key: Key,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_names_map_to_space() {
        assert_eq!(Key::from_name("space"), Key::Space);
        assert_eq!(Key::from_name("Space"), Key::Space);
        assert_eq!(Key::from_name(" "), Key::Space);
        assert_eq!("SPACE".parse::<Key>().unwrap(), Key::Space);
    }

    #[test]
    fn other_names_are_kept() {
        assert_eq!(Key::from_name("Return"), Key::Other("Return".into()));
        assert_eq!(Key::from_name("a").to_string(), "a");
        assert_eq!(Key::Space.to_string(), "Space");
    }
}
