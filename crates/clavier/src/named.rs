//! Built-in keyboard layouts.
//!
//! Each [`NamedLayout`] provides the text grid of a common keyboard. The
//! grid is turned into a [`Layout`] with the geometry of a [`LayoutBuilder`],
//! so the same named layout can be loaded with different staggering or pitch.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use clavier_core::LayoutError;

use crate::layout::{Layout, LayoutBuilder};

const QWERTY: &str = r"
    1 2 3 4 5 6 7 8 9 0 - =
    q w e r t y u i o p [ ] \
    a s d f g h j k l ; '
    z x c v b n m , . /
";

const DVORAK: &str = r"
    ` 1 2 3 4 5 6 7 8 9 0 [ ]
    ' , . p y f g c r l / = \
    a o e u i d h t n s -
    ; q j k x b m w v z
";

const DIALPAD: &str = "
    1 2 3
    4 5 6
    7 8 9
    * 0 #
";

/// A built-in keyboard layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedLayout {
    /// US QWERTY, number row included.
    #[default]
    Qwerty,
    /// US Dvorak, number row included.
    Dvorak,
    /// Phone dialpad.
    Dialpad,
}

impl NamedLayout {
    /// All built-in layouts.
    pub const ALL: [NamedLayout; 3] = [Self::Qwerty, Self::Dvorak, Self::Dialpad];

    /// Returns the text grid of the layout.
    pub fn grid(self) -> &'static str {
        match self {
            Self::Qwerty => QWERTY,
            Self::Dvorak => DVORAK,
            Self::Dialpad => DIALPAD,
        }
    }

    /// Returns the name the layout is selected by
    pub fn name(self) -> &'static str {
        match self {
            Self::Qwerty => "qwerty",
            Self::Dvorak => "dvorak",
            Self::Dialpad => "dialpad",
        }
    }

    /// Builds the layout with the geometry of `builder`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidSpec`] if the builder's per-row
    /// staggering does not match the number of rows of the layout.
    pub fn load(self, builder: &LayoutBuilder) -> Result<Layout, LayoutError> {
        builder.build_from_grid(self.grid())
    }
}

impl FromStr for NamedLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.name() == s)
            .ok_or_else(|| {
                format!("Unknown layout: {s}, must be one of 'qwerty', 'dvorak' or 'dialpad'")
            })
    }
}

impl fmt::Display for NamedLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
