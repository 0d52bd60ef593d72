//! Core data types for the feeder configuration tool.
//!
//! This module defines the dimension records annotated on the drawing, the fixed
//! ordered list that owns them, and the ancillary machine information entered
//! alongside.

use std::fmt;

/// Identifier of one of the sixteen dimensions called out on the feeder drawing.
///
/// The set is closed and ordered A through P.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DimensionId {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
}

impl DimensionId {
    /// Number of dimensions on the drawing.
    pub const COUNT: usize = 16;

    /// Every identifier, in drawing order.
    pub const ALL: [DimensionId; Self::COUNT] = [
        DimensionId::A,
        DimensionId::B,
        DimensionId::C,
        DimensionId::D,
        DimensionId::E,
        DimensionId::F,
        DimensionId::G,
        DimensionId::H,
        DimensionId::I,
        DimensionId::J,
        DimensionId::K,
        DimensionId::L,
        DimensionId::M,
        DimensionId::N,
        DimensionId::O,
        DimensionId::P,
    ];

    /// Zero-based position of this identifier in [`DimensionId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter name, also used as the display label.
    pub fn as_str(self) -> &'static str {
        match self {
            DimensionId::A => "A",
            DimensionId::B => "B",
            DimensionId::C => "C",
            DimensionId::D => "D",
            DimensionId::E => "E",
            DimensionId::F => "F",
            DimensionId::G => "G",
            DimensionId::H => "H",
            DimensionId::I => "I",
            DimensionId::J => "J",
            DimensionId::K => "K",
            DimensionId::L => "L",
            DimensionId::M => "M",
            DimensionId::N => "N",
            DimensionId::O => "O",
            DimensionId::P => "P",
        }
    }

    /// What the letter measures on the feeder.
    pub fn description(self) -> &'static str {
        match self {
            DimensionId::A => "Height",
            DimensionId::B => "Linear track length",
            DimensionId::C => "Base height",
            DimensionId::D => "Track width",
            DimensionId::E => "Base width",
            DimensionId::F => "Actuator height",
            DimensionId::G => "Total height",
            DimensionId::H => "Floor clearance",
            DimensionId::I => "Base depth",
            DimensionId::J => "Hopper height",
            DimensionId::K => "Hopper width",
            DimensionId::L => "Total width",
            DimensionId::M => "Top width",
            DimensionId::N => "Inner width",
            DimensionId::O => "Bowl height",
            DimensionId::P => "Total height with bowl",
        }
    }
}

impl fmt::Display for DimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single user-entered measurement annotated on the drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    /// Which callout this is
    pub id: DimensionId,
    /// Display text, by convention the identifier letter
    pub label: String,
    /// Measurement in millimeters as free-form text; empty means unset
    pub value: String,
    /// Static meaning of the letter
    pub description: String,
}

impl Dimension {
    /// Creates an unset dimension for the given identifier.
    pub fn new(id: DimensionId) -> Self {
        Self {
            id,
            label: id.as_str().to_string(),
            value: String::new(),
            description: id.description().to_string(),
        }
    }

    /// Returns true when a value has been entered.
    pub fn is_set(&self) -> bool {
        !self.value.is_empty()
    }

    /// Value with its unit suffix, or `None` when unset.
    pub fn display_value(&self) -> Option<String> {
        self.is_set().then(|| format!("{} mm", self.value))
    }
}

/// The fixed, ordered list of all sixteen dimensions.
///
/// Construction always yields A..P in order and nothing can add or remove
/// entries afterwards; only values change, through [`DimensionList::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionList {
    dimensions: Vec<Dimension>,
}

impl Default for DimensionList {
    /// Creates the list with every value unset.
    fn default() -> Self {
        Self {
            dimensions: DimensionId::ALL.into_iter().map(Dimension::new).collect(),
        }
    }
}

impl DimensionList {
    /// Creates the list with every value unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a dimension by identifier.
    pub fn get(&self, id: DimensionId) -> &Dimension {
        &self.dimensions[id.index()]
    }

    /// Replaces the value of `id`, leaving order and every other record untouched.
    pub fn update(&mut self, id: DimensionId, value: impl Into<String>) {
        self.dimensions[id.index()].value = value.into();
    }

    /// Iterates the dimensions in A..P order.
    pub fn iter(&self) -> std::slice::Iter<'_, Dimension> {
        self.dimensions.iter()
    }

    /// Always [`DimensionId::COUNT`].
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    /// Never true; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Number of dimensions that still have no value.
    pub fn unset_count(&self) -> usize {
        self.dimensions.iter().filter(|d| !d.is_set()).count()
    }
}

impl<'a> IntoIterator for &'a DimensionList {
    type Item = &'a Dimension;
    type IntoIter = std::slice::Iter<'a, Dimension>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Direction in which the feeder bowl rotates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rotation {
    /// Clockwise, the default
    #[default]
    Clockwise,
    /// Anti-clockwise
    AntiClockwise,
}

impl Rotation {
    /// Every selectable direction, in menu order.
    pub const ALL: [Rotation; 2] = [Rotation::Clockwise, Rotation::AntiClockwise];

    /// Human-readable name shown in the form and the report.
    pub fn label(self) -> &'static str {
        match self {
            Rotation::Clockwise => "Clockwise",
            Rotation::AntiClockwise => "Anti-clockwise",
        }
    }
}

/// Machine metadata entered next to the drawing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineInfo {
    /// Machine number, free text
    pub machine_no: String,
    /// Bowl rotation direction
    pub rotation: Rotation,
    /// Units per hour, free text
    pub uph: String,
}

impl MachineInfo {
    /// Text shown for an empty machine field in the report.
    pub const NOT_SPECIFIED: &'static str = "Not specified";

    /// Machine number for display, with the "Not specified" fallback.
    pub fn machine_no_display(&self) -> &str {
        or_not_specified(&self.machine_no)
    }

    /// Units per hour for display, with the "Not specified" fallback.
    pub fn uph_display(&self) -> &str {
        or_not_specified(&self.uph)
    }
}

fn or_not_specified(text: &str) -> &str {
    if text.trim().is_empty() {
        MachineInfo::NOT_SPECIFIED
    } else {
        text
    }
}
