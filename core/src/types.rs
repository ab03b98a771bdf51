//! Alias-group type definitions for enum name maps.
//!
//! This module defines the core data model used to represent enum symbols
//! grouped by their underlying value. The types are designed for
//! serialization with [`serde`] and carry no I/O of their own.

use serde::{Deserialize, Serialize};

/// A base enum entry together with its aliases.
///
/// The base entry is the symbol that first declared a value; aliases are
/// later symbols declared as references to the base name. Aliases are kept
/// in the order they were recorded.
///
/// # Examples
///
/// ```
/// use enum_name_map_core::AliasGroup;
///
/// let group = AliasGroup::new("VK_COLOR_SPACE_SRGB_NONLINEAR_KHR")
///     .with_alias("VK_COLORSPACE_SRGB_NONLINEAR_KHR");
/// assert_eq!(group.aliases.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasGroup {
    /// Canonical symbol name.
    pub name: String,
    /// Alias symbols, in encounter order.
    pub aliases: Vec<String>,
}

impl AliasGroup {
    /// Creates a group with no aliases.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
        }
    }

    /// Appends an alias, builder-style.
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Returns the display string for this group: the bare name, or the name
    /// followed by a parenthesized `(aka ...)` list when aliases exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use enum_name_map_core::AliasGroup;
    ///
    /// assert_eq!(AliasGroup::new("RED").display_label(), "RED");
    /// assert_eq!(
    ///     AliasGroup::new("RED").with_alias("CRIMSON").with_alias("SCARLET").display_label(),
    ///     "RED (aka CRIMSON, SCARLET)"
    /// );
    /// ```
    pub fn display_label(&self) -> String {
        if self.aliases.is_empty() {
            self.name.clone()
        } else {
            format!("{} (aka {})", self.name, self.aliases.join(", "))
        }
    }
}

/// Ordered collection of alias groups.
///
/// Groups iterate in first-insertion order, which is what downstream
/// emitters rely on for stable output. Lookup is by base name; the
/// collection is small enough that a linear scan over the backing `Vec` is
/// the right structure.
///
/// # Examples
///
/// ```
/// use enum_name_map_core::NameTable;
///
/// let mut table = NameTable::new();
/// table.insert_base("GREEN");
/// table.insert_base("RED");
/// let names: Vec<&str> = table.iter().map(|g| g.name.as_str()).collect();
/// assert_eq!(names, ["GREEN", "RED"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTable {
    /// Alias groups in first-insertion order.
    pub groups: Vec<AliasGroup>,
}

impl NameTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a base entry with an empty alias list.
    ///
    /// Re-declaring an existing base keeps the group's position and resets
    /// its alias list.
    pub fn insert_base(&mut self, name: &str) {
        match self.find_group_mut(name) {
            Some(group) => group.aliases.clear(),
            None => self.groups.push(AliasGroup::new(name)),
        }
    }

    /// Appends `alias` to the group whose base name is `base`.
    ///
    /// Returns `false` when no such base entry exists.
    pub fn push_alias(&mut self, base: &str, alias: &str) -> bool {
        match self.find_group_mut(base) {
            Some(group) => {
                group.aliases.push(alias.to_string());
                true
            }
            None => false,
        }
    }

    /// Finds a group by base name.
    pub fn find_group(&self, name: &str) -> Option<&AliasGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    /// Finds a group by base name, mutably.
    pub fn find_group_mut(&mut self, name: &str) -> Option<&mut AliasGroup> {
        self.groups.iter_mut().find(|group| group.name == name)
    }

    /// Iterates groups in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AliasGroup> {
        self.groups.iter()
    }

    /// Number of distinct base entries.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` when no base entry has been recorded.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
