//! Fixed-template table rendering.

use enum_name_map_core::NameTable;

/// Renders one initializer line per group, in table order:
///
/// ```text
/// \t\t{VK_FORMAT_B8G8R8A8_SRGB, "VK_FORMAT_B8G8R8A8_SRGB (aka ...)"},
/// ```
///
/// Indentation is `depth` literal tab characters. Rendering an unchanged
/// table is deterministic and produces byte-identical output.
pub fn format_table(table: &NameTable, depth: usize) -> String {
    let indent = "\t".repeat(depth);
    let mut out = String::new();
    for group in table.iter() {
        out.push_str(&format!(
            "{indent}{{{}, \"{}\"}},\n",
            group.name,
            group.display_label()
        ));
    }
    out
}
