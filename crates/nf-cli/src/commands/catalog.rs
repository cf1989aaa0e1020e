//! Catalog command implementation

use anyhow::Result;
use nf_core::CATALOG;

/// Execute the catalog command
pub async fn execute() -> Result<()> {
    let kind_width = CATALOG.iter().map(|d| d.kind.len()).max().unwrap_or(4).max(4);
    let type_width = CATALOG
        .iter()
        .map(|d| d.wire_type.len())
        .max()
        .unwrap_or(4)
        .max(4);

    println!(
        "{:<kind_width$}  {:<type_width$}  {:<20}  {:<28}  DEFAULT",
        "KIND",
        "TYPE",
        "LUA_TYPE",
        "VALUE",
        kind_width = kind_width,
        type_width = type_width
    );

    for descriptor in CATALOG {
        println!(
            "{:<kind_width$}  {:<type_width$}  {:<20}  {:<28}  {}",
            descriptor.kind,
            descriptor.wire_type,
            descriptor.lua_type,
            descriptor.value.to_json().to_string(),
            descriptor.default.to_json(),
            kind_width = kind_width,
            type_width = type_width
        );
    }

    Ok(())
}
