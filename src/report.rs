use std::io::{self, Write};

use crate::arith::Arith;
use crate::config::BuildInfo;
use crate::feature::Variant;

/// Writes the four diagnostic lines the runner asserts on, in fixed order:
/// greeting, feature tag, project identity, arithmetic check. Nothing else
/// may be written to the same stream.
pub fn write_report(
    out: &mut impl Write,
    info: &BuildInfo,
    variant: Variant,
    arith: &dyn Arith,
) -> io::Result<()> {
    writeln!(out, "{}", variant.greeting())?;
    writeln!(out, "FEATURE_IMPL = {}", variant.tag())?;
    writeln!(
        out,
        "Project: {} v{}.{}",
        info.project_name, info.version_major, info.version_minor
    )?;
    writeln!(out, "5 + 3 = {}", arith.add(5, 3))?;
    Ok(())
}
