use std::env;
use std::fmt;

use log::debug;

/// Minimum declared standard version that selects the modern variant.
/// Matches the C11 `__STDC_VERSION__` value 201112L.
pub const STD_VERSION_THRESHOLD: u64 = 201112;

/// One of the two mutually exclusive behavioral modes, fixed for the life
/// of the process once selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Modern,
    Fallback,
}

impl Variant {
    /// Integer tag printed on the `FEATURE_IMPL = <N>` line.
    pub fn tag(self) -> u32 {
        match self {
            Variant::Modern => 1,
            Variant::Fallback => 2,
        }
    }

    pub fn greeting(self) -> &'static str {
        match self {
            Variant::Modern => "Hello from modern implementation!",
            Variant::Fallback => "Hello from fallback implementation!",
        }
    }

    /// Process exit status contribution: the runner asserts on this to tell
    /// which path executed.
    pub fn exit_code(self) -> i32 {
        match self {
            Variant::Modern => 0,
            Variant::Fallback => 1,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Modern => write!(f, "modern"),
            Variant::Fallback => write!(f, "fallback"),
        }
    }
}

/// Selection inputs, resolved once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionFlags {
    pub force_modern: bool,
    pub force_fallback: bool,
    pub std_version: Option<u64>,
}

/// Picks the variant. Ordered priority, first match wins: force-modern,
/// then force-fallback, then the standard-version threshold, else Fallback.
pub fn select(flags: SelectionFlags) -> Variant {
    if flags.force_modern {
        debug!("variant pinned by force-modern override");
        Variant::Modern
    } else if flags.force_fallback {
        debug!("variant pinned by force-fallback override");
        Variant::Fallback
    } else if flags.std_version.is_some_and(|v| v >= STD_VERSION_THRESHOLD) {
        debug!(
            "std_version {:?} >= {}, selecting modern",
            flags.std_version, STD_VERSION_THRESHOLD
        );
        Variant::Modern
    } else {
        debug!("no override and no qualifying std_version, selecting fallback");
        Variant::Fallback
    }
}

/// Merges the three override layers into `SelectionFlags`: compile-time
/// cargo features, `FEATPROBE_FORCE_*` environment variables, and the CLI
/// flags. A tier counts as set if any layer sets it; tier ordering is
/// handled by [`select`].
pub fn resolve_flags(
    cli_force_modern: bool,
    cli_force_fallback: bool,
    config_std_version: Option<u64>,
) -> Result<SelectionFlags, String> {
    let force_modern =
        cfg!(feature = "force-modern") || cli_force_modern || env_truthy("FEATPROBE_FORCE_MODERN");
    let force_fallback = cfg!(feature = "force-fallback")
        || cli_force_fallback
        || env_truthy("FEATPROBE_FORCE_FALLBACK");

    // Env declaration beats the config file within the detection tier.
    let std_version = match env::var("FEATPROBE_STD_VERSION") {
        Ok(raw) => Some(
            raw.trim()
                .parse::<u64>()
                .map_err(|_| format!("Invalid FEATPROBE_STD_VERSION value: {}", raw))?,
        ),
        Err(_) => config_std_version,
    };

    Ok(SelectionFlags {
        force_modern,
        force_fallback,
        std_version,
    })
}

fn env_truthy(name: &str) -> bool {
    match env::var(name) {
        Ok(v) => matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_force_modern_wins_over_everything() {
        let flags = SelectionFlags {
            force_modern: true,
            force_fallback: true,
            std_version: Some(0),
        };
        assert_eq!(select(flags), Variant::Modern);
    }

    #[test]
    fn test_force_fallback_wins_over_detection() {
        let flags = SelectionFlags {
            force_modern: false,
            force_fallback: true,
            std_version: Some(STD_VERSION_THRESHOLD),
        };
        assert_eq!(select(flags), Variant::Fallback);
    }

    #[test]
    fn test_std_version_at_threshold_is_modern() {
        let flags = SelectionFlags {
            std_version: Some(201112),
            ..Default::default()
        };
        assert_eq!(select(flags), Variant::Modern);
    }

    #[test]
    fn test_std_version_below_threshold_is_fallback() {
        let flags = SelectionFlags {
            std_version: Some(201111),
            ..Default::default()
        };
        assert_eq!(select(flags), Variant::Fallback);
    }

    #[test]
    fn test_no_inputs_defaults_to_fallback() {
        assert_eq!(select(SelectionFlags::default()), Variant::Fallback);
    }

    #[test]
    fn test_variant_effects() {
        assert_eq!(Variant::Modern.tag(), 1);
        assert_eq!(Variant::Modern.exit_code(), 0);
        assert_eq!(Variant::Modern.greeting(), "Hello from modern implementation!");
        assert_eq!(Variant::Fallback.tag(), 2);
        assert_eq!(Variant::Fallback.exit_code(), 1);
        assert_eq!(
            Variant::Fallback.greeting(),
            "Hello from fallback implementation!"
        );
    }

    #[test]
    #[serial]
    fn test_resolve_flags_reads_env_overrides() {
        std::env::set_var("FEATPROBE_FORCE_MODERN", "yes");
        std::env::remove_var("FEATPROBE_FORCE_FALLBACK");
        std::env::remove_var("FEATPROBE_STD_VERSION");

        let flags = resolve_flags(false, false, None).expect("resolve failed");
        assert!(flags.force_modern);
        assert!(!flags.force_fallback);

        std::env::remove_var("FEATPROBE_FORCE_MODERN");
    }

    #[test]
    #[serial]
    fn test_resolve_flags_env_std_version_beats_config() {
        std::env::remove_var("FEATPROBE_FORCE_MODERN");
        std::env::remove_var("FEATPROBE_FORCE_FALLBACK");
        std::env::set_var("FEATPROBE_STD_VERSION", "201710");

        let flags = resolve_flags(false, false, Some(199901)).expect("resolve failed");
        assert_eq!(flags.std_version, Some(201710));

        std::env::remove_var("FEATPROBE_STD_VERSION");
    }

    #[test]
    #[serial]
    fn test_resolve_flags_rejects_bad_std_version() {
        std::env::set_var("FEATPROBE_STD_VERSION", "c11");
        let err = resolve_flags(false, false, None).unwrap_err();
        assert!(err.contains("FEATPROBE_STD_VERSION"));
        std::env::remove_var("FEATPROBE_STD_VERSION");
    }

    #[test]
    #[serial]
    fn test_resolve_flags_falsy_env_is_ignored() {
        std::env::set_var("FEATPROBE_FORCE_FALLBACK", "0");
        std::env::remove_var("FEATPROBE_FORCE_MODERN");
        std::env::remove_var("FEATPROBE_STD_VERSION");

        let flags = resolve_flags(false, false, None).expect("resolve failed");
        assert!(!flags.force_fallback);

        std::env::remove_var("FEATPROBE_FORCE_FALLBACK");
    }
}
