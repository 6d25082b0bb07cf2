use std::time::Duration;

pub const DEFAULT_AUTO_ADVANCE_MS: u64 = 5_000;

/// Knobs baked in at build time, see build.rs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub build_time: &'static str,
    pub build_year: &'static str,
    pub auto_advance: Option<Duration>,
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self {
            build_time: env!("BUILD_TIME"),
            build_year: env!("BUILD_YEAR"),
            auto_advance: parse_auto_advance(env!("HERO_AUTO_ADVANCE_MS")),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// `0` turns auto-advance off. Anything unparsable falls back to the default.
pub fn parse_auto_advance(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) => None,
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(_) => {
            log::warn!(
                "invalid HERO_AUTO_ADVANCE_MS {raw:?}, using {DEFAULT_AUTO_ADVANCE_MS}ms"
            );
            Some(Duration::from_millis(DEFAULT_AUTO_ADVANCE_MS))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_auto_advance() {
        assert_eq!(parse_auto_advance("5000"), Some(Duration::from_secs(5)));
        assert_eq!(parse_auto_advance(" 600000 "), Some(Duration::from_secs(600)));
        assert_eq!(parse_auto_advance("0"), None);
        assert_eq!(
            parse_auto_advance("soon"),
            Some(Duration::from_millis(DEFAULT_AUTO_ADVANCE_MS))
        );
    }

    #[test]
    fn test_build_env_is_captured() {
        let config = SiteConfig::from_build_env();
        assert!(!config.build_time.is_empty());
        assert_eq!(config.build_year.len(), 4);
    }
}
