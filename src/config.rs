use crate::logging::LogLevel;

pub const DEFAULT_TYPING_PHRASES: [&str; 4] = [
    "Software Developer",
    "Web Developer",
    "UI Designer",
    "Problem Solver",
];

const DEFAULT_TYPE_TICK_MS: u32 = 100;
const DEFAULT_DELETE_TICK_MS: u32 = 50;
const DEFAULT_FULL_PAUSE_MS: u32 = 2_000;
const DEFAULT_EMPTY_PAUSE_MS: u32 = 500;
const DEFAULT_HEADER_ELEVATE_AFTER: f64 = 100.0;
const DEFAULT_BACK_TO_TOP_AFTER: f64 = 300.0;
const DEFAULT_ACTIVE_SECTION_LEAD: f64 = 100.0;
const DEFAULT_REVEAL_MARGIN: f64 = 150.0;
const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;
const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 250;
const DEFAULT_COUNTER_STEPS: u32 = 50;
const DEFAULT_COUNTER_TICK_MS: u32 = 40;
const DEFAULT_SKILL_BAR_DELAY_MS: u32 = 200;
const DEFAULT_LATCH_THRESHOLD: f64 = 0.5;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const RESIZE_DEBOUNCE_MS_BOUNDS: (u32, u32) = (0, 5_000);
const MOBILE_BREAKPOINT_BOUNDS: (f64, f64) = (240.0, 4_096.0);

pub const PHRASE_SEPARATOR: char = '|';

#[derive(Clone, Debug, PartialEq)]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    pub type_tick_ms: u32,
    pub delete_tick_ms: u32,
    pub full_pause_ms: u32,
    pub empty_pause_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_TYPING_PHRASES.iter().map(ToString::to_string).collect(),
            type_tick_ms: DEFAULT_TYPE_TICK_MS,
            delete_tick_ms: DEFAULT_DELETE_TICK_MS,
            full_pause_ms: DEFAULT_FULL_PAUSE_MS,
            empty_pause_ms: DEFAULT_EMPTY_PAUSE_MS,
        }
    }
}

/// Scroll offsets (in CSS pixels) at which discrete UI state flips.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThresholds {
    pub header_elevate_after: f64,
    pub back_to_top_after: f64,
    pub active_section_lead: f64,
    pub reveal_margin: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            header_elevate_after: DEFAULT_HEADER_ELEVATE_AFTER,
            back_to_top_after: DEFAULT_BACK_TO_TOP_AFTER,
            active_section_lead: DEFAULT_ACTIVE_SECTION_LEAD,
            reveal_margin: DEFAULT_REVEAL_MARGIN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavConfig {
    pub mobile_breakpoint: f64,
    pub resize_debounce_ms: u32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverConfig {
    pub counter_steps: u32,
    pub counter_tick_ms: u32,
    pub skill_bar_delay_ms: u32,
    pub latch_threshold: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            counter_steps: DEFAULT_COUNTER_STEPS,
            counter_tick_ms: DEFAULT_COUNTER_TICK_MS,
            skill_bar_delay_ms: DEFAULT_SKILL_BAR_DELAY_MS,
            latch_threshold: DEFAULT_LATCH_THRESHOLD,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_root_margin: DEFAULT_REVEAL_ROOT_MARGIN,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub typing: TypingConfig,
    pub scroll: ScrollThresholds,
    pub nav: NavConfig,
    pub observer: ObserverConfig,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            typing: TypingConfig::default(),
            scroll: ScrollThresholds::default(),
            nav: NavConfig::default(),
            observer: ObserverConfig::default(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteConfig {
    /// Builds a config from `data-*` attributes on the mount element.
    ///
    /// `lookup` receives the full attribute name. Missing, blank or
    /// out-of-bounds values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_empty = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(level) = non_empty("data-log-level").and_then(|value| LogLevel::parse(&value)) {
            config.log_level = level;
        }

        if let Some(raw) = non_empty("data-typing-phrases") {
            let phrases = parse_phrases(&raw);
            if !phrases.is_empty() {
                config.typing.phrases = phrases;
            }
        }

        config.nav.resize_debounce_ms = parse_u32_with_bounds(
            non_empty("data-resize-debounce-ms"),
            config.nav.resize_debounce_ms,
            RESIZE_DEBOUNCE_MS_BOUNDS,
        );
        config.nav.mobile_breakpoint = parse_f64_with_bounds(
            non_empty("data-mobile-breakpoint"),
            config.nav.mobile_breakpoint,
            MOBILE_BREAKPOINT_BOUNDS,
        );

        config
    }
}

pub fn parse_phrases(raw: &str) -> Vec<String> {
    raw.split(PHRASE_SEPARATOR)
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn parse_u32_with_bounds(value: Option<String>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_f64_with_bounds(value: Option<String>, default: f64, bounds: (f64, f64)) -> f64 {
    value
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_lookup_keeps_defaults() {
        let config = SiteConfig::from_lookup(|_| None);
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.typing.phrases.len(), 4);
        assert_eq!(config.nav.resize_debounce_ms, 250);
    }

    #[test]
    fn overrides_are_applied_within_bounds() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("data-log-level", "DEBUG"),
            ("data-typing-phrases", "Rustacean | | Builder"),
            ("data-resize-debounce-ms", "400"),
            ("data-mobile-breakpoint", "1024"),
        ]));

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.typing.phrases, vec!["Rustacean", "Builder"]);
        assert_eq!(config.nav.resize_debounce_ms, 400);
        assert_eq!(config.nav.mobile_breakpoint, 1024.0);
    }

    #[test]
    fn out_of_bounds_or_garbage_values_fall_back() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("data-log-level", "verbose"),
            ("data-typing-phrases", " | "),
            ("data-resize-debounce-ms", "60000"),
            ("data-mobile-breakpoint", "NaN"),
        ]));

        assert_eq!(config, SiteConfig::default());
    }
}
