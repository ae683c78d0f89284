use std::collections::BTreeMap;

// Observers report the ratio at the crossing, which can land a hair under
// the configured threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObservableElement {
    pub id: usize,
    pub has_fired_once: bool,
}

/// Decides when a watched element fires. Each element fires at most once;
/// after firing the caller must stop observing it.
#[derive(Clone, Debug)]
pub struct VisibilityLatch {
    threshold: f64,
    elements: BTreeMap<usize, ObservableElement>,
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            elements: BTreeMap::new(),
        }
    }

    pub fn observe(&mut self, id: usize) {
        self.elements.entry(id).or_insert(ObservableElement {
            id,
            has_fired_once: false,
        });
    }

    #[cfg(test)]
    pub fn is_observing(&self, id: usize) -> bool {
        self.elements
            .get(&id)
            .is_some_and(|element| !element.has_fired_once)
    }

    #[cfg(test)]
    pub fn has_fired(&self, id: usize) -> bool {
        self.elements
            .get(&id)
            .is_some_and(|element| element.has_fired_once)
    }

    /// Reports a visibility change. Returns true when the element fires.
    pub fn on_visibility(&mut self, id: usize, intersecting: bool, ratio: f64) -> bool {
        let Some(element) = self.elements.get_mut(&id) else {
            return false;
        };

        if element.has_fired_once || !intersecting || ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }

        element.has_fired_once = true;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterTick {
    pub display: u32,
    pub done: bool,
}

/// Counts from zero to `target` in fixed increments. The displayed value is
/// truncated, so the last frame before the final snap may read below target.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u32, steps: u32) -> Self {
        Self {
            target,
            increment: f64::from(target) / f64::from(steps.max(1)),
            current: 0.0,
            done: false,
        }
    }

    #[cfg(test)]
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn tick(&mut self) -> Option<CounterTick> {
        if self.done {
            return None;
        }

        self.current += self.increment;
        if self.current >= f64::from(self.target) {
            self.done = true;
            return Some(CounterTick {
                display: self.target,
                done: true,
            });
        }

        Some(CounterTick {
            display: self.current.floor() as u32,
            done: false,
        })
    }
}

/// A validated skill bar width in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillWidth(f64);

impl SkillWidth {
    /// Accepts `"85%"` or `"85"`; anything outside `0..=100` is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        let value = number.parse::<f64>().ok()?;

        if value.is_finite() && (0.0..=100.0).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    #[cfg(test)]
    pub fn percent(self) -> f64 {
        self.0
    }

    pub fn css(self) -> String {
        format!("{}%", self.0)
    }
}

pub fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}
