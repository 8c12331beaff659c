/// Rotating "typewriter" title shown under the name in the hero.
///
/// Pure state machine: `tick()` advances one step, `delay()` says how
/// long to wait before the next tick. The app drives it from a timer
/// subscription.

use std::time::Duration;

const TYPE_DELAY: Duration = Duration::from_millis(80);
const DELETE_DELAY: Duration = Duration::from_millis(50);
const HOLD_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    /// Full title on screen, waiting before deleting
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    titles: Vec<String>,
    title_index: usize,
    /// Number of characters (not bytes) currently shown
    chars: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(titles: Vec<String>) -> Self {
        Self {
            titles,
            title_index: 0,
            chars: 0,
            phase: Phase::Typing,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn title_index(&self) -> usize {
        self.title_index
    }

    /// Nothing to animate without titles
    pub fn is_idle(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => TYPE_DELAY,
            Phase::Holding => HOLD_DELAY,
            Phase::Deleting => DELETE_DELAY,
        }
    }

    /// Visible part of the current title
    pub fn text(&self) -> &str {
        let Some(title) = self.titles.get(self.title_index) else {
            return "";
        };
        match title.char_indices().nth(self.chars) {
            Some((end, _)) => &title[..end],
            None => title,
        }
    }

    pub fn tick(&mut self) {
        let Some(title) = self.titles.get(self.title_index) else {
            return;
        };
        let len = title.chars().count();

        match self.phase {
            Phase::Typing => {
                if self.chars < len {
                    self.chars += 1;
                }
                if self.chars >= len {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting => {
                if self.chars > 0 {
                    self.chars -= 1;
                } else {
                    self.title_index = (self.title_index + 1) % self.titles.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer() -> Typewriter {
        Typewriter::new(vec!["Dev".to_string(), "Programmer".to_string()])
    }

    #[test]
    fn test_types_one_char_per_tick() {
        let mut tw = writer();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.delay(), Duration::from_millis(80));

        tw.tick();
        assert_eq!(tw.text(), "D");
        tw.tick();
        assert_eq!(tw.text(), "De");
    }

    #[test]
    fn test_full_cycle_moves_to_next_title() {
        let mut tw = writer();
        for _ in 0..3 {
            tw.tick();
        }
        assert_eq!(tw.text(), "Dev");
        assert_eq!(tw.phase(), Phase::Holding);
        assert_eq!(tw.delay(), Duration::from_millis(2000));

        tw.tick();
        assert_eq!(tw.phase(), Phase::Deleting);
        assert_eq!(tw.delay(), Duration::from_millis(50));

        for _ in 0..3 {
            tw.tick();
        }
        assert_eq!(tw.text(), "");
        assert_eq!(tw.title_index(), 0);

        tw.tick();
        assert_eq!(tw.title_index(), 1);
        assert_eq!(tw.phase(), Phase::Typing);
        tw.tick();
        assert_eq!(tw.text(), "P");
    }

    #[test]
    fn test_wraps_after_last_title() {
        let mut tw = Typewriter::new(vec!["A".to_string()]);
        tw.tick(); // "A", holding
        tw.tick(); // deleting
        tw.tick(); // ""
        tw.tick(); // next title
        assert_eq!(tw.title_index(), 0);
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn test_multibyte_titles_slice_on_char_boundaries() {
        let mut tw = Typewriter::new(vec!["Café".to_string()]);
        for _ in 0..4 {
            tw.tick();
        }
        assert_eq!(tw.text(), "Café");
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "Caf");
    }

    #[test]
    fn test_no_titles_is_idle() {
        let mut tw = Typewriter::new(Vec::new());
        tw.tick();
        assert!(tw.is_idle());
        assert_eq!(tw.text(), "");
    }
}
