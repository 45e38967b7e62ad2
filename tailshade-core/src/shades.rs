//! Shade schedule derivation.
//!
//! A schedule is the ascending, duplicate-free list of shade keys a palette
//! is generated for. It comes either from a min/max range walked in fixed
//! steps or from a user-supplied comma-separated list.

/// Identifier for one palette step (50, 100, ... 2100).
pub type ShadeKey = u32;

/// The shade pinned to the unmodified base color.
pub const BASE_SHADE: ShadeKey = 500;

/// Largest shade key accepted anywhere.
pub const MAX_SHADE: ShadeKey = 2100;

/// Distance between consecutive shades in an automatic schedule.
pub const SHADE_STEP: ShadeKey = 50;

/// Schedule substituted when nothing valid remains.
pub const DEFAULT_SHADES: [ShadeKey; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Inputs to schedule derivation, borrowed from a `PaletteConfig`.
#[derive(Clone, Copy, Debug)]
pub struct ShadeSchedule<'a> {
    pub use_custom_ranges: bool,
    pub custom_ranges: &'a str,
    pub min_range: ShadeKey,
    pub max_range: ShadeKey,
}

impl ShadeSchedule<'_> {
    /// Derive the shade list.
    ///
    /// 500 is inserted whenever it lies within `[min_range, max_range]`,
    /// using the range bounds even when a custom list is active. An empty
    /// list (e.g. a custom list with no valid entries) becomes
    /// [`DEFAULT_SHADES`] before that step.
    pub fn shades(&self) -> Vec<ShadeKey> {
        let mut shades = if self.use_custom_ranges && !self.custom_ranges.trim().is_empty() {
            parse_custom_ranges(self.custom_ranges)
        } else {
            stepped_range(self.min_range, self.max_range)
        };

        if shades.is_empty() {
            log::warn!(
                "No valid shades in {:?}, using default schedule",
                self.custom_ranges
            );
            shades = DEFAULT_SHADES.to_vec();
        }

        if !shades.contains(&BASE_SHADE)
            && self.min_range <= BASE_SHADE
            && BASE_SHADE <= self.max_range
        {
            shades.push(BASE_SHADE);
        }

        shades.sort_unstable();
        shades.dedup();
        shades
    }
}

/// Parse a comma-separated shade list, dropping entries that are not
/// integers in [0, 2100].
pub fn parse_custom_ranges(input: &str) -> Vec<ShadeKey> {
    let mut shades: Vec<ShadeKey> = input
        .split(',')
        .filter_map(|entry| {
            let entry = entry.trim();
            match entry.parse::<i64>() {
                Ok(n) if (0..=MAX_SHADE as i64).contains(&n) => Some(n as ShadeKey),
                _ => {
                    if !entry.is_empty() {
                        log::debug!("Dropping custom shade {entry:?}");
                    }
                    None
                }
            }
        })
        .collect();
    shades.sort_unstable();
    shades
}

/// `min, min + 50, ...` while `<= max`, then `max` itself if the walk
/// did not land on it.
fn stepped_range(min: ShadeKey, max: ShadeKey) -> Vec<ShadeKey> {
    let mut shades: Vec<ShadeKey> = (min..=max).step_by(SHADE_STEP as usize).collect();
    if shades.last() != Some(&max) {
        shades.push(max);
    }
    shades
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto(min_range: ShadeKey, max_range: ShadeKey) -> Vec<ShadeKey> {
        ShadeSchedule {
            use_custom_ranges: false,
            custom_ranges: "",
            min_range,
            max_range,
        }
        .shades()
    }

    fn custom(list: &str) -> Vec<ShadeKey> {
        ShadeSchedule {
            use_custom_ranges: true,
            custom_ranges: list,
            min_range: 50,
            max_range: 950,
        }
        .shades()
    }

    #[test]
    fn default_range_walks_in_steps_of_fifty() {
        let shades = auto(50, 950);
        let expected: Vec<ShadeKey> = (1..=19).map(|i| i * 50).collect();
        assert_eq!(shades, expected);
        assert!(shades.contains(&BASE_SHADE));
    }

    #[test]
    fn appends_max_when_walk_misses_it() {
        let shades = auto(60, 990);
        assert_eq!(shades.first(), Some(&60));
        assert_eq!(shades.last(), Some(&990));
        assert!(shades.contains(&960));
        assert!(shades.contains(&BASE_SHADE));
        assert!(shades.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn base_shade_only_inserted_inside_range() {
        let shades = auto(600, 900);
        assert_eq!(shades, vec![600, 650, 700, 750, 800, 850, 900]);
    }

    #[test]
    fn custom_list_drops_invalid_entries() {
        assert_eq!(custom("50,9999,abc,200"), vec![50, 200, 500]);
    }

    #[test]
    fn custom_list_is_sorted_and_deduplicated() {
        assert_eq!(custom(" 900 , 100,100,500"), vec![100, 500, 900]);
    }

    #[test]
    fn custom_list_without_valid_entries_falls_back() {
        assert_eq!(custom("abc, -5, 3000"), DEFAULT_SHADES.to_vec());
    }

    #[test]
    fn blank_custom_list_uses_range() {
        assert_eq!(custom("   "), auto(50, 950));
    }

    #[test]
    fn custom_list_ignored_when_disabled() {
        let shades = ShadeSchedule {
            use_custom_ranges: false,
            custom_ranges: "100,200",
            min_range: 50,
            max_range: 950,
        }
        .shades();
        assert_eq!(shades, auto(50, 950));
    }

    #[test]
    fn parse_accepts_bounds() {
        assert_eq!(parse_custom_ranges("2100,0"), vec![0, 2100]);
    }
}
