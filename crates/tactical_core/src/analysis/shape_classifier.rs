//! Rank-based position bands and coarse formation labels.
//!
//! Bands: each player's coordinate is ranked among the team's distinct
//! values and mapped into five equal buckets (0 = back/left, 4 = front/right).

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};

use crate::models::{EntityId, Position, Snapshot};

pub const BAND_COUNT: usize = 5;

/// Players required for formation detection
pub const FORMATION_PLAYERS: usize = 11;

/// Boundaries of the normalized thirds
const DEFENSIVE_THIRD: f32 = 0.33;
const MIDDLE_THIRD: f32 = 0.66;

/// Known (defense, midfield, attack) counts.
static FORMATIONS: Lazy<HashMap<(usize, usize, usize), &'static str>> = Lazy::new(|| {
    HashMap::from([
        ((4, 3, 3), "4-3-3"),
        ((4, 4, 2), "4-4-2"),
        ((4, 5, 1), "4-5-1"),
        ((3, 5, 2), "3-5-2"),
        ((3, 4, 3), "3-4-3"),
        ((5, 3, 2), "5-3-2"),
        ((5, 4, 1), "5-4-1"),
        ((4, 2, 4), "4-2-3-1"),
        ((3, 3, 4), "3-4-3"),
        ((2, 5, 3), "4-2-3-1"),
    ])
});

/// Bucket of `value` among the distinct values of `axis`.
fn band(value: f32, distinct_sorted: &[f32]) -> u8 {
    let rank = distinct_sorted.partition_point(|&v| v < value);
    let bucket = rank * BAND_COUNT / distinct_sorted.len();
    bucket.min(BAND_COUNT - 1) as u8
}

fn classify_axis(team: &Snapshot, coord: impl Fn(&Position) -> f32) -> BTreeMap<EntityId, u8> {
    if team.is_empty() {
        return BTreeMap::new();
    }

    let mut distinct: Vec<f32> = team.values().map(&coord).collect();
    distinct.sort_by(f32::total_cmp);
    distinct.dedup();

    team.iter()
        .map(|(&id, p)| (id, band(coord(p), &distinct)))
        .collect()
}

/// Vertical band per player: 0 (deepest) to 4 (most advanced along x).
pub fn classify_team_vertical(team: &Snapshot) -> BTreeMap<EntityId, u8> {
    classify_axis(team, |p| p.x)
}

/// Horizontal band per player: 0 (low y) to 4 (high y).
pub fn classify_team_horizontal(team: &Snapshot) -> BTreeMap<EntityId, u8> {
    classify_axis(team, |p| p.y)
}

/// Formation label from thirds-of-pitch counts.
///
/// Needs exactly 11 players; the deepest is dropped as goalkeeper. Unlisted
/// counts come back as `"D-M-F"`.
pub fn detect_formation(team: &Snapshot) -> Option<String> {
    if team.len() != FORMATION_PLAYERS {
        return None;
    }

    let mut xs: Vec<f32> = team.values().map(|p| p.x).collect();
    xs.sort_by(f32::total_cmp);
    let outfield = &xs[1..];

    let min_x = outfield[0];
    let max_x = outfield[outfield.len() - 1];
    let mut range = max_x - min_x;
    if range < 0.001 {
        range = 1.0;
    }

    let (mut def, mut mid, mut fwd) = (0usize, 0usize, 0usize);
    for x in outfield {
        let n = (x - min_x) / range;
        if n < DEFENSIVE_THIRD {
            def += 1;
        } else if n < MIDDLE_THIRD {
            mid += 1;
        } else {
            fwd += 1;
        }
    }

    let label = FORMATIONS
        .get(&(def, mid, fwd))
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("{}-{}-{}", def, mid, fwd));
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(raw: &[(f32, f32)]) -> Snapshot {
        raw.iter()
            .enumerate()
            .map(|(i, &p)| (i as u32 + 1, Position::from(p)))
            .collect()
    }

    fn home_433() -> Snapshot {
        team(&[
            (5.0, 34.0),
            (20.0, 10.0),
            (18.0, 25.0),
            (18.0, 43.0),
            (20.0, 58.0),
            (40.0, 20.0),
            (45.0, 34.0),
            (40.0, 48.0),
            (65.0, 15.0),
            (70.0, 34.0),
            (65.0, 53.0),
        ])
    }

    #[test]
    fn test_vertical_bands() {
        let bands = classify_team_vertical(&home_433());
        // distinct xs: 5, 18, 20, 40, 45, 65, 70
        assert_eq!(bands[&1], 0);
        assert_eq!(bands[&3], 0); // rank 1 of 7
        assert_eq!(bands[&2], 1); // rank 2
        assert_eq!(bands[&6], 2); // rank 3
        assert_eq!(bands[&7], 2); // rank 4
        assert_eq!(bands[&9], 3); // rank 5
        assert_eq!(bands[&10], 4); // rank 6
    }

    #[test]
    fn test_duplicates_share_band() {
        let bands = classify_team_vertical(&home_433());
        assert_eq!(bands[&3], bands[&4]);
        assert_eq!(bands[&9], bands[&11]);
    }

    #[test]
    fn test_horizontal_bands() {
        let bands = classify_team_horizontal(&home_433());
        assert_eq!(bands[&2], 0);
        assert_eq!(bands[&5], 4);
        assert!(bands.values().all(|&b| b < 5));
    }

    #[test]
    fn test_empty_and_single() {
        assert!(classify_team_vertical(&Snapshot::new()).is_empty());
        let single = team(&[(50.0, 30.0)]);
        assert_eq!(classify_team_horizontal(&single)[&1], 0);
    }

    #[test]
    fn test_detect_433() {
        assert_eq!(detect_formation(&home_433()).as_deref(), Some("4-3-3"));
    }

    #[test]
    fn test_detect_requires_eleven() {
        let mut t = home_433();
        t.remove(&11);
        assert_eq!(detect_formation(&t), None);
    }

    #[test]
    fn test_unlisted_counts_fall_back() {
        // 6 at the back, 1 mid, 3 forwards
        let t = team(&[
            (2.0, 34.0),
            (10.0, 5.0),
            (10.0, 15.0),
            (10.0, 25.0),
            (10.0, 35.0),
            (10.0, 45.0),
            (10.0, 55.0),
            (30.0, 34.0),
            (50.0, 10.0),
            (50.0, 34.0),
            (50.0, 58.0),
        ]);
        assert_eq!(detect_formation(&t).as_deref(), Some("6-1-3"));
    }

    #[test]
    fn test_flat_line_does_not_divide_by_zero() {
        let t = team(&[(5.0, 34.0); 11]);
        assert_eq!(detect_formation(&t).as_deref(), Some("10-0-0"));
    }
}
