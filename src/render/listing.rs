//! Display-list construction
//!
//! Flattens a skill listing into ordered rows carrying everything a front
//! end needs: tier, color bucket, bar width, and the reveal delay. Input
//! order is preserved exactly; nothing is sorted, filtered, or deduplicated
//! (duplicate names stay distinct rows).

use serde::Serialize;
use std::time::Duration;

use crate::config::AnimationConfig;
use crate::proficiency::{ColorBucket, Level, Tier};
use crate::profile::skills::{SkillListing, SkillRecord};
use crate::reveal::StaggerSchedule;

/// One renderable row of a proficiency listing.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayRow {
    pub name: String,
    pub level: Level,
    pub tier: Tier,
    pub label: &'static str,
    pub bucket: ColorBucket,
    /// Bar width at the Revealed state, in percent.
    pub width_percent: u8,
    /// Reveal start offset from the panel's open instant, in milliseconds.
    pub delay_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Group heading this row falls under, for grouped listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub emphasized: bool,
    pub sub_item: bool,
}

impl DisplayRow {
    fn from_record(record: &SkillRecord, delay: Duration, group: Option<&str>) -> Self {
        let tier = record.level.tier();
        Self {
            name: record.name.clone(),
            level: record.level,
            tier,
            label: tier.label(),
            bucket: tier.color_bucket(),
            width_percent: record.level.width_percent(),
            delay_ms: delay.as_millis() as u64,
            description: record.description.clone(),
            group: group.map(str::to_string),
            emphasized: record.emphasized,
            sub_item: record.sub_item,
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Build the display list for a listing with the configured stagger.
///
/// Flat listings delay row `i` by `i * stagger`; grouped listings delay the
/// row at `(g, i)` by `(g * stride + i) * stagger`, stride being the
/// largest group's size.
pub fn display_list(listing: &SkillListing, animation: &AnimationConfig) -> Vec<DisplayRow> {
    let step = animation.stagger();
    match listing {
        SkillListing::Flat { skills } => {
            let schedule = StaggerSchedule::flat(step);
            skills
                .iter()
                .enumerate()
                .map(|(i, record)| DisplayRow::from_record(record, schedule.delay(i), None))
                .collect()
        }
        SkillListing::Grouped { groups } => {
            let stride = groups.iter().map(|g| g.skills.len()).max().unwrap_or(0);
            let schedule = StaggerSchedule::grouped(step, stride);
            let mut rows = Vec::new();
            for (g, group) in groups.iter().enumerate() {
                for (i, record) in group.skills.iter().enumerate() {
                    rows.push(DisplayRow::from_record(
                        record,
                        schedule.group_delay(g, i),
                        Some(group.title.as_str()),
                    ));
                }
            }
            rows
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::skills::{SkillGroup, SkillRecord};

    fn record(name: &str, level: i64) -> SkillRecord {
        SkillRecord {
            name: name.to_string(),
            level: Level::new(level),
            description: None,
            icon: None,
            emphasized: false,
            sub_item: false,
        }
    }

    #[test]
    fn test_flat_rows_keep_order_and_delay_by_index() {
        let listing = SkillListing::Flat {
            skills: vec![record("a", 9), record("b", 3), record("c", 7)],
        };
        let rows = display_list(&listing, &AnimationConfig::default());

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(rows[0].delay_ms, 0);
        assert_eq!(rows[1].delay_ms, 100);
        assert_eq!(rows[2].delay_ms, 200);
    }

    #[test]
    fn test_grouped_rows_delay_across_groups() {
        let listing = SkillListing::Grouped {
            groups: vec![
                SkillGroup {
                    title: "First".to_string(),
                    icon: None,
                    skills: vec![record("a", 9), record("b", 9)],
                },
                SkillGroup {
                    title: "Second".to_string(),
                    icon: None,
                    skills: vec![record("c", 7), record("d", 7), record("e", 7)],
                },
            ],
        };
        let rows = display_list(&listing, &AnimationConfig::default());

        // stride = 3 (largest group), so group 1 starts at 3 * 100ms
        assert_eq!(rows[0].delay_ms, 0);
        assert_eq!(rows[1].delay_ms, 100);
        assert_eq!(rows[2].delay_ms, 300);
        assert_eq!(rows[4].delay_ms, 500);
        assert_eq!(rows[2].group.as_deref(), Some("Second"));
    }

    #[test]
    fn test_duplicate_names_stay_distinct() {
        let listing = SkillListing::Flat {
            skills: vec![record("Server", 8), record("Server", 5)],
        };
        let rows = display_list(&listing, &AnimationConfig::default());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].width_percent, 80);
        assert_eq!(rows[1].width_percent, 50);
    }

    #[test]
    fn test_row_attributes_derive_from_level() {
        let listing = SkillListing::Flat {
            skills: vec![record("LAN", 9)],
        };
        let rows = display_list(&listing, &AnimationConfig::default());
        assert_eq!(rows[0].label, "Expert");
        assert_eq!(rows[0].width_percent, 90);
        assert_eq!(rows[0].bucket, ColorBucket::Highest);
    }
}
