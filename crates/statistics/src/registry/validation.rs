//! Self-check of the catalog against [`CategoryKind`], [`StatisticKind`] and
//! [`Snapshot::FIELD_NAMES`]. Drift is reported, never fatal: a statistic that
//! is missing from the catalog only means it cannot be graphed.

use std::collections::HashMap;
use std::fmt;

use crate::catalog::{CategoryKind, StatisticKind};
use crate::snapshot::Snapshot;

use super::StatisticsRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryIssue {
    MissingCategory(CategoryKind),
    DuplicateCategory { kind: CategoryKind, count: usize },
    MissingStatistic(StatisticKind),
    DuplicateStatistic { kind: StatisticKind, count: usize },
    /// A statistic whose back-reference disagrees with the category holding it.
    MisfiledStatistic {
        kind: StatisticKind,
        listed_under: CategoryKind,
        claims: CategoryKind,
    },
    /// A statistic whose field name is not exactly once in the field list.
    UnresolvedField { kind: StatisticKind, matches: usize },
    /// A field name that no statistic kind maps to.
    OrphanField(String),
    DuplicateField(String),
}

impl fmt::Display for RegistryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryIssue::MissingCategory(kind) => {
                write!(f, "category {kind:?} is not in the registry")
            }
            RegistryIssue::DuplicateCategory { kind, count } => {
                write!(f, "category {kind:?} appears {count} times")
            }
            RegistryIssue::MissingStatistic(kind) => {
                write!(f, "statistic {kind:?} is not in any category")
            }
            RegistryIssue::DuplicateStatistic { kind, count } => {
                write!(f, "statistic {kind:?} appears {count} times")
            }
            RegistryIssue::MisfiledStatistic {
                kind,
                listed_under,
                claims,
            } => write!(
                f,
                "statistic {kind:?} is listed under {listed_under:?} but belongs to {claims:?}"
            ),
            RegistryIssue::UnresolvedField { kind, matches } => write!(
                f,
                "statistic {kind:?} field '{}' matches {matches} snapshot fields",
                kind.field_name()
            ),
            RegistryIssue::OrphanField(name) => {
                write!(f, "snapshot field '{name}' has no statistic kind")
            }
            RegistryIssue::DuplicateField(name) => {
                write!(f, "snapshot field '{name}' is listed more than once")
            }
        }
    }
}

impl StatisticsRegistry {
    /// Checks the registry against the snapshot's own field list.
    pub fn validate(&self) -> Vec<RegistryIssue> {
        self.validate_against(Snapshot::FIELD_NAMES)
    }

    pub fn validate_against(&self, field_names: &[&str]) -> Vec<RegistryIssue> {
        let mut issues = Vec::new();

        // Pass 1: categories.
        let mut category_counts: HashMap<CategoryKind, usize> = HashMap::new();
        for category in self.categories() {
            *category_counts.entry(category.kind).or_default() += 1;
        }
        for kind in CategoryKind::ALL {
            match category_counts.get(&kind).copied().unwrap_or(0) {
                0 => issues.push(RegistryIssue::MissingCategory(kind)),
                1 => {}
                count => issues.push(RegistryIssue::DuplicateCategory { kind, count }),
            }
        }

        // Pass 2: statistics and their snapshot fields.
        let mut field_counts: HashMap<&str, usize> = HashMap::new();
        for &name in field_names {
            *field_counts.entry(name).or_default() += 1;
        }

        let mut statistic_counts: HashMap<StatisticKind, usize> = HashMap::new();
        for category in self.categories() {
            for statistic in &category.statistics {
                *statistic_counts.entry(statistic.kind).or_default() += 1;
                if statistic.category != category.kind {
                    issues.push(RegistryIssue::MisfiledStatistic {
                        kind: statistic.kind,
                        listed_under: category.kind,
                        claims: statistic.category,
                    });
                }
            }
        }
        for kind in StatisticKind::ALL {
            match statistic_counts.get(&kind).copied().unwrap_or(0) {
                0 => issues.push(RegistryIssue::MissingStatistic(kind)),
                1 => {}
                count => issues.push(RegistryIssue::DuplicateStatistic { kind, count }),
            }
            let matches = field_counts.get(kind.field_name()).copied().unwrap_or(0);
            if matches != 1 {
                issues.push(RegistryIssue::UnresolvedField { kind, matches });
            }
        }

        // Every field must map back to exactly one kind.
        let mut reported = std::collections::HashSet::new();
        for &name in field_names {
            if !reported.insert(name) {
                continue;
            }
            if StatisticKind::from_field_name(name).is_none() {
                issues.push(RegistryIssue::OrphanField(name.to_string()));
            }
            if field_counts.get(name).copied().unwrap_or(0) > 1 {
                issues.push(RegistryIssue::DuplicateField(name.to_string()));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::ColorTable;

    fn registry() -> StatisticsRegistry {
        StatisticsRegistry::initialize(&ColorTable::loaded()).expect("colors ready")
    }

    #[test]
    fn test_builtin_catalog_has_no_issues() {
        let issues = registry().validate();
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn test_missing_category_reported() {
        let mut categories = registry().categories().to_vec();
        categories.retain(|c| c.kind != CategoryKind::Campus);
        let issues = StatisticsRegistry::from_categories(categories).validate();
        assert!(issues.contains(&RegistryIssue::MissingCategory(CategoryKind::Campus)));
        assert!(issues.contains(&RegistryIssue::MissingStatistic(
            StatisticKind::CampusStudents
        )));
    }

    #[test]
    fn test_duplicate_statistic_reported() {
        let mut categories = registry().categories().to_vec();
        let extra = categories[0].statistics[0].clone();
        categories[1].statistics.push(extra.clone());
        let issues = StatisticsRegistry::from_categories(categories).validate();
        assert!(issues.contains(&RegistryIssue::DuplicateStatistic {
            kind: extra.kind,
            count: 2
        }));
        assert!(issues.contains(&RegistryIssue::MisfiledStatistic {
            kind: extra.kind,
            listed_under: CategoryKind::Water,
            claims: CategoryKind::Electricity,
        }));
    }

    #[test]
    fn test_field_list_drift_reported() {
        let mut fields: Vec<&str> = Snapshot::FIELD_NAMES
            .iter()
            .copied()
            .filter(|&n| n != "population")
            .collect();
        fields.push("not_a_statistic");
        fields.push("unemployed");
        let issues = registry().validate_against(&fields);
        assert!(issues.contains(&RegistryIssue::UnresolvedField {
            kind: StatisticKind::Population,
            matches: 0
        }));
        assert!(issues.contains(&RegistryIssue::OrphanField("not_a_statistic".to_string())));
        assert!(issues.contains(&RegistryIssue::DuplicateField("unemployed".to_string())));
    }

    #[test]
    fn test_issue_display_names_the_kind() {
        let msg = RegistryIssue::MissingStatistic(StatisticKind::Population).to_string();
        assert!(msg.contains("Population"), "got: {msg}");
    }
}
