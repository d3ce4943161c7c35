//! Splits options so each result holds at most one detector per kind and a
//! single opening shared by all of its delimited detectors.

use crate::options::{Detector, DetectorKind, Options};
use std::collections::BTreeMap;

type Entry<'a> = (&'a String, &'a Detector);

pub fn expand_single_detector_same_opening(options: &Options) -> Vec<Options> {
    let mut groups = opening_groups(options);
    let undelimited: Vec<Entry<'_>> = options
        .detectors
        .iter()
        .filter(|(_, detector)| !detector.is_delimited())
        .collect();

    if groups.is_empty() {
        groups.push(Vec::new());
    }

    let combinations: Vec<Vec<Entry<'_>>> = groups
        .into_iter()
        .flat_map(|mut group| {
            group.extend(undelimited.iter().copied());
            single_detector_combinations(group)
        })
        .collect();

    let total = combinations.len();
    combinations
        .into_iter()
        .enumerate()
        .map(|(index, combination)| {
            let mut expanded = options.clone();
            if total > 1 {
                expanded.name = format!("{}+{}", options.name, index + 1);
            }
            expanded.detectors = combination
                .into_iter()
                .map(|(key, detector)| (key.clone(), detector.clone()))
                .collect();
            expanded
        })
        .collect()
}

/// Groups delimited detectors by identical opening, in key order of each
/// group's first member.
fn opening_groups(options: &Options) -> Vec<Vec<Entry<'_>>> {
    let mut groups: Vec<Vec<Entry<'_>>> = Vec::new();
    for (key, detector) in &options.detectors {
        let Some(opening) = detector.opening() else {
            continue;
        };

        let existing = groups.iter_mut().find(|group| {
            group
                .first()
                .and_then(|(_, first)| first.opening())
                .is_some_and(|first| first.is_equivalent(opening))
        });
        match existing {
            Some(group) => group.push((key, detector)),
            None => groups.push(vec![(key, detector)]),
        }
    }
    groups
}

fn single_detector_combinations(entries: Vec<Entry<'_>>) -> Vec<Vec<Entry<'_>>> {
    let mut by_kind: BTreeMap<DetectorKind, Vec<Entry<'_>>> = BTreeMap::new();
    for entry in entries {
        by_kind.entry(entry.1.kind()).or_default().push(entry);
    }

    let mut combinations: Vec<Vec<Entry<'_>>> = vec![Vec::new()];
    for candidates in by_kind.into_values() {
        combinations = combinations
            .into_iter()
            .flat_map(|combination| {
                candidates.iter().map(move |candidate| {
                    let mut next = combination.clone();
                    next.push(*candidate);
                    next
                })
            })
            .collect();
    }
    combinations
}
