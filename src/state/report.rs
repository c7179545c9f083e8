//! Mock classification data for the results and gallery screens.
//!
//! Everything here is hard-coded or deterministically generated. The real
//! product would fill these from the analysis backend; this client ships
//! with demo content only.

use chrono::{Duration, NaiveDate};

/// Object classes the (imaginary) classifier reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    SpiralGalaxy,
    Nebula,
    Star,
    Quasar,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 4] = [
        ObjectKind::SpiralGalaxy,
        ObjectKind::Nebula,
        ObjectKind::Star,
        ObjectKind::Quasar,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ObjectKind::SpiralGalaxy => "Spiral galaxy",
            ObjectKind::Nebula => "Nebula",
            ObjectKind::Star => "Star",
            ObjectKind::Quasar => "Quasar",
        }
    }

    /// Plural form used by the gallery category chips.
    pub fn plural(self) -> &'static str {
        match self {
            ObjectKind::SpiralGalaxy => "Galaxies",
            ObjectKind::Nebula => "Nebulae",
            ObjectKind::Star => "Stars",
            ObjectKind::Quasar => "Quasars",
        }
    }
}

/// One row of the detection summary: how many objects of a class were
/// found and with what confidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub kind: ObjectKind,
    pub count: u32,
    /// Percentage, 0..=100
    pub confidence: u8,
}

/// A single detected object in the detail list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionDetail {
    pub designation: String,
    pub kind: ObjectKind,
    pub confidence: u8,
    /// Right ascension, preformatted for display
    pub ra: String,
    /// Declination, preformatted for display
    pub dec: String,
}

/// Category chip on the gallery screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub kind: ObjectKind,
    pub count: u32,
}

/// One archived observation card in the gallery grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub kind: ObjectKind,
    pub confidence: u8,
    pub captured: NaiveDate,
}

/// Summary cards for the results screen.
pub fn detection_summary() -> Vec<Detection> {
    vec![
        Detection {
            kind: ObjectKind::SpiralGalaxy,
            count: 12,
            confidence: 98,
        },
        Detection {
            kind: ObjectKind::Nebula,
            count: 8,
            confidence: 95,
        },
        Detection {
            kind: ObjectKind::Star,
            count: 145,
            confidence: 99,
        },
        Detection {
            kind: ObjectKind::Quasar,
            count: 3,
            confidence: 87,
        },
    ]
}

/// Detail rows for the results screen, cycling through the summary classes.
pub fn detection_details() -> Vec<DetectionDetail> {
    let summary = detection_summary();

    (0..6)
        .map(|i| {
            let source = &summary[i % summary.len()];
            DetectionDetail {
                designation: format!("Celestial object #{}", i + 1),
                kind: source.kind,
                confidence: source.confidence,
                ra: format!("RA {:02}h {:02}m", 12 + i as u32, (34 + 7 * i as u32) % 60),
                dec: format!("Dec +{}° {:02}'", 45 + i as u32, (12 + 11 * i as u32) % 60),
            }
        })
        .collect()
}

/// Archive totals for the gallery category chips.
pub fn gallery_categories() -> Vec<Category> {
    vec![
        Category {
            kind: ObjectKind::SpiralGalaxy,
            count: 234,
        },
        Category {
            kind: ObjectKind::Nebula,
            count: 156,
        },
        Category {
            kind: ObjectKind::Star,
            count: 1842,
        },
        Category {
            kind: ObjectKind::Quasar,
            count: 45,
        },
    ]
}

/// Placeholder observation cards. Confidence jitters deterministically in
/// the 90..=99 band so the grid doesn't look copy-pasted.
pub fn gallery_observations() -> Vec<Observation> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");

    (0..12)
        .map(|i| Observation {
            kind: ObjectKind::ALL[i % ObjectKind::ALL.len()],
            confidence: 90 + ((i as u8 * 7) % 10),
            captured: start - Duration::days(3 * i as i64),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_covers_all_kinds() {
        let summary = detection_summary();

        assert_eq!(summary.len(), ObjectKind::ALL.len());
        for kind in ObjectKind::ALL {
            assert!(summary.iter().any(|d| d.kind == kind));
        }
    }

    #[test]
    fn test_confidence_is_a_percentage() {
        for detection in detection_summary() {
            assert!(detection.confidence <= 100);
        }
        for detail in detection_details() {
            assert!(detail.confidence <= 100);
        }
    }

    #[test]
    fn test_gallery_observations_stay_in_band() {
        let observations = gallery_observations();

        assert_eq!(observations.len(), 12);
        for observation in observations {
            assert!((90..=99).contains(&observation.confidence));
        }
    }

    #[test]
    fn test_detail_designations_are_sequential() {
        let details = detection_details();

        assert_eq!(details.len(), 6);
        assert_eq!(details[0].designation, "Celestial object #1");
        assert_eq!(details[5].designation, "Celestial object #6");
    }
}
