//! Conversion: RawSeriesPayload → CategoricalViewModel.

use super::wire::RawSeriesPayload;
use super::{CategoricalViewModel, Series, StyleRole};

/// Wrap a validated payload into a single named, styled series.
pub fn to_categorical(raw: RawSeriesPayload, role: StyleRole) -> CategoricalViewModel {
    CategoricalViewModel {
        labels: raw.labels,
        series: Series {
            name: role.series_name().to_string(),
            values: raw.data,
            style: role.default_style(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::Fill;

    fn payload(labels: &[&str], data: &[f64]) -> RawSeriesPayload {
        RawSeriesPayload {
            labels: labels.iter().map(|s| s.to_string()).collect(),
            data: data.to_vec(),
        }
    }

    #[test]
    fn test_labels_and_values_carried_over() {
        let vm = to_categorical(payload(&["a", "b"], &[1.0, 2.0]), StyleRole::Line);
        assert_eq!(vm.labels, vec!["a", "b"]);
        assert_eq!(vm.series.values, vec![1.0, 2.0]);
        assert_eq!(vm.labels.len(), vm.series.values.len());
        assert_eq!(vm.series.name, "Line Chart");
    }

    #[test]
    fn test_role_selects_style() {
        let bar = to_categorical(payload(&["x"], &[1.0]), StyleRole::Bar);
        let pie = to_categorical(payload(&["x"], &[1.0]), StyleRole::Pie);
        assert_eq!(bar.series.name, "Bar Chart");
        assert_eq!(pie.series.name, "Pie Chart");
        assert!(matches!(bar.series.style.fill, Fill::Rotating(ref c) if c.len() == 3));
        assert_ne!(bar.series.style, pie.series.style);
    }

    #[test]
    fn test_no_range_validation() {
        let vm = to_categorical(payload(&["neg", "big"], &[-5.0, 1e12]), StyleRole::Pie);
        assert_eq!(vm.series.values, vec![-5.0, 1e12]);
    }

    #[test]
    fn test_idempotent() {
        let raw = payload(&["q1", "q2", "q3"], &[3.0, 1.0, 4.0]);
        let first = to_categorical(raw.clone(), StyleRole::Bar);
        let second = to_categorical(raw, StyleRole::Bar);
        assert_eq!(first, second);
    }

    #[test]
    fn test_points_pairs_in_order() {
        let vm = to_categorical(payload(&["a", "b"], &[1.0, 2.0]), StyleRole::Line);
        let points: Vec<_> = vm.points().collect();
        assert_eq!(points, vec![("a", 1.0), ("b", 2.0)]);
    }
}
