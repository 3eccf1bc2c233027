use super::model::{GroupStats, TrialGroups};

/// Arithmetic mean; NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`); NaN for an empty slice.
pub fn std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// One output line for `row`: `group mean std_dev` text, or a JSON object.
pub fn format_row(row: &GroupStats, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string(row)
    } else {
        Ok(row.to_string())
    }
}

/// Aggregate every group, in group-number order.
pub fn summarize(groups: &TrialGroups) -> Vec<GroupStats> {
    groups
        .iter()
        .map(|(&group, values)| GroupStats {
            group,
            mean: mean(values),
            std_dev: std_dev(values),
            samples: values.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_std_dev() {
        let values = [1.0, 2.0, 3.0];
        assert!((mean(&values) - 2.0).abs() < 1e-12);
        assert!((std_dev(&values) - 0.816_496_580_927_726).abs() < 1e-12);
    }

    #[test]
    fn single_value_has_zero_spread() {
        assert_eq!(std_dev(&[4.2]), 0.0);
    }

    #[test]
    fn empty_group_is_nan() {
        assert!(mean(&[]).is_nan());
        assert!(std_dev(&[]).is_nan());
    }

    #[test]
    fn rows_format_as_text_or_json() {
        let mut groups = TrialGroups::new();
        groups.insert(1, vec![1.0, 2.0, 3.0]);
        groups.insert(2, Vec::new());
        let rows = summarize(&groups);

        assert_eq!(format_row(&rows[0], false).unwrap(), "1 2.0000 0.8165");
        assert_eq!(format_row(&rows[1], false).unwrap(), "2 nan nan");
        assert!(format_row(&rows[0], true)
            .unwrap()
            .starts_with(r#"{"group":1,"mean":2.0,"std_dev":0.816"#));
        assert_eq!(
            format_row(&rows[1], true).unwrap(),
            r#"{"group":2,"mean":null,"std_dev":null,"samples":0}"#
        );
    }

    #[test]
    fn rows_follow_group_order() {
        let mut groups = TrialGroups::new();
        groups.insert(2, vec![5.0, 5.0]);
        groups.insert(1, vec![1.0, 2.0, 3.0]);

        let rows = summarize(&groups);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].to_string(), "1 2.0000 0.8165");
        assert_eq!(rows[0].samples, 3);
        assert_eq!(rows[1].to_string(), "2 5.0000 0.0000");
    }
}
