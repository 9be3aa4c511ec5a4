use crate::domain::ScanData;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Per-day playtime deltas, date -> game id -> minutes.
///
/// Every (date, game) slot is filled with zero up front, so the report stays
/// dense: each row carries a value for every game ever seen, even on days
/// the game was not sampled. Writes accumulate rather than overwrite, since
/// several same-day samples of one game each contribute their own delta.
struct DeltaMatrix {
    cells: BTreeMap<String, HashMap<String, i64>>,
}

impl DeltaMatrix {
    fn new(data: &ScanData) -> Self {
        let mut dates = BTreeSet::new();
        for points in data.series.values() {
            for point in points {
                dates.insert(point.date.clone());
            }
        }

        let zeroed: HashMap<String, i64> = data.names.keys().map(|id| (id.clone(), 0)).collect();
        let cells = dates
            .into_iter()
            .map(|date| (date, zeroed.clone()))
            .collect();
        Self { cells }
    }

    fn accumulate(&mut self, date: &str, id: &str, delta: i64) {
        if let Some(cell) = self.cells.get_mut(date).and_then(|row| row.get_mut(id)) {
            *cell += delta;
        }
    }
}

/// Builds the report as CSV lines, header first, one row per date seen
/// anywhere in the log, rows ascending by date. Pure; all I/O and all
/// failure modes live in the scan stage.
///
/// Each game's first observation is its baseline and contributes a zero
/// delta on its own date; every later observation adds the difference to
/// its predecessor into that day's cell. A counter reset upstream shows up
/// as a negative delta and is passed through unchanged.
pub fn build_report(data: &ScanData) -> Vec<String> {
    let mut matrix = DeltaMatrix::new(data);

    for (id, points) in &data.series {
        let mut points = points.clone();
        // Stable: same-day samples keep their append order.
        points.sort_by(|lhs, rhs| lhs.date.cmp(&rhs.date));

        if let Some(first) = points.first() {
            matrix.accumulate(&first.date, id, 0);
        }
        for pair in points.windows(2) {
            matrix.accumulate(&pair[1].date, id, pair[1].minutes - pair[0].minutes);
        }
    }

    // Column order follows map iteration and is not stable across runs; it
    // only has to match between the header and every row.
    let ids: Vec<&String> = data.names.keys().collect();

    let mut lines = Vec::with_capacity(matrix.cells.len() + 1);
    lines.push(header_line(&ids, data));
    for (date, row) in &matrix.cells {
        let mut fields = Vec::with_capacity(ids.len() + 1);
        fields.push(date.clone());
        for id in &ids {
            fields.push(row.get(*id).copied().unwrap_or(0).to_string());
        }
        lines.push(fields.join(","));
    }
    lines
}

fn header_line(ids: &[&String], data: &ScanData) -> String {
    let mut fields = Vec::with_capacity(ids.len() + 1);
    fields.push("date".to_string());
    for id in ids {
        let name = data.names.get(*id).map(String::as_str).unwrap_or("");
        // Quoted so a comma in the display name survives spreadsheet import.
        fields.push(format!("\"[{id}]{name}\""));
    }
    fields.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Observation;

    fn data(games: &[(&str, &str, &[(&str, i64)])]) -> ScanData {
        let mut data = ScanData::default();
        for (id, name, points) in games {
            data.names.insert(id.to_string(), name.to_string());
            data.series.insert(
                id.to_string(),
                points
                    .iter()
                    .map(|(date, minutes)| Observation {
                        date: date.to_string(),
                        minutes: *minutes,
                    })
                    .collect(),
            );
        }
        data
    }

    /// Header position of the game's `"[id]name"` column.
    fn column_of(lines: &[String], id: &str) -> usize {
        lines[0]
            .split(',')
            .position(|field| field.starts_with(&format!("\"[{id}]")))
            .unwrap()
    }

    fn cell(lines: &[String], date: &str, column: usize) -> i64 {
        let row = lines
            .iter()
            .find(|line| line.starts_with(&format!("{date},")))
            .unwrap();
        row.split(',').nth(column).unwrap().parse().unwrap()
    }

    #[test]
    fn header_starts_with_date() {
        let lines = build_report(&data(&[("440", "TF2", &[("2024-03-01", 100)])]));
        assert_eq!(lines[0].split(',').next(), Some("date"));
        assert!(lines[0].contains("\"[440]TF2\""));
    }

    #[test]
    fn single_observation_is_baseline_zero() {
        let lines = build_report(&data(&[("440", "TF2", &[("2024-03-01", 99999)])]));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "2024-03-01,0");
    }

    #[test]
    fn cross_date_delta() {
        let lines = build_report(&data(&[(
            "440",
            "TF2",
            &[("2024-03-01", 100), ("2024-03-02", 160)],
        )]));
        let col = column_of(&lines, "440");
        assert_eq!(cell(&lines, "2024-03-01", col), 0);
        assert_eq!(cell(&lines, "2024-03-02", col), 60);
    }

    #[test]
    fn same_day_samples_accumulate() {
        // Three samples on one day: baseline 0, then 40 and 10 sum to 50.
        let lines = build_report(&data(&[(
            "440",
            "TF2",
            &[("2024-03-01", 100), ("2024-03-01", 140), ("2024-03-01", 150)],
        )]));
        assert_eq!(lines[1], "2024-03-01,50");
    }

    #[test]
    fn same_day_samples_keep_append_order_across_days() {
        // Appended out of date order; the stable sort moves the 03-01
        // sample first and the two 03-02 samples diff in append order.
        let lines = build_report(&data(&[(
            "440",
            "TF2",
            &[("2024-03-02", 200), ("2024-03-01", 100), ("2024-03-02", 230)],
        )]));
        let col = column_of(&lines, "440");
        assert_eq!(cell(&lines, "2024-03-01", col), 0);
        assert_eq!(cell(&lines, "2024-03-02", col), 130);
    }

    #[test]
    fn negative_delta_passes_through() {
        let lines = build_report(&data(&[(
            "440",
            "TF2",
            &[("2024-03-01", 500), ("2024-03-02", 300)],
        )]));
        let col = column_of(&lines, "440");
        assert_eq!(cell(&lines, "2024-03-02", col), -200);
    }

    #[test]
    fn dates_are_unioned_across_games() {
        let lines = build_report(&data(&[
            ("1", "A", &[("2024-03-01", 10), ("2024-03-03", 25)]),
            ("2", "B", &[("2024-03-02", 7)]),
        ]));

        assert_eq!(lines.len(), 4);
        let a = column_of(&lines, "1");
        let b = column_of(&lines, "2");
        assert_eq!(cell(&lines, "2024-03-01", a), 0);
        assert_eq!(cell(&lines, "2024-03-02", a), 0);
        assert_eq!(cell(&lines, "2024-03-03", a), 15);
        assert_eq!(cell(&lines, "2024-03-01", b), 0);
        assert_eq!(cell(&lines, "2024-03-02", b), 0);
        assert_eq!(cell(&lines, "2024-03-03", b), 0);
    }

    #[test]
    fn rows_ascend_by_date() {
        let lines = build_report(&data(&[(
            "440",
            "TF2",
            &[("2024-03-05", 30), ("2024-02-28", 10), ("2024-03-01", 20)],
        )]));

        let dates: Vec<&str> = lines[1..]
            .iter()
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(dates, ["2024-02-28", "2024-03-01", "2024-03-05"]);
    }

    #[test]
    fn empty_log_yields_header_only() {
        let lines = build_report(&ScanData::default());
        assert_eq!(lines, ["date"]);
    }
}
