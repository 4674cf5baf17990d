use fittrack_core::Summary;
use tabled::settings::Style;
use tabled::{Table, Tabled};

// Helper struct for Table Row
#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Type")]
    workout_type: String,
    #[tabled(rename = "Duration (h)")]
    duration: String,
    #[tabled(rename = "Distance (km)")]
    distance: String,
    #[tabled(rename = "Speed (km/h)")]
    speed: String,
    #[tabled(rename = "Calories")]
    calories: String,
}

impl SummaryRow {
    fn from_summary(summary: &Summary) -> Self {
        Self {
            workout_type: summary.workout_type.clone(),
            duration: format!("{:.3}", summary.duration),
            distance: format!("{:.3}", summary.distance),
            speed: format!("{:.3}", summary.speed),
            calories: format!("{:.3}", summary.calories),
        }
    }
}

pub fn show_table(summaries: &[Summary]) {
    if summaries.is_empty() {
        println!("No workouts to show.");
        return;
    }

    let rows: Vec<SummaryRow> = summaries.iter().map(SummaryRow::from_summary).collect();
    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!("{}", table);
}
