use crate::infra::InMemoryProjectStore;
use clap::Args;
use outturn::error::AppError;
use outturn::projects::{ProjectService, ProjectSubmission, RankedProject};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Emit the standings as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

/// Rate a sample portfolio in memory and print the resulting standings.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let store = Arc::new(InMemoryProjectStore::default());
    let service = ProjectService::new(store);

    for submission in sample_outturns() {
        let outcome = service.submit(submission)?;
        if let Some(warning) = outcome.recalculation_warning() {
            println!("warning: {warning}");
        }
    }

    let standings = service.ranked()?;

    if args.json {
        let payload =
            serde_json::to_string_pretty(&standings).map_err(|err| AppError::Io(err.into()))?;
        println!("{payload}");
        return Ok(());
    }

    render_standings_table(&standings);
    Ok(())
}

fn render_standings_table(standings: &[RankedProject]) {
    println!("Construction project standings");
    println!(
        "{:>3}  {:<24} {:<12} {:>9} {:>8} {:>5} {:>4} {:>6}",
        "#", "Project", "Status", "Cost dev", "Dur dev", "Cost", "Dur", "Final"
    );

    for entry in standings {
        let record = &entry.project;
        let status = if record.is_completed {
            "completed"
        } else {
            "in progress"
        };
        let (cost, duration, combined) = match record.ratings {
            Some(ratings) => (
                ratings.cost_rating.to_string(),
                ratings.duration_rating.to_string(),
                format!("{:.1}", ratings.final_rating),
            ),
            None => ("-".to_string(), "-".to_string(), "-".to_string()),
        };

        println!(
            "{:>3}  {:<24} {:<12} {:>9} {:>8} {:>5} {:>4} {:>6}",
            entry.position,
            record.name,
            status,
            record.cost_deviation,
            record.duration_deviation,
            cost,
            duration,
            combined
        );
    }
}

/// A small portfolio spanning under-runs, over-runs, and unfinished work.
fn sample_outturns() -> Vec<ProjectSubmission> {
    vec![
        ProjectSubmission {
            name: "Riverside Apartments Phase 1".to_string(),
            planned_duration: 540,
            planned_cost: 12_400_000,
            actual_duration: 531,
            actual_cost: 11_950_000,
            projected_duration: 528,
            projected_cost: 11_900_000,
            is_completed: true,
        },
        ProjectSubmission {
            name: "Harbor Logistics Terminal".to_string(),
            planned_duration: 720,
            planned_cost: 45_000_000,
            actual_duration: 812,
            actual_cost: 51_300_000,
            projected_duration: 805,
            projected_cost: 50_800_000,
            is_completed: true,
        },
        ProjectSubmission {
            name: "Oakfield Primary School".to_string(),
            planned_duration: 365,
            planned_cost: 8_200_000,
            actual_duration: 370,
            actual_cost: 8_150_000,
            projected_duration: 372,
            projected_cost: 8_260_000,
            is_completed: true,
        },
        ProjectSubmission {
            name: "Northgate Interchange".to_string(),
            planned_duration: 900,
            planned_cost: 63_000_000,
            actual_duration: 240,
            actual_cost: 18_500_000,
            projected_duration: 930,
            projected_cost: 66_500_000,
            is_completed: false,
        },
        ProjectSubmission {
            name: "Cedar Park Clinic".to_string(),
            planned_duration: 280,
            planned_cost: 5_600_000,
            actual_duration: 275,
            actual_cost: 5_580_000,
            projected_duration: 268,
            projected_cost: 5_450_000,
            is_completed: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_portfolio_feeds_the_full_pipeline() {
        let store = Arc::new(InMemoryProjectStore::default());
        let service = ProjectService::new(store);

        for submission in sample_outturns() {
            service.submit(submission).expect("sample submission");
        }

        let standings = service.ranked().expect("standings");
        assert_eq!(standings.len(), 5);

        // Completed records lead the table with ratings in place.
        assert!(standings[0].project.is_completed);
        assert!(standings[0].project.ratings.is_some());

        // The unfinished interchange trails the field unrated.
        let last = standings.last().expect("non-empty");
        assert_eq!(last.project.name, "Northgate Interchange");
        assert!(last.project.ratings.is_none());
    }
}
