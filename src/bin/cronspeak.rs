use clap::Parser;
use cronspeak::{CronFields, PatternError, RecurrencePattern, WeekdaySelection};
use std::process;

#[derive(Parser)]
#[command(name = "cronspeak", about = "Cron schedules in plain English", version)]
struct Cli {
    /// Cron expression to split into fields (e.g., "0 */5 * * * *")
    expression: Option<String>,

    /// Describe a daily pattern at the given 24-hour time (e.g., "09:00")
    #[arg(long, value_name = "TIME", conflicts_with_all = ["weekly", "monthly"])]
    daily: Option<String>,

    /// Describe a weekly pattern at the given 24-hour time
    #[arg(long, value_name = "TIME", conflicts_with = "monthly")]
    weekly: Option<String>,

    /// Days for --weekly, comma-separated (e.g., "mon,wed,fri")
    #[arg(long, value_name = "DAYS", requires = "weekly")]
    on: Option<String>,

    /// Describe a monthly pattern at the given 24-hour time
    #[arg(long, value_name = "TIME")]
    monthly: Option<String>,

    /// Day of month for --monthly
    #[arg(long, value_name = "DAY", requires = "monthly", value_parser = clap::value_parser!(u8).range(1..=31))]
    day: Option<u8>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref time) = cli.daily {
        let pattern = RecurrencePattern::Daily { time: time.clone() };
        print_description(&pattern, cli.json);
        process::exit(0);
    }

    if let Some(ref time) = cli.weekly {
        let days = match parse_days(cli.on.as_deref()) {
            Ok(days) => days,
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        };
        let pattern = RecurrencePattern::Weekly {
            time: time.clone(),
            days,
        };
        print_description(&pattern, cli.json);
        process::exit(0);
    }

    if let Some(ref time) = cli.monthly {
        let day_of_month = match cli.day {
            Some(day) => day,
            None => {
                eprintln!("error: --monthly requires --day");
                process::exit(2);
            }
        };
        let pattern = RecurrencePattern::Monthly {
            time: time.clone(),
            day_of_month,
        };
        print_description(&pattern, cli.json);
        process::exit(0);
    }

    let expression = match cli.expression {
        Some(ref expr) => expr.as_str(),
        None => {
            eprintln!("error: no expression provided");
            process::exit(2);
        }
    };

    let fields = CronFields::parse(expression);
    if fields.is_empty() {
        let count = expression.split_whitespace().count();
        eprintln!("error: expected 5 or 6 whitespace-separated fields, got {count}");
        process::exit(1);
    }

    if cli.json {
        match serde_json::to_string_pretty(&fields) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("seconds      {}", fields.seconds);
        println!("minutes      {}", fields.minutes);
        println!("hours        {}", fields.hours);
        println!("days         {}", fields.days);
        println!("month        {}", fields.month);
        println!("day of week  {}", fields.day_of_week);
    }
}

/// Parse the --on list ("mon,wed,fri") into a selection. Blank and missing
/// lists give the empty selection, which describes as the guidance sentence.
fn parse_days(list: Option<&str>) -> Result<WeekdaySelection, PatternError> {
    let mut selection = WeekdaySelection::new();
    if let Some(list) = list {
        for name in list.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            selection.insert(name.parse()?);
        }
    }
    Ok(selection)
}

fn print_description(pattern: &RecurrencePattern, json: bool) {
    let description = pattern.describe();
    if json {
        println!("{}", serde_json::json!({ "description": description }));
    } else {
        println!("{description}");
    }
}
