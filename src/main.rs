use chrono::{Datelike, Local};
use clap::Parser;
use moodlog::application::{init, CategoriesService, HeatmapService, MoodsService, StreaksService};
use moodlog::cli::{output, parse_cli_date, Cli, Commands};
use moodlog::error::MoodlogError;
use moodlog::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("warning: {}", warning);
    }
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),

        Commands::Streaks { year, date } => {
            let reference = match date {
                Some(d) => parse_cli_date(&d)?,
                None => Local::now().date_naive(),
            };

            let repo = FileSystemRepository::discover()?;
            let service = StreaksService::new(repo);
            let (result, warnings) = service.execute(year, reference)?;

            print_warnings(&warnings);
            print!("{}", output::format_streaks(&result));
            Ok(())
        }

        Commands::Heatmap { year } => {
            let year = year.unwrap_or_else(|| Local::now().year());

            let repo = FileSystemRepository::discover()?;
            let categories = CategoriesService::new(repo.clone()).list()?;
            let service = HeatmapService::new(repo);
            let (columns, warnings) = service.execute(year)?;

            print_warnings(&warnings);
            print!("{}", output::format_heatmap(year, &columns, &categories));
            Ok(())
        }

        Commands::Moods { from, to } => {
            let from = from.map(|d| parse_cli_date(&d)).transpose()?;
            let to = to.map(|d| parse_cli_date(&d)).transpose()?;

            let repo = FileSystemRepository::discover()?;
            let service = MoodsService::new(repo);
            let (distribution, warnings) = service.execute(from, to)?;

            print_warnings(&warnings);
            println!("{}", output::format_distribution(&distribution).trim_end());
            Ok(())
        }

        Commands::Categories => {
            let repo = FileSystemRepository::discover()?;
            let service = CategoriesService::new(repo);
            let categories = service.list()?;

            print!("{}", output::format_categories(&categories));
            Ok(())
        }
    }
}
