use clap::Parser;

mod log;
mod model;
mod render;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "tracelog-stats")]
#[command(about = "Per-method call timing statistics from TRACE logs", long_about = None)]
struct Cli {
    /// Path to the application log file.
    log: String,

    /// Emit the report as JSON instead of text lines.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Compiled once, passed to every stage that matches text.
    let patterns = log::Patterns::new()?;

    // 1) Read the whole log. An unreadable file is reported and treated
    //    as empty rather than aborting the run.
    let text = read_log_text(&cli.log);

    // 2) Extract trace records, 3) parse fields, 4) pair entry/exit.
    let records = log::extract_records(&patterns, &text);
    let calls = log::parse_records(&patterns, &records);
    let table = model::pair_calls(&calls);

    // 5) Aggregate and render.
    let report = model::aggregate_all(&table)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::render_text(&report));
    }

    Ok(())
}

fn read_log_text(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("ERROR: cannot read log file {}: {}", path, e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_pipeline(text: &str) -> String {
        let patterns = log::Patterns::new().unwrap();
        let records = log::extract_records(&patterns, text);
        let calls = log::parse_records(&patterns, &records);
        let table = model::pair_calls(&calls);
        render::render_text(&model::aggregate_all(&table).unwrap())
    }

    #[test]
    fn single_pair_reports_its_duration() {
        let text = "\
2024-01-01T10:00:00,000 TRACE [t1] entry with (foo:1)\n\
2024-01-01T10:00:00,250 TRACE [t1] exit with (foo:1)\n";
        assert_eq!(
            run_pipeline(text),
            "Method name: foo; Minimum call time: 250ms; Maximum call time: 250ms; \
             Average call time: 250.00ms; Number of calls: 1; ID of maximum call time: 1.\n"
        );
    }

    #[test]
    fn two_calls_report_spread_and_slowest_id() {
        let text = "\
2024-01-01T10:00:00,000 TRACE [t1] entry with (foo:1)\n\
2024-01-01T10:00:00,100 TRACE [t1] exit with (foo:1)\n\
2024-01-01T10:00:01,000 TRACE [t2] entry with (foo:2)\n\
2024-01-01T10:00:01,300 TRACE [t2] exit with (foo:2)\n";
        assert_eq!(
            run_pipeline(text),
            "Method name: foo; Minimum call time: 100ms; Maximum call time: 300ms; \
             Average call time: 200.00ms; Number of calls: 2; ID of maximum call time: 2.\n"
        );
    }

    #[test]
    fn log_without_trace_records_reports_nothing() {
        let text = "2024-01-01T10:00:00,000 INFO [main] starting up\njust noise\n";
        assert_eq!(run_pipeline(text), "");
    }

    #[test]
    fn identical_input_yields_identical_output() {
        let text = "\
2024-01-01T10:00:00,000 TRACE [t1] entry with (beta:1)\n\
2024-01-01T10:00:00,050 TRACE [t1] exit with (beta:1)\n\
2024-01-01T10:00:00,060 TRACE [t1] entry with (alpha:4)\n\
2024-01-01T10:00:00,090 TRACE [t1] exit with (alpha:4)\n";
        assert_eq!(run_pipeline(text), run_pipeline(text));
        // Method order is the map's key order, so alpha comes first.
        assert!(run_pipeline(text).starts_with("Method name: alpha;"));
    }
}
