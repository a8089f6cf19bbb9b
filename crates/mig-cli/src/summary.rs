use console::Style;
use mig_core::pipeline::config::MigConfig;
use mig_core::pipeline::{ReportOutcome, RunSummary};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_config_summary(config: &MigConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("MIG Run"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input_root.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Results"),
        s.path.apply_to(config.results_root.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Sort key"),
        s.method.apply_to(config.sort_key)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("On decode"),
        s.method.apply_to(config.on_decode_error)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("On empty"),
        s.method.apply_to(config.on_empty_experiment)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Parallel"),
        s.value.apply_to(if config.parallel { "yes" } else { "no" })
    );
    println!();
}

pub fn print_run_summary(summary: &RunSummary) {
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to("Experiments"));
    if summary.experiments.is_empty() {
        println!("    {}", s.disabled.apply_to("none found"));
    }

    for exp in &summary.experiments {
        let avg = match exp.average {
            Some(avg) => s.value.apply_to(format!("{avg:.6}")),
            None => s.disabled.apply_to("n/a".to_string()),
        };
        println!(
            "    {:<24}{:>6} frames   avg {}",
            s.label.apply_to(&exp.name),
            exp.samples.len(),
            avg
        );
        for path in &exp.skipped {
            println!(
                "      {} {}",
                s.disabled.apply_to("skipped"),
                s.path.apply_to(path.display())
            );
        }
        match &exp.report {
            ReportOutcome::Written(path) => {
                println!("      {}", s.path.apply_to(path.display()));
            }
            ReportOutcome::Skipped => {
                println!("      {}", s.disabled.apply_to("no report written"));
            }
        }
    }

    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Frames"),
        s.value.apply_to(summary.total_frames())
    );
    if summary.total_skipped() > 0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Skipped"),
            s.disabled.apply_to(summary.total_skipped())
        );
    }
    println!();
}
