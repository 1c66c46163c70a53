use crate::support::{
    EXIT_REJECTED, exit_config_error, load_profile_or_exit, print_json_or_exit,
};
use dimap_laws::{LawError, LawReport, WorldId, run_law_suite};

pub struct Args {
    pub world: Option<WorldId>,
    pub profile: Option<String>,
    pub laws: Vec<String>,
    pub max_samples: Option<usize>,
    pub json: bool,
}

pub fn run(args: Args) {
    let mut profile = load_profile_or_exit(args.profile.as_deref());
    profile
        .restrict_to(&args.laws)
        .unwrap_or_else(|err| exit_config_error(err));
    if let Some(max_samples) = args.max_samples {
        if max_samples == 0 {
            exit_config_error(LawError::InvalidProfile(
                "--max-samples must be at least 1".to_string(),
            ));
        }
        profile.max_samples = max_samples;
    }
    let world = args.world.unwrap_or(profile.world);

    let _span = tracing::info_span!("check", world = %world, profile = %profile.profile).entered();
    tracing::info!(
        laws = profile.laws.len(),
        max_samples = profile.max_samples,
        "running law suite"
    );
    let report = run_law_suite(world, &profile);
    tracing::info!(
        result = %report.result,
        failures = report.failures.len(),
        "law suite finished"
    );
    if args.json {
        print_json_or_exit(&report, "law report");
    } else {
        print_summary(&report, profile.max_samples);
    }
    if !report.is_accepted() {
        std::process::exit(EXIT_REJECTED);
    }
}

fn print_summary(report: &LawReport, max_samples: usize) {
    println!("dimap check --world {}", report.world);
    println!("  Profile: {}", report.profile);
    println!("  Max samples: {max_samples}");
    println!("  Laws checked: {}", report.laws.len());
    println!("  Result: {}", report.result);
    println!("  Failures: {}", report.failures.len());
    for failure in &report.failures {
        println!(
            "    - [{}] {} ({}) {}",
            failure.law_ref,
            failure.token_path.as_deref().unwrap_or("-"),
            failure.class,
            failure.witness_id,
        );
    }
}
