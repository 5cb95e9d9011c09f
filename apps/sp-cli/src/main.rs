use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use sp_app::{AppError, AppResult, compute_for_plan, plan_service, report_json};
use sp_nozzles::NozzleCatalog;
use sp_plan::{AreaDef, AreaKindDef, Plan, PlanStatusDef, SprayerDef};

#[derive(Parser)]
#[command(name = "sp-cli")]
#[command(about = "Sprayflow CLI - Golf course spray application planning tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate plan file syntax, ranges, and nozzle reference
    Validate {
        /// Path to the plan file (YAML or JSON)
        plan_path: PathBuf,
    },
    /// Compute spray metrics for a plan
    Compute {
        /// Path to the plan file (YAML or JSON)
        plan_path: PathBuf,
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List nozzles in the built-in catalog
    Nozzles {
        /// Case-insensitive filter over id, label, and brand
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Write a starter plan file
    Init {
        /// Path for the new plan file
        plan_path: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { plan_path } => cmd_validate(&plan_path),
        Commands::Compute { plan_path, json } => cmd_compute(&plan_path, json),
        Commands::Nozzles { filter } => cmd_nozzles(filter.as_deref()),
        Commands::Init { plan_path } => cmd_init(&plan_path),
    }
}

fn cmd_validate(plan_path: &Path) -> AppResult<()> {
    println!("Validating plan: {}", plan_path.display());
    let catalog = NozzleCatalog::builtin();
    let plan = plan_service::validate_plan_file(plan_path, &catalog)?;
    println!("✓ Plan is valid");

    let summary = plan_service::summarize_plan(&plan);
    println!(
        "  {} [{:?}] - {} areas ({:.2} ha), {} products, nozzle {}",
        summary.name,
        summary.status,
        summary.area_count,
        summary.total_area_ha,
        summary.product_count,
        summary.nozzle_id
    );
    Ok(())
}

fn cmd_compute(plan_path: &Path, json: bool) -> AppResult<()> {
    let catalog = NozzleCatalog::builtin();
    let plan = plan_service::validate_plan_file(plan_path, &catalog)?;
    let report = compute_for_plan(&plan, &catalog)?;

    if json {
        println!("{}", report_json(&report)?);
        return Ok(());
    }

    let metrics = &report.metrics;
    println!("Spray metrics for: {}", report.plan_name);
    println!("  Nozzle:           {} ({})", report.nozzle_label, report.nozzle_id);
    println!("  Flow per nozzle:  {:.2} L/min", metrics.flow_per_nozzle_l_min);
    println!(
        "  Required pressure: {:.1} bar [{}] (window {:.1}-{:.1} bar)",
        metrics.required_pressure_bar,
        metrics.pressure_status.label(),
        report.nozzle_pressure_window_bar.0,
        report.nozzle_pressure_window_bar.1
    );
    println!("  Total area:       {:.2} ha", metrics.total_area_ha);
    println!("  Spray volume:     {:.0} L", metrics.total_spray_volume_l);
    println!(
        "  Tanks required:   {:.2} ({:.0} full fills)",
        metrics.tanks_required, report.whole_tanks
    );
    // Single-pass estimate; turns and refills come on top.
    println!("  Spray time:       {:.0} min (lower bound)", metrics.spray_time_minutes);

    if !metrics.product_totals.is_empty() {
        println!("  Products:");
        for total in &metrics.product_totals {
            println!(
                "    {} - {:.2} {}",
                total.product_name, total.total_amount, total.unit
            );
        }
    }
    Ok(())
}

fn cmd_nozzles(filter: Option<&str>) -> AppResult<()> {
    let matches = NozzleCatalog::builtin().filter(filter.unwrap_or(""));

    if matches.is_empty() {
        println!("No nozzles match the filter");
    } else {
        println!("Nozzle catalog:");
        for spec in matches {
            println!(
                "  {} - {} {} (k {:.3}, {:.1}-{:.1} bar)",
                spec.id,
                spec.brand,
                spec.label,
                spec.k_factor,
                spec.min_pressure_bar,
                spec.max_pressure_bar
            );
        }
    }
    Ok(())
}

fn cmd_init(plan_path: &Path) -> AppResult<()> {
    if plan_path.exists() {
        return Err(AppError::InvalidInput(format!(
            "refusing to overwrite existing file: {}",
            plan_path.display()
        )));
    }

    let plan = Plan {
        version: sp_plan::LATEST_VERSION,
        name: "New application".into(),
        status: PlanStatusDef::Draft,
        scheduled_date: None,
        sprayer: SprayerDef {
            nozzle_id: "syngenta-025-xc".into(),
            spray_volume_l_ha: 300.0,
            nozzle_spacing_m: 0.5,
            nozzle_count: 11,
            speed_km_h: 5.0,
            tank_size_l: 400.0,
        },
        areas: vec![AreaDef {
            name: "Greens".into(),
            size_ha: 1.0,
            kind: AreaKindDef::Green,
        }],
        products: vec![],
    };

    plan_service::save_plan(plan_path, &plan)?;
    println!("✓ Wrote starter plan: {}", plan_path.display());
    Ok(())
}
