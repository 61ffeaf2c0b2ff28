use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use ceilgrid::{
    Axis, CeilingJob, GridSettings, MaterialKind, RoomSpec, TileModule, compare_modules, estimate,
    solve_with, summarize,
};
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ceilgrid", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a layout and write it as JSON.
    Solve(SolveArgs),
    /// Solve a layout and print the material breakdown.
    Estimate(EstimateArgs),
    /// Solve a room with every supported module and compare.
    Compare(CompareArgs),
}

#[derive(Args, Debug)]
struct JobArgs {
    /// Input job JSON (room, module, optional settings).
    #[arg(long = "in", conflicts_with_all = ["width", "length"])]
    in_path: Option<PathBuf>,

    /// Room width in mm.
    #[arg(long)]
    width: Option<f64>,

    /// Room length in mm.
    #[arg(long)]
    length: Option<f64>,

    /// Tile module, e.g. 600x600 or 600x1200.
    #[arg(long)]
    module: Option<TileModule>,
}

#[derive(Args, Debug)]
struct SolveArgs {
    #[command(flatten)]
    job: JobArgs,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct EstimateArgs {
    #[command(flatten)]
    job: JobArgs,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Room width in mm.
    #[arg(long)]
    width: f64,

    /// Room length in mm.
    #[arg(long)]
    length: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Solve(args) => cmd_solve(args),
        Command::Estimate(args) => cmd_estimate(args),
        Command::Compare(args) => cmd_compare(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_job(args: &JobArgs) -> anyhow::Result<CeilingJob> {
    if let Some(path) = &args.in_path {
        let mut job = CeilingJob::from_path(path)?;
        if let Some(module) = args.module {
            job.module = module;
        }
        job.validate()?;
        return Ok(job);
    }

    let (Some(width), Some(length)) = (args.width, args.length) else {
        anyhow::bail!("either --in JOB.json or both --width and --length are required");
    };
    Ok(CeilingJob {
        room: RoomSpec::new(width, length)?,
        module: args.module.unwrap_or(TileModule::SQUARE_600),
        settings: GridSettings::default(),
    })
}

fn cmd_solve(args: SolveArgs) -> anyhow::Result<()> {
    let job = load_job(&args.job)?;
    let layout = solve_with(job.room, job.module, &job.settings)?;

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create layout '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &layout).context("serialize layout")?;
            w.flush()
                .with_context(|| format!("write layout '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &layout).context("serialize layout")?;
            writeln!(w)?;
        }
    }
    Ok(())
}

fn cmd_estimate(args: EstimateArgs) -> anyhow::Result<()> {
    let job = load_job(&args.job)?;
    let layout = solve_with(job.room, job.module, &job.settings)?;
    let materials = estimate(&layout);
    let summary = summarize(&layout);

    if args.json {
        let doc = serde_json::json!({
            "module": job.module,
            "summary": summary,
            "materials": materials,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!(
        "room:            {} x {} mm",
        job.room.width(),
        job.room.length()
    );
    println!("module:          {}", job.module);
    println!("area:            {:.2} m2", summary.area_m2);
    println!("perimeter:       {:.2} m", summary.perimeter_m);
    println!("border (width):  {:.0} mm", summary.border_cut_width_mm);
    println!("border (length): {:.0} mm", summary.border_cut_length_mm);
    for kind in MaterialKind::ALL {
        println!("{:<17}{}", format!("{kind}:"), materials.get(kind));
    }
    Ok(())
}

fn cmd_compare(args: CompareArgs) -> anyhow::Result<()> {
    let room = RoomSpec::new(args.width, args.length)?;
    for option in compare_modules(room, &GridSettings::default()) {
        match &option.outcome {
            Ok((layout, materials)) => println!(
                "{:<10} border {:.0}/{:.0} mm, {} tiles, {} runners, {} runner sticks",
                option.module.to_string(),
                layout.border_cut(Axis::Width).per_side_mm,
                layout.border_cut(Axis::Length).per_side_mm,
                materials.get(MaterialKind::Tile),
                layout.runners().len(),
                materials.get(MaterialKind::MainRunnerStick),
            ),
            Err(e) => println!("{:<10} {e}", option.module.to_string()),
        }
    }
    Ok(())
}
