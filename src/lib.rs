// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod emit;
pub mod errors;
pub mod logging;
pub mod types;

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{Manifest, effective_policy, load_and_validate, read_manifest};
use crate::dag::cycle::is_acyclic;
use crate::dag::{EmissionReport, InitPlan, OrderEngine, PlanBuilder};
use crate::emit::{Emitter, LineEmitter};
use crate::types::DuplicateInitPolicy;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - manifest loading (files or stdin)
/// - plan building (edges, initializers, needed nodes)
/// - the order engine
/// - the output emitter (stdout or `--output`)
pub fn run(args: CliArgs) -> Result<()> {
    let manifests = load_manifests(&args.inputs)?;
    let plan = build_plan(&manifests, &args.needed, args.duplicate_init);

    if args.dry_run {
        write_dry_run(&plan, io::stdout().lock()).context("writing dry-run output")?;
        return Ok(());
    }

    let report = match args.output {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {:?}", path))?;
            emit_plan(plan, &mut LineEmitter::new(file))?
        }
        None => emit_plan(plan, &mut LineEmitter::stdout())?,
    };

    debug!(emitted = ?report.emitted, "emission order");
    Ok(())
}

/// Run the order engine over `plan`, writing through `emitter`.
pub fn emit_plan<E: Emitter + ?Sized>(
    plan: InitPlan,
    emitter: &mut E,
) -> crate::errors::Result<EmissionReport> {
    OrderEngine::new(plan).run(emitter)
}

/// Load every input manifest in order. No inputs, or `-`, means stdin.
fn load_manifests(inputs: &[PathBuf]) -> Result<Vec<Manifest>> {
    if inputs.is_empty() {
        info!("no inputs given; reading manifest from stdin");
        let manifest = read_manifest(io::stdin().lock()).context("reading manifest from stdin")?;
        return Ok(vec![manifest]);
    }

    inputs.iter().map(|path| load_input(path)).collect()
}

fn load_input(path: &Path) -> Result<Manifest> {
    if path.as_os_str() == "-" {
        return read_manifest(io::stdin().lock()).context("reading manifest from stdin");
    }
    load_and_validate(path).with_context(|| format!("loading manifest {:?}", path))
}

/// Apply every manifest (then any extra needed nodes) to a fresh builder.
pub fn build_plan(
    manifests: &[Manifest],
    extra_needed: &[String],
    policy_override: Option<DuplicateInitPolicy>,
) -> InitPlan {
    let policy = effective_policy(policy_override, manifests);
    let mut builder = PlanBuilder::with_policy(policy);

    for manifest in manifests {
        manifest.apply_to(&mut builder);
    }
    for name in extra_needed {
        builder.add_needed(name);
    }

    let plan = builder.build();
    info!(
        nodes = plan.all_nodes().len(),
        edges = plan.graph.edge_count(),
        initializers = plan.registry.registered_count(),
        needed = plan.needed.len(),
        ?policy,
        "plan built"
    );
    plan
}

/// Simple dry-run output: print nodes, deps and initializers.
///
/// `acyclic` is judged over the nodes the run would track, so in needed
/// mode a cycle outside the closure does not count.
pub fn write_dry_run<W: Write>(plan: &InitPlan, mut out: W) -> io::Result<()> {
    let relevant = plan.relevant_nodes();

    writeln!(out, "dependgen dry-run")?;
    writeln!(out, "  mode = {}", plan.mode())?;
    writeln!(out, "  duplicate_init = {:?}", plan.registry.policy())?;
    writeln!(out, "  acyclic = {}", is_acyclic(&plan.graph, &relevant))?;
    if !plan.needed.is_empty() {
        writeln!(out, "  needed = {:?}", plan.needed)?;
    }
    writeln!(out)?;

    writeln!(out, "nodes ({}):", relevant.len())?;
    for name in &relevant {
        writeln!(out, "  - {name}")?;
        match plan.registry.get(name) {
            Some(text) => writeln!(out, "      init: {text}")?,
            None => writeln!(out, "      init: (none)")?,
        }
        let deps: Vec<&str> = plan.graph.dependencies_of(name).collect();
        if !deps.is_empty() {
            writeln!(out, "      after: {:?}", deps)?;
        }
    }

    debug!("dry-run complete (nothing emitted)");
    Ok(())
}
