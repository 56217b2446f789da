use anyhow::Result;
use clap::{Parser, Subcommand};
use pqtree::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

#[derive(Parser)]
#[command(name = "pqsearch")]
#[command(about = "Search for matrix triplets generating the primitive (P,Q) tree")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the coprimality grid for small values
    Grid,
    /// Enumerate acceptable matrices and print the recognized ones
    Matrices {
        #[arg(long, default_value_t = -5, allow_hyphen_values = true)]
        term_min: i64,
        #[arg(long, default_value_t = 5)]
        term_max: i64,
        #[arg(long, default_value_t = 50_000)]
        max_matrices: usize,
    },
    /// Full run: enumerate, then search all triplet combinations
    Search {
        #[arg(long, default_value_t = -5, allow_hyphen_values = true)]
        term_min: i64,
        #[arg(long, default_value_t = 5)]
        term_max: i64,
        #[arg(long, default_value_t = 50_000)]
        max_matrices: usize,
        /// Breadth-first coverage depth
        #[arg(long, default_value_t = 6)]
        depth: u32,
        /// Write a JSON result report to this path
        #[arg(long)]
        report: Option<String>,
    },
    /// Check one explicit triplet: twelve coefficients a1 b1 c1 d1 a2 .. d3
    Check {
        #[arg(num_args = 12, allow_hyphen_values = true)]
        coeffs: Vec<i64>,
        #[arg(long, default_value_t = 6)]
        depth: u32,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Grid => {
            grid();
            Ok(())
        }
        Action::Matrices {
            term_min,
            term_max,
            max_matrices,
        } => matrices(term_min, term_max, max_matrices),
        Action::Search {
            term_min,
            term_max,
            max_matrices,
            depth,
            report,
        } => search(term_min, term_max, max_matrices, depth, report),
        Action::Check { coeffs, depth } => check(&coeffs, depth),
    }
}

/// Coprimality grid for x,y in 0..=10, y downward. Inspection output only.
fn grid() {
    grid_with(&Domain::reference());
}

fn grid_with(dom: &Domain) {
    for y in (0..=10).rev() {
        let row: String = (0..=10)
            .map(|x| if dom.is_coprime(x, y) { " *" } else { " ." })
            .collect();
        println!("{row}");
    }
}

fn enumerate(dom: &Domain, term_min: i64, term_max: i64, max_matrices: usize) -> Result<Vec<AcceptedMatrix>> {
    let cfg = EnumCfg {
        term_min,
        term_max,
        max_matrices,
    };
    tracing::info!(term_min, term_max, max_matrices, "enumerate");
    let accepted = enumerate_matrices(dom, &cfg)?;
    for am in &accepted {
        if let Some(name) = am.matrix.name() {
            println!("matrix {}   {}", am.matrix, name);
        }
    }
    println!("num_matrices {}", accepted.len());
    Ok(accepted)
}

fn matrices(term_min: i64, term_max: i64, max_matrices: usize) -> Result<()> {
    let dom = Domain::reference();
    enumerate(&dom, term_min, term_max, max_matrices)?;
    Ok(())
}

fn search(
    term_min: i64,
    term_max: i64,
    max_matrices: usize,
    depth: u32,
    report: Option<String>,
) -> Result<()> {
    let dom = Domain::reference();
    grid_with(&dom);
    let accepted = enumerate(&dom, term_min, term_max, max_matrices)?;
    let cfg = CoverageCfg::for_depth(depth);
    tracing::info!(
        candidates = accepted.len(),
        depth,
        "searching all triplet combinations"
    );
    let found = search_triplets(&dom, &accepted, &cfg)?;
    for t in &found {
        println!("{t}");
    }
    if found.is_empty() {
        println!("no qualifying triplet");
    }
    tracing::info!(found = found.len(), "search complete");
    if let Some(path) = report {
        let doc = report::Report::new(term_min, term_max, depth, accepted.len(), &found);
        let written = report::write_report(&path, &doc)?;
        tracing::info!(path = %written.display(), "report written");
    }
    Ok(())
}

fn check(coeffs: &[i64], depth: u32) -> Result<()> {
    anyhow::ensure!(coeffs.len() == 12, "expected 12 coefficients, got {}", coeffs.len());
    let dom = Domain::reference();
    let ms: Vec<AcceptedMatrix> = coeffs
        .chunks_exact(4)
        .map(|c| AcceptedMatrix::new(PqMatrix::new(c[0], c[1], c[2], c[3])))
        .collect();
    for am in &ms {
        anyhow::ensure!(
            am.matrix.is_invertible(),
            "matrix {} is not invertible",
            am.matrix
        );
    }
    let cfg = CoverageCfg::for_depth(depth);
    let ok = coverage_is_good(&dom, [&ms[0], &ms[1], &ms[2]], &cfg)?;
    let names: Vec<&str> = ms.iter().map(|am| am.matrix.name().unwrap_or(".")).collect();
    println!(
        "{}  {}  {}   {} {} {}   coverage {}",
        ms[0].matrix,
        ms[1].matrix,
        ms[2].matrix,
        names[0],
        names[1],
        names[2],
        if ok { "good" } else { "bad" }
    );
    Ok(())
}
