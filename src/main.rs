//! MENDEL - CLI entry point
//!
//! Mendelian pea-plant cross simulator.

use clap::{Parser, Subcommand};
use mendel::genetics::{cross, gametes_of, Genotype};
use mendel::{punnett, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mendel")]
#[command(author = "Gabriele (dbowie)")]
#[command(version)]
#[command(about = "Mendelian pea-plant cross simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cross two parents and print the Punnett grid
    Cross {
        /// Parent 1 color alleles (YY, Yy or yy)
        #[arg(long, default_value = "Yy")]
        p1_color: String,

        /// Parent 1 shape alleles (RR, Rr or rr)
        #[arg(long, default_value = "Rr")]
        p1_shape: String,

        /// Parent 2 color alleles
        #[arg(long, default_value = "Yy")]
        p2_color: String,

        /// Parent 2 shape alleles
        #[arg(long, default_value = "Rr")]
        p2_shape: String,
    },

    /// Print the gamete enumeration of a genotype
    Gametes {
        /// Color alleles (YY, Yy or yy)
        #[arg(long, default_value = "Yy")]
        color: String,

        /// Shape alleles (RR, Rr or rr)
        #[arg(long, default_value = "Rr")]
        shape: String,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "mendel.yaml")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Cross {
            p1_color,
            p1_shape,
            p2_color,
            p2_shape,
        } => run_cross(&p1_color, &p1_shape, &p2_color, &p2_shape),

        Commands::Gametes { color, shape } => list_gametes(&color, &shape),

        Commands::Init { output } => generate_config(output),
    }
}

fn run_cross(
    p1_color: &str,
    p1_shape: &str,
    p2_color: &str,
    p2_shape: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let parent1 = Genotype::parse(p1_color, p1_shape)?;
    let parent2 = Genotype::parse(p2_color, p2_shape)?;

    let result = cross(&parent1, &parent2);

    println!(
        "=== Cross: {} ({}) x {} ({}) ===",
        parent1.label(),
        parent1.phenotype().label(),
        parent2.label(),
        parent2.phenotype().label()
    );
    println!();
    println!("{}", punnett::render(&result));
    println!("Offspring: {}", punnett::summary(&result));
    println!("Phenotype ratio: {}", result.ratio_label());

    Ok(())
}

fn list_gametes(color: &str, shape: &str) -> Result<(), Box<dyn std::error::Error>> {
    let genotype = Genotype::parse(color, shape)?;
    let gametes = gametes_of(&genotype);

    println!("Gametes of {}:", genotype.label());
    for gamete in &gametes {
        println!("  {}", gamete.label());
    }

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}
