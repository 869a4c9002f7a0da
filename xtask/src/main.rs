use anyhow::Context;
use clap::{Parser, Subcommand};
use fs_err as fs;
use sepfix_domain::GARBAGE_CHAR;
use std::process::Command as ProcessCommand;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Workspace helper tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print schema identifiers used by sepfix.
    PrintSchemas,
    /// Seed a corpus directory with the kinds of damage sepfix repairs.
    SeedCorpus {
        #[arg(long, default_value = "corpus")]
        dir: String,
    },
    /// Seed a corpus and run `sepfix fix` over it.
    Demo {
        #[arg(long, default_value = "corpus")]
        dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::PrintSchemas => {
            println!("{}", sepfix_types::schema::SEPFIX_REPORT_V1);
        }
        Command::SeedCorpus { dir } => {
            seed_corpus(&dir)?;
            println!("seeded {dir}");
        }
        Command::Demo { dir } => {
            seed_corpus(&dir)?;
            let status = ProcessCommand::new("cargo")
                .args(["run", "-p", "sepfix", "--", "fix", &dir])
                .status()
                .context("run sepfix fix")?;
            if !status.success() {
                anyhow::bail!("demo fix failed");
            }
        }
    }
    Ok(())
}

/// Write a small tree with mangled banners, a stray control character,
/// and a clean file, plus a node_modules directory the scanner skips.
fn seed_corpus(dir: &str) -> anyhow::Result<()> {
    fs::create_dir_all(format!("{dir}/widgets")).with_context(|| format!("create {dir}"))?;
    fs::create_dir_all(format!("{dir}/node_modules"))?;

    fs::write(
        format!("{dir}/widgets/panel.js"),
        format!(
            "// = = = = = = = = = = = = = = =\n\
             // Panel widget\n\
             // = = = = = = = = = = = = = = =\n\
             function renderPanel() {{{GARBAGE_CHAR}}}\n"
        ),
    )?;
    fs::write(
        format!("{dir}/widgets/grid.js"),
        "= = = = = = = = = = = = = = = = = = = =\nconst GRID = [];\n",
    )?;
    fs::write(format!("{dir}/util.js"), "export const ok = true;\n")?;
    fs::write(
        format!("{dir}/node_modules/vendored.js"),
        "// = = = = = = =\n",
    )?;

    Ok(())
}
