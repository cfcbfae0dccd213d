use anyhow::{bail, Context, Result};
use clap::Parser;

use rfedit::dump::SuiteDump;
use rfedit::events::TracingBroker;
use rfedit::model::{EditorModel, SuiteFileBuilder};
use rfedit::rules::SectionKind;
use rfedit::update::update;
use rfedit::EditorCommand;

mod cli;

use cli::{CliArgs, CliCommand};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    rfedit::tracing::init(args.verbose);

    let config = args.load_config();

    match args.command {
        CliCommand::Dump { path } => {
            let model = read_model(&path, config)?;
            print_dump(&model)
        }
        CliCommand::Fresh { path, section } => {
            let mut model = read_model(&path, config)?;
            let Some(kind) = SectionKind::from_header(&section) else {
                bail!("Unrecognized section {:?}", section);
            };
            let (section_id, _) = model.suite.ensure_section(kind);

            let mut broker = TracingBroker;
            let undo = update(
                &mut model,
                &mut broker,
                EditorCommand::create_fresh_holder(section_id, None),
            )
            .with_context(|| format!("Could not add a holder to {:?}", section))?;
            tracing::info!("Added holder, {} undo command(s)", undo.len());

            print_dump(&model)
        }
        CliCommand::Config => {
            if let Some(path) = args.config.or_else(rfedit::config_paths::config_file) {
                println!("# {}", path.display());
            }
            let yaml = serde_yaml::to_string(&config).context("Failed to serialize config")?;
            print!("{}", yaml);
            Ok(())
        }
    }
}

fn read_model(path: &std::path::Path, config: rfedit::EngineConfig) -> Result<EditorModel> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let suite = SuiteFileBuilder::new().append_text(&text).build();
    Ok(EditorModel::new(suite, config))
}

fn print_dump(model: &EditorModel) -> Result<()> {
    let json = SuiteDump::from_suite(&model.suite)
        .to_json()
        .context("Failed to serialize model")?;
    println!("{}", json);
    Ok(())
}
