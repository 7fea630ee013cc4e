//! specimen-studio command-line entry point

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;

use specimen_studio::assets::LocalAssetStorage;
use specimen_studio::cli::{CliArgs, Command};
use specimen_studio::config::StudioConfig;
use specimen_studio::fonts::StaticFontCatalog;
use specimen_studio::messages::{Msg, PageMsg, SelectionMsg};
use specimen_studio::model::{PageId, Specimen, SpecimenId};
use specimen_studio::runtime::Studio;
use specimen_studio::store::{JsonDirStore, SpecimenStore};
use specimen_studio::template::load_all_templates;

fn main() -> Result<()> {
    specimen_studio::tracing::init();

    let args = CliArgs::parse();
    let config = StudioConfig::load();

    let store_dir = args
        .store
        .or_else(|| config.store_dir())
        .ok_or_else(|| anyhow!("no specimen store directory; pass --store"))?;
    let assets_dir = args
        .assets
        .or_else(|| config.assets_dir())
        .ok_or_else(|| anyhow!("no asset directory; pass --assets"))?;

    let mut store = JsonDirStore::open(&store_dir)
        .with_context(|| format!("opening store at {}", store_dir.display()))?;
    let assets = LocalAssetStorage::new(assets_dir);
    let fonts = StaticFontCatalog::new(config.fonts.clone());

    match &args.command {
        Command::List => {
            for id in store.list()? {
                println!("{}", id);
            }
            return Ok(());
        }
        Command::Templates => {
            for template in load_all_templates() {
                println!(
                    "{:<12} {} ({}x{})",
                    template.id, template.name, template.grid.columns, template.grid.rows
                );
            }
            return Ok(());
        }
        Command::Show { id } => {
            let specimen = store.get(&SpecimenId::new(id.as_str()))?;
            println!("{}", serde_json::to_string_pretty(&specimen)?);
            return Ok(());
        }
        Command::New {
            id,
            name,
            typeface,
            format,
            orientation,
            template,
        } => {
            let mut specimen = Specimen::new(SpecimenId::new(id.as_str()), name, typeface);
            specimen.format = format.map(Into::into).unwrap_or(config.default_format);
            specimen.orientation = orientation
                .map(Into::into)
                .unwrap_or(config.default_orientation);
            let first_page = specimen.pages.first().map(|page| page.id.clone());
            let specimen_id = specimen.id.clone();
            store.create(specimen)?;
            tracing::info!(specimen = %specimen_id, "created specimen");

            let template = template.clone().or_else(|| config.default_template.clone());
            if let (Some(template), Some(page)) = (template, first_page) {
                let mut studio =
                    Studio::open(store, assets, &fonts, load_all_templates(), &specimen_id)?;
                run_script(&mut studio, template_script(page, template))?;
            }
            println!("{}", specimen_id);
            return Ok(());
        }
        _ => {}
    }

    let Some(script) = args.command.edit_script() else {
        bail!("unsupported command");
    };
    let mut studio = Studio::open(
        store,
        assets,
        &fonts,
        load_all_templates(),
        &script.specimen_id,
    )
    .with_context(|| format!("opening specimen {}", script.specimen_id))?;
    run_script(&mut studio, script.messages)
}

fn template_script(page: PageId, template: String) -> Vec<Msg> {
    vec![
        Msg::Selection(SelectionMsg::SelectPage(page)),
        Msg::Page(PageMsg::ApplyTemplate(template)),
    ]
}

/// Dispatch `messages`, failing on the first surfaced error
fn run_script(
    studio: &mut Studio<JsonDirStore, LocalAssetStorage>,
    messages: Vec<Msg>,
) -> Result<()> {
    studio.dispatch_script(messages).map_err(|error| anyhow!(error))?;
    let status = &studio.model().ui.status_message;
    if !status.is_empty() {
        println!("{}", status);
    }
    Ok(())
}
