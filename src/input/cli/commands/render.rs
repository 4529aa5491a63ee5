use crate::controllers::explorer::Explorer;
use crate::input::cli::args::RenderArgs;
use crate::presenters::file::image::ImageFilePresenter;
use anyhow::{Context, Result};

pub fn run_render(args: &RenderArgs) -> Result<()> {
    let settings = args.view.settings().context("invalid configuration")?;
    let explorer = Explorer::new(settings).context("could not render the initial frame")?;

    explorer
        .export_image(&ImageFilePresenter::new(), &args.output)
        .with_context(|| format!("could not export {}", args.output.display()))?;

    println!("{}", args.output.display());
    Ok(())
}
