use crate::controllers::explorer::Explorer;
use crate::controllers::playback::{PlaybackScheduler, PlaybackScript};
use crate::input::cli::args::PlayArgs;
use crate::presenters::file::image::ImageFilePresenter;
use anyhow::{Context, Result};
use std::time::Instant;

pub fn run_play(args: &PlayArgs) -> Result<()> {
    let script = match &args.script {
        Some(path) => PlaybackScript::load(path)
            .with_context(|| format!("could not load script {}", path.display()))?,
        None => PlaybackScript::tour(),
    };

    let settings = args.view.settings().context("invalid configuration")?;
    let mut explorer = Explorer::new(settings).context("could not render the initial frame")?;
    let presenter = ImageFilePresenter::new();
    let mut scheduler = PlaybackScheduler::new(script);
    let mut step = 0;

    scheduler.start(Instant::now());

    while let Some(due) = scheduler.next_due() {
        let now = if args.instant {
            due
        } else {
            std::thread::sleep(due.saturating_duration_since(Instant::now()));
            Instant::now().max(due)
        };

        let Some(action) = scheduler.poll(now) else {
            continue;
        };

        step += 1;
        // The unchanged frame is still exported after a rejection.
        if let Err(err) = action.apply(&mut explorer) {
            log::debug!("step {} ({}) kept the previous frame: {}", step, action, err);
        }

        let path = args.output_dir.join(format!("frame_{:03}.png", step));
        explorer
            .export_image(&presenter, &path)
            .with_context(|| format!("could not export {}", path.display()))?;
        println!("{}", path.display());
    }

    Ok(())
}
