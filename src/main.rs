use std::io::BufRead;

use blogform::config::Config;
use blogform::errors::AppError;
use blogform::form::InMemoryForm;
use blogform::handler::{self, SubmitEvent, SubmitOutcome};
use blogform::notify::ConsoleNotifier;

/// Reads one urlencoded form state per line from stdin, e.g.
/// `title=Hello&author=Ada&email=a%40b.com&content=...&category=travel&terms=on`,
/// and submits the form after each line.
fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(e) = run(Config::from_env()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<(), AppError> {
    let form = InMemoryForm::blog_form(&config.form_id);
    let mut handler = handler::initialize(form, ConsoleNotifier)?
        .with_success_message(&config.success_message);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Err(e) = handler.form_mut().fill_urlencoded(line) {
            // Bad input lines are the user's mistake, not a broken form.
            log::warn!("Skipping form state: {e}");
            continue;
        }

        let mut event = SubmitEvent::new();
        match handler.handle_submit(&mut event)? {
            SubmitOutcome::Accepted(report) => {
                log::debug!("Accepted submission #{}", report.count);
            }
            SubmitOutcome::Rejected(errors) => {
                log::debug!("Rejected submission ({} violation(s))", errors.len());
            }
        }
    }

    log::info!("{} submission(s) accepted", handler.submission_count());
    Ok(())
}
