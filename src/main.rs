use anyhow::{Context, Result};
use contact_form_rs::{
    configuration::{get_configuration, Settings},
    presenter::{Presenter, TerminalCommand, TerminalPresenter},
    submission::{ContactEndpoint, HttpEndpoint, SubmissionAttempt, SubmissionController},
    telemetry::{init_subscriber, subscriber_from_settings},
};
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    let config_file: String = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "configuration".to_owned());
    let configuration: Settings = get_configuration(&config_file).with_context(|| {
        format!(
            "ERROR: Failed to read configuration file \"{}\"",
            config_file
        )
    })?;
    // Logs go to stderr so they don't interleave with the rendered form
    let subscriber = subscriber_from_settings(&configuration.telemetry, std::io::stderr);
    init_subscriber(subscriber)?;
    let endpoint = HttpEndpoint::from_settings(&configuration.endpoint)?;
    tracing::info!(url = %endpoint.url(), "Contact form ready.");
    let mut controller = SubmissionController::new(endpoint);
    let mut presenter = TerminalPresenter::new(std::io::stdout());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    presenter.render(&controller.view())?;
    while stdin_open {
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let event = match TerminalCommand::from_str(&line) {
            Ok(TerminalCommand::Quit) => break,
            Ok(TerminalCommand::Event(event)) => event,
            Err(error) => {
                eprintln!("{}", error);
                continue;
            }
        };
        if let Some(SubmissionAttempt::Send(payload)) = controller.handle(event) {
            presenter.render(&controller.view())?;
            let endpoint = controller.endpoint().clone();
            let request = async move { endpoint.post(&payload).await };
            tokio::pin!(request);
            // Keep reading input while the request is in flight, the controller drops it
            loop {
                tokio::select! {
                    result = &mut request => {
                        controller.complete_submission(result);
                        break;
                    }
                    line = lines.next_line(), if stdin_open => {
                        match line? {
                            Some(line) => match TerminalCommand::from_str(&line) {
                                // In-flight requests are not cancelled, exit once it settles
                                Ok(TerminalCommand::Quit) => stdin_open = false,
                                Ok(TerminalCommand::Event(event)) => {
                                    controller.handle(event);
                                    presenter.render(&controller.view())?;
                                }
                                Err(error) => eprintln!("{}", error),
                            },
                            None => stdin_open = false,
                        }
                    }
                }
            }
        }
        presenter.render(&controller.view())?;
    }
    Ok(())
}
