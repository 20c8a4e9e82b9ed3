//! Text rendition of the shell — navigation bar plus the routed page.

use std::io::{self, Write};

use greeter_app::home::{HomeController, MountHandle};
use greeter_app::ports::GreetingClient;
use greeter_app::routes::{NAV_LINKS, Route};
use greeter_domain::home::HomeState;

/// Render the navigation bar as one line of `[label](href)` entries.
#[must_use]
pub fn render_nav() -> String {
    NAV_LINKS
        .iter()
        .map(|link| format!("[{}]({})", link.label, link.href()))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Render one frame of the home page.
#[must_use]
pub fn render_home(state: &HomeState) -> String {
    let view = state.view_state();
    let mut page = String::from("# Home Page\n");
    if let Some(message) = view.visible_message() {
        page.push_str(message);
        page.push('\n');
    }
    if let Some(error) = &view.error {
        page.push_str("! ");
        page.push_str(error);
        page.push('\n');
    }
    page
}

/// Render the page shown for paths outside the route table.
#[must_use]
pub fn render_not_found() -> String {
    format!(
        "# Page not found\nNothing lives at this address.\n[Back to the home page]({})\n",
        Route::Home.path()
    )
}

/// Resolve `location`, mount its page and write every rendered frame to `out`.
///
/// The home page writes its loading frame first and its settled frame once
/// the fetch completes.
///
/// # Errors
///
/// Returns an error only when writing to `out` fails; fetch failures are part
/// of the rendered page.
pub async fn run<C, W>(location: &str, client: C, out: &mut W) -> io::Result<()>
where
    C: GreetingClient,
    W: Write,
{
    writeln!(out, "{}", render_nav())?;
    writeln!(out)?;

    match Route::resolve(location) {
        Some(Route::Home) => {
            let controller = HomeController::new(client);
            let mount = MountHandle::new();

            write!(out, "{}", render_home(&HomeState::Loading))?;
            out.flush()?;

            if let Some(state) = controller.load(&mount).await {
                writeln!(out)?;
                write!(out, "{}", render_home(&state))?;
            }
            mount.unmount();
        }
        None => {
            tracing::info!(location, "no route matches location");
            write!(out, "{}", render_not_found())?;
        }
    }

    out.flush()
}
