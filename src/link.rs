//! External link opener.

use thiserror::Error;
use tracing::{info, warn};

use crate::screen::ScreenAction;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Failed to open '{url}': {source}")]
    Open {
        url: String,
        #[source]
        source: opener::OpenError,
    },
}

/// Asks the host platform to open a URL in an external viewer.
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> Result<(), LinkError>;
}

/// Opens links with the platform default handler.
#[derive(Debug, Default)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&mut self, url: &str) -> Result<(), LinkError> {
        opener::open(url).map_err(|source| LinkError::Open {
            url: url.to_string(),
            source,
        })
    }
}

/// Run a screen action. Open failures are logged and not retried.
pub fn perform(action: &ScreenAction, opener: &mut dyn LinkOpener) {
    match action {
        ScreenAction::OpenLink(url) => {
            info!(url = %url, "opening external link");
            if let Err(err) = opener.open(url) {
                warn!("{}", err);
            }
        }
    }
}
