use std::error::Error;

use crate::Site;
use crate::config;

/// Build the log-only annotation for a cause created at `site`
///
/// Produces `(<function>[<file>:<line>]) <cause>`, or an empty string when
/// there is no cause. The annotation is echoed to the log sink when echo is
/// enabled.
pub fn annotate(site: Site, cause: Option<&(dyn Error + Send + Sync + 'static)>) -> String {
    annotate_with(site, cause, config::is_echo_enabled())
}

fn annotate_with(site: Site, cause: Option<&(dyn Error + Send + Sync + 'static)>, echo: bool) -> String {
    let Some(cause) = cause else {
        return String::new();
    };

    let annotation = format!("({site}) {cause}");
    if echo {
        tracing::info!(target: "terror", "{annotation}");
    }
    annotation
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    const SITE: Site = Site::new("app::store::save", "src/store.rs", 17);

    #[test]
    fn annotates_with_site_and_cause() {
        let cause = io::Error::new(io::ErrorKind::ConnectionReset, "connection reset");
        let annotation = annotate_with(SITE, Some(&cause), false);

        assert_eq!(annotation, "(app::store::save[src/store.rs:17]) connection reset");
    }

    #[test]
    fn no_cause_means_no_annotation() {
        assert_eq!(annotate_with(SITE, None, false), "");
        assert_eq!(annotate_with(SITE, None, true), "");
    }

    #[test]
    fn echo_does_not_change_annotation() {
        let cause = io::Error::other("disk full");
        assert_eq!(
            annotate_with(SITE, Some(&cause), true),
            annotate_with(SITE, Some(&cause), false)
        );
    }
}
