use chrono::{DateTime, FixedOffset};
use std::fmt::Write as _;
use std::io::{self, Write};
use tracing::warn;

use crate::align::Layout;
use crate::icon::to_icon;
use crate::model::{ComponentsResponse, IncidentsResponse};

/// The catch-all "GitHub" entry; it repeats the overall status and is left out.
pub const UMBRELLA_COMPONENT_ID: &str = "0l2p9nhqnxpd";

const NO_UPDATES: &str = "(no updates)";

const LAYOUT: Layout = Layout {
    min_width: 4,
    padding: 1,
};

/// Format as `02 Jan 06 15:04 MST`. A zero offset prints as `UTC`, any other
/// offset numerically (`-0700`).
pub fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    let zone = if ts.offset().local_minus_utc() == 0 {
        "UTC".to_string()
    } else {
        ts.format("%z").to_string()
    };
    format!("{} {}", ts.format("%d %b %y %H:%M"), zone)
}

/// Collects the summary as tab separated cells; columns are aligned and
/// written out in one go by [`Renderer::finish`].
pub struct Renderer<W: Write> {
    out: W,
    buf: String,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: String::new(),
        }
    }

    pub fn components(&mut self, resp: &ComponentsResponse) {
        let buf = &mut self.buf;
        let _ = writeln!(
            buf,
            "=== Components as of {} ===",
            format_timestamp(&resp.page.updated_at)
        );
        for c in resp
            .components
            .iter()
            .filter(|c| c.id != UMBRELLA_COMPONENT_ID)
        {
            let _ = writeln!(buf, "{}\t{}", c.name, to_icon(&c.status));
        }
    }

    pub fn incidents(&mut self, resp: &IncidentsResponse) {
        if resp.incidents.is_empty() {
            return;
        }
        let buf = &mut self.buf;
        buf.push_str("\n=== Incidents ===");
        for incident in &resp.incidents {
            let details = match incident.latest_update() {
                Some(update) => update.body.as_str(),
                None => {
                    warn!(id = %incident.id, name = %incident.name, "incident has no updates");
                    NO_UPDATES
                }
            };
            let _ = write!(buf, "\nName:\t{}\n", incident.name);
            let _ = writeln!(
                buf,
                "Impact:\t{} {}",
                to_icon(&incident.impact),
                incident.impact
            );
            let _ = writeln!(buf, "Status:\t{}", incident.status);
            let _ = writeln!(buf, "Details:\t{}", details);
            let _ = writeln!(buf, "Link:\t{}", incident.shortlink);
            let _ = writeln!(
                buf,
                "Last Updated:\t{}",
                format_timestamp(&incident.updated_at)
            );
        }
    }

    /// Align everything collected so far, write it out and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.write_all(LAYOUT.align(&self.buf).as_bytes())?;
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Render both feeds into one aligned text block.
pub fn render(components: &ComponentsResponse, incidents: &IncidentsResponse) -> io::Result<String> {
    let mut renderer = Renderer::new(Vec::new());
    renderer.components(components);
    renderer.incidents(incidents);
    let buf = renderer.finish()?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
