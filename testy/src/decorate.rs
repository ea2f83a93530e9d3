//! Source-location resolution and message decoration
//!
//! Every public entry point of [`Handle`](crate::Handle) is `#[track_caller]`,
//! so the location it captures is always the immediate caller. That location
//! is the anchor. Reaching further up the stack (an uplevel above one) needs
//! a real frame walk: the anchor's frame is located in a captured backtrace
//! by file and line and the walk continues from there.

use std::fmt::Write;
use std::panic::Location;
use std::path::{Path, PathBuf};

/// File reported when the requested frame cannot be resolved
pub const UNKNOWN_FILE: &str = "???";

/// Case name used when the calling function cannot be resolved
pub const ANONYMOUS: &str = "Anonymous function";

/// A resolved `file:line` pair, with the file already reduced to its base name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
}

impl CallSite {
    pub fn unknown() -> Self {
        Self {
            file: UNKNOWN_FILE.to_string(),
            line: 1,
        }
    }

    pub fn from_location(location: &Location<'_>) -> Self {
        Self {
            file: base_name(location.file()).to_string(),
            line: location.line(),
        }
    }
}

/// Strip any directory prefix, accepting both `/` and `\` separators
pub fn base_name(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

#[derive(Debug)]
struct Frame {
    file: Option<PathBuf>,
    line: Option<u32>,
    name: Option<String>,
}

impl Frame {
    fn is_anchor(&self, file: &str, line: u32) -> bool {
        self.is_in_file(file) && self.line == Some(line)
    }

    fn is_in_file(&self, file: &str) -> bool {
        self.file
            .as_deref()
            .is_some_and(|path| path.ends_with(Path::new(file)))
    }

    // Frames of this library itself; its own unit tests stand in for user code
    fn is_internal(&self) -> bool {
        self.name.as_deref().is_some_and(|name| {
            name.trim_start_matches('<')
                .strip_prefix(env!("CARGO_CRATE_NAME"))
                .is_some_and(|rest| rest.starts_with("::") && !rest.contains("::tests::"))
        })
    }

    fn call_site(&self) -> Option<CallSite> {
        let file = self.file.as_deref()?.to_str()?;
        Some(CallSite {
            file: base_name(file).to_string(),
            line: self.line?,
        })
    }
}

// Inlined calls resolve to several symbols for one physical frame; each one
// is a logical frame here, innermost first.
fn capture_frames() -> Vec<Frame> {
    let mut frames = Vec::new();
    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            frames.push(Frame {
                file: symbol.filename().map(Path::to_path_buf),
                line: symbol.lineno(),
                name: symbol.name().map(|name| format!("{name:#}")),
            });
        });
        true
    });
    frames
}

fn find_anchor(frames: &[Frame], file: &str, line: u32) -> Option<usize> {
    if let Some(index) = frames.iter().position(|frame| frame.is_anchor(file, line)) {
        return Some(index);
    }

    // Without an exact line match, settle for the first frame in the anchor's
    // file past the library's own call chain, so a same-named file inside this
    // crate is never mistaken for the caller.
    let start = frames
        .iter()
        .position(Frame::is_internal)
        .map_or(0, |first| {
            frames[first..]
                .iter()
                .position(|frame| !frame.is_internal())
                .map_or(frames.len(), |offset| first + offset)
        });
    frames[start..]
        .iter()
        .position(|frame| frame.is_in_file(file))
        .map(|offset| start + offset)
}

/// Resolve the call site `uplevel` frames above the public entry point.
///
/// Uplevel 1 is the anchor itself and needs no frame walk. Uplevel 0 names
/// the frame below the anchor, which is of little use but still answered.
pub fn resolve(anchor: &'static Location<'static>, uplevel: usize) -> CallSite {
    if uplevel == 1 {
        return CallSite::from_location(anchor);
    }

    let frames = capture_frames();
    let Some(index) = find_anchor(&frames, anchor.file(), anchor.line()) else {
        tracing::debug!(anchor = %anchor, uplevel, "anchor frame not found in backtrace");
        return CallSite::unknown();
    };

    let target = if uplevel == 0 {
        index.checked_sub(1)
    } else {
        index.checked_add(uplevel - 1)
    };

    match target.and_then(|i| frames.get(i)).and_then(Frame::call_site) {
        Some(site) => site,
        None => {
            tracing::debug!(anchor = %anchor, uplevel, "stack exhausted resolving call site");
            CallSite::unknown()
        }
    }
}

/// Name of the function containing `anchor`, without module path or
/// closure segments
pub fn caller_name(anchor: &'static Location<'static>) -> Option<String> {
    let frames = capture_frames();
    let index = find_anchor(&frames, anchor.file(), anchor.line())?;
    frames[index].name.as_deref().and_then(function_name)
}

/// Reduce a demangled symbol path to its final function segment
pub fn function_name(symbol: &str) -> Option<String> {
    symbol
        .split("::")
        .filter(|segment| !segment.is_empty() && !segment.starts_with('{'))
        .last()
        .map(|segment| segment.split('<').next().unwrap_or(segment).to_string())
        .filter(|name| !name.is_empty())
}

/// Format a message the way the standard test harness does.
///
/// One leading tab, `file:line: `, the label, then the message with every
/// continuation line indented by a tab. A single trailing empty line is
/// dropped.
pub fn decorate(site: &CallSite, label: &str, message: &str) -> String {
    let mut buf = String::with_capacity(site.file.len() + label.len() + message.len() + 16);
    buf.push('\t');
    let _ = write!(buf, "{}:{}: {}", site.file, site.line, label);

    let mut lines: Vec<&str> = message.split('\n').collect();
    if lines.len() > 1 && lines.last() == Some(&"") {
        lines.pop();
    }
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            buf.push_str("\n\t");
        }
        buf.push_str(line);
    }
    buf.push('\n');
    buf
}
