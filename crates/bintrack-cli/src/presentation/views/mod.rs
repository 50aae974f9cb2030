pub mod catalog;
pub mod history;
pub mod inventory;
pub mod mutation;
pub mod system;
pub mod tui;

use std::fmt;

use crate::presentation::formatters::escape_html;

/// `--format html` for views without dedicated markup: the text rendering,
/// escaped, in a `<pre>` block.
pub(crate) fn preformatted(
    f: &mut fmt::Formatter,
    render: impl FnOnce(&mut String) -> fmt::Result,
) -> fmt::Result {
    let mut buf = String::new();
    render(&mut buf)?;
    writeln!(f, "<pre>{}</pre>", escape_html(buf.trim_end()))
}
