//! Joins hostgroup members into a value Nagios accepts across several
//! physical lines (`member, \` continuation).

use std::collections::HashMap;
use tera::Value;

/// Settings for joining a member list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftWrap {
    /// Maximum members on one physical line (at least 1)
    pub per_line: usize,
    pub separator: String,
    /// Appended to a line that is continued on the next one
    pub line_ending: String,
    /// Column every physical line of the list starts at
    pub indent: usize,
    /// Optional column limit
    pub width: Option<usize>,
}

impl Default for SoftWrap {
    fn default() -> Self {
        Self {
            per_line: 1,
            separator: ", ".to_string(),
            line_ending: ", \\".to_string(),
            indent: 28,
            width: None,
        }
    }
}

impl SoftWrap {
    /// Join `items`, breaking onto a new indented line whenever the current
    /// line is full. A line always takes at least one item, so a line holding
    /// a single item whose length plus the continuation token is more than
    /// `width` runs past it.
    pub fn wrap<S: AsRef<str>>(&self, items: &[S]) -> String {
        let per_line = self.per_line.max(1);
        let mut out = String::new();
        let mut line_cols = 0;
        let mut on_line = 0;

        for (i, item) in items.iter().enumerate() {
            let item = item.as_ref();
            let more_follow = i + 1 < items.len();

            if on_line > 0 {
                if on_line < per_line && self.fits(line_cols, item, more_follow) {
                    out.push_str(&self.separator);
                    out.push_str(item);
                    line_cols += columns(&self.separator) + columns(item);
                    on_line += 1;
                    continue;
                }
                out.push_str(&self.line_ending);
                out.push('\n');
                out.push_str(&" ".repeat(self.indent));
            }

            out.push_str(item);
            line_cols = columns(item);
            on_line = 1;
        }

        out
    }

    /// Whether `item` can join a line already holding `line_cols` columns of
    /// content, keeping room for the continuation token if more items follow
    fn fits(&self, line_cols: usize, item: &str, more_follow: bool) -> bool {
        let Some(width) = self.width else {
            return true;
        };
        let tail = if more_follow { columns(&self.line_ending) } else { 0 };
        self.indent + line_cols + columns(&self.separator) + columns(item) + tail <= width
    }

    /// Copy of these settings with any named tera filter arguments applied
    fn with_args(&self, args: &HashMap<String, Value>) -> tera::Result<Self> {
        let mut wrap = self.clone();
        if let Some(v) = args.get("per_line") {
            wrap.per_line = usize_arg("per_line", v)?;
        }
        if let Some(v) = args.get("separator") {
            wrap.separator = str_arg("separator", v)?;
        }
        if let Some(v) = args.get("line_ending") {
            wrap.line_ending = str_arg("line_ending", v)?;
        }
        if let Some(v) = args.get("indent") {
            wrap.indent = usize_arg("indent", v)?;
        }
        if let Some(v) = args.get("width") {
            wrap.width = Some(usize_arg("width", v)?);
        }
        Ok(wrap)
    }
}

/// Build the `softwrap` tera filter with the given defaults:
/// `{{ group.members | softwrap(per_line=4) }}`
pub fn filter(defaults: SoftWrap) -> impl tera::Filter {
    move |value: &Value, args: &HashMap<String, Value>| -> tera::Result<Value> {
        let items: Vec<String> = tera::from_value(value.clone())
            .map_err(|e| tera::Error::msg(format!("softwrap expects a list of strings: {}", e)))?;
        let wrap = defaults.with_args(args)?;
        Ok(Value::String(wrap.wrap(&items)))
    }
}

fn columns(s: &str) -> usize {
    s.chars().count()
}

fn usize_arg(name: &str, value: &Value) -> tera::Result<usize> {
    value
        .as_u64()
        .map(|n| n as usize)
        .ok_or_else(|| tera::Error::msg(format!("softwrap: `{}` must be a non-negative integer", name)))
}

fn str_arg(name: &str, value: &Value) -> tera::Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| tera::Error::msg(format!("softwrap: `{}` must be a string", name)))
}
