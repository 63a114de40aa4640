use clap::ValueEnum;

/// Value accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Stable key=value lines for scripts
    Plain,
    /// Tables and colors when stdout is a terminal
    Table,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One JSON document per result (one line per session command)
    Json,
    #[default]
    Plain,
    /// Tables, badges and a progress gauge
    Pretty,
}

impl OutputMode {
    /// `--json` always wins. Pretty output needs a non-dumb terminal and is
    /// turned off by `--format plain`.
    pub fn resolve(json: bool, format: Option<FormatArg>, tty: bool, dumb: bool) -> Self {
        match (json, format) {
            (true, _) => Self::Json,
            (false, Some(FormatArg::Plain)) => Self::Plain,
            (false, _) if tty && !dumb => Self::Pretty,
            (false, _) => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        *self == Self::Json
    }

    pub fn is_pretty(&self) -> bool {
        *self == Self::Pretty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        use FormatArg::{Plain, Table};
        use OutputMode as M;

        let cases = [
            ((true, Some(Plain), true, false), M::Json),
            ((false, Some(Plain), true, false), M::Plain),
            ((false, Some(Table), true, true), M::Plain),
            ((false, Some(Table), false, false), M::Plain),
            ((false, Some(Table), true, false), M::Pretty),
            ((false, None, true, false), M::Pretty),
            ((false, None, false, false), M::Plain),
        ];
        for ((json, format, tty, dumb), expected) in cases {
            assert_eq!(
                OutputMode::resolve(json, format, tty, dumb),
                expected,
                "json={} format={:?} tty={} dumb={}",
                json,
                format,
                tty,
                dumb
            );
        }
    }
}
