use crate::error::{BatchError, Result};

/// Marker that introduces a command name, as in `/review`.
pub const COMMAND_MARKER: char = '/';

/// Options for one invocation, built from the raw argument list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Options {
    pub debug: bool,
    pub model: Option<String>,
    pub print: bool,
    pub hook: Option<String>,
    /// Command name without the leading `/`.
    pub command_name: Option<String>,
    pub command_arg: Option<String>,
}

impl Options {
    /// Parse arguments left to right.
    ///
    /// Flags that take a value consume the next token whatever it looks like.
    /// A `/name` token may consume one following token as its argument unless
    /// that token starts with `-`. A later `/name` replaces an earlier one.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let mut options = Options::default();
        let mut cursor = args.iter().map(|arg| arg.as_ref()).peekable();

        while let Some(arg) = cursor.next() {
            match arg {
                "-d" | "--debug" => options.debug = true,
                "--model" => options.model = cursor.next().map(String::from),
                "-p" | "--print" => options.print = true,
                "--hook" => options.hook = cursor.next().map(String::from),
                _ => {
                    let Some(name) = arg.strip_prefix(COMMAND_MARKER) else {
                        return Err(BatchError::UnknownArgument(arg.to_string()));
                    };
                    options.command_name = Some(name.to_string());
                    if let Some(next) = cursor.next_if(|next| !next.starts_with('-')) {
                        options.command_arg = Some(next.to_string());
                    }
                }
            }
        }

        Ok(options)
    }

    /// The command name, if one was given and is non-empty.
    pub fn command(&self) -> Result<&str> {
        self.command_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(BatchError::MissingCommand)
    }
}
