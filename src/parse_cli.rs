#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParsedArguments {
    pub(crate) command: MainCommand,
    pub(crate) handle: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainCommand {
    Show,
    Preview,
    Config,
}

// The Windows screensaver launch convention:
//   /p:handle -- render the preview into the given window handle
//   /s        -- run the main event fullscreen
//   /s:handle -- run the main event into a given handle
//   /c        -- open the configuration window
//   /c:handle -- same, handle ignored
// Flags arrive in either case and the handle separator may be ':' or
// whitespace, so `/S:5`, `/s 5` and two argv entries are all equivalent.
pub(crate) fn parse_args(args: &[String]) -> Result<ParsedArguments, String> {
    // argv[0] is the executable name. Lowercase the rest, flatten it into one
    // string, and treat ':' as just another separator.
    let flattened = args
        .iter()
        .skip(1)
        .map(|arg| arg.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
        .replace(':', " ");
    let tokens: Vec<&str> = flattened.split_whitespace().collect();

    let (flag, handle_token) = match tokens.as_slice() {
        // No arguments at all means "run the screensaver".
        [] => {
            return Ok(ParsedArguments {
                command: MainCommand::Show,
                handle: None,
            })
        }
        [flag] => (*flag, None),
        [flag, handle] => (*flag, Some(*handle)),
        _ => return Err(format!("Wrong number of arguments: {tokens:?}")),
    };

    let command = match flag {
        "/s" => MainCommand::Show,
        "/c" => MainCommand::Config,
        "/p" => MainCommand::Preview,
        other => return Err(format!("Unknown argument '{other}'")),
    };

    let handle = match handle_token {
        Some(token) => {
            // Strictly digits: `usize::parse` alone would also take "+5".
            if !token.bytes().all(|byte| byte.is_ascii_digit()) {
                return Err(format!("Cannot parse window handle '{token}'"));
            }
            match token.parse::<usize>() {
                // A null window handle never names a real target.
                Ok(0) | Err(_) => return Err(format!("Cannot parse window handle '{token}'")),
                Ok(handle) => Some(handle),
            }
        }
        None => None,
    };

    if command == MainCommand::Preview && handle.is_none() {
        return Err("Preview mode requires a window handle".to_string());
    }

    Ok(ParsedArguments { command, handle })
}
