#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("Usage: ./your_program.sh -E <pattern>")]
    Usage,
    #[error("Expected first argument to be '-E'")]
    UnexpectedFlag,
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage => 2,
            CliError::UnexpectedFlag => 1,
        }
    }
}

/// `args` includes the program name. Anything after the pattern is ignored.
pub fn parse_args(args: Vec<String>) -> Result<Config, CliError> {
    let mut args = args.into_iter().skip(1);

    let (Some(flag), Some(pattern)) = (args.next(), args.next()) else {
        return Err(CliError::Usage);
    };
    if flag != "-E" {
        return Err(CliError::UnexpectedFlag);
    }

    Ok(Config { pattern })
}
