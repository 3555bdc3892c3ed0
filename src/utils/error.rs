use thiserror::Error;

#[derive(Error, Debug)]
pub enum MedalError {
    #[error("{message}")]
    ArgumentCountError { message: String },

    #[error("Error reading file \"{path}\": {}.", describe_os_error(.code, .message))]
    FileReadError {
        path: String,
        code: Option<i32>,
        message: String,
    },

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Settings file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, MedalError>;

fn describe_os_error(code: &Option<i32>, message: &str) -> String {
    match code {
        Some(code) => format!("{} - {}", code, message),
        None => message.to_string(),
    }
}

impl MedalError {
    pub fn no_filename() -> Self {
        MedalError::ArgumentCountError {
            message: "No filename provided.".to_string(),
        }
    }

    pub fn too_many_parameters() -> Self {
        MedalError::ArgumentCountError {
            message: "Too many parameters. Provide a single file name.".to_string(),
        }
    }

    /// Splits an `io::Error` into errno and the bare OS message, dropping the
    /// " (os error N)" suffix std appends to its Display output.
    pub fn file_read(path: &str, err: &std::io::Error) -> Self {
        let code = err.raw_os_error();
        let rendered = err.to_string();
        let message = match code {
            Some(c) => rendered
                .strip_suffix(&format!(" (os error {})", c))
                .unwrap_or(&rendered)
                .to_string(),
            None => rendered,
        };

        MedalError::FileReadError {
            path: path.to_string(),
            code,
            message,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MedalError::ArgumentCountError { .. } | MedalError::FileReadError { .. } => {
                self.to_string()
            }
            MedalError::MalformedRow { line, reason } => format!(
                "Input line {} could not be read as a medal record ({}). Run without --strict to skip such rows.",
                line, reason
            ),
            MedalError::TomlError(e) => format!("The settings file is not valid TOML: {}", e),
            other => other.to_string(),
        }
    }

    /// Every failure is terminal for the CLI.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
